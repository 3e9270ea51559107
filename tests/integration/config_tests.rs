//! Configuration integration tests

use crate::common::assertions::assert_denied;
use crate::common::{ActorFactory, DraftFactory};
use rbac_registry::{Config, Permission, RegistryError, UserDraft, UserId};
use std::io::Write;
use tempfile::NamedTempFile;

const READ_ONLY_SEED: &str = r#"
rbac:
  actor_id: 10
  roles:
    - id: 1
      name: "Viewer"
      permissions: [read]
  users:
    - id: 10
      username: "viewer"
      email: "viewer@example.com"
      role: "Viewer"
      permissions: [read]
"#;

#[tokio::test]
async fn test_registry_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(READ_ONLY_SEED.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    let mut registry = config.build_registry().unwrap();
    let actor = config.actor().unwrap();

    assert_eq!(actor.user_id(), Some(UserId(10)));
    assert_denied(registry.add_user(&actor, DraftFactory::create()), Permission::Create);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.list_roles()[0].name.as_str(), "Viewer");
}

#[test]
fn test_ids_continue_after_seeded_maximum() {
    let config = Config::from_yaml_str(READ_ONLY_SEED).unwrap();
    let mut registry = config.build_registry().unwrap();
    let admin = ActorFactory::admin();

    let draft = UserDraft::new("second", "s@x.com", "Viewer");
    let user = registry.add_user(&admin, draft).unwrap();
    assert_eq!(user.id, UserId(11));
}

#[test]
fn test_lenient_role_labels_from_config() {
    let yaml = r#"
rbac:
  validate_role_labels: false
  users:
    - id: 1
      username: "admin"
      email: "admin@example.com"
      role: "Legacy Admin"
      permissions: [full_access]
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    let registry = config.build_registry().unwrap();
    assert_eq!(registry.list_users()[0].role.as_str(), "Legacy Admin");
    assert!(registry.role_by_name("Legacy Admin").is_none());
}

#[test]
fn test_strict_role_labels_from_config() {
    let yaml = r#"
rbac:
  users:
    - id: 1
      username: "admin"
      email: "admin@example.com"
      role: "Legacy Admin"
      permissions: [full_access]
"#;
    let result = Config::from_yaml_str(yaml);
    assert!(matches!(result, Err(RegistryError::Config(_))));
}

#[test]
fn test_exhausted_id_space_from_config() {
    let yaml = r#"
rbac:
  users:
    - id: 1
      username: "admin"
      email: "admin@example.com"
      role: "Super Admin"
      permissions: [full_access]
    - id: 18446744073709551615
      username: "last"
      email: "last@example.com"
      role: "Editor"
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    let mut registry = config.build_registry().unwrap();
    let admin = config.actor().unwrap();

    let result = registry.add_user(&admin, DraftFactory::create());
    assert!(matches!(result, Err(RegistryError::Validation(_))));
    assert_eq!(registry.len(), 2);
}
