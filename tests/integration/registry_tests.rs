//! Registry integration tests
//!
//! Walk the gated operations through the public API, checking both the
//! effect of permitted calls and the untouched state after denied ones.

use crate::common::assertions::{assert_denied, assert_unique_ids};
use crate::common::{ActorFactory, DraftFactory};
use rbac_registry::{
    Permission, PermissionSet, RegistryAction, RegistryError, SharedRegistry, UserDraft, UserId,
    UserPatch, UserRegistry, UserStatus, is_authorized,
};

#[test]
fn test_walkthrough_scenarios() {
    let mut registry = UserRegistry::with_defaults();
    let admin = ActorFactory::admin();
    let editor = ActorFactory::editor();

    // A: full access adds bob
    let bob = registry.add_user(&admin, DraftFactory::bob()).unwrap();
    assert_eq!(bob.username, "bob");
    assert_unique_ids(registry.list_users());

    // B: read/update cannot add
    let snapshot = registry.list_users().to_vec();
    assert_denied(registry.add_user(&editor, DraftFactory::bob()), Permission::Create);
    assert_eq!(registry.list_users(), snapshot.as_slice());

    // C: read/update cannot delete
    assert_denied(registry.delete_user(&editor, UserId(2)), Permission::Delete);
    assert_eq!(registry.list_users(), snapshot.as_slice());

    // D: toggle twice is identity, on the user opened for editing
    let original = registry.get_user(UserId(2)).unwrap().permissions.clone();
    registry.begin_edit(&admin, UserId(2)).unwrap();
    registry
        .toggle_user_permission(&admin, UserId(2), Permission::Delete)
        .unwrap();
    assert!(registry.get_user(UserId(2)).unwrap().permissions.contains(Permission::Delete));
    registry
        .toggle_user_permission(&admin, UserId(2), Permission::Delete)
        .unwrap();
    assert_eq!(registry.get_user(UserId(2)).unwrap().permissions, original);

    // toggling a user that is not open for editing is refused
    assert!(matches!(
        registry.toggle_user_permission(&admin, UserId(1), Permission::Read),
        Err(RegistryError::Validation(_))
    ));

    // E: update alone cannot edit permissions
    assert_denied(
        registry.toggle_user_permission(&ActorFactory::updater(), UserId(2), Permission::Delete),
        Permission::FullAccess,
    );
    assert_eq!(registry.get_user(UserId(2)).unwrap().permissions, original);
}

#[test]
fn test_every_denied_mutation_preserves_state() {
    let mut registry = UserRegistry::with_defaults();
    let admin = ActorFactory::admin();
    for _ in 0..3 {
        registry.add_user(&admin, DraftFactory::create()).unwrap();
    }

    // every actor lacking the gate permission, across every mutation
    for held in [
        vec![],
        vec![Permission::Read],
        vec![Permission::Read, Permission::Update],
        vec![Permission::Create, Permission::Delete],
    ] {
        let actor = ActorFactory::with(&held);
        let snapshot = registry.list_users().to_vec();
        let target = snapshot[1].id;

        if !held.contains(&Permission::Create) {
            assert_denied(registry.add_user(&actor, DraftFactory::create()), Permission::Create);
        }
        if !held.contains(&Permission::Update) {
            assert_denied(
                registry.update_user(&actor, target, UserPatch::from_user(&snapshot[1])),
                Permission::Update,
            );
        }
        if !held.contains(&Permission::Delete) {
            assert_denied(registry.delete_user(&actor, target), Permission::Delete);
        }
        assert_denied(
            registry.toggle_user_permission(&actor, target, Permission::Read),
            Permission::FullAccess,
        );

        assert_eq!(registry.list_users(), snapshot.as_slice());
    }
}

#[test]
fn test_ids_increase_across_adds_and_deletes() {
    let mut registry = UserRegistry::with_defaults();
    let admin = ActorFactory::admin();
    let mut seen = vec![UserId(1), UserId(2)];

    for round in 0..5 {
        let user = registry.add_user(&admin, DraftFactory::create()).unwrap();
        assert!(seen.iter().all(|id| user.id > *id));
        seen.push(user.id);

        if round % 2 == 0 {
            registry.delete_user(&admin, user.id).unwrap();
        }
    }

    assert_unique_ids(registry.list_users());
    assert_eq!(registry.len(), 2 + 2);
}

#[test]
fn test_presentation_flow() {
    let mut registry = UserRegistry::with_defaults();
    let actor = registry.actor_for(UserId(2)).unwrap();

    // decide what to offer
    let caps = registry.capabilities(&actor);
    assert!(!caps.allows(RegistryAction::AddUser));
    assert!(caps.allows(RegistryAction::EditUser));
    assert!(!caps.allows(RegistryAction::DeleteUser));

    // check again right before acting
    let staged = registry.begin_edit(&actor, UserId(1)).unwrap();
    let patch = UserPatch {
        status: UserStatus::Inactive,
        ..UserPatch::from_user(&staged)
    };
    let updated = registry.update_user(&actor, staged.id, patch).unwrap();
    assert_eq!(updated.status, UserStatus::Inactive);
    assert_eq!(updated.permissions, staged.permissions);

    // a refused action yields the notice to render
    let err = registry
        .toggle_user_permission(&actor, UserId(1), Permission::Read)
        .unwrap_err();
    let notice = err.denial_notice().unwrap();
    assert_eq!(notice.title, "Permission Denied");
    assert_eq!(
        notice.description,
        "You do not have permission to modify user permissions."
    );
}

#[test]
fn test_capabilities_agree_with_engine() {
    let registry = UserRegistry::with_defaults();

    for held in [
        vec![],
        vec![Permission::FullAccess],
        vec![Permission::Create, Permission::Delete],
        vec![Permission::Update],
    ] {
        let actor = ActorFactory::with(&held);
        let set: PermissionSet = held.iter().copied().collect();
        let caps = registry.capabilities(&actor);

        for action in [
            RegistryAction::AddUser,
            RegistryAction::EditUser,
            RegistryAction::DeleteUser,
            RegistryAction::EditPermissions,
        ] {
            assert_eq!(
                caps.allows(action),
                is_authorized(&set, action.required_permission()),
                "{action} with {set}"
            );
        }
    }
}

#[test]
fn test_shared_registry_readers_see_whole_mutations() {
    let shared = SharedRegistry::new(UserRegistry::with_defaults());
    let admin = ActorFactory::admin();

    let writer = {
        let shared = shared.clone();
        let admin = admin.clone();
        std::thread::spawn(move || {
            for i in 0..100 {
                let draft = UserDraft::new(format!("w{i}"), "w@x.com", "Editor")
                    .with_permissions([Permission::Read, Permission::Update]);
                shared.add_user(&admin, draft).unwrap();
            }
        })
    };

    let reader = {
        let shared = shared.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                let users = shared.list_users();
                assert_unique_ids(&users);
                for user in users.iter().filter(|u| u.username.starts_with('w')) {
                    assert_eq!(user.permissions.len(), 2);
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(shared.list_users().len(), 102);
}

#[test]
fn test_actor_without_permissions_cannot_open_anything() {
    let mut registry = UserRegistry::with_defaults();
    let nobody = ActorFactory::nobody();

    let caps = registry.capabilities(&nobody);
    assert!(!caps.can_add && !caps.can_edit && !caps.can_delete && !caps.can_edit_permissions);

    assert_denied(registry.begin_edit(&nobody, UserId(2)), Permission::Update);
    assert_denied(registry.begin_delete(&nobody, UserId(2)), Permission::Delete);
    assert!(registry.staged_user().is_none());
}
