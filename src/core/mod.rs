//! Core registry functionality

pub mod user_management;
