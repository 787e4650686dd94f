//! # Taskwise Core Library
//!
//! This crate contains the data model, persistence layer, and account/task
//! services shared across the Taskwise application crates.
//!
//! ## Module Organization
//!
//! - `models`: User, task, and credential data structures
//! - `store`: Key-value persistence abstraction and backends
//! - `auth`: Password hashing and verification
//! - `account`: Registration, login, and session pointer operations
//! - `tasks`: Per-user task list operations

pub mod account;
pub mod auth;
pub mod models;
pub mod store;
pub mod tasks;

/// Current version of the Taskwise core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
