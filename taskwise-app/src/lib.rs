//! # Taskwise Application Library
//!
//! This crate ties the Taskwise pieces together for an embedding
//! application: a [`Controller`] that owns the signed-in session and the
//! in-memory task list, environment configuration for the assist endpoint,
//! and a tracing initialization helper.
//!
//! ## Modules
//!
//! - `controller`: Session state and orchestration over the services
//! - `config`: Assist endpoint configuration from the environment
//! - `logging`: Tracing subscriber setup
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use taskwise_app::Controller;
//! use taskwise_assist::MockAssistClient;
//! use taskwise_core::store::MemoryStore;
//!
//! # async fn example() {
//! let store = Arc::new(MemoryStore::new());
//! let assist = Arc::new(MockAssistClient::new());
//! let mut controller = Controller::new(store, assist);
//!
//! controller
//!     .register("a@x.com", "pw", "Ann")
//!     .await
//!     .expect("Registration should succeed on an empty store");
//! controller.create_task("Buy milk").await;
//!
//! assert_eq!(controller.tasks().len(), 1);
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod logging;

pub use config::AssistConfig;
pub use controller::Controller;
