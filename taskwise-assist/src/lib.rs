//! # Taskwise Assist Library
//!
//! This library provides the AI assistance layer for Taskwise: breaking a
//! task down into subtask titles and assigning priorities to a batch of
//! tasks. All model interaction happens behind the [`AssistClient`] trait so
//! the application can run against the real endpoint or a scripted mock.
//!
//! ## Modules
//!
//! - `client`: The `AssistClient` trait, payload types, and errors
//! - `gemini`: Gemini-backed implementation
//! - `mock`: Scripted implementation for tests and offline use
//!
//! ## Example
//!
//! ```
//! use taskwise_assist::{AssistClient, MockAssistClient};
//!
//! # async fn example() -> Result<(), taskwise_assist::AssistError> {
//! let client = MockAssistClient::new().with_breakdown(vec!["Step one".into()]);
//! let titles = client.break_down_task("Plan the offsite").await?;
//! assert_eq!(titles, vec!["Step one"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod gemini;
pub mod mock;

pub use client::{AssistClient, AssistError, AssistResult, PrioritySuggestion, TaskRef};
pub use gemini::GeminiClient;
pub use mock::MockAssistClient;
