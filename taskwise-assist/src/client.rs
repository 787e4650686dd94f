/// Core AssistClient trait and types
///
/// This module defines the contract every assistance backend must implement.
/// Failures stay typed all the way up to the application controller, which
/// alone decides to degrade them to empty suggestions.
///
/// # Client Contract
///
/// All implementations must:
/// 1. Return 3 to 5 subtask titles from `break_down_task` on success
/// 2. Short-circuit `prioritize_tasks` on empty input, with no endpoint
///    interaction
/// 3. Surface every transport, API, and decode failure as an `AssistError`
/// 4. Never panic and never retry on their own
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use taskwise_assist::{AssistClient, AssistResult, PrioritySuggestion, TaskRef};
///
/// struct CannedClient;
///
/// #[async_trait]
/// impl AssistClient for CannedClient {
///     async fn break_down_task(&self, _title: &str) -> AssistResult<Vec<String>> {
///         Ok(vec!["First step".to_string(), "Second step".to_string()])
///     }
///
///     async fn prioritize_tasks(&self, tasks: &[TaskRef]) -> AssistResult<Vec<PrioritySuggestion>> {
///         if tasks.is_empty() {
///             return Ok(Vec::new());
///         }
///         Ok(Vec::new())
///     }
/// }
/// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taskwise_core::models::task::Priority;
use uuid::Uuid;

/// Assist error types
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    /// Transport-level failure reaching the model endpoint
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Model endpoint error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response carried no candidate content to decode
    #[error("Model response carried no content")]
    EmptyResponse,

    /// The response content did not match the requested shape
    #[error("Invalid model payload: {0}")]
    InvalidPayload(String),
}

/// Assist result type alias
pub type AssistResult<T> = Result<T, AssistError>;

/// Minimal task view sent to the model
///
/// Only the ID and title leave the process; completion state, timestamps,
/// and subtasks stay local.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRef {
    /// Task ID, echoed back by the model to key the suggestion
    pub id: Uuid,

    /// Task title, the only signal the model prioritizes on
    pub title: String,
}

impl TaskRef {
    /// Creates a task reference
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        TaskRef {
            id,
            title: title.into(),
        }
    }
}

/// One model-assigned priority with its reasoning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySuggestion {
    /// Echoed task ID, kept as a raw string
    ///
    /// The model is not trusted to echo a well-formed UUID; IDs that match
    /// no current task are skipped at merge time rather than failing the
    /// batch.
    pub id: String,

    /// Suggested priority level
    pub priority: Priority,

    /// Very short model-provided justification
    pub reasoning: String,
}

/// Core AssistClient trait
///
/// All assistance backends must implement this trait.
#[async_trait]
pub trait AssistClient: Send + Sync {
    /// Breaks a task down into 3 to 5 actionable subtask titles
    ///
    /// # Arguments
    ///
    /// * `title` - The parent task's title, the only context the model gets
    ///
    /// # Returns
    ///
    /// Subtask titles in suggestion order
    ///
    /// # Errors
    ///
    /// Any transport, API, or decode failure. Callers outside the
    /// orchestration boundary never see these; the controller converts them
    /// to an empty suggestion set.
    async fn break_down_task(&self, title: &str) -> AssistResult<Vec<String>>;

    /// Assigns a priority and reasoning to each of a batch of tasks
    ///
    /// Empty input must return an empty suggestion set without any endpoint
    /// interaction.
    ///
    /// # Arguments
    ///
    /// * `tasks` - ID and title per task under consideration
    ///
    /// # Returns
    ///
    /// One suggestion per task the model chose to answer for, keyed by the
    /// echoed ID
    async fn prioritize_tasks(&self, tasks: &[TaskRef]) -> AssistResult<Vec<PrioritySuggestion>>;
}
