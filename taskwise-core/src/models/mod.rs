/// Data models for Taskwise
///
/// This module contains the persisted data structures and their
/// serialization rules.
///
/// # Models
///
/// - `user`: Public user shape, credential records, and the account directory
/// - `task`: Tasks, subtasks, and priority levels
///
/// # Example
///
/// ```
/// use taskwise_core::models::task::{Priority, Task};
///
/// let task = Task::new("Write release notes");
/// assert_eq!(task.priority, Priority::Medium);
/// assert!(!task.is_completed);
/// ```

pub mod task;
pub mod user;
