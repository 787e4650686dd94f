/// Task model and priority levels
///
/// This module provides the Task model representing a user-owned task with an
/// optional single level of subtasks. Tasks are the core entity of the
/// Taskwise system.
///
/// # Persisted shape
///
/// Task lists are stored as JSON arrays under the per-user store key, one
/// object per task:
///
/// ```json
/// {
///     "id": "7b3f6f2e-6f1a-4c57-9a41-2f8d3f0b5c11",
///     "title": "Buy milk",
///     "isCompleted": false,
///     "priority": "Medium",
///     "createdAt": "2024-11-02T09:30:00Z",
///     "subtasks": [ ... ]
/// }
/// ```
///
/// The `subtasks` field is omitted entirely when no breakdown has been
/// generated. A subtask is structurally identical to a task; in practice its
/// own `subtasks` field stays empty.
///
/// # Example
///
/// ```
/// use taskwise_core::models::task::{Priority, Task};
///
/// let mut task = Task::new("Plan the offsite");
/// assert_eq!(task.priority, Priority::Medium);
///
/// task.priority = task.priority.cycled();
/// assert_eq!(task.priority, Priority::High);
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority level
///
/// Exactly three levels exist. The serialized form is the capitalized level
/// name, which is also the form the assist model is constrained to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent or important work
    High,

    /// The default for newly created tasks
    Medium,

    /// Can wait
    Low,
}

impl Priority {
    /// Converts the priority to its serialized string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Rank used for display sorting: High sorts before Medium before Low
    pub fn sort_rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Next level in the manual adjustment cycle: Low -> Medium -> High -> Low
    pub fn cycled(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task model representing a single unit of work owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Human-readable task title
    pub title: String,

    /// Whether the task has been completed
    pub is_completed: bool,

    /// Current priority level
    pub priority: Priority,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// Optional generated breakdown, one level deep
    ///
    /// Replaced as a whole batch whenever a new breakdown is generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Task>>,
}

impl Task {
    /// Creates a new task with a fresh ID and default fields
    ///
    /// New tasks start uncompleted at Medium priority with no subtasks,
    /// timestamped at the moment of creation.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            priority: Priority::default(),
            created_at: Utc::now(),
            subtasks: None,
        }
    }
}
