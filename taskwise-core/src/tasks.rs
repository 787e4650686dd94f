/// Task service
///
/// Stateless operations over one user's task list. Every mutation is a full
/// read-modify-write of the list under `taskwise_tasks_<userId>`; at one
/// interactive user per session the list is small and the single writer
/// makes the cycle safe.
///
/// # Operations
///
/// - `list`: Read a user's tasks; an unwritten list is empty
/// - `create`: Append a fresh task with default fields
/// - `update`: Replace a task wholesale by ID
/// - `delete`: Drop a task by ID (idempotent)
///
/// # Example
///
/// ```
/// use taskwise_core::store::MemoryStore;
/// use taskwise_core::tasks;
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), tasks::TaskError> {
/// let store = MemoryStore::new();
/// let user_id = Uuid::new_v4();
///
/// let task = tasks::create(&store, user_id, "Buy milk").await?;
/// let all = tasks::list(&store, user_id).await?;
/// assert_eq!(all.len(), 1);
/// assert_eq!(all[0].id, task.id);
/// # Ok(())
/// # }
/// ```

use uuid::Uuid;

use crate::models::task::Task;
use crate::store::{keys, Store, StoreError};

/// Task error types
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// No task with this ID exists in the user's list
    #[error("Task {id} not found")]
    NotFound { id: Uuid },

    /// Store operation failed
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    /// Persisted record could not be parsed
    #[error("Corrupt persisted record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Loads a user's task list, treating an unwritten key as empty
async fn load_list(store: &dyn Store, user_id: Uuid) -> Result<Vec<Task>, TaskError> {
    match store.get(&keys::task_list_key(user_id)).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Persists a user's task list
async fn save_list(store: &dyn Store, user_id: Uuid, list: &[Task]) -> Result<(), TaskError> {
    let raw = serde_json::to_string(list)?;
    store.set(&keys::task_list_key(user_id), &raw).await?;
    Ok(())
}

/// Reads a user's tasks
///
/// A user whose list was never written has no tasks, not an error.
pub async fn list(store: &dyn Store, user_id: Uuid) -> Result<Vec<Task>, TaskError> {
    load_list(store, user_id).await
}

/// Creates a task and appends it to the user's list
///
/// The task gets a fresh ID, starts uncompleted at Medium priority, and is
/// timestamped at creation. Existing tasks are preserved.
pub async fn create(store: &dyn Store, user_id: Uuid, title: &str) -> Result<Task, TaskError> {
    let mut tasks = load_list(store, user_id).await?;

    let task = Task::new(title);
    tasks.push(task.clone());
    save_list(store, user_id, &tasks).await?;

    tracing::debug!(user_id = %user_id, task_id = %task.id, "Created task");
    Ok(task)
}

/// Replaces a task wholesale
///
/// The stored element with the matching ID is swapped for the provided value
/// in place; no field-level merging happens. Passing `subtasks: None` erases
/// a previously stored batch.
///
/// # Errors
///
/// - `TaskError::NotFound` if no task in the list has the given ID
pub async fn update(store: &dyn Store, user_id: Uuid, task: Task) -> Result<Task, TaskError> {
    let mut tasks = load_list(store, user_id).await?;

    let position = tasks
        .iter()
        .position(|t| t.id == task.id)
        .ok_or(TaskError::NotFound { id: task.id })?;

    tasks[position] = task.clone();
    save_list(store, user_id, &tasks).await?;

    Ok(task)
}

/// Deletes a task by ID
///
/// Deleting an ID that is not present persists the unchanged list and
/// returns Ok.
pub async fn delete(store: &dyn Store, user_id: Uuid, task_id: Uuid) -> Result<(), TaskError> {
    let mut tasks = load_list(store, user_id).await?;

    tasks.retain(|t| t.id != task_id);
    save_list(store, user_id, &tasks).await?;

    tracing::debug!(user_id = %user_id, task_id = %task_id, "Deleted task");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::Priority;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_list_for_unwritten_user_is_empty() {
        let store = MemoryStore::new();
        let tasks = list(&store, Uuid::new_v4()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list_round_trips() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let created = create(&store, user_id, "Buy milk").await.unwrap();
        let tasks = list(&store, user_id).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, created.id);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(!tasks[0].is_completed);
        assert_eq!(tasks[0].priority, Priority::Medium);
    }

    #[tokio::test]
    async fn test_create_appends_and_preserves_existing() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let first = create(&store, user_id, "First").await.unwrap();
        let second = create(&store, user_id, "Second").await.unwrap();

        let tasks = list(&store, user_id).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, first.id);
        assert_eq!(tasks[1].id, second.id);
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let mut task = create(&store, user_id, "Plan trip").await.unwrap();
        task.subtasks = Some(vec![Task::new("Book flights")]);
        update(&store, user_id, task.clone()).await.unwrap();

        // An update carrying no subtasks erases the stored batch
        task.subtasks = None;
        task.is_completed = true;
        update(&store, user_id, task.clone()).await.unwrap();

        let tasks = list(&store, user_id).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].is_completed);
        assert!(tasks[0].subtasks.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        create(&store, user_id, "Only task").await.unwrap();

        let stray = Task::new("Never stored");
        let result = update(&store, user_id, stray.clone()).await;

        match result {
            Err(TaskError::NotFound { id }) => assert_eq!(id, stray.id),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let task = create(&store, user_id, "Ephemeral").await.unwrap();
        delete(&store, user_id, task.id).await.unwrap();
        assert!(list(&store, user_id).await.unwrap().is_empty());

        // Deleting again, and deleting an ID that never existed, both succeed
        delete(&store, user_id, task.id).await.unwrap();
        delete(&store, user_id, Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_absent_id_leaves_list_unchanged() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        create(&store, user_id, "Keep me").await.unwrap();

        delete(&store, user_id, Uuid::new_v4()).await.unwrap();

        let tasks = list(&store, user_id).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Keep me");
    }

    #[tokio::test]
    async fn test_lists_are_isolated_per_user() {
        let store = MemoryStore::new();
        let ann = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let anns_task = create(&store, ann, "Ann's task").await.unwrap();
        create(&store, bob, "Bob's task").await.unwrap();

        // Mutating Ann's partition never touches Bob's
        delete(&store, ann, anns_task.id).await.unwrap();

        assert!(list(&store, ann).await.unwrap().is_empty());
        let bobs = list(&store, bob).await.unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].title, "Bob's task");
    }

    #[tokio::test]
    async fn test_subtask_batch_is_replaced_not_merged() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let mut task = create(&store, user_id, "Plan offsite").await.unwrap();
        task.subtasks = Some(vec![Task::new("Old subtask A"), Task::new("Old subtask B")]);
        update(&store, user_id, task.clone()).await.unwrap();

        task.subtasks = Some(vec![Task::new("New subtask")]);
        update(&store, user_id, task).await.unwrap();

        let tasks = list(&store, user_id).await.unwrap();
        let subtasks = tasks[0].subtasks.as_ref().unwrap();
        assert_eq!(subtasks.len(), 1);
        assert_eq!(subtasks[0].title, "New subtask");
    }
}
