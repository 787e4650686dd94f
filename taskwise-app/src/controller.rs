/// Application controller
///
/// This module implements the session and task orchestration for one
/// interactive user. The controller owns the signed-in session and a display
/// copy of that user's tasks, and drives the account, task, and assist
/// services underneath.
///
/// # Architecture
///
/// ```text
/// Controller
///   ├─> account service: register / login / logout / session pointer
///   ├─> tasks service: per-user list mutations
///   └─> AssistClient: breakdown and prioritization suggestions
/// ```
///
/// While the process runs, the in-memory session is the source of truth; the
/// store's session pointer exists so a later start can pick the session back
/// up via [`Controller::restore`].
///
/// # Error posture
///
/// Registration and login failures surface to the caller. Task mutation
/// failures are logged and leave state unchanged. Assist failures never
/// surface at all; they degrade to "no suggestions" here, with a warning in
/// the log.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskwise_app::Controller;
/// use taskwise_assist::MockAssistClient;
/// use taskwise_core::store::MemoryStore;
///
/// # async fn example() {
/// let mut controller = Controller::new(
///     Arc::new(MemoryStore::new()),
///     Arc::new(MockAssistClient::new()),
/// );
///
/// controller.restore().await;
/// if controller.current_user().is_none() {
///     let _ = controller.login("ann@example.com", "pw").await;
/// }
/// # }
/// ```

use std::sync::Arc;

use taskwise_assist::{AssistClient, TaskRef};
use taskwise_core::account::{self, AccountError};
use taskwise_core::models::task::Task;
use taskwise_core::models::user::User;
use taskwise_core::store::Store;
use taskwise_core::tasks;
use uuid::Uuid;

/// Session and task orchestration for one interactive user
pub struct Controller {
    /// Persistence backend shared with the services
    store: Arc<dyn Store>,

    /// Assist backend for breakdown and prioritization
    assist: Arc<dyn AssistClient>,

    /// Signed-in user, if any
    session: Option<User>,

    /// Display copy of the signed-in user's tasks
    tasks: Vec<Task>,
}

impl Controller {
    /// Creates a controller with no session
    pub fn new(store: Arc<dyn Store>, assist: Arc<dyn AssistClient>) -> Self {
        Controller {
            store,
            assist,
            session: None,
            tasks: Vec::new(),
        }
    }

    /// Recovers the persisted session, if any
    ///
    /// Called once at startup. A readable pointer adopts the user and loads
    /// their tasks; anything unreadable is logged and treated as signed out.
    pub async fn restore(&mut self) {
        match account::current_user(self.store.as_ref()).await {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.id, "Restored session");
                self.adopt_session(user).await;
            }
            Ok(None) => {
                tracing::debug!("No persisted session");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read persisted session");
            }
        }
    }

    /// Registers a new account and signs it in
    ///
    /// The fresh account starts with an empty task list. Duplicate emails
    /// and store trouble surface to the caller.
    pub async fn register(
        &mut self,
        email: &str,
        secret: &str,
        name: &str,
    ) -> Result<&User, AccountError> {
        let user = account::register(self.store.as_ref(), email, secret, name).await?;
        account::remember_session(self.store.as_ref(), &user).await?;

        self.tasks = Vec::new();
        Ok(self.session.insert(user))
    }

    /// Signs in and loads the user's tasks
    ///
    /// Credential failures surface to the caller.
    pub async fn login(&mut self, email: &str, secret: &str) -> Result<&User, AccountError> {
        let user = account::login(self.store.as_ref(), email, secret).await?;

        Ok(self.adopt_session(user).await)
    }

    /// Signs out
    ///
    /// Clears the store pointer and the in-memory session. Store trouble is
    /// logged; the caller always ends up signed out.
    pub async fn logout(&mut self) {
        if let Err(e) = account::logout(self.store.as_ref()).await {
            tracing::error!(error = %e, "Failed to clear session pointer");
        }

        self.session = None;
        self.tasks.clear();
    }

    /// Currently signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Tasks as last loaded or mutated, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Creates a task from a title
    ///
    /// The title is whitespace-trimmed; an empty result is a silent no-op.
    /// Service errors are logged and leave the list unchanged.
    pub async fn create_task(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }

        let user_id = match self.session_user_id() {
            Some(id) => id,
            None => return,
        };

        match tasks::create(self.store.as_ref(), user_id, title).await {
            Ok(task) => self.tasks.push(task),
            Err(e) => tracing::error!(error = %e, "Failed to create task"),
        }
    }

    /// Persists a full task replacement and mirrors it in memory
    ///
    /// Failures, including an unknown task id, are logged and leave memory
    /// unchanged.
    pub async fn update_task(&mut self, task: Task) {
        let user_id = match self.session_user_id() {
            Some(id) => id,
            None => return,
        };

        match tasks::update(self.store.as_ref(), user_id, task).await {
            Ok(saved) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == saved.id) {
                    *slot = saved;
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to update task"),
        }
    }

    /// Flips completion on a task
    ///
    /// An unknown id is a no-op.
    pub async fn toggle_completed(&mut self, task_id: Uuid) {
        let updated = match self.tasks.iter().find(|t| t.id == task_id) {
            Some(task) => {
                let mut updated = task.clone();
                updated.is_completed = !updated.is_completed;
                updated
            }
            None => return,
        };

        self.update_task(updated).await;
    }

    /// Flips completion on one subtask within its parent's batch
    pub async fn toggle_subtask(&mut self, task_id: Uuid, subtask_id: Uuid) {
        let updated = match self.tasks.iter().find(|t| t.id == task_id) {
            Some(task) => {
                let mut updated = task.clone();
                let subtasks = match updated.subtasks.as_mut() {
                    Some(subtasks) => subtasks,
                    None => return,
                };
                match subtasks.iter_mut().find(|st| st.id == subtask_id) {
                    Some(subtask) => subtask.is_completed = !subtask.is_completed,
                    None => return,
                }
                updated
            }
            None => return,
        };

        self.update_task(updated).await;
    }

    /// Advances a task's priority one step: Low to Medium to High to Low
    pub async fn cycle_priority(&mut self, task_id: Uuid) {
        let updated = match self.tasks.iter().find(|t| t.id == task_id) {
            Some(task) => {
                let mut updated = task.clone();
                updated.priority = updated.priority.cycled();
                updated
            }
            None => return,
        };

        self.update_task(updated).await;
    }

    /// Deletes a task
    pub async fn delete_task(&mut self, task_id: Uuid) {
        let user_id = match self.session_user_id() {
            Some(id) => id,
            None => return,
        };

        match tasks::delete(self.store.as_ref(), user_id, task_id).await {
            Ok(()) => self.tasks.retain(|t| t.id != task_id),
            Err(e) => tracing::error!(error = %e, "Failed to delete task"),
        }
    }

    /// Replaces a task's subtasks with model-suggested steps
    ///
    /// Each suggested title becomes a fresh subtask; the new batch replaces
    /// any previous one wholesale. On assist failure the task is left
    /// untouched and the caller sees no error.
    pub async fn break_down(&mut self, task_id: Uuid) {
        let task = match self.tasks.iter().find(|t| t.id == task_id) {
            Some(task) => task.clone(),
            None => return,
        };

        let outcome = self.assist.break_down_task(&task.title).await;
        match outcome {
            Ok(titles) => {
                let batch: Vec<Task> = titles.into_iter().map(Task::new).collect();
                tracing::info!(task_id = %task_id, subtasks = batch.len(), "Applying task breakdown");

                let mut updated = task;
                updated.subtasks = Some(batch);
                self.update_task(updated).await;
            }
            Err(e) => {
                tracing::warn!(task_id = %task_id, error = %e, "Task breakdown unavailable");
            }
        }
    }

    /// Applies model-suggested priorities to the uncompleted tasks
    ///
    /// Completed tasks are not sent. Suggestions merge by id; an id matching
    /// no current task is skipped. Applied changes persist task by task, and
    /// the in-memory list is then sorted High to Medium to Low for display.
    /// Persisted order stays as it was. Assist failure is logged and changes
    /// nothing.
    pub async fn prioritize(&mut self) {
        if self.session_user_id().is_none() {
            return;
        }

        let refs: Vec<TaskRef> = self
            .tasks
            .iter()
            .filter(|t| !t.is_completed)
            .map(|t| TaskRef::new(t.id, t.title.as_str()))
            .collect();

        let outcome = self.assist.prioritize_tasks(&refs).await;
        let suggestions = match outcome {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, "Task prioritization unavailable");
                return;
            }
        };

        if suggestions.is_empty() {
            return;
        }

        for suggestion in suggestions {
            let updated = match self
                .tasks
                .iter()
                .find(|t| t.id.to_string() == suggestion.id)
            {
                Some(task) => {
                    let mut updated = task.clone();
                    updated.priority = suggestion.priority;
                    updated
                }
                None => {
                    tracing::debug!(suggested_id = %suggestion.id, "Skipping suggestion for unknown task");
                    continue;
                }
            };

            tracing::info!(
                task_id = %updated.id,
                priority = %updated.priority,
                reasoning = %suggestion.reasoning,
                "Applying priority suggestion"
            );
            self.update_task(updated).await;
        }

        // Display order only; the persisted list keeps its order
        self.tasks.sort_by_key(|t| t.priority.sort_rank());
    }

    /// Signed-in user id, logging when there is none
    fn session_user_id(&self) -> Option<Uuid> {
        match &self.session {
            Some(user) => Some(user.id),
            None => {
                tracing::warn!("Task operation without a signed-in session");
                None
            }
        }
    }

    /// Adopts a signed-in user and loads their task list
    ///
    /// A failed load is logged and leaves the list empty; the services
    /// re-read the store on every mutation, so display state is all that is
    /// affected.
    async fn adopt_session(&mut self, user: User) -> &User {
        self.tasks = match tasks::list(self.store.as_ref(), user.id).await {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Failed to load tasks");
                Vec::new()
            }
        };

        self.session.insert(user)
    }
}
