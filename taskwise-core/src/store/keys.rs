/// Store key scheme
///
/// All Taskwise state lives under three kinds of keys:
///
/// - `taskwise_users`: the account directory (email to credential record)
/// - `taskwise_current_user`: the session pointer, kept for restart recovery
/// - `taskwise_tasks_<userId>`: one task list per user
///
/// The per-user suffix is what gives task lists their isolation: no
/// operation ever touches a list key built from another user's ID.

use uuid::Uuid;

/// Key holding the account directory
pub const USER_DIRECTORY_KEY: &str = "taskwise_users";

/// Key holding the persisted session pointer
pub const CURRENT_USER_KEY: &str = "taskwise_current_user";

/// Prefix for per-user task list keys
pub const TASK_LIST_PREFIX: &str = "taskwise_tasks_";

/// Builds the task list key for a user
pub fn task_list_key(user_id: Uuid) -> String {
    format!("{TASK_LIST_PREFIX}{user_id}")
}
