use crate::error::TaskError;
use crate::model::task::Task;

/// Storage seam for task records.
///
/// Mutations targeting an id that does not exist are silent no-ops (except
/// `toggle`, which reports whether it found a row). Every method issues a
/// single auto-committed statement; there is no cross-call transaction.
pub trait TaskRepository {
    /// Insert a task with `completed = false` and return it with the id the
    /// store assigned.
    async fn insert(&self, name: &str) -> Result<Task, TaskError>;

    /// All tasks in insertion order.
    async fn list(&self) -> Result<Vec<Task>, TaskError>;

    async fn get(&self, id: i64) -> Result<Option<Task>, TaskError>;

    /// Update the name only, leaving the completion flag untouched.
    async fn update_name(&self, id: i64, name: &str) -> Result<(), TaskError>;

    /// Set both fields in one statement.
    async fn update(&self, id: i64, name: &str, completed: bool) -> Result<(), TaskError>;

    /// Flip the completion flag. Returns whether a row was found and updated.
    async fn toggle(&self, id: i64) -> Result<bool, TaskError>;

    async fn delete(&self, id: i64) -> Result<(), TaskError>;

    async fn delete_all(&self) -> Result<(), TaskError>;
}
