use thiserror::Error;

/// Everything that can go wrong inside the task store.
///
/// A missing id is deliberately NOT an error: mutations on absent ids are
/// silent no-ops and lookups return `Option`, so callers can degrade
/// gracefully instead of branching on a not-found variant.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A task name was empty (or whitespace only) after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
