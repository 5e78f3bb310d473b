pub mod render;
pub mod routes;

use std::sync::Arc;

use tareas_core::{SqliteTaskRepository, TaskService};

/// Shared state handed to every request handler through axum `State`.
/// Constructed once in `main` (or a test harness); no ambient globals.
pub struct AppContext {
    pub service: TaskService<SqliteTaskRepository>,
}

impl AppContext {
    pub fn new(service: TaskService<SqliteTaskRepository>) -> Arc<Self> {
        Arc::new(Self { service })
    }
}
