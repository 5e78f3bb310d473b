pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use error::TaskError;
pub use model::task::Task;
pub use repository::{SqliteTaskRepository, TaskRepository};
pub use service::dto::TaskDto;
pub use service::task_service::TaskService;
