pub mod dto;
pub mod task_service;

pub use dto::TaskDto;
pub use task_service::TaskService;
