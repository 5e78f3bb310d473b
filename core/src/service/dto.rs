use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Wire shape of a task: `{"id": 1, "nombre": "...", "completa": false}`.
/// The Spanish field names are the persisted/served format; the entity keeps
/// English names internally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskDto {
    pub id: i64,
    pub nombre: String,
    pub completa: bool,
}

impl TaskDto {
    pub fn from_entity(task: Task) -> Self {
        Self {
            id: task.id,
            nombre: task.name,
            completa: task.completed,
        }
    }
}
