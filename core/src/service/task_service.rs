use crate::error::TaskError;
use crate::model::task::Task;
use crate::repository::TaskRepository;
use crate::service::dto::TaskDto;

/// Validation layer over the repository.
///
/// Names are trimmed before storage; a name that is empty after trimming is
/// rejected with [`TaskError::EmptyName`]. Everything else delegates
/// straight to the repository, keeping its silent-no-op semantics for
/// missing ids.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All tasks in insertion order, as wire DTOs.
    pub async fn list(&self) -> Result<Vec<TaskDto>, TaskError> {
        let tasks = self.repo.list().await?;
        Ok(tasks.into_iter().map(TaskDto::from_entity).collect())
    }

    /// Create a task with `completed = false` and return it with its id.
    pub async fn create(&self, name: &str) -> Result<TaskDto, TaskError> {
        let name = valid_name(name)?;
        let created = self.repo.insert(name).await?;
        Ok(TaskDto::from_entity(created))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Task>, TaskError> {
        self.repo.get(id).await
    }

    /// Update the name only. Missing ids are a silent no-op.
    pub async fn rename(&self, id: i64, name: &str) -> Result<(), TaskError> {
        let name = valid_name(name)?;
        self.repo.update_name(id, name).await
    }

    /// Set name and completion flag atomically. Missing ids are a silent
    /// no-op.
    pub async fn replace(&self, id: i64, name: &str, completed: bool) -> Result<(), TaskError> {
        let name = valid_name(name)?;
        self.repo.update(id, name, completed).await
    }

    /// Flip the completion flag. Returns whether a task was found.
    pub async fn toggle_completed(&self, id: i64) -> Result<bool, TaskError> {
        self.repo.toggle(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        self.repo.delete(id).await
    }

    pub async fn clear_all(&self) -> Result<(), TaskError> {
        self.repo.delete_all().await
    }
}

fn valid_name(name: &str) -> Result<&str, TaskError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SqliteTaskRepository;

    async fn service() -> TaskService<SqliteTaskRepository> {
        TaskService::new(SqliteTaskRepository::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn created_tasks_are_listed_with_unique_ids() {
        let svc = service().await;
        svc.create("a").await.unwrap();
        svc.create("b").await.unwrap();
        svc.create("c").await.unwrap();

        let tasks = svc.list().await.unwrap();
        assert_eq!(
            tasks.iter().map(|t| t.nombre.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(tasks.iter().all(|t| !t.completa));
        let mut ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn create_rejects_empty_and_whitespace_names() {
        let svc = service().await;
        assert!(matches!(svc.create("").await, Err(TaskError::EmptyName)));
        assert!(matches!(svc.create("   ").await, Err(TaskError::EmptyName)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_trims_surrounding_whitespace() {
        let svc = service().await;
        let task = svc.create("  Buy milk  ").await.unwrap();
        assert_eq!(task.nombre, "Buy milk");
    }

    #[tokio::test]
    async fn toggle_is_its_own_inverse() {
        let svc = service().await;
        let task = svc.create("a").await.unwrap();

        assert!(svc.toggle_completed(task.id).await.unwrap());
        assert!(svc.list().await.unwrap()[0].completa);

        assert!(svc.toggle_completed(task.id).await.unwrap());
        assert!(!svc.list().await.unwrap()[0].completa);
    }

    #[tokio::test]
    async fn toggle_on_missing_id_reports_not_found() {
        let svc = service().await;
        assert!(!svc.toggle_completed(999).await.unwrap());
    }

    #[tokio::test]
    async fn delete_then_get_yields_none() {
        let svc = service().await;
        let task = svc.create("a").await.unwrap();
        svc.delete(task.id).await.unwrap();
        assert!(svc.get(task.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_on_missing_id_is_a_noop() {
        let svc = service().await;
        svc.create("a").await.unwrap();
        svc.delete(999).await.unwrap();
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rename_rejects_empty_names() {
        let svc = service().await;
        let task = svc.create("a").await.unwrap();
        assert!(matches!(
            svc.rename(task.id, " ").await,
            Err(TaskError::EmptyName)
        ));
        assert_eq!(svc.list().await.unwrap()[0].nombre, "a");
    }

    #[tokio::test]
    async fn replace_sets_both_fields() {
        let svc = service().await;
        let task = svc.create("a").await.unwrap();
        svc.replace(task.id, "b", true).await.unwrap();

        let stored = svc.get(task.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "b");
        assert!(stored.completed);
    }

    #[tokio::test]
    async fn replace_on_missing_id_is_a_noop() {
        let svc = service().await;
        svc.replace(999, "b", true).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_all_empties_the_store() {
        let svc = service().await;
        svc.create("a").await.unwrap();
        svc.create("b").await.unwrap();
        svc.clear_all().await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_clear_all() {
        let svc = service().await;
        svc.create("a").await.unwrap();
        let b = svc.create("b").await.unwrap();
        svc.clear_all().await.unwrap();

        let c = svc.create("c").await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn full_lifecycle_scenario() {
        let svc = service().await;

        let task = svc.create("Buy milk").await.unwrap();
        let tasks = svc.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].nombre, "Buy milk");
        assert!(!tasks[0].completa);

        svc.toggle_completed(task.id).await.unwrap();
        assert!(svc.list().await.unwrap()[0].completa);

        svc.rename(task.id, "Buy oat milk").await.unwrap();
        let tasks = svc.list().await.unwrap();
        assert_eq!(tasks[0].nombre, "Buy oat milk");
        assert!(tasks[0].completa);

        svc.delete(task.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
