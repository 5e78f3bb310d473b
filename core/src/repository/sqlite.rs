use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::TaskError;
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

/// SQLite-backed task store over a shared connection pool.
///
/// Cheap to clone (the pool is Arc-backed). Each query checks a connection
/// out of the pool for its duration and returns it on every exit path.
#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Open the database at `path` (creating the file if missing) and ensure
    /// the `tareas` table exists.
    pub async fn connect(path: &Path) -> Result<Self, TaskError> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    /// In-memory store for tests. Capped at one connection: every pool
    /// connection to `:memory:` would otherwise get its own private database.
    pub async fn in_memory() -> Result<Self, TaskError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    /// Create the `tareas` table (idempotent). AUTOINCREMENT keeps the id
    /// high-water mark in `sqlite_sequence`, so ids are never reused even
    /// after `delete_all`.
    pub async fn migrate(&self) -> Result<(), TaskError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tareas (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre   TEXT NOT NULL,
                completa INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, name: &str) -> Result<Task, TaskError> {
        let result = sqlx::query("INSERT INTO tareas (nombre, completa) VALUES (?, 0)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(Task::new(result.last_insert_rowid(), name.to_string(), false))
    }

    async fn list(&self) -> Result<Vec<Task>, TaskError> {
        Ok(
            sqlx::query_as("SELECT id, nombre, completa FROM tareas ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, TaskError> {
        Ok(
            sqlx::query_as("SELECT id, nombre, completa FROM tareas WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<(), TaskError> {
        sqlx::query("UPDATE tareas SET nombre = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, id: i64, name: &str, completed: bool) -> Result<(), TaskError> {
        sqlx::query("UPDATE tareas SET nombre = ?, completa = ? WHERE id = ?")
            .bind(name)
            .bind(completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn toggle(&self, id: i64) -> Result<bool, TaskError> {
        // Single UPDATE instead of read-then-write; the flag stays 0/1.
        let result = sqlx::query("UPDATE tareas SET completa = 1 - completa WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<(), TaskError> {
        sqlx::query("DELETE FROM tareas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), TaskError> {
        sqlx::query("DELETE FROM tareas").execute(&self.pool).await?;
        Ok(())
    }
}
