use crate::traits::TaskStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Status, Task, TaskId};

const SCHEMA: &str = include_str!("../schema.sql");

enum StoreLocation {
    File(PathBuf),
    Memory,
}

/// SQLite implementation of [`TaskStore`].
///
/// The pool is opened lazily on first use, creating the database file and
/// applying the schema if needed.
pub struct SqliteTaskStore {
    location: StoreLocation,
    pool: tokio::sync::OnceCell<Pool<Sqlite>>,
}

impl SqliteTaskStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            location: StoreLocation::File(path.as_ref().to_path_buf()),
            pool: tokio::sync::OnceCell::new(),
        }
    }

    /// Transient store, used by tests. Pinned to one connection so the
    /// whole store shares a single in-memory database.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            pool: tokio::sync::OnceCell::new(),
        }
    }

    async fn get_pool(&self) -> TaskboardResult<&Pool<Sqlite>> {
        self.pool
            .get_or_try_init(|| async {
                let (options, max_connections) = match &self.location {
                    StoreLocation::File(path) => {
                        let options = SqliteConnectOptions::from_str(&format!(
                            "sqlite://{}?mode=rwc",
                            path.display()
                        ))
                        .map_err(|e| TaskboardError::Store(e.to_string()))?
                        .create_if_missing(true)
                        .foreign_keys(true);
                        (options, 5)
                    }
                    StoreLocation::Memory => {
                        let options = SqliteConnectOptions::from_str("sqlite::memory:")
                            .map_err(|e| TaskboardError::Store(e.to_string()))?;
                        (options, 1)
                    }
                };

                let pool = SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await
                    .map_err(|e| TaskboardError::Store(e.to_string()))?;

                sqlx::raw_sql(SCHEMA)
                    .execute(&pool)
                    .await
                    .map_err(|e| TaskboardError::Store(e.to_string()))?;

                Ok(pool)
            })
            .await
    }

    fn row_to_task(row: &SqliteRow) -> TaskboardResult<Task> {
        let status_code: i64 = row.get("status");
        let status = Status::from_i64(status_code).ok_or_else(|| {
            TaskboardError::Store(format!("invalid status code in store: {}", status_code))
        })?;
        Ok(Task::new(
            row.get("id"),
            status,
            row.get("title"),
            row.get("description"),
        ))
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list_by_status(&self, status: Status) -> TaskboardResult<Vec<Task>> {
        let pool = self.get_pool().await?;
        sqlx::query("SELECT id, status, title, description FROM tasks WHERE status = ?1 ORDER BY id")
            .bind(status.as_i64())
            .fetch_all(pool)
            .await
            .map_err(|e| TaskboardError::Store(e.to_string()))?
            .iter()
            .map(Self::row_to_task)
            .collect()
    }

    async fn update_status(&self, id: TaskId, status: Status) -> TaskboardResult<()> {
        let pool = self.get_pool().await?;
        let result = sqlx::query("UPDATE tasks SET status = ?1 WHERE id = ?2")
            .bind(status.as_i64())
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| TaskboardError::Store(e.to_string()))?;
        if result.rows_affected() == 0 {
            tracing::warn!(id, "update_status matched no rows");
        }
        Ok(())
    }

    async fn insert(
        &self,
        status: Status,
        title: &str,
        description: &str,
    ) -> TaskboardResult<TaskId> {
        let pool = self.get_pool().await?;
        let result = sqlx::query("INSERT INTO tasks (status, title, description) VALUES (?1, ?2, ?3)")
            .bind(status.as_i64())
            .bind(title)
            .bind(description)
            .execute(pool)
            .await
            .map_err(|e| TaskboardError::Store(e.to_string()))?;
        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: TaskId) -> TaskboardResult<()> {
        let pool = self.get_pool().await?;
        sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| TaskboardError::Store(e.to_string()))?;
        Ok(())
    }
}
