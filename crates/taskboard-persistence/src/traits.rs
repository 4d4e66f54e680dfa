use async_trait::async_trait;
use taskboard_core::TaskboardResult;
use taskboard_domain::{Status, Task, TaskId};

/// The persistence boundary of the board.
///
/// The store is the system of record; the in-memory board is a cache of it,
/// rebuilt by listing each status in order. Implementations must treat
/// `update_status` and `delete` of an absent id as silent no-ops.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Tasks with the given status, in insertion order.
    async fn list_by_status(&self, status: Status) -> TaskboardResult<Vec<Task>>;

    /// Persist a status change for an existing task.
    async fn update_status(&self, id: TaskId, status: Status) -> TaskboardResult<()>;

    /// Persist a new task and return its store-assigned id.
    async fn insert(&self, status: Status, title: &str, description: &str)
        -> TaskboardResult<TaskId>;

    /// Remove a task by id.
    async fn delete(&self, id: TaskId) -> TaskboardResult<()>;
}
