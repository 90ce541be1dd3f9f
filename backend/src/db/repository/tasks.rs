//! Task catalog repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::TaskId;
use crate::models::Task;

/// Repository trait for the persisted task catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is reachable
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new task, assigning it an id.
    async fn store_task(&self, task: &Task) -> RepositoryResult<TaskId>;

    /// Retrieve a task by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the task doesn't exist
    async fn get_task(&self, task_id: TaskId) -> RepositoryResult<Task>;

    /// List all tasks, ordered by id.
    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;

    /// Look a task up by its (unique) name.
    async fn find_task_by_name(&self, name: &str) -> RepositoryResult<Option<Task>>;

    /// Replace an existing task. The task must carry an id.
    async fn update_task(&self, task: &Task) -> RepositoryResult<()>;
}
