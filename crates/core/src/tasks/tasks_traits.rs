use async_trait::async_trait;

use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskFilters};

/// Trait for task repository operations.
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    /// Loads tasks ordered by due date, soonest first.
    fn list_filtered(&self, filters: &TaskFilters) -> Result<Vec<Task>>;
    async fn insert(&self, new_task: NewTask) -> Result<Task>;
    async fn update_status(&self, task_id: i32, status: String) -> Result<Task>;
}

/// Trait for task service operations.
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    fn get_tasks(&self, filters: &TaskFilters) -> Result<Vec<Task>>;
    /// Open tasks whose due date has passed.
    fn get_overdue_tasks(&self) -> Result<Vec<Task>>;
    async fn create_task(&self, new_task: NewTask) -> Result<Task>;
    async fn update_task_status(&self, task_id: i32, status: String) -> Result<Task>;
}
