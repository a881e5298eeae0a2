use chrono::Local;
use std::sync::Arc;

use super::tasks_model::{validate_status, NewTask, Task, TaskFilters};
use super::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
use crate::errors::Result;

/// Service for managing follow-up tasks.
pub struct TaskService {
    repository: Arc<dyn TaskRepositoryTrait>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TaskServiceTrait for TaskService {
    fn get_tasks(&self, filters: &TaskFilters) -> Result<Vec<Task>> {
        self.repository.list_filtered(filters)
    }

    fn get_overdue_tasks(&self) -> Result<Vec<Task>> {
        let today = Local::now().date_naive();
        let tasks = self.repository.list_filtered(&TaskFilters::default())?;
        Ok(tasks.into_iter().filter(|t| t.is_overdue(today)).collect())
    }

    async fn create_task(&self, mut new_task: NewTask) -> Result<Task> {
        new_task.validate()?;
        self.repository.insert(new_task).await
    }

    async fn update_task_status(&self, task_id: i32, status: String) -> Result<Task> {
        validate_status(&status)?;
        self.repository.update_status(task_id, status).await
    }
}
