use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::tasks::{NewTask, Task, TaskFilters, TaskRepositoryTrait};
use leadfolio_core::Result;

use super::model::{NewTaskDB, TaskDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::tasks;

pub struct TaskRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl TaskRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        TaskRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    fn list_filtered(&self, filters: &TaskFilters) -> Result<Vec<Task>> {
        let rows = self.cache.get_or_load("tasks.list", filters, || {
            let mut conn = get_connection(&self.pool)?;
            let mut query = tasks::table.into_boxed();
            if !filters.statuses.is_empty() {
                query = query.filter(tasks::status.eq_any(filters.statuses.clone()));
            }
            if !filters.rep_ids.is_empty() {
                let ids: Vec<Option<i32>> = filters.rep_ids.iter().map(|id| Some(*id)).collect();
                query = query.filter(tasks::assigned_to.eq_any(ids));
            }
            let tasks_db = query
                .order((tasks::due_date.asc(), tasks::id.asc()))
                .load::<TaskDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(tasks_db.into_iter().map(Task::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    async fn insert(&self, new_task: NewTask) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let new_task_db: NewTaskDB = new_task.into();
                let result_db = diesel::insert_into(tasks::table)
                    .values(&new_task_db)
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Task::from(result_db))
            })
            .await
    }

    async fn update_status(&self, task_id: i32, status: String) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                diesel::update(tasks::table.find(task_id))
                    .set(tasks::status.eq(status))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = tasks::table
                    .find(task_id)
                    .first::<TaskDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Task::from(result_db))
            })
            .await
    }
}
