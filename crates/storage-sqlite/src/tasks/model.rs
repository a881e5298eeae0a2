//! Database models for tasks.

use diesel::prelude::*;

use leadfolio_core::tasks::{NewTask, Task};

/// Database model for tasks.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskDB {
    pub id: i32,
    pub client_id: Option<i32>,
    pub interaction_id: Option<i32>,
    pub title: String,
    pub due_date: String,
    pub status: String,
    pub assigned_to: Option<i32>,
    pub created_at: String,
}

/// Database model for inserting a task. Status comes from the schema
/// default ("Open").
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTaskDB {
    pub client_id: Option<i32>,
    pub interaction_id: Option<i32>,
    pub title: String,
    pub due_date: String,
    pub assigned_to: Option<i32>,
}

impl From<TaskDB> for Task {
    fn from(db: TaskDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            interaction_id: db.interaction_id,
            title: db.title,
            due_date: db.due_date,
            status: db.status,
            assigned_to: db.assigned_to,
            created_at: db.created_at,
        }
    }
}

impl From<NewTask> for NewTaskDB {
    fn from(domain: NewTask) -> Self {
        Self {
            client_id: domain.client_id,
            interaction_id: domain.interaction_id,
            title: domain.title,
            due_date: domain.due_date,
            assigned_to: domain.assigned_to,
        }
    }
}
