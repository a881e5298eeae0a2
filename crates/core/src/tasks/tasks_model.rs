//! Task domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, TASK_STATUSES};
use crate::errors::{Result, ValidationError};

/// Domain model representing a follow-up task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub client_id: Option<i32>,
    pub interaction_id: Option<i32>,
    pub title: String,
    pub due_date: String,
    pub status: String,
    pub assigned_to: Option<i32>,
    pub created_at: String,
}

impl Task {
    /// A task is overdue when its due date is strictly before `today` and it
    /// has not been completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status == "Done" {
            return false;
        }
        match NaiveDate::parse_from_str(&self.due_date, DATE_FORMAT) {
            Ok(due) => due < today,
            Err(_) => false,
        }
    }
}

/// Input model for creating a new task. Status always starts as "Open".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub client_id: Option<i32>,
    pub interaction_id: Option<i32>,
    pub title: String,
    pub due_date: String,
    pub assigned_to: Option<i32>,
}

impl NewTask {
    pub fn validate(&mut self) -> Result<()> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if self.due_date.trim().is_empty() {
            return Err(ValidationError::MissingField("due_date".to_string()).into());
        }
        NaiveDate::parse_from_str(&self.due_date, DATE_FORMAT)?;
        Ok(())
    }
}

/// Optional conjunctive filters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilters {
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub rep_ids: Vec<i32>,
}

/// Rejects statuses outside the fixed set.
pub fn validate_status(status: &str) -> Result<()> {
    if TASK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!("unknown task status '{status}'")).into())
    }
}
