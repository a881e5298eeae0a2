//! Meeting domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, MEETING_STATUSES};
use crate::errors::{Result, ValidationError};

/// Domain model representing a client meeting and the opportunity attached
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: i32,
    pub client_id: i32,
    pub meeting_date: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub next_steps: Option<String>,
    pub opportunity_value: f64,
    pub status: String,
    pub created_at: String,
}

/// Input model for scheduling a new meeting. Status always starts as
/// "Planned".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub client_id: i32,
    pub meeting_date: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub next_steps: Option<String>,
    #[serde(default)]
    pub opportunity_value: f64,
}

impl NewMeeting {
    pub fn validate(&self) -> Result<()> {
        if self.meeting_date.trim().is_empty() {
            return Err(ValidationError::MissingField("meeting_date".to_string()).into());
        }
        NaiveDate::parse_from_str(&self.meeting_date, DATE_FORMAT)?;
        Ok(())
    }
}

/// Rejects statuses outside the fixed set.
pub fn validate_status(status: &str) -> Result<()> {
    if MEETING_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!("unknown meeting status '{status}'")).into())
    }
}
