//! Target domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a per-user monthly performance target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: i32,
    pub user_id: i32,
    pub month: i32,
    pub year: i32,
    pub new_clients_target: i32,
    pub proposals_target: i32,
    pub revenue_target: f64,
}

/// Input model for setting a target. One row exists per
/// (user, month, year); setting again replaces the previous values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTarget {
    pub user_id: i32,
    pub month: i32,
    pub year: i32,
    #[serde(default)]
    pub new_clients_target: i32,
    #[serde(default)]
    pub proposals_target: i32,
    #[serde(default)]
    pub revenue_target: f64,
}

impl NewTarget {
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(
                ValidationError::InvalidInput(format!("month {} out of range", self.month)).into(),
            );
        }
        if self.year < 2000 {
            return Err(
                ValidationError::InvalidInput(format!("year {} out of range", self.year)).into(),
            );
        }
        Ok(())
    }
}

/// Observed performance for a (user, month, year) period.
///
/// New clients come from leads that reached the "Client" stage, proposals
/// from interactions of the proposal action type, and revenue from the
/// opportunity values of meetings held with the rep's lead clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetActuals {
    pub new_clients: i64,
    pub proposals: i64,
    pub revenue: f64,
}

/// A target together with the observed actuals for its period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    pub target: Target,
    pub actuals: TargetActuals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_must_be_within_calendar_range() {
        let mut target = NewTarget {
            user_id: 1,
            month: 0,
            year: 2025,
            new_clients_target: 2,
            proposals_target: 4,
            revenue_target: 10_000.0,
        };
        assert!(target.validate().is_err());
        target.month = 13;
        assert!(target.validate().is_err());
        target.month = 12;
        assert!(target.validate().is_ok());
    }
}
