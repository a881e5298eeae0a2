//! Interaction domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{ACTION_TYPES, DATE_FORMAT};
use crate::errors::{Result, ValidationError};

/// Domain model representing a logged contact event with a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: i32,
    pub client_id: i32,
    pub action_type: String,
    pub notes: Option<String>,
    pub interaction_date: String,
    pub outcome: Option<String>,
    pub next_action_date: Option<String>,
    pub assigned_to: Option<i32>,
    pub campaign_id: Option<i32>,
    pub created_at: String,
}

/// An interaction joined with the owning client's descriptive columns, the
/// shape every filtered listing and aggregation works from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionWithClient {
    #[serde(flatten)]
    pub interaction: Interaction,
    pub client_name: String,
    pub sector: Option<String>,
    pub region: Option<String>,
}

/// Input model for logging a new interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInteraction {
    pub client_id: i32,
    pub action_type: String,
    pub notes: Option<String>,
    pub interaction_date: String,
    pub outcome: Option<String>,
    pub next_action_date: Option<String>,
    pub assigned_to: Option<i32>,
    pub campaign_id: Option<i32>,
}

impl NewInteraction {
    pub fn validate(&self) -> Result<()> {
        if !ACTION_TYPES.contains(&self.action_type.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "unknown action type '{}'",
                self.action_type
            ))
            .into());
        }
        if self.interaction_date.trim().is_empty() {
            return Err(ValidationError::MissingField("interaction_date".to_string()).into());
        }
        NaiveDate::parse_from_str(&self.interaction_date, DATE_FORMAT)?;
        if let Some(next) = &self.next_action_date {
            NaiveDate::parse_from_str(next, DATE_FORMAT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewInteraction {
        NewInteraction {
            client_id: 1,
            action_type: "Call".to_string(),
            notes: None,
            interaction_date: "2025-06-15".to_string(),
            outcome: None,
            next_action_date: None,
            assigned_to: None,
            campaign_id: None,
        }
    }

    #[test]
    fn accepts_known_action_type_and_iso_date() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_action_type() {
        let mut interaction = valid();
        interaction.action_type = "Fax".to_string();
        assert!(interaction.validate().is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let mut interaction = valid();
        interaction.interaction_date = "15/06/2025".to_string();
        assert!(interaction.validate().is_err());
    }

    #[test]
    fn rejects_empty_date() {
        let mut interaction = valid();
        interaction.interaction_date = " ".to_string();
        assert!(interaction.validate().is_err());
    }
}
