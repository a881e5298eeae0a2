//! Campaign and lead domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, LEAD_STAGES};
use crate::errors::{Result, ValidationError};

/// Domain model representing a marketing campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub ctype: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Input model for creating a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub ctype: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl NewCampaign {
    pub fn validate(&mut self) -> Result<()> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        for date in [&self.start_date, &self.end_date].into_iter().flatten() {
            NaiveDate::parse_from_str(date, DATE_FORMAT)?;
        }
        Ok(())
    }
}

/// Domain model representing a lead in the funnel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    pub client_id: Option<i32>,
    pub campaign_id: Option<i32>,
    pub lead_source: Option<String>,
    pub stage: String,
    pub assigned_to: Option<i32>,
    pub created_at: String,
}

/// Input model for creating a new lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub client_id: Option<i32>,
    pub campaign_id: Option<i32>,
    pub lead_source: Option<String>,
    pub stage: String,
    pub assigned_to: Option<i32>,
}

impl NewLead {
    pub fn validate(&self) -> Result<()> {
        validate_stage(&self.stage)
    }
}

/// Optional conjunctive filters for listing leads. Empty members are omitted
/// from the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFilters {
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub campaign_ids: Vec<i32>,
    #[serde(default)]
    pub rep_ids: Vec<i32>,
}

/// Rejects stages outside the fixed funnel set.
pub fn validate_stage(stage: &str) -> Result<()> {
    if LEAD_STAGES.contains(&stage) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!("unknown lead stage '{stage}'")).into())
    }
}
