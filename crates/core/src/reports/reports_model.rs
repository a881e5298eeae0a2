//! Report domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Interaction volume for one sales rep under the active filter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepActivity {
    pub rep_id: i32,
    pub username: String,
    pub interactions: i64,
}

/// Lead count for one funnel stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageCount {
    pub stage: String,
    pub count: i64,
}

/// Per-campaign lead and interaction volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    pub campaign_id: i32,
    pub name: String,
    pub leads_by_stage: Vec<StageCount>,
    pub total_leads: i64,
    pub interactions: i64,
}

/// One row of the weekly sales campaign tracker worksheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerEntry {
    pub id: i32,
    pub week: Option<String>,
    pub date_range: Option<String>,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub proposal_status: Option<String>,
    pub site_visit: Option<String>,
    pub follow_up_comments: Option<String>,
    pub sector: Option<String>,
    pub created_at: String,
}

/// Input model for one tracker row; batches of these import together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrackerEntry {
    pub week: Option<String>,
    pub date_range: Option<String>,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub proposal_status: Option<String>,
    pub site_visit: Option<String>,
    pub follow_up_comments: Option<String>,
    pub sector: Option<String>,
}

impl NewTrackerEntry {
    pub fn validate(&mut self) -> Result<()> {
        self.company_name = self.company_name.trim().to_string();
        if self.company_name.is_empty() {
            return Err(ValidationError::MissingField("company_name".to_string()).into());
        }
        Ok(())
    }
}
