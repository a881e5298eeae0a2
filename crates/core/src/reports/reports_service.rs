use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::reports_model::{
    CampaignPerformance, NewTrackerEntry, RepActivity, StageCount, TrackerEntry,
};
use super::reports_traits::{ReportsServiceTrait, TrackerRepositoryTrait};
use crate::campaigns::{CampaignRepositoryTrait, LeadFilters, LeadRepositoryTrait};
use crate::errors::Result;
use crate::filters::InteractionFilters;
use crate::interactions::InteractionRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Service producing the report-page aggregates and exports.
pub struct ReportsService {
    interaction_repository: Arc<dyn InteractionRepositoryTrait>,
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    lead_repository: Arc<dyn LeadRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    tracker_repository: Arc<dyn TrackerRepositoryTrait>,
}

impl ReportsService {
    pub fn new(
        interaction_repository: Arc<dyn InteractionRepositoryTrait>,
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        lead_repository: Arc<dyn LeadRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        tracker_repository: Arc<dyn TrackerRepositoryTrait>,
    ) -> Self {
        Self {
            interaction_repository,
            campaign_repository,
            lead_repository,
            user_repository,
            tracker_repository,
        }
    }
}

#[async_trait::async_trait]
impl ReportsServiceTrait for ReportsService {
    fn rep_activity(&self, filters: &InteractionFilters) -> Result<Vec<RepActivity>> {
        let interactions = self.interaction_repository.list_filtered(filters)?;

        let mut by_rep: BTreeMap<i32, i64> = BTreeMap::new();
        for row in &interactions {
            if let Some(rep_id) = row.interaction.assigned_to {
                *by_rep.entry(rep_id).or_insert(0) += 1;
            }
        }

        let users = self.user_repository.list()?;
        let mut activity: Vec<RepActivity> = by_rep
            .into_iter()
            .map(|(rep_id, interactions)| RepActivity {
                rep_id,
                username: users
                    .iter()
                    .find(|u| u.id == rep_id)
                    .map(|u| u.username.clone())
                    .unwrap_or_else(|| format!("user #{rep_id}")),
                interactions,
            })
            .collect();
        activity.sort_by(|a, b| b.interactions.cmp(&a.interactions));
        Ok(activity)
    }

    fn campaign_performance(&self) -> Result<Vec<CampaignPerformance>> {
        let campaigns = self.campaign_repository.list()?;
        // One unfiltered pass over leads and interactions covers every
        // campaign; per-campaign counting happens here.
        let leads = self.lead_repository.list_filtered(&LeadFilters::default())?;
        let interactions = self
            .interaction_repository
            .list_filtered(&InteractionFilters::default())?;

        Ok(campaigns
            .into_iter()
            .map(|campaign| {
                let mut by_stage: BTreeMap<String, i64> = BTreeMap::new();
                let mut total_leads = 0;
                for lead in leads.iter().filter(|l| l.campaign_id == Some(campaign.id)) {
                    *by_stage.entry(lead.stage.clone()).or_insert(0) += 1;
                    total_leads += 1;
                }
                let interactions = interactions
                    .iter()
                    .filter(|i| i.interaction.campaign_id == Some(campaign.id))
                    .count() as i64;
                CampaignPerformance {
                    campaign_id: campaign.id,
                    name: campaign.name,
                    leads_by_stage: by_stage
                        .into_iter()
                        .map(|(stage, count)| StageCount { stage, count })
                        .collect(),
                    total_leads,
                    interactions,
                }
            })
            .collect())
    }

    fn get_tracker_entries(&self) -> Result<Vec<TrackerEntry>> {
        self.tracker_repository.list()
    }

    async fn import_tracker_entries(&self, mut entries: Vec<NewTrackerEntry>) -> Result<usize> {
        // Validate the whole batch before anything is written.
        for entry in entries.iter_mut() {
            entry.validate()?;
        }
        debug!("Importing {} tracker rows", entries.len());
        self.tracker_repository.insert_batch(entries).await
    }

    fn export_interactions_csv(&self, filters: &InteractionFilters) -> Result<Vec<u8>> {
        let interactions = self.interaction_repository.list_filtered(filters)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "id",
            "date",
            "company",
            "sector",
            "region",
            "action_type",
            "outcome",
            "next_action_date",
            "notes",
        ])?;
        for row in &interactions {
            writer.write_record([
                row.interaction.id.to_string().as_str(),
                &row.interaction.interaction_date,
                &row.client_name,
                row.sector.as_deref().unwrap_or(""),
                row.region.as_deref().unwrap_or(""),
                &row.interaction.action_type,
                row.interaction.outcome.as_deref().unwrap_or(""),
                row.interaction.next_action_date.as_deref().unwrap_or(""),
                row.interaction.notes.as_deref().unwrap_or(""),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| crate::errors::Error::Unexpected(e.to_string()))
    }
}
