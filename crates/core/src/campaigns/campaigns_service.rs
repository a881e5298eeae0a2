use log::debug;
use std::sync::Arc;

use super::campaigns_model::{
    validate_stage, Campaign, Lead, LeadFilters, NewCampaign, NewLead,
};
use super::campaigns_traits::{
    CampaignRepositoryTrait, CampaignServiceTrait, LeadRepositoryTrait, LeadServiceTrait,
};
use crate::errors::Result;

/// Service for managing campaigns.
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
}

impl CampaignService {
    pub fn new(repository: Arc<dyn CampaignRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CampaignServiceTrait for CampaignService {
    fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.repository.list()
    }

    fn get_campaign(&self, campaign_id: i32) -> Result<Campaign> {
        self.repository.get_by_id(campaign_id)
    }

    async fn create_campaign(&self, mut new_campaign: NewCampaign) -> Result<Campaign> {
        new_campaign.validate()?;
        debug!("Creating campaign '{}'", new_campaign.name);
        self.repository.insert(new_campaign).await
    }
}

/// Service for managing leads.
pub struct LeadService {
    repository: Arc<dyn LeadRepositoryTrait>,
}

impl LeadService {
    pub fn new(repository: Arc<dyn LeadRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LeadServiceTrait for LeadService {
    fn get_leads(&self, filters: &LeadFilters) -> Result<Vec<Lead>> {
        self.repository.list_filtered(filters)
    }

    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead> {
        new_lead.validate()?;
        self.repository.insert(new_lead).await
    }

    async fn update_lead_stage(&self, lead_id: i32, stage: String) -> Result<Lead> {
        validate_stage(&stage)?;
        self.repository.update_stage(lead_id, stage).await
    }
}
