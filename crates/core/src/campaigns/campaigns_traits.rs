use async_trait::async_trait;

use crate::campaigns::campaigns_model::{Campaign, Lead, LeadFilters, NewCampaign, NewLead};
use crate::errors::Result;

/// Trait for campaign repository operations.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    /// Loads all campaigns, newest first.
    fn list(&self) -> Result<Vec<Campaign>>;
    fn get_by_id(&self, campaign_id: i32) -> Result<Campaign>;
    async fn insert(&self, new_campaign: NewCampaign) -> Result<Campaign>;
}

/// Trait for lead repository operations.
#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    fn list_filtered(&self, filters: &LeadFilters) -> Result<Vec<Lead>>;
    async fn insert(&self, new_lead: NewLead) -> Result<Lead>;
    async fn update_stage(&self, lead_id: i32, stage: String) -> Result<Lead>;
    /// Observed lead counts keyed by stage. Stages with no leads are absent;
    /// the dashboard fills them in.
    fn count_by_stage(&self) -> Result<Vec<(String, i64)>>;
}

/// Trait for campaign service operations.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    fn get_campaigns(&self) -> Result<Vec<Campaign>>;
    fn get_campaign(&self, campaign_id: i32) -> Result<Campaign>;
    async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<Campaign>;
}

/// Trait for lead service operations.
#[async_trait]
pub trait LeadServiceTrait: Send + Sync {
    fn get_leads(&self, filters: &LeadFilters) -> Result<Vec<Lead>>;
    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead>;
    /// The only mutation leads support: moving through the fixed funnel.
    async fn update_lead_stage(&self, lead_id: i32, stage: String) -> Result<Lead>;
}
