use async_trait::async_trait;

use crate::errors::Result;
use crate::filters::InteractionFilters;
use crate::reports::reports_model::{
    CampaignPerformance, NewTrackerEntry, RepActivity, TrackerEntry,
};

/// Trait for sales campaign tracker repository operations.
#[async_trait]
pub trait TrackerRepositoryTrait: Send + Sync {
    /// Loads all tracker rows, newest first.
    fn list(&self) -> Result<Vec<TrackerEntry>>;
    /// Inserts a batch of rows in a single transaction and returns how many
    /// were written.
    async fn insert_batch(&self, entries: Vec<NewTrackerEntry>) -> Result<usize>;
}

/// Trait for report service operations.
#[async_trait]
pub trait ReportsServiceTrait: Send + Sync {
    /// Interaction counts per assigned rep under the filter set.
    fn rep_activity(&self, filters: &InteractionFilters) -> Result<Vec<RepActivity>>;
    /// Lead-per-stage and interaction counts per campaign.
    fn campaign_performance(&self) -> Result<Vec<CampaignPerformance>>;
    fn get_tracker_entries(&self) -> Result<Vec<TrackerEntry>>;
    async fn import_tracker_entries(&self, entries: Vec<NewTrackerEntry>) -> Result<usize>;
    /// The filtered interaction log as CSV, for download.
    fn export_interactions_csv(&self, filters: &InteractionFilters) -> Result<Vec<u8>>;
}
