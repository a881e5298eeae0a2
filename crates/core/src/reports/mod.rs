//! Reports & export module - aggregate views and the sales campaign tracker.

mod reports_model;
mod reports_service;
mod reports_traits;

#[cfg(test)]
mod reports_service_tests;

pub use reports_model::{
    CampaignPerformance, NewTrackerEntry, RepActivity, StageCount, TrackerEntry,
};
pub use reports_service::ReportsService;
pub use reports_traits::{ReportsServiceTrait, TrackerRepositoryTrait};
