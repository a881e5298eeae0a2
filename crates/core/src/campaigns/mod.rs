//! Campaigns & leads module - domain models, services, and traits.
//!
//! Campaigns and the leads they generate are managed together, matching the
//! "Campaigns & Leads" page.

mod campaigns_model;
mod campaigns_service;
mod campaigns_traits;


pub use campaigns_model::{Campaign, Lead, LeadFilters, NewCampaign, NewLead};
pub use campaigns_service::{CampaignService, LeadService};
pub use campaigns_traits::{
    CampaignRepositoryTrait, CampaignServiceTrait, LeadRepositoryTrait, LeadServiceTrait,
};
