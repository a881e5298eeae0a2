mod model;
mod repository;

pub use model::{CampaignDB, LeadDB, NewCampaignDB, NewLeadDB};
pub use repository::{CampaignRepository, LeadRepository};
