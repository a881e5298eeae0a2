//! Meetings & opportunities module - domain models, services, and traits.

mod meetings_model;
mod meetings_service;
mod meetings_traits;

pub use meetings_model::{Meeting, NewMeeting};
pub use meetings_service::MeetingService;
pub use meetings_traits::{MeetingRepositoryTrait, MeetingServiceTrait};
