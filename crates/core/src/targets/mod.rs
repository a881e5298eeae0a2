//! Targets & performance module - domain models, services, and traits.

mod targets_model;
mod targets_service;
mod targets_traits;

pub use targets_model::{NewTarget, Target, TargetActuals, TargetProgress};
pub use targets_service::TargetService;
pub use targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
