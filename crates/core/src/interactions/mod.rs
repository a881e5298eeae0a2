//! Interactions module - domain models, services, and traits.

mod interactions_model;
mod interactions_service;
mod interactions_traits;

pub use interactions_model::{Interaction, InteractionWithClient, NewInteraction};
pub use interactions_service::InteractionService;
pub use interactions_traits::{InteractionRepositoryTrait, InteractionServiceTrait};
