use async_trait::async_trait;

use crate::errors::Result;
use crate::filters::InteractionFilters;
use crate::interactions::interactions_model::{InteractionWithClient, NewInteraction};

/// Trait for interaction repository operations.
#[async_trait]
pub trait InteractionRepositoryTrait: Send + Sync {
    /// Loads interactions joined with their client, constrained by the
    /// filter set. Empty filter members generate no predicate.
    fn list_filtered(&self, filters: &InteractionFilters) -> Result<Vec<InteractionWithClient>>;
    async fn insert(&self, new_interaction: NewInteraction) -> Result<InteractionWithClient>;
}

/// Trait for interaction service operations.
#[async_trait]
pub trait InteractionServiceTrait: Send + Sync {
    fn get_interactions(&self, filters: &InteractionFilters)
        -> Result<Vec<InteractionWithClient>>;
    async fn log_interaction(
        &self,
        new_interaction: NewInteraction,
    ) -> Result<InteractionWithClient>;
}
