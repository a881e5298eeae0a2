use log::debug;
use std::sync::Arc;

use super::interactions_model::{InteractionWithClient, NewInteraction};
use super::interactions_traits::{InteractionRepositoryTrait, InteractionServiceTrait};
use crate::errors::Result;
use crate::filters::InteractionFilters;

/// Service for logging and listing client interactions.
pub struct InteractionService {
    repository: Arc<dyn InteractionRepositoryTrait>,
}

impl InteractionService {
    pub fn new(repository: Arc<dyn InteractionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InteractionServiceTrait for InteractionService {
    fn get_interactions(
        &self,
        filters: &InteractionFilters,
    ) -> Result<Vec<InteractionWithClient>> {
        self.repository.list_filtered(filters)
    }

    async fn log_interaction(
        &self,
        new_interaction: NewInteraction,
    ) -> Result<InteractionWithClient> {
        new_interaction.validate()?;
        debug!(
            "Logging {} interaction for client {}",
            new_interaction.action_type, new_interaction.client_id
        );
        self.repository.insert(new_interaction).await
    }
}
