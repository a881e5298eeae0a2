use std::sync::Arc;

use super::targets_model::{NewTarget, Target, TargetProgress};
use super::targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
use crate::errors::Result;

/// Service for managing monthly performance targets.
pub struct TargetService {
    repository: Arc<dyn TargetRepositoryTrait>,
}

impl TargetService {
    pub fn new(repository: Arc<dyn TargetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TargetServiceTrait for TargetService {
    fn get_targets(&self) -> Result<Vec<Target>> {
        self.repository.list()
    }

    fn get_targets_for_user(&self, user_id: i32) -> Result<Vec<Target>> {
        self.repository.list_for_user(user_id)
    }

    async fn set_target(&self, new_target: NewTarget) -> Result<Target> {
        new_target.validate()?;
        self.repository.upsert(new_target).await
    }

    fn get_progress_for_user(&self, user_id: i32) -> Result<Vec<TargetProgress>> {
        let targets = self.repository.list_for_user(user_id)?;
        targets
            .into_iter()
            .map(|target| {
                let actuals = self.repository.actuals_for_period(
                    target.user_id,
                    target.month,
                    target.year,
                )?;
                Ok(TargetProgress { target, actuals })
            })
            .collect()
    }
}
