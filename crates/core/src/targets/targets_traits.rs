use async_trait::async_trait;

use crate::errors::Result;
use crate::targets::targets_model::{NewTarget, Target, TargetActuals, TargetProgress};

/// Trait for target repository operations.
#[async_trait]
pub trait TargetRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Target>>;
    fn list_for_user(&self, user_id: i32) -> Result<Vec<Target>>;
    /// Inserts or replaces the single row for (user, month, year).
    async fn upsert(&self, new_target: NewTarget) -> Result<Target>;
    /// Computes the observed actuals for the period from leads,
    /// interactions, and meetings.
    fn actuals_for_period(&self, user_id: i32, month: i32, year: i32) -> Result<TargetActuals>;
}

/// Trait for target service operations.
#[async_trait]
pub trait TargetServiceTrait: Send + Sync {
    fn get_targets(&self) -> Result<Vec<Target>>;
    fn get_targets_for_user(&self, user_id: i32) -> Result<Vec<Target>>;
    async fn set_target(&self, new_target: NewTarget) -> Result<Target>;
    /// Every target the user has, each paired with the actuals observed in
    /// its period.
    fn get_progress_for_user(&self, user_id: i32) -> Result<Vec<TargetProgress>>;
}
