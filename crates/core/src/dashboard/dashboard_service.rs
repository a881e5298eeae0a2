use log::debug;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::dashboard_model::{
    Dashboard, DashboardSummary, FunnelStage, HeatmapCell, SectorCount, TimeSeriesPoint,
};
use crate::campaigns::LeadRepositoryTrait;
use crate::clients::ClientRepositoryTrait;
use crate::constants::LEAD_STAGES;
use crate::errors::Result;
use crate::filters::InteractionFilters;
use crate::interactions::InteractionRepositoryTrait;

/// Trait for dashboard service operations.
pub trait DashboardServiceTrait: Send + Sync {
    fn get_dashboard(&self, filters: &InteractionFilters) -> Result<Dashboard>;
}

/// Builds the dashboard from filtered interactions, the client roster, and
/// lead stage counts. All aggregation happens in-process on the loaded rows.
pub struct DashboardService {
    interaction_repository: Arc<dyn InteractionRepositoryTrait>,
    client_repository: Arc<dyn ClientRepositoryTrait>,
    lead_repository: Arc<dyn LeadRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        interaction_repository: Arc<dyn InteractionRepositoryTrait>,
        client_repository: Arc<dyn ClientRepositoryTrait>,
        lead_repository: Arc<dyn LeadRepositoryTrait>,
    ) -> Self {
        Self {
            interaction_repository,
            client_repository,
            lead_repository,
        }
    }

    /// All four funnel stages in fixed order, zero-filled where the observed
    /// counts have no entry. The display order never follows the counts.
    fn build_funnel(observed: &[(String, i64)]) -> Vec<FunnelStage> {
        LEAD_STAGES
            .iter()
            .map(|stage| FunnelStage {
                stage: stage.to_string(),
                count: observed
                    .iter()
                    .find(|(s, _)| s == stage)
                    .map(|(_, n)| *n)
                    .unwrap_or(0),
            })
            .collect()
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, filters: &InteractionFilters) -> Result<Dashboard> {
        debug!("Building dashboard, filters: {:?}", filters);

        let interactions = self.interaction_repository.list_filtered(filters)?;
        let clients = self.client_repository.list()?;

        // KPI counts: companies and sectors span the whole roster, the
        // interaction count honors the filter set.
        let companies_reached = clients
            .iter()
            .map(|c| c.company_name.as_str())
            .collect::<BTreeSet<_>>()
            .len() as i64;
        let sectors_covered = clients
            .iter()
            .filter_map(|c| c.sector.as_deref())
            .collect::<BTreeSet<_>>()
            .len() as i64;
        let summary = DashboardSummary {
            companies_reached,
            interactions_logged: interactions.len() as i64,
            sectors_covered,
        };

        // Daily interaction counts, in date order.
        let mut by_day: BTreeMap<String, i64> = BTreeMap::new();
        for row in &interactions {
            *by_day
                .entry(row.interaction.interaction_date.clone())
                .or_insert(0) += 1;
        }
        let interactions_over_time = by_day
            .into_iter()
            .map(|(day, count)| TimeSeriesPoint { day, count })
            .collect();

        // Sector x action-type cross-tabulation; rows without a sector are
        // dropped, as the pivot has no axis to place them on.
        let mut by_cell: BTreeMap<(String, String), i64> = BTreeMap::new();
        for row in &interactions {
            if let Some(sector) = &row.sector {
                *by_cell
                    .entry((sector.clone(), row.interaction.action_type.clone()))
                    .or_insert(0) += 1;
            }
        }
        let sector_action_heatmap = by_cell
            .into_iter()
            .map(|((sector, action_type), count)| HeatmapCell {
                sector,
                action_type,
                count,
            })
            .collect();

        // Companies per sector, largest first.
        let mut by_sector: BTreeMap<String, i64> = BTreeMap::new();
        for client in &clients {
            if let Some(sector) = &client.sector {
                *by_sector.entry(sector.clone()).or_insert(0) += 1;
            }
        }
        let mut companies_by_sector: Vec<SectorCount> = by_sector
            .into_iter()
            .map(|(sector, count)| SectorCount { sector, count })
            .collect();
        companies_by_sector.sort_by(|a, b| b.count.cmp(&a.count).then(a.sector.cmp(&b.sector)));

        let observed = self.lead_repository.count_by_stage()?;
        let funnel = Self::build_funnel(&observed);

        Ok(Dashboard {
            summary,
            interactions_over_time,
            sector_action_heatmap,
            companies_by_sector,
            funnel,
        })
    }
}
