//! Chart-ready dashboard aggregates. The frontend renders these as-is.

use serde::{Deserialize, Serialize};

/// Headline KPI counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub companies_reached: i64,
    pub interactions_logged: i64,
    pub sectors_covered: i64,
}

/// One day of the interaction time series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub day: String,
    pub count: i64,
}

/// One cell of the sector x action-type cross-tabulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub sector: String,
    pub action_type: String,
    pub count: i64,
}

/// Company count for one sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorCount {
    pub sector: String,
    pub count: i64,
}

/// One stage of the pipeline funnel. The funnel always contains all four
/// stages in fixed order, zero-filled where no leads exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub stage: String,
    pub count: i64,
}

/// The full dashboard payload for one filter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub interactions_over_time: Vec<TimeSeriesPoint>,
    pub sector_action_heatmap: Vec<HeatmapCell>,
    pub companies_by_sector: Vec<SectorCount>,
    pub funnel: Vec<FunnelStage>,
}
