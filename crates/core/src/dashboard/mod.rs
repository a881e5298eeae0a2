//! Dashboard module - KPI counts and chart-ready aggregations.

mod dashboard_model;
mod dashboard_service;

#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_model::{
    Dashboard, DashboardSummary, FunnelStage, HeatmapCell, SectorCount, TimeSeriesPoint,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
