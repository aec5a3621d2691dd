//! Dashboard module - overview composition, derived metrics and trend.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{
    Dashboard, DashboardConfig, DashboardMetrics, EmptyStateCopy, Overview, TrendPoint,
};
pub use dashboard_service::{DashboardService, OverviewRepositoryTrait};
