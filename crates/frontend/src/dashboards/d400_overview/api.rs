use contracts::dashboards::d400_overview::DashboardStats;

use crate::shared::api_client::{self, ApiError};

/// Indicadores da página inicial
pub async fn get_stats() -> Result<DashboardStats, ApiError> {
    api_client::get_json("/dashboard/stats").await
}
