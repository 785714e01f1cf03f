use contracts::dashboards::d401_funnel_analytics::{AnalyticsQuery, AnalyticsSnapshot};

use crate::shared::api_client::{self, ApiError};

/// Agregados do funil para os últimos `days` dias.
pub async fn get_analytics(days: u32) -> Result<AnalyticsSnapshot, ApiError> {
    api_client::get_json_with_query("/funnel/analytics", &AnalyticsQuery { days }).await
}
