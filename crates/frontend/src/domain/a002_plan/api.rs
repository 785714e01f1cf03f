use contracts::domain::a002_plan::{Plan, PlanDto};

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::path_segment;

pub async fn fetch_plans() -> Result<Vec<Plan>, ApiError> {
    api_client::get_json("/plans").await
}

/// `POST /plans` sem id, `PUT /plans/{id}` com id.
pub async fn save_plan(dto: &PlanDto) -> Result<Plan, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api_client::put_json(&format!("/plans/{}", path_segment(id)), dto).await,
        None => api_client::post_json("/plans", dto).await,
    }
}
