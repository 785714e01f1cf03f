use contracts::system::notifications::Notification;

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::path_segment;

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    api_client::get_json("/notifications").await
}

pub async fn mark_read(id: &str) -> Result<(), ApiError> {
    api_client::patch_empty(&format!("/notifications/{}/read", path_segment(id))).await
}
