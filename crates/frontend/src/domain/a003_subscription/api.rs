use contracts::domain::a003_subscription::{
    SubscriptionDetail, SubscriptionFilter, SubscriptionListResponse,
};
use contracts::shared::pagination::PageRequest;

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::path_segment;

pub async fn fetch_subscriptions(
    filter: &SubscriptionFilter,
    page: PageRequest,
) -> Result<SubscriptionListResponse, ApiError> {
    api_client::get_json_with_query("/subscriptions", &filter.to_query(page)).await
}

pub async fn fetch_subscription(id: &str) -> Result<SubscriptionDetail, ApiError> {
    api_client::get_json(&format!("/subscriptions/{}", path_segment(id))).await
}

pub async fn cancel_subscription(id: &str) -> Result<(), ApiError> {
    api_client::post_empty(&format!("/subscriptions/{}/cancel", path_segment(id))).await
}
