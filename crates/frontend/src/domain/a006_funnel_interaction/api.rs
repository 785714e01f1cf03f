use contracts::domain::a006_funnel_interaction::{
    InteractionFilter, InteractionListResponse, TimelineEntry,
};
use contracts::shared::bulk::BulkOutcome;
use contracts::shared::pagination::PageRequest;
use futures::future::join_all;

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::path_segment;

const BASE: &str = "/funnel/interactions";

/// Página de interações. Filtros vazios não entram na query string.
pub async fn fetch_interactions(
    filter: &InteractionFilter,
    page: PageRequest,
) -> Result<InteractionListResponse, ApiError> {
    api_client::get_json_with_query(BASE, &filter.to_query(page)).await
}

/// Passagens registradas para um token de fluxo.
pub async fn fetch_timeline(flow_token: &str) -> Result<Vec<TimelineEntry>, ApiError> {
    api_client::get_json(&format!("{}/{}/timeline", BASE, path_segment(flow_token))).await
}

pub async fn delete_interaction(id: &str) -> Result<(), ApiError> {
    api_client::delete(&format!("{}/{}", BASE, path_segment(id))).await
}

/// Dispara um DELETE por id, todos ao mesmo tempo, e conta os resultados.
///
/// Não é transacional: os que falharem continuam no servidor.
pub async fn delete_interactions(ids: &[String]) -> BulkOutcome {
    let results = join_all(ids.iter().map(|id| async move {
        let result = delete_interaction(id).await;
        if let Err(e) = &result {
            log::warn!("delete interaction {} failed: {}", id, e);
        }
        result
    }))
    .await;

    BulkOutcome::tally(results)
}
