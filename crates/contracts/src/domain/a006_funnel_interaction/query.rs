use serde::{Deserialize, Serialize};

use super::aggregate::{FunnelScreen, FunnelStatus};
use crate::shared::pagination::PageRequest;

/// Filtros da listagem de interações.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionFilter {
    pub status: Option<FunnelStatus>,
    pub screen: Option<FunnelScreen>,
    pub search: String,
}

impl InteractionFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.screen.is_none() && self.search.trim().is_empty()
    }

    pub fn to_query(&self, page: PageRequest) -> InteractionQuery {
        let search = self.search.trim();
        InteractionQuery {
            status: self.status.map(|s| s.as_str().to_string()),
            screen: self.screen.as_ref().map(|s| s.as_str().to_string()),
            search: (!search.is_empty()).then(|| search.to_string()),
            page: page.wire_page(),
            limit: page.page_size,
        }
    }
}

/// Query string de `GET /funnel/interactions`; filtros vazios são omitidos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filters_are_omitted() {
        let query = InteractionFilter::default().to_query(PageRequest::new(0, 20));
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"page": 1, "limit": 20})
        );
    }

    #[test]
    fn test_filters_are_sent_by_wire_name() {
        let filter = InteractionFilter {
            status: Some(FunnelStatus::Abandoned),
            screen: Some(FunnelScreen::CpfEntry),
            search: "  maria ".to_string(),
        };
        assert!(!filter.is_empty());
        let query = filter.to_query(PageRequest::new(1, 50));
        assert_eq!(query.status.as_deref(), Some("abandoned"));
        assert_eq!(query.screen.as_deref(), Some("cpf_entry"));
        assert_eq!(query.search.as_deref(), Some("maria"));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 50);
    }
}
