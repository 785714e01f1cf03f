use contracts::domain::a006_funnel_interaction::{FunnelInteraction, InteractionFilter};
use contracts::shared::pagination::{total_pages, PageRequest};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct InteractionListState {
    pub items: Vec<FunnelInteraction>,
    pub total_count: u64,
    pub filter: InteractionFilter,
    pub selected_ids: HashSet<String>,
    pub is_loaded: bool,
    // Paginação no servidor
    pub page: usize,
    pub page_size: usize,
}

impl InteractionListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            filter: InteractionFilter::default(),
            selected_ids: HashSet::new(),
            is_loaded: false,
            page: 0,
            page_size,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected_ids.insert(id.to_string());
        } else {
            self.selected_ids.remove(id);
        }
    }

    /// Marca ou desmarca todas as linhas da página atual.
    pub fn set_all_on_page(&mut self, checked: bool) {
        if checked {
            self.selected_ids
                .extend(self.items.iter().map(|i| i.id.clone()));
        } else {
            for item in &self.items {
                self.selected_ids.remove(&item.id);
            }
        }
    }

    pub fn all_on_page_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| self.selected_ids.contains(&i.id))
    }

    /// Ids selecionados em ordem estável (para a confirmação e os DELETEs).
    pub fn selected_in_order(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected_ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Novo filtro sempre volta para a primeira página.
    pub fn apply_filter(&mut self, filter: InteractionFilter) {
        self.filter = filter;
        self.page = 0;
    }

    /// Aplica uma resposta da listagem. Se a página atual passou do fim
    /// (ex.: a última página ficou vazia após excluir), volta para a última
    /// existente e devolve `true` para buscar de novo.
    pub fn apply_page(&mut self, items: Vec<FunnelInteraction>, total: u64) -> bool {
        self.items = items;
        self.total_count = total;
        self.is_loaded = true;

        let last = self.total_pages().saturating_sub(1);
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Depois de excluir: limpa a seleção e diz se a linha do tempo aberta
    /// (`open_id`) era de um registro excluído.
    pub fn after_delete(&mut self, deleted_ids: &[String], open_id: Option<&str>) -> bool {
        self.selected_ids.clear();
        timeline_affected(open_id, deleted_ids)
    }
}

/// A linha do tempo aberta deve ser fechada se o registro estava entre os
/// excluídos.
pub fn timeline_affected(open_id: Option<&str>, deleted_ids: &[String]) -> bool {
    open_id.is_some_and(|id| deleted_ids.iter().any(|d| d == id))
}

pub fn create_state(page_size: usize) -> RwSignal<InteractionListState> {
    RwSignal::new(InteractionListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_funnel_interaction::FunnelStatus;
    use contracts::shared::bulk::BulkOutcome;
    use serde_json::json;

    fn interaction(id: &str) -> FunnelInteraction {
        serde_json::from_value(json!({
            "id": id,
            "flow_token": format!("flow-{}", id),
            "current_screen": "cpf_entry",
            "status": "in_progress",
            "metadata": {},
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:05:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_select_all_and_toggle() {
        let mut state = InteractionListState::new(20);
        state.items = vec![interaction("a"), interaction("b")];
        assert!(!state.all_on_page_selected());

        state.set_all_on_page(true);
        assert!(state.all_on_page_selected());
        assert_eq!(state.selected_in_order(), vec!["a".to_string(), "b".to_string()]);

        state.toggle("a", false);
        assert!(!state.all_on_page_selected());
        assert_eq!(state.selected_in_order(), vec!["b".to_string()]);

        state.set_all_on_page(false);
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn test_unselect_all_keeps_other_pages() {
        let mut state = InteractionListState::new(20);
        state.toggle("z", true);
        state.items = vec![interaction("a"), interaction("b")];
        state.set_all_on_page(true);
        assert_eq!(state.selected_ids.len(), 3);

        state.set_all_on_page(false);
        assert_eq!(state.selected_in_order(), vec!["z".to_string()]);
    }

    #[test]
    fn test_emptied_last_page_steps_back() {
        let mut state = InteractionListState::new(20);
        state.page = 2;
        state.total_count = 41;

        // a única linha da página 3 foi excluída
        assert!(state.apply_page(Vec::new(), 40));
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 2);

        assert!(!state.apply_page(vec![interaction("a")], 40));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_apply_page_when_everything_is_gone() {
        let mut state = InteractionListState::new(20);
        state.page = 1;
        assert!(state.apply_page(Vec::new(), 0));
        assert_eq!(state.page, 0);
        assert!(!state.apply_page(Vec::new(), 0));
    }

    #[test]
    fn test_bulk_delete_with_partial_failure() {
        let mut state = InteractionListState::new(20);
        state.items = vec![interaction("a"), interaction("b"), interaction("c")];
        state.set_all_on_page(true);
        let ids = state.selected_in_order();

        let results: Vec<Result<(), String>> =
            vec![Ok(()), Err("HTTP 500".to_string()), Ok(())];
        let outcome = BulkOutcome::tally(results);
        assert_eq!(outcome.delete_summary(), "2 excluída(s) com sucesso, 1 falharam.");

        assert!(state.after_delete(&ids, Some("c")));
        assert!(state.selected_ids.is_empty());

        // "b" falhou e volta na próxima listagem
        assert!(!state.apply_page(vec![interaction("b")], 1));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "b");
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_after_delete_keeps_unrelated_timeline() {
        let mut state = InteractionListState::new(20);
        state.toggle("a", true);
        assert!(!state.after_delete(&["a".to_string()], Some("b")));
        assert!(!state.after_delete(&["a".to_string()], None));
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let state = InteractionListState::new(20);
        assert!(!state.all_on_page_selected());
    }

    #[test]
    fn test_apply_filter_resets_page() {
        let mut state = InteractionListState::new(20);
        state.page = 3;
        state.apply_filter(InteractionFilter {
            status: Some(FunnelStatus::Abandoned),
            ..Default::default()
        });
        assert_eq!(state.page, 0);
        assert_eq!(state.page_request().wire_page(), 1);
    }

    #[test]
    fn test_total_pages() {
        let mut state = InteractionListState::new(20);
        state.total_count = 41;
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_timeline_affected() {
        let deleted = vec!["a".to_string(), "c".to_string()];
        assert!(timeline_affected(Some("a"), &deleted));
        assert!(!timeline_affected(Some("b"), &deleted));
        assert!(!timeline_affected(None, &deleted));
    }
}
