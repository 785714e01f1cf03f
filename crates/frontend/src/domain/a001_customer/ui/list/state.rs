use contracts::domain::a001_customer::Customer;
use contracts::shared::pagination::{total_pages, PageRequest};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CustomerListState {
    pub items: Vec<Customer>,
    pub total_count: u64,
    /// Busca aplicada (o campo de texto só vale depois do Enter)
    pub search: String,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
}

impl CustomerListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            search: String::new(),
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

    pub fn apply_search(&mut self, search: &str) {
        self.search = search.trim().to_string();
        self.page = 0;
    }
}

pub fn create_state(page_size: usize) -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_resets_page() {
        let mut state = CustomerListState::new(20);
        state.page = 4;
        state.total_count = 95;
        assert_eq!(state.total_pages(), 5);

        state.apply_search("  joão ");
        assert_eq!(state.search, "joão");
        assert_eq!(state.page, 0);
        assert_eq!(state.page_request().wire_page(), 1);
    }
}
