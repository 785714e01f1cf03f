use contracts::domain::a003_subscription::{Subscription, SubscriptionFilter};
use contracts::shared::pagination::{total_pages, PageRequest};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SubscriptionListState {
    pub items: Vec<Subscription>,
    pub total_count: u64,
    pub filter: SubscriptionFilter,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
}

impl SubscriptionListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            filter: SubscriptionFilter::default(),
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

    pub fn apply_filter(&mut self, filter: SubscriptionFilter) {
        self.filter = filter;
        self.page = 0;
    }
}

pub fn create_state(page_size: usize) -> RwSignal<SubscriptionListState> {
    RwSignal::new(SubscriptionListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_subscription::SubscriptionStatus;

    #[test]
    fn test_filter_change_goes_back_to_first_page() {
        let mut state = SubscriptionListState::new(10);
        state.page = 3;
        state.apply_filter(SubscriptionFilter {
            status: Some(SubscriptionStatus::PastDue),
            search: String::new(),
        });
        assert_eq!(state.page, 0);
        let q = state.filter.to_query(state.page_request());
        assert_eq!(q.status.as_deref(), Some("past_due"));
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
    }
}
