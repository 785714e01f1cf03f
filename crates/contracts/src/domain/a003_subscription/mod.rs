pub mod aggregate;

pub use aggregate::{
    Subscription, SubscriptionCustomerRef, SubscriptionDetail, SubscriptionFilter,
    SubscriptionListResponse, SubscriptionPlanRef, SubscriptionQuery, SubscriptionStatus,
};
