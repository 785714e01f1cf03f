pub mod aggregate;

pub use aggregate::{
    ActiveSubscriptionSummary, CreateCustomerDto, Customer, CustomerListResponse, CustomerQuery,
};
