pub mod aggregate;

pub use aggregate::{BillingCycle, Plan, PlanDto};
