pub mod a001_customer;
pub mod a002_plan;
pub mod a003_subscription;
pub mod a004_payment;
pub mod a005_appointment;
pub mod a006_funnel_interaction;
