pub mod dto;

pub use dto::{DashboardStats, RecentPayment};
