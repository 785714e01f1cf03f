pub mod api;
pub mod bell;

pub use bell::NotificationBell;
