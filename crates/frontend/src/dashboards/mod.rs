pub mod d400_overview;
pub mod d401_funnel_analytics;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_funnel_analytics::ui::FunnelAnalyticsDashboard;
