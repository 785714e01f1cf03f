pub mod d400_overview;
pub mod d401_funnel_analytics;
