pub mod aggregate;
pub mod query;
pub mod timeline;

pub use aggregate::{
    FunnelInteraction, FunnelScreen, FunnelStatus, InteractionListResponse, InteractionMetadata,
};
pub use query::{InteractionFilter, InteractionQuery};
pub use timeline::{timeline_steps, StepState, TimelineEntry, TimelineStep};
