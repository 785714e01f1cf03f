pub mod charts;
pub mod dto;

pub use dto::*;
