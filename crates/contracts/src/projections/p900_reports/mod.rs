pub mod dto;

pub use dto::{ReportKind, ReportQuery, ReportRows};
