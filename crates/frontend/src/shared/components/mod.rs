pub mod date_input;
pub mod error_box;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
pub mod table_checkbox;

pub use date_input::DateInput;
pub use error_box::ErrorBox;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatFormat, StatTone};
pub use status_badge::StatusBadge;
pub use table_checkbox::{TableCheckbox, TableHeaderCheckbox};
