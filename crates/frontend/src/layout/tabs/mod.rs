//! Abas
//!
//! - `page` - TabPage, wrapper do conteúdo de uma aba
//! - `registry` - mapeamento tab.key → View
//! - `tab_labels` - títulos das abas

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
