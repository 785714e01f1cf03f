pub mod bulk;
pub mod config;
pub mod csv;
pub mod masks;
pub mod money;
pub mod number_parse;
pub mod pagination;
