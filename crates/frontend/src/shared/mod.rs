pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod export;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
