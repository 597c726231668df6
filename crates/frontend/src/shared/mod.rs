pub mod assignment_store;
pub mod components;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
