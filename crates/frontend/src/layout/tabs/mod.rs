//! Tab management
//!
//! - `page`: `TabPage` wrapper that shows or hides a tab's content
//! - `registry`: tab key → view
//! - `tab_labels`: tab key → title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, driver_detail_key, driver_orders_key, tab_label_for_key};
