//! UI Components
//!
//! Leptos components for the three order flows, plus the recent log lines.

mod log_panel;
mod order_form;
mod orders_table;
mod upload_form;

pub use log_panel::LogPanel;
pub use order_form::OrderForm;
pub use orders_table::OrdersTable;
pub use upload_form::UploadForm;
