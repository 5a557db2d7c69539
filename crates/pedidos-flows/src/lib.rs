//! Pedidos Flows
//!
//! Browser-independent core of the order portal:
//! - models: wire types for the order gateway
//! - payload: form text to order body, including the quantity parse
//! - api: the gateway as an injected trait, with its error type
//! - view: what the flows need from the page
//! - table: sort policy and cell formatting for the order list
//! - flows: submit order, upload file, list orders

pub mod api;
pub mod flows;
pub mod models;
pub mod payload;
pub mod table;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{api_error_message, ApiError, OrderApi};
pub use flows::{failure_alert, list_orders, submit_order, upload_file, FlowError};
pub use models::{OrderForm, OrderItem, OrderPayload, OrderRecord, UploadFile, UploadTicket};
pub use payload::{build_payload, parse_quantity};
pub use table::{render_table, OrderRow, TableRow, COLUMNS};
pub use view::OrderView;
