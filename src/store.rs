//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use pedidos_flows::TableRow;
use reactive_stores::Store;

/// Everything the page renders that outlives a single handler
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Current orders table body
    pub rows: Vec<TableRow>,
    /// A create-order request is in flight
    pub submitting: bool,
    /// An upload (either step) is in flight
    pub uploading: bool,
    /// A list request is in flight
    pub loading_orders: bool,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

