//! Browser View
//!
//! `OrderView` over the live page: `window.alert`, the order `<form>` and
//! the page store.

use leptos::html;
use leptos::prelude::*;
use pedidos_flows::{OrderView, TableRow};
use tracing::warn;

use crate::store::{PageStateStoreFields, PageStore};

#[derive(Clone, Copy)]
pub struct BrowserView {
    store: PageStore,
    order_form: NodeRef<html::Form>,
}

impl BrowserView {
    pub fn new(store: PageStore, order_form: NodeRef<html::Form>) -> Self {
        Self { store, order_form }
    }
}

impl OrderView for BrowserView {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!(message, "No window to alert on");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!(error = ?e, "window.alert failed");
        }
    }

    fn reset_order_form(&self) {
        if let Some(form) = self.order_form.get_untracked() {
            form.reset();
        }
    }

    fn render_orders(&self, rows: Vec<TableRow>) {
        *self.store.rows().write() = rows;
    }
}
