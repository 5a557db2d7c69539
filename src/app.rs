//! Pedidos Frontend App
//!
//! Main application component: order form, file upload and order list.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::commands::HttpOrderApi;
use crate::components::{LogPanel, OrderForm, OrdersTable, UploadForm};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::PageState;
use crate::view::BrowserView;

#[component]
pub fn App(config: ApiConfig, logs: Option<LogBuffer>) -> impl IntoView {
    let store = Store::new(PageState::default());
    let order_form = NodeRef::<html::Form>::new();
    let page_view = BrowserView::new(store, order_form);

    tracing::info!(base_url = %config.base_url, "Order gateway configured");

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(HttpOrderApi::new(config), page_view));
    if let Some(logs) = logs {
        provide_context(logs);
    }

    view! {
        <main class="pedidos-layout">
            <h1>"Pedidos"</h1>
            <OrderForm form_ref=order_form />
            <UploadForm />
            <OrdersTable />
            <LogPanel />
        </main>
    }
}
