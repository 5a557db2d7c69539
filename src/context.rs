//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpOrderApi;
use crate::view::BrowserView;

/// Gateway client and page view, provided once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    /// reqwest futures are not `Send` in the browser, so the client lives in local storage
    api: StoredValue<HttpOrderApi, LocalStorage>,
    /// What the flows report to
    pub view: BrowserView,
}

impl AppContext {
    pub fn new(api: HttpOrderApi, view: BrowserView) -> Self {
        Self {
            api: StoredValue::new_local(api),
            view,
        }
    }

    /// Handle to the gateway client for one flow
    pub fn api(&self) -> HttpOrderApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
