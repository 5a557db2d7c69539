//! Gateway Command Wrappers
//!
//! Frontend bindings to the order gateway, organized by route.
//! `HttpOrderApi` is the browser implementation of [`OrderApi`].

mod files;
mod orders;
mod upload;


use async_trait::async_trait;
use pedidos_flows::{ApiError, OrderApi, OrderPayload, OrderRecord, UploadFile, UploadTicket};

use crate::config::ApiConfig;

pub use files::read_selected_file;

pub const ORDERS_ROUTE: &str = "/pedidos";
pub const UPLOAD_URL_ROUTE: &str = "/upload-url";

/// reqwest client bound to one gateway. On wasm32 requests go through `fetch`.
#[derive(Clone)]
pub struct HttpOrderApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpOrderApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Pass successful responses through; turn anything else into
/// `ApiError::Rejected` with the body's `message` or `fallback`.
async fn ensure_success(response: reqwest::Response, fallback: &str) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::rejected(status.as_u16(), &body, fallback))
}

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn create_order(&self, payload: &OrderPayload) -> Result<(), ApiError> {
        orders::create_order(&self.client, &self.config.endpoint(ORDERS_ROUTE), payload).await
    }

    async fn request_upload_url(&self, file_name: &str) -> Result<UploadTicket, ApiError> {
        upload::request_upload_url(&self.client, &self.config.endpoint(UPLOAD_URL_ROUTE), file_name).await
    }

    async fn upload_file(&self, ticket: &UploadTicket, file: &UploadFile) -> Result<(), ApiError> {
        upload::put_file(&self.client, ticket, file).await
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        orders::list_orders(&self.client, &self.config.endpoint(ORDERS_ROUTE)).await
    }
}
