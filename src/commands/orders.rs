//! Order Commands
//!
//! `POST /pedidos` and `GET /pedidos`.

use pedidos_flows::api::{CREATE_ORDER_FALLBACK, LIST_ORDERS_FALLBACK};
use pedidos_flows::{ApiError, OrderPayload, OrderRecord};
use reqwest::Client;
use tracing::debug;

use super::{ensure_success, transport_error};

pub(super) async fn create_order(client: &Client, url: &str, payload: &OrderPayload) -> Result<(), ApiError> {
    debug!(url, "POST order");
    let response = client.post(url).json(payload).send().await.map_err(transport_error)?;
    ensure_success(response, CREATE_ORDER_FALLBACK).await?;
    Ok(())
}

pub(super) async fn list_orders(client: &Client, url: &str) -> Result<Vec<OrderRecord>, ApiError> {
    debug!(url, "GET orders");
    let response = client.get(url).send().await.map_err(transport_error)?;
    let response = ensure_success(response, LIST_ORDERS_FALLBACK).await?;
    response
        .json::<Vec<OrderRecord>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
