//! Gateway Abstraction
//!
//! The remote order API as an injected trait, plus the error type every
//! implementation reports through.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{OrderPayload, OrderRecord, UploadFile, UploadTicket};

pub const CREATE_ORDER_FALLBACK: &str = "Erro ao criar pedido.";
pub const UPLOAD_URL_FALLBACK: &str = "Erro ao obter URL de upload.";
pub const UPLOAD_FILE_FALLBACK: &str = "Erro ao enviar arquivo.";
pub const LIST_ORDERS_FALLBACK: &str = "Erro ao carregar pedidos.";

/// Failure of a single gateway call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("Falha de comunicação com a API: {0}")]
    Transport(String),
    /// Non-success status. `message` is the gateway's own text or a fixed fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Success status but the body was not what we expect.
    #[error("Resposta inválida da API: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Rejected` error from a non-success response body.
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        ApiError::Rejected {
            status,
            message: api_error_message(body, fallback),
        }
    }
}

/// The `message` field of a JSON error body, or `fallback` when the body is
/// not JSON, has no `message`, or the message is empty.
pub fn api_error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Order gateway operations. Futures are not `Send`: in the browser they
/// wrap `fetch` promises.
#[async_trait(?Send)]
pub trait OrderApi {
    /// `POST /pedidos`
    async fn create_order(&self, payload: &OrderPayload) -> Result<(), ApiError>;

    /// `POST /upload-url` with `{"fileName": ...}`
    async fn request_upload_url(&self, file_name: &str) -> Result<UploadTicket, ApiError>;

    /// `PUT <uploadURL>` with the raw file bytes
    async fn upload_file(&self, ticket: &UploadTicket, file: &UploadFile) -> Result<(), ApiError>;

    /// `GET /pedidos`
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError>;
}
