//! Upload Commands
//!
//! Pre-signed URL request and the raw `PUT` to object storage.

use pedidos_flows::api::{UPLOAD_FILE_FALLBACK, UPLOAD_URL_FALLBACK};
use pedidos_flows::{ApiError, UploadFile, UploadTicket};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{ensure_success, transport_error};

#[derive(Serialize)]
struct UploadUrlArgs<'a> {
    #[serde(rename = "fileName")]
    file_name: &'a str,
}

pub(super) async fn request_upload_url(client: &Client, url: &str, file_name: &str) -> Result<UploadTicket, ApiError> {
    debug!(url, file_name, "POST upload-url");
    let response = client
        .post(url)
        .json(&UploadUrlArgs { file_name })
        .send()
        .await
        .map_err(transport_error)?;
    let response = ensure_success(response, UPLOAD_URL_FALLBACK).await?;
    response
        .json::<UploadTicket>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The URL carries its own signature; no gateway headers are sent.
pub(super) async fn put_file(client: &Client, ticket: &UploadTicket, file: &UploadFile) -> Result<(), ApiError> {
    debug!(bytes = file.bytes.len(), "PUT file to pre-signed URL");
    let mut request = client.put(&ticket.upload_url).body(file.bytes.clone());
    if let Some(content_type) = &file.content_type {
        request = request.header(CONTENT_TYPE, content_type.as_str());
    }
    let response = request.send().await.map_err(transport_error)?;
    ensure_success(response, UPLOAD_FILE_FALLBACK).await?;
    Ok(())
}
