//! User Flows
//!
//! Create order, upload file and list orders. Each flow runs its gateway
//! calls in sequence, reports the outcome through the view and returns it.
//! Nothing is retried; a failure ends the flow.

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::api::{ApiError, OrderApi};
use crate::models::{OrderForm, UploadFile};
use crate::payload::build_payload;
use crate::table::render_table;
use crate::view::{OrderView, FILE_UPLOADED, NO_FILE_SELECTED, ORDER_CREATED};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("{}", NO_FILE_SELECTED)]
    NoFileSelected,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Alert text for a failed gateway call
pub fn failure_alert(err: &ApiError) -> String {
    format!("Erro: {}", err)
}

fn report_failure<V: OrderView + ?Sized>(view: &V, step: &str, err: ApiError) -> FlowError {
    error!(step, error = %err, "Gateway call failed");
    view.alert(&failure_alert(&err));
    FlowError::Api(err)
}

/// Build the payload from the form and `POST` it. On success the form is
/// reset and the user notified.
#[instrument(skip_all, fields(order_id = %form.order_id))]
pub async fn submit_order<A, V>(api: &A, view: &V, form: &OrderForm) -> Result<(), FlowError>
where
    A: OrderApi + ?Sized,
    V: OrderView + ?Sized,
{
    debug!(?form, "Raw form data extracted");
    let payload = build_payload(form);
    debug!(?payload, "Payload ready for the gateway");

    if let Err(e) = api.create_order(&payload).await {
        return Err(report_failure(view, "create_order", e));
    }

    info!("Order created");
    view.reset_order_form();
    view.alert(ORDER_CREATED);
    Ok(())
}

/// Ask the gateway for a pre-signed URL, then `PUT` the file there.
/// Without a file nothing is sent.
#[instrument(skip_all, fields(file_name = file.map(|f| f.name.as_str()).unwrap_or_default()))]
pub async fn upload_file<A, V>(api: &A, view: &V, file: Option<&UploadFile>) -> Result<(), FlowError>
where
    A: OrderApi + ?Sized,
    V: OrderView + ?Sized,
{
    let Some(file) = file else {
        warn!("Upload requested without a file");
        view.alert(NO_FILE_SELECTED);
        return Err(FlowError::NoFileSelected);
    };

    let ticket = match api.request_upload_url(&file.name).await {
        Ok(ticket) => ticket,
        Err(e) => return Err(report_failure(view, "request_upload_url", e)),
    };
    debug!(bytes = file.bytes.len(), "Upload URL received");

    if let Err(e) = api.upload_file(&ticket, file).await {
        return Err(report_failure(view, "upload_file", e));
    }

    info!(bytes = file.bytes.len(), "File uploaded");
    view.alert(FILE_UPLOADED);
    Ok(())
}

/// Fetch every order and replace the table body. Returns the number of
/// orders received. On failure the table is left as it was.
#[instrument(skip_all)]
pub async fn list_orders<A, V>(api: &A, view: &V) -> Result<usize, FlowError>
where
    A: OrderApi + ?Sized,
    V: OrderView + ?Sized,
{
    let records = match api.list_orders().await {
        Ok(records) => records,
        Err(e) => return Err(report_failure(view, "list_orders", e)),
    };

    let count = records.len();
    info!(count, "Orders loaded");
    view.render_orders(render_table(records));
    Ok(count)
}
