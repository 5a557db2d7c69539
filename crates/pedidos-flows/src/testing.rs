//! Test doubles for the gateway and the page.
//!
//! `MockApi` records every call and answers from preset results.
//! `RecordingView` keeps what the flows showed the user.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ApiError, OrderApi};
use crate::models::{OrderPayload, OrderRecord, UploadFile, UploadTicket};
use crate::table::TableRow;
use crate::view::OrderView;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CreateOrder(OrderPayload),
    RequestUploadUrl(String),
    UploadFile { url: String, file_name: String, bytes: usize },
    ListOrders,
}

pub struct MockApi {
    pub(crate) calls: RefCell<Vec<ApiCall>>,
    pub create_result: Result<(), ApiError>,
    pub ticket_result: Result<UploadTicket, ApiError>,
    pub upload_result: Result<(), ApiError>,
    pub list_result: Result<Vec<OrderRecord>, ApiError>,
}

impl MockApi {
    pub const TICKET_URL: &'static str = "https://pedidos-uploads.s3.amazonaws.com/nota.pdf?X-Amz-Signature=abc";

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            create_result: Ok(()),
            ticket_result: Ok(UploadTicket { upload_url: Self::TICKET_URL.to_string() }),
            upload_result: Ok(()),
            list_result: Ok(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl OrderApi for MockApi {
    async fn create_order(&self, payload: &OrderPayload) -> Result<(), ApiError> {
        self.record(ApiCall::CreateOrder(payload.clone()));
        self.create_result.clone()
    }

    async fn request_upload_url(&self, file_name: &str) -> Result<UploadTicket, ApiError> {
        self.record(ApiCall::RequestUploadUrl(file_name.to_string()));
        self.ticket_result.clone()
    }

    async fn upload_file(&self, ticket: &UploadTicket, file: &UploadFile) -> Result<(), ApiError> {
        self.record(ApiCall::UploadFile {
            url: ticket.upload_url.clone(),
            file_name: file.name.clone(),
            bytes: file.bytes.len(),
        });
        self.upload_result.clone()
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        self.record(ApiCall::ListOrders);
        self.list_result.clone()
    }
}

#[derive(Default)]
pub struct RecordingView {
    alerts: RefCell<Vec<String>>,
    resets: Cell<u32>,
    rendered: RefCell<Option<Vec<TableRow>>>,
}

impl RecordingView {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }

    /// Last rendered table body, `None` if never rendered
    pub fn rendered(&self) -> Option<Vec<TableRow>> {
        self.rendered.borrow().clone()
    }
}

impl OrderView for RecordingView {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reset_order_form(&self) {
        self.resets.set(self.resets.get() + 1);
    }

    fn render_orders(&self, rows: Vec<TableRow>) {
        *self.rendered.borrow_mut() = Some(rows);
    }
}
