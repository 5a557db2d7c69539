//! Orders Table
//!
//! Sorting and cell formatting for the order list.
//!
//! Sort policy: newest `processedTimestamp` first. A record whose timestamp
//! is missing or cannot be parsed sorts as if processed at the Unix epoch,
//! i.e. after every dated record. Ties keep the order the gateway returned.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::OrderRecord;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_ORDERS_FOUND: &str = "Nenhum pedido encontrado.";
pub const COLUMNS: [&str; 5] = ["Pedido", "Cliente", "Status", "Origem", "Processado em"];

/// Sort key used for records without a usable timestamp
pub const MISSING_TIMESTAMP_MILLIS: i64 = 0;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Display cells of one order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_id: String,
    pub status: String,
    pub origin: String,
    pub processed_at: String,
}

impl OrderRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            self.order_id.as_str(),
            self.customer_id.as_str(),
            self.status.as_str(),
            self.origin.as_str(),
            self.processed_at.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Order(OrderRow),
    /// Full-width message row
    Placeholder(String),
}

/// Parse a timestamp value into milliseconds since the epoch.
/// Accepts epoch milliseconds, RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` or
/// `YYYY-MM-DD HH:MM:SS` (UTC) and plain `YYYY-MM-DD` dates.
pub fn timestamp_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_timestamp(s).map(|dt| dt.timestamp_millis()),
        _ => None,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn sort_key(record: &OrderRecord) -> i64 {
    record
        .processed_timestamp
        .as_ref()
        .and_then(timestamp_millis)
        .unwrap_or(MISSING_TIMESTAMP_MILLIS)
}

/// Newest first; stable.
pub fn sort_by_timestamp_desc(records: &mut [OrderRecord]) {
    records.sort_by_key(|record| Reverse(sort_key(record)));
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) if s.is_empty() => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn timestamp_text(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    timestamp_millis(value)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| cell_text(Some(value)))
}

impl From<&OrderRecord> for OrderRow {
    fn from(record: &OrderRecord) -> Self {
        Self {
            order_id: cell_text(record.order_id.as_ref()),
            customer_id: cell_text(record.customer_id.as_ref()),
            status: cell_text(record.status.as_ref()),
            origin: cell_text(record.origin.as_ref()),
            processed_at: timestamp_text(record.processed_timestamp.as_ref()),
        }
    }
}

/// Rows for the table body: sorted orders, or one placeholder when empty.
pub fn render_table(mut records: Vec<OrderRecord>) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::Placeholder(NO_ORDERS_FOUND.to_string())];
    }
    sort_by_timestamp_desc(&mut records);
    records.iter().map(|r| TableRow::Order(OrderRow::from(r))).collect()
}
