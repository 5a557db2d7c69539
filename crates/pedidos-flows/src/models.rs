//! Order Models
//!
//! Data structures exchanged with the order gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw text of the new-order form, one field per input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub order_id: String,
    pub customer_id: String,
    pub product: String,
    pub quantity: String,
}

/// Body of `POST /pedidos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "pedidoId")]
    pub order_id: String,
    #[serde(rename = "clienteId")]
    pub customer_id: String,
    #[serde(rename = "itens")]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "produto")]
    pub product: String,
    /// `None` when the form text is not a number; sent as `null`.
    #[serde(rename = "quantidade")]
    pub quantity: Option<i64>,
}

/// Pre-signed upload target returned by `POST /upload-url`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTicket {
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
}

/// A file picked in the browser, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One element of `GET /pedidos`. Every field is optional; the gateway
/// has shipped both English and Portuguese keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireOrderRecord")]
pub struct OrderRecord {
    pub order_id: Option<Value>,
    pub customer_id: Option<Value>,
    pub status: Option<Value>,
    pub origin: Option<Value>,
    pub processed_timestamp: Option<Value>,
}

/// Both key styles side by side. The English key wins when both are
/// present and non-null.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOrderRecord {
    order_id: Option<Value>,
    pedido_id: Option<Value>,
    customer_id: Option<Value>,
    cliente_id: Option<Value>,
    status: Option<Value>,
    origin: Option<Value>,
    origem: Option<Value>,
    processed_timestamp: Option<Value>,
    timestamp_processamento: Option<Value>,
}

impl From<WireOrderRecord> for OrderRecord {
    fn from(wire: WireOrderRecord) -> Self {
        Self {
            order_id: wire.order_id.or(wire.pedido_id),
            customer_id: wire.customer_id.or(wire.cliente_id),
            status: wire.status,
            origin: wire.origin.or(wire.origem),
            processed_timestamp: wire.processed_timestamp.or(wire.timestamp_processamento),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_keys() {
        let payload = OrderPayload {
            order_id: "P-1".to_string(),
            customer_id: "C-9".to_string(),
            items: vec![OrderItem { product: "Caneta".to_string(), quantity: None }],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "pedidoId": "P-1",
                "clienteId": "C-9",
                "itens": [{ "produto": "Caneta", "quantidade": null }]
            })
        );
    }

    #[test]
    fn test_upload_ticket_key() {
        let ticket: UploadTicket =
            serde_json::from_str(r#"{"uploadURL":"https://bucket.s3.amazonaws.com/a.pdf?X-Amz-Signature=1"}"#).unwrap();
        assert_eq!(ticket.upload_url, "https://bucket.s3.amazonaws.com/a.pdf?X-Amz-Signature=1");
    }

    #[test]
    fn test_record_accepts_both_key_styles() {
        let english: OrderRecord = serde_json::from_value(json!({
            "orderId": "A",
            "customerId": "C",
            "status": "PROCESSADO",
            "origin": "web",
            "processedTimestamp": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let portuguese: OrderRecord = serde_json::from_value(json!({
            "pedidoId": "A",
            "clienteId": "C",
            "status": "PROCESSADO",
            "origem": "web",
            "timestampProcessamento": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(english, portuguese);
    }

    #[test]
    fn test_record_with_both_key_styles() {
        let record: OrderRecord = serde_json::from_value(json!({
            "orderId": "A",
            "pedidoId": "B",
            "customerId": null,
            "clienteId": "C",
            "origem": "web",
            "timestampProcessamento": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.order_id, Some(json!("A")));
        assert_eq!(record.customer_id, Some(json!("C")));
        assert_eq!(record.origin, Some(json!("web")));
        assert_eq!(record.processed_timestamp, Some(json!("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn test_record_missing_and_null_fields() {
        let record: OrderRecord = serde_json::from_value(json!({ "orderId": "A", "status": null })).unwrap();
        assert_eq!(record.order_id, Some(json!("A")));
        assert_eq!(record.status, None);
        assert_eq!(record.processed_timestamp, None);
    }
}
