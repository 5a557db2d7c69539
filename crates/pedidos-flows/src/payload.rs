//! Payload Construction
//!
//! Turns the raw order form into the JSON body the gateway expects.

use crate::models::{OrderForm, OrderItem, OrderPayload};

/// Parse a quantity the way a browser `parseInt(text, 10)` does: skip
/// leading whitespace, accept one sign, keep the longest run of digits.
/// Returns `None` for not-a-number, including values outside `i64`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Build the single-item order body from the form.
pub fn build_payload(form: &OrderForm) -> OrderPayload {
    OrderPayload {
        order_id: form.order_id.clone(),
        customer_id: form.customer_id.clone(),
        items: vec![OrderItem {
            product: form.product.clone(),
            quantity: parse_quantity(&form.quantity),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(quantity: &str) -> OrderForm {
        OrderForm {
            order_id: "PED-001".to_string(),
            customer_id: "CLI-42".to_string(),
            product: "Notebook".to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_quantity("5"), Some(5));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity("-4"), Some(-4));
        assert_eq!(parse_quantity("+7"), Some(7));
    }

    #[test]
    fn test_parse_prefix_like_parse_int() {
        assert_eq!(parse_quantity("  12"), Some(12));
        assert_eq!(parse_quantity("12abc"), Some(12));
        assert_eq!(parse_quantity("3.9"), Some(3));
        assert_eq!(parse_quantity("007"), Some(7));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
        assert_eq!(parse_quantity("-"), None);
        assert_eq!(parse_quantity("x5"), None);
        assert_eq!(parse_quantity("99999999999999999999"), None);
    }

    #[test]
    fn test_build_payload_shape() {
        let payload = build_payload(&form("5"));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "pedidoId": "PED-001",
                "clienteId": "CLI-42",
                "itens": [{ "produto": "Notebook", "quantidade": 5 }]
            })
        );
    }

    #[test]
    fn test_build_payload_forwards_nan_as_null() {
        let payload = build_payload(&form("abc"));
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["itens"][0]["quantidade"].is_null());
    }
}
