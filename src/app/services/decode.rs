//! # Payload Decoder
//!
//! The agent service replies with YAML, not JSON. Decoding produces a
//! dynamically-shaped [`serde_yaml::Value`] and enforces no schema: any
//! well-formed document decodes, whichever keys it carries. Malformed
//! markup is the only failure.

use anyhow::{Context, Result};
use serde_yaml::Value;

/// Parse a response body into an untyped YAML document
pub fn decode_document(raw: &str) -> Result<Value> {
    serde_yaml::from_str(raw).context("failed to parse agent response as YAML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_should_accept_well_formed_mapping() {
        let doc = decode_document("name: Zomato\nproducts:\n  - Food delivery\n  - Dining\n")
            .unwrap();
        assert_eq!(doc.get("name").and_then(Value::as_str), Some("Zomato"));
        let products = doc.get("products").and_then(Value::as_sequence).unwrap();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn decode_should_accept_any_keys() {
        // No schema at decode time: unexpected shapes still decode
        let doc = decode_document("exists: true\ndomains:\n  finance:\n    summary: n/a\n");
        assert!(doc.is_ok());
    }

    #[test]
    fn decode_should_fail_on_inconsistent_indentation() {
        let result = decode_document("name: Zomato\n   products:\n - a\n");
        assert!(result.is_err());
    }

    #[test]
    fn decode_should_fail_on_unterminated_flow_sequence() {
        let result = decode_document("products: [Food delivery, Dining\n");
        assert!(result.is_err());
    }

    #[test]
    fn decode_should_report_parse_context() {
        let err = decode_document("a: [b,\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse agent response"));
    }
}
