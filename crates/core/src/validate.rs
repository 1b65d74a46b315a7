//! Payload validation gate.
//!
//! Checks run against the raw JSON body so that wrong-typed fields are
//! reported as field violations rather than body parse failures. All rules
//! are evaluated; callers get every violation, not just the first.

use serde_json::Value;

use crate::product::ProductFields;

fn text_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Validate a create/update payload.
///
/// Returns the normalized fields (trimmed text, lowercased category) on
/// success, or the full list of violation messages in check order.
pub fn validate(payload: &Value) -> Result<ProductFields, Vec<String>> {
    let mut errors = Vec::new();

    let name = text_field(payload, "name");
    if name.is_none() {
        errors.push("name is required and must be a non-empty string".to_string());
    }

    let description = text_field(payload, "description");
    if description.is_none() {
        errors.push("description is required and must be a non-empty string".to_string());
    }

    let price = payload
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite() && *p >= 0.0);
    if price.is_none() {
        errors.push("price is required and must be a non-negative number".to_string());
    }

    let category = text_field(payload, "category");
    if category.is_none() {
        errors.push("category is required and must be a non-empty string".to_string());
    }

    let in_stock = payload.get("inStock").and_then(Value::as_bool);
    if in_stock.is_none() {
        errors.push("inStock is required and must be a boolean".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Somes past this point; normalization happens here, not earlier.
    Ok(ProductFields {
        name: name.unwrap_or_default().to_string(),
        description: description.unwrap_or_default().to_string(),
        price: price.unwrap_or_default(),
        category: category.unwrap_or_default().to_lowercase(),
        in_stock: in_stock.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "  Laptop  ",
            "description": "A fast laptop",
            "price": 1200,
            "category": "Electronics",
            "inStock": true,
        })
    }

    #[test]
    fn valid_payload_is_normalized() {
        let fields = validate(&valid_payload()).unwrap();
        assert_eq!(fields.name, "Laptop");
        assert_eq!(fields.description, "A fast laptop");
        assert_eq!(fields.price, 1200.0);
        assert_eq!(fields.category, "electronics");
        assert!(fields.in_stock);
    }

    #[test]
    fn reports_every_violated_rule() {
        // Missing name and price, everything else valid: exactly two
        // messages, in check order.
        let payload = json!({
            "description": "desc",
            "category": "misc",
            "inStock": false,
        });
        let errors = validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("name"));
        assert!(errors[1].contains("price"));
    }

    #[test]
    fn empty_payload_violates_all_five_rules() {
        let errors = validate(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let mut payload = valid_payload();
        payload["name"] = json!("   ");
        let errors = validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn wrong_typed_fields_are_rejected() {
        let payload = json!({
            "name": 42,
            "description": ["not", "text"],
            "price": "12.5",
            "category": null,
            "inStock": "true",
        });
        let errors = validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut payload = valid_payload();
        payload["price"] = json!(-1);
        let errors = validate(&payload).unwrap_err();
        assert_eq!(errors, vec!["price is required and must be a non-negative number"]);
    }

    #[test]
    fn zero_price_is_accepted() {
        let mut payload = valid_payload();
        payload["price"] = json!(0);
        assert_eq!(validate(&payload).unwrap().price, 0.0);
    }

    #[test]
    fn in_stock_must_be_strictly_boolean() {
        // Truthy non-booleans do not coerce.
        for bad in [json!(1), json!("true"), json!(null)] {
            let mut payload = valid_payload();
            payload["inStock"] = bad;
            let errors = validate(&payload).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("inStock"));
        }
    }
}
