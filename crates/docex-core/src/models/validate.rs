//! Validation gate shared by both extraction paths.
//!
//! Candidates arrive as loose JSON (from the rule cascade or from a generative
//! model) and leave as an [`ExtractionRecord`] or a [`SchemaViolation`].
//! Unknown keys are ignored. Validating the JSON projection of an accepted
//! record yields the same record.

use serde_json::{Map, Value};

use crate::error::SchemaViolation;
use crate::extract::rules::dates::{parse_date, ISO_FORMAT};

use super::record::{ExtractionRecord, LineItem, DEFAULT_CURRENCY};

/// Result type for validation.
pub type Result<T> = std::result::Result<T, SchemaViolation>;

/// Keys accepted for each record field, in lookup order.
const DOCUMENT_NUMBER_KEYS: &[&str] = &["document_number", "invoice_number"];
const DOCUMENT_DATE_KEYS: &[&str] = &["document_date", "invoice_date"];

/// Validate a candidate and build the final record.
pub fn validate(candidate: &Value) -> Result<ExtractionRecord> {
    let object = candidate.as_object().ok_or(SchemaViolation::NotAnObject)?;

    let doc_type = match lookup(object, &["doc_type"]) {
        None => return Err(SchemaViolation::MissingField("doc_type".to_string())),
        Some(value) => text_field("doc_type", value)?
            .map(|s| s.to_lowercase())
            .ok_or_else(|| SchemaViolation::MissingField("doc_type".to_string()))?,
    };

    let vendor = optional_text(object, "vendor", &["vendor"])?;
    let document_number = optional_text(object, "document_number", DOCUMENT_NUMBER_KEYS)?;
    let document_date = optional_text(object, "document_date", DOCUMENT_DATE_KEYS)?
        .map(|date| iso_date(&date))
        .transpose()?;

    let total_amount = match lookup(object, &["total_amount"]) {
        Some(value) => number_field("total_amount", value)?,
        None => None,
    };
    if let Some(total) = total_amount {
        if total < 0.0 {
            return Err(SchemaViolation::InvalidField {
                field: "total_amount".to_string(),
                reason: format!("must not be negative, got {}", total),
            });
        }
    }

    let currency = match optional_text(object, "currency", &["currency"])? {
        Some(code) => currency_code(&code)?,
        None => DEFAULT_CURRENCY.to_string(),
    };

    let line_items = match lookup(object, &["line_items"]) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| validate_line_item(index, item))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(SchemaViolation::InvalidField {
                field: "line_items".to_string(),
                reason: format!("expected an array, got {}", kind(other)),
            });
        }
        None => Vec::new(),
    };

    Ok(ExtractionRecord {
        doc_type,
        vendor,
        document_number,
        document_date,
        total_amount,
        currency,
        line_items,
    })
}

fn validate_line_item(index: usize, item: &Value) -> Result<LineItem> {
    let object = item.as_object().ok_or_else(|| SchemaViolation::InvalidLineItem {
        index,
        reason: format!("expected an object, got {}", kind(item)),
    })?;

    let wrap = |violation: SchemaViolation| SchemaViolation::InvalidLineItem {
        index,
        reason: violation.to_string(),
    };

    let description = lookup(object, &["description"])
        .map(|value| text_field("description", value))
        .transpose()
        .map_err(wrap)?
        .flatten()
        .ok_or_else(|| SchemaViolation::InvalidLineItem {
            index,
            reason: "missing description".to_string(),
        })?;

    let mut numbers = [None; 3];
    for (slot, field) in numbers.iter_mut().zip(["quantity", "unit_price", "total"]) {
        if let Some(value) = lookup(object, &[field]) {
            *slot = number_field(field, value).map_err(wrap)?;
        }
    }
    let [quantity, unit_price, total] = numbers;

    Ok(LineItem {
        description,
        quantity,
        unit_price,
        total,
    })
}

/// Rewrite a recognized date as `YYYY-MM-DD`.
fn iso_date(raw: &str) -> Result<String> {
    parse_date(raw)
        .map(|date| date.format(ISO_FORMAT).to_string())
        .ok_or_else(|| SchemaViolation::InvalidField {
            field: "document_date".to_string(),
            reason: format!("'{}' is not a recognized date", raw),
        })
}

/// Uppercased three-letter currency code.
fn currency_code(raw: &str) -> Result<String> {
    let code = raw.to_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(SchemaViolation::InvalidField {
            field: "currency".to_string(),
            reason: format!("expected a three-letter code, got '{}'", raw),
        })
    }
}

/// First present, non-null value among `keys`.
fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn optional_text(
    object: &Map<String, Value>,
    field: &str,
    keys: &[&str],
) -> Result<Option<String>> {
    match lookup(object, keys) {
        Some(value) => text_field(field, value),
        None => Ok(None),
    }
}

/// Trimmed text; blank strings become `None`. Numbers are kept in their
/// textual form since models often emit bare numeric identifiers.
fn text_field(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(SchemaViolation::InvalidField {
            field: field.to_string(),
            reason: format!("expected text, got {}", kind(other)),
        }),
    }
}

/// Coerce a JSON number or numeric string to a finite float.
fn number_field(field: &str, value: &Value) -> Result<Option<f64>> {
    let invalid = |reason: String| SchemaViolation::InvalidField {
        field: field.to_string(),
        reason,
    };

    let number = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(format!("{} is not representable as a float", n)))?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| invalid(format!("'{}' is not a number", trimmed)))?
        }
        other => return Err(invalid(format!("expected a number, got {}", kind(other)))),
    };

    if !number.is_finite() {
        return Err(invalid(format!("{} is not finite", number)));
    }
    Ok(Some(number))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_valid_candidate() {
        let record = validate(&json!({
            "doc_type": "invoice",
            "vendor": "Test Corp",
            "invoice_number": "INV-001",
            "invoice_date": "2024-01-01",
            "total_amount": 100.0,
            "currency": "usd",
            "line_items": []
        }))
        .unwrap();

        assert_eq!(record.doc_type, "invoice");
        assert_eq!(record.vendor.as_deref(), Some("Test Corp"));
        assert_eq!(record.document_number.as_deref(), Some("INV-001"));
        assert_eq!(record.document_date.as_deref(), Some("2024-01-01"));
        assert_eq!(record.total_amount, Some(100.0));
        assert_eq!(record.currency, "USD");
    }

    #[test]
    fn test_empty_doc_type_rejected() {
        let err = validate(&json!({"doc_type": "   ", "vendor": "Test Corp"})).unwrap_err();
        assert_eq!(err, SchemaViolation::MissingField("doc_type".to_string()));

        let err = validate(&json!({"vendor": "Test Corp"})).unwrap_err();
        assert_eq!(err, SchemaViolation::MissingField("doc_type".to_string()));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(validate(&json!([1, 2])).unwrap_err(), SchemaViolation::NotAnObject);
    }

    #[test]
    fn test_doc_type_trimmed_and_lowercased() {
        let record = validate(&json!({"doc_type": "  Receipt "})).unwrap();
        assert_eq!(record.doc_type, "receipt");
    }

    #[test]
    fn test_currency_defaults() {
        let record = validate(&json!({"doc_type": "other", "currency": null})).unwrap();
        assert_eq!(record.currency, "USD");

        let record = validate(&json!({"doc_type": "other"})).unwrap();
        assert_eq!(record.currency, "USD");
    }

    #[test]
    fn test_currency_must_be_three_letter_code() {
        for currency in ["US Dollars", "$", "eu", "E1R"] {
            let err = validate(&json!({"doc_type": "invoice", "currency": currency})).unwrap_err();
            assert!(
                matches!(err, SchemaViolation::InvalidField { ref field, .. } if field == "currency"),
                "accepted {:?}",
                currency
            );
        }

        let record = validate(&json!({"doc_type": "invoice", "currency": " gbp "})).unwrap();
        assert_eq!(record.currency, "GBP");
    }

    #[test]
    fn test_dates_normalized_to_iso() {
        for (raw, iso) in [
            ("2024-01-15", "2024-01-15"),
            ("01/15/2024", "2024-01-15"),
            ("15-01-2024", "2024-01-15"),
            ("Jan 15, 2024", "2024-01-15"),
            ("January 15, 2024", "2024-01-15"),
            ("15 January 2024", "2024-01-15"),
        ] {
            let record = validate(&json!({"doc_type": "invoice", "invoice_date": raw})).unwrap();
            assert_eq!(record.document_date.as_deref(), Some(iso), "input {:?}", raw);
        }
    }

    #[test]
    fn test_unrecognized_date_rejected() {
        for raw in ["soon", "2024-02-30", "15.01.2024"] {
            let err = validate(&json!({"doc_type": "invoice", "document_date": raw})).unwrap_err();
            assert!(
                matches!(err, SchemaViolation::InvalidField { ref field, .. } if field == "document_date"),
                "accepted {:?}",
                raw
            );
        }

        let record = validate(&json!({"doc_type": "invoice", "document_date": "  "})).unwrap();
        assert_eq!(record.document_date, None);
    }

    #[test]
    fn test_numeric_strings_coerced() {
        let record = validate(&json!({"doc_type": "receipt", "total_amount": " 42.50 "})).unwrap();
        assert_eq!(record.total_amount, Some(42.5));
    }

    #[test]
    fn test_non_numeric_total_rejected() {
        let err = validate(&json!({"doc_type": "receipt", "total_amount": "lots"})).unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidField { ref field, .. } if field == "total_amount"));

        let err = validate(&json!({"doc_type": "receipt", "total_amount": true})).unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidField { .. }));
    }

    #[test]
    fn test_negative_total_rejected() {
        let err = validate(&json!({"doc_type": "invoice", "total_amount": -3})).unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidField { .. }));
    }

    #[test]
    fn test_line_items_validated_elementwise() {
        let record = validate(&json!({
            "doc_type": "invoice",
            "line_items": [
                {"description": "Widget", "quantity": 2, "unit_price": "5.00", "total": 10},
                {"description": "Gadget"}
            ]
        }))
        .unwrap();

        assert_eq!(
            record.line_items,
            vec![
                LineItem {
                    description: "Widget".to_string(),
                    quantity: Some(2.0),
                    unit_price: Some(5.0),
                    total: Some(10.0),
                },
                LineItem {
                    description: "Gadget".to_string(),
                    quantity: None,
                    unit_price: None,
                    total: None,
                },
            ]
        );
    }

    #[test]
    fn test_line_item_without_description_rejected() {
        let err = validate(&json!({
            "doc_type": "invoice",
            "line_items": [{"description": "ok"}, {"quantity": 1}]
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidLineItem { index: 1, .. }));

        let err = validate(&json!({
            "doc_type": "invoice",
            "line_items": [{"description": "Widget", "total": "n/a"}]
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidLineItem { index: 0, .. }));
    }

    #[test]
    fn test_line_items_must_be_array() {
        let err = validate(&json!({"doc_type": "invoice", "line_items": "none"})).unwrap_err();
        assert!(matches!(err, SchemaViolation::InvalidField { ref field, .. } if field == "line_items"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record = validate(&json!({"doc_type": "contract", "confidence": 0.9, "notes": [1]})).unwrap();
        assert_eq!(record.doc_type, "contract");
    }

    #[test]
    fn test_numeric_identifier_kept_as_text() {
        let record = validate(&json!({"doc_type": "invoice", "invoice_number": 12345})).unwrap();
        assert_eq!(record.document_number.as_deref(), Some("12345"));
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let first = validate(&json!({
            "doc_type": " Invoice ",
            "vendor": "  Acme  ",
            "invoice_number": 991,
            "invoice_date": "2024-03-01",
            "total_amount": "1200.5",
            "currency": "eur",
            "line_items": [{"description": " Hours ", "quantity": "3"}],
            "extra": true
        }))
        .unwrap();

        let projected = serde_json::to_value(&first).unwrap();
        let second = validate(&projected).unwrap();
        assert_eq!(first, second);
    }
}
