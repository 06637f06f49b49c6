//! Extraction record: the typed result of either extraction path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency reported when none is detected.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A validated, structured description of a commercial document.
///
/// Records are only produced by [`validate`](super::validate::validate), so a
/// record in hand always has a non-empty `doc_type` and a currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Document label (invoice, receipt, contract, other, or a model-supplied label).
    pub doc_type: String,

    /// Issuing company name.
    pub vendor: Option<String>,

    /// Invoice/receipt/contract identifier.
    pub document_number: Option<String>,

    /// Document date, `YYYY-MM-DD` when produced by the rule cascade.
    pub document_date: Option<String>,

    /// Grand total, never negative.
    pub total_amount: Option<f64>,

    /// Three-letter currency code.
    pub currency: String,

    /// Line items in document order.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// A single line item on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description.
    pub description: String,

    /// Quantity.
    pub quantity: Option<f64>,

    /// Price per unit.
    pub unit_price: Option<f64>,

    /// Line total.
    pub total: Option<f64>,
}

/// Document labels the rule cascade can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// Invoice (bill for goods or services).
    Invoice,
    /// Receipt (proof of payment).
    Receipt,
    /// Contract or agreement.
    Contract,
    /// Anything else.
    Other,
}

impl DocType {
    /// Label used in the record's `doc_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Invoice => "invoice",
            DocType::Receipt => "receipt",
            DocType::Contract => "contract",
            DocType::Other => "other",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExtractionRecord {
    /// The record the rule cascade degrades to when nothing can be extracted.
    pub fn fallback() -> Self {
        Self {
            doc_type: DocType::Other.as_str().to_string(),
            vendor: None,
            document_number: None,
            document_date: None,
            total_amount: None,
            currency: DEFAULT_CURRENCY.to_string(),
            line_items: Vec::new(),
        }
    }

    /// Names of optional fields that were not located.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.vendor.is_none() {
            missing.push("vendor");
        }
        if self.document_number.is_none() {
            missing.push("document_number");
        }
        if self.document_date.is_none() {
            missing.push("document_date");
        }
        if self.total_amount.is_none() {
            missing.push("total_amount");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_projection_uses_record_field_names() {
        let record = ExtractionRecord {
            doc_type: "invoice".to_string(),
            vendor: Some("Acme Corporation".to_string()),
            document_number: Some("INV-001".to_string()),
            document_date: Some("2024-01-15".to_string()),
            total_amount: Some(100.0),
            currency: "USD".to_string(),
            line_items: vec![LineItem {
                description: "Consulting".to_string(),
                quantity: Some(2.0),
                unit_price: Some(50.0),
                total: Some(100.0),
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        for key in [
            "doc_type",
            "vendor",
            "document_number",
            "document_date",
            "total_amount",
            "currency",
            "line_items",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["line_items"][0]["unit_price"], 50.0);
    }

    #[test]
    fn test_fallback_record() {
        let record = ExtractionRecord::fallback();
        assert_eq!(record.doc_type, "other");
        assert_eq!(record.currency, "USD");
        assert!(record.line_items.is_empty());
        assert_eq!(record.missing_fields().len(), 4);
    }

    #[test]
    fn test_doc_type_labels() {
        assert_eq!(DocType::Invoice.to_string(), "invoice");
        assert_eq!(DocType::Contract.as_str(), "contract");
    }
}
