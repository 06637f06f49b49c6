//! Document type classification.

use super::patterns::{
    CONTRACT_KEYWORD, INVOICE_KEYWORD, ITEM_KEYWORD, ITEM_QUANTITY, RECEIPT_KEYWORD,
    TOTAL_PRESENCE,
};
use super::{first_match, FieldExtractor, Rule};
use crate::models::record::DocType;

/// Document type extractor.
pub struct DocTypeExtractor;

impl DocTypeExtractor {
    pub fn new() -> Self {
        Self
    }

    fn keyword_rules() -> [Rule<DocType>; 3] {
        [
            Rule {
                name: "invoice keyword",
                pattern: &INVOICE_KEYWORD,
                capture: |_| Some(DocType::Invoice),
            },
            Rule {
                name: "receipt keyword",
                pattern: &RECEIPT_KEYWORD,
                capture: |_| Some(DocType::Receipt),
            },
            Rule {
                name: "contract keyword",
                pattern: &CONTRACT_KEYWORD,
                capture: |_| Some(DocType::Contract),
            },
        ]
    }
}

impl Default for DocTypeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DocTypeExtractor {
    type Output = DocType;

    fn extract(&self, text: &str) -> Option<DocType> {
        if let Some(doc_type) = first_match(&Self::keyword_rules(), text) {
            return Some(doc_type);
        }

        // Itemized text with a total reads like a receipt
        let has_items = ITEM_QUANTITY.is_match(text) || ITEM_KEYWORD.is_match(text);
        let has_total = TOTAL_PRESENCE.is_match(text);
        (has_items && has_total).then_some(DocType::Receipt)
    }
}

/// Classify the document, defaulting to [`DocType::Other`].
pub fn extract_doc_type(text: &str) -> DocType {
    DocTypeExtractor::new().extract(text).unwrap_or(DocType::Other)
}
