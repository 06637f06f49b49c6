//! Document number extraction.

use regex::Captures;

use super::patterns::{HASH_NUMBER, INVOICE_NUMBER_LONG, INVOICE_NUMBER_SHORT};
use super::{first_match, group_text, FieldExtractor, Rule};

/// Document number extractor.
pub struct DocumentNumberExtractor;

impl DocumentNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules() -> [Rule<String>; 3] {
        [
            Rule {
                name: "invoice #/no/:",
                pattern: &INVOICE_NUMBER_SHORT,
                capture: identifier,
            },
            Rule {
                name: "invoice number",
                pattern: &INVOICE_NUMBER_LONG,
                capture: identifier,
            },
            Rule {
                name: "#digits",
                pattern: &HASH_NUMBER,
                capture: group_text,
            },
        ]
    }
}

/// Labeled identifiers must contain a digit, which keeps prose such as
/// "Invoice no longer valid" from producing a number.
fn identifier(caps: &Captures<'_>) -> Option<String> {
    group_text(caps).filter(|id| id.chars().any(|c| c.is_ascii_digit()))
}

impl Default for DocumentNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DocumentNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        first_match(&Self::rules(), text)
    }
}

/// Extract the document number, if any.
pub fn extract_document_number(text: &str) -> Option<String> {
    DocumentNumberExtractor::new().extract(text)
}
