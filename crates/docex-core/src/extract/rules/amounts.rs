//! Total amount extraction.

use regex::Captures;

use super::patterns::{AMOUNT_LABEL, GRAND_TOTAL_LABEL, TOTAL_LABEL};
use super::{first_match, FieldExtractor, Rule};

/// Total amount extractor.
pub struct TotalExtractor;

impl TotalExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules() -> [Rule<f64>; 3] {
        [
            Rule {
                name: "total",
                pattern: &TOTAL_LABEL,
                capture: parse_amount,
            },
            Rule {
                name: "amount",
                pattern: &AMOUNT_LABEL,
                capture: parse_amount,
            },
            Rule {
                name: "grand total",
                pattern: &GRAND_TOTAL_LABEL,
                capture: parse_amount,
            },
        ]
    }
}

/// Parse a captured amount, dropping thousands separators.
fn parse_amount(caps: &Captures<'_>) -> Option<f64> {
    let raw = caps.get(1)?.as_str().replace(',', "");
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = f64;

    fn extract(&self, text: &str) -> Option<f64> {
        first_match(&Self::rules(), text)
    }
}

/// Extract the document total, if any.
pub fn extract_total(text: &str) -> Option<f64> {
    TotalExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_with_symbol_and_separators() {
        assert_eq!(extract_total("Total: $1,000.00"), Some(1000.0));
        assert_eq!(extract_total("TOTAL 12,345.67 EUR"), Some(12345.67));
    }

    #[test]
    fn test_other_symbols() {
        assert_eq!(extract_total("Total: €42.50"), Some(42.5));
        assert_eq!(extract_total("Total £7"), Some(7.0));
    }

    #[test]
    fn test_subtotal_is_not_a_total() {
        assert_eq!(extract_total("Subtotal: 90.00\nTotal: 99.00"), Some(99.0));
    }

    #[test]
    fn test_amount_label() {
        assert_eq!(extract_total("Amount: 250.00"), Some(250.0));
    }

    #[test]
    fn test_total_label_before_amount_label() {
        assert_eq!(extract_total("Amount: 1.00\nTotal: 2.00"), Some(2.0));
    }

    #[test]
    fn test_unparsable_capture_is_skipped() {
        // "," alone matches the pattern but is not a number.
        assert_eq!(extract_total("Total: , then Amount: 3.50"), Some(3.5));
    }

    #[test]
    fn test_no_total() {
        assert_eq!(extract_total("Thank you"), None);
    }
}
