//! Vendor name extraction.

use super::patterns::{VENDOR_HEADER_LINE, VENDOR_LABEL};
use super::{first_match, group_text, FieldExtractor, Rule};

/// How many leading non-empty lines are scanned for an unlabeled vendor name.
pub const HEADER_LINES: usize = 5;

/// Header words that look like company names but are document titles.
const TITLE_WORDS: &[&str] = &["INVOICE", "RECEIPT", "BILL"];

/// Vendor field extractor.
pub struct VendorExtractor;

impl VendorExtractor {
    pub fn new() -> Self {
        Self
    }

    fn labeled_rules() -> [Rule<String>; 1] {
        [Rule {
            name: "vendor label",
            pattern: &VENDOR_LABEL,
            capture: group_text,
        }]
    }

    fn header_rules() -> [Rule<String>; 1] {
        [Rule {
            name: "vendor header line",
            pattern: &VENDOR_HEADER_LINE,
            capture: |caps| {
                group_text(caps).filter(|line| {
                    line.chars().count() > 3 && !TITLE_WORDS.contains(&line.to_uppercase().as_str())
                })
            },
        }]
    }
}

impl Default for VendorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VendorExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(vendor) = first_match(&Self::labeled_rules(), text) {
            return Some(vendor);
        }

        let header = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(HEADER_LINES)
            .collect::<Vec<_>>()
            .join("\n");

        first_match(&Self::header_rules(), &header)
    }
}

/// Extract the vendor name, if any.
pub fn extract_vendor(text: &str) -> Option<String> {
    VendorExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_vendor() {
        let text = "INVOICE\n12 Main Street\nFrom: Globex Industries\nTotal: 5.00";
        assert_eq!(extract_vendor(text).as_deref(), Some("Globex Industries"));
    }

    #[test]
    fn test_labeled_vendor_wins_over_header() {
        let text = "Northwind Traders\nSeller: Contoso Ltd.\n";
        assert_eq!(extract_vendor(text).as_deref(), Some("Contoso Ltd."));
    }

    #[test]
    fn test_header_line_vendor_skips_titles() {
        let text = "  INVOICE \n\n  Acme Corporation  \n 123 Business St";
        assert_eq!(extract_vendor(text).as_deref(), Some("Acme Corporation"));
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        let text = "RECEIPT\nBlue Bottle Coffee\nOakland Roasters\n";
        assert_eq!(extract_vendor(text).as_deref(), Some("Blue Bottle Coffee"));
    }

    #[test]
    fn test_only_leading_lines_considered() {
        let text = "1\n2\n3\n4\n5\nLate Company Name";
        assert_eq!(extract_vendor(text), None);
    }

    #[test]
    fn test_rejects_short_or_lowercase_lines() {
        assert_eq!(extract_vendor("ABC\nlowercase company\n#1234"), None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_vendor(""), None);
    }
}
