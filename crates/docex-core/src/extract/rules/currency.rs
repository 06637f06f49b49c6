//! Currency detection.

use super::patterns::{CURRENCY_EUR, CURRENCY_GBP, CURRENCY_USD};
use super::{first_match, FieldExtractor, Rule};
use crate::models::record::DEFAULT_CURRENCY;

/// Currency extractor. Markers are checked USD, EUR, GBP in that order.
pub struct CurrencyExtractor;

impl CurrencyExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules() -> [Rule<&'static str>; 3] {
        [
            Rule {
                name: "usd",
                pattern: &CURRENCY_USD,
                capture: |_| Some("USD"),
            },
            Rule {
                name: "eur",
                pattern: &CURRENCY_EUR,
                capture: |_| Some("EUR"),
            },
            Rule {
                name: "gbp",
                pattern: &CURRENCY_GBP,
                capture: |_| Some("GBP"),
            },
        ]
    }
}

impl Default for CurrencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CurrencyExtractor {
    type Output = &'static str;

    fn extract(&self, text: &str) -> Option<&'static str> {
        first_match(&Self::rules(), text)
    }
}

/// Detect the currency code, defaulting to USD.
pub fn extract_currency(text: &str) -> String {
    CurrencyExtractor::new()
        .extract(text)
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(extract_currency("Total: $5"), "USD");
        assert_eq!(extract_currency("Total: €5"), "EUR");
        assert_eq!(extract_currency("Total: £5"), "GBP");
    }

    #[test]
    fn test_codes_case_insensitive() {
        assert_eq!(extract_currency("paid in eur"), "EUR");
        assert_eq!(extract_currency("GBP 12.00"), "GBP");
    }

    #[test]
    fn test_usd_checked_first() {
        assert_eq!(extract_currency("€10 or $11"), "USD");
    }

    #[test]
    fn test_default_usd() {
        assert_eq!(extract_currency("no markers"), "USD");
        assert_eq!(extract_currency(""), "USD");
    }
}
