//! Date extraction and normalization.

use chrono::NaiveDate;
use regex::Captures;

use super::patterns::{DATE_DMY_DASH, DATE_ISO, DATE_MDY_SLASH};
use super::{first_match, FieldExtractor, Rule};

/// Output format for every recognized date.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Whole-string formats accepted by [`parse_date`], in lookup order.
const DATE_FORMATS: &[&str] = &[
    ISO_FORMAT,
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse a standalone date string such as `2024-01-15` or `Jan 15, 2024`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Date extractor.
///
/// Patterns are tried in a fixed order (ISO, then `MM/DD/YYYY`, then
/// `DD-MM-YYYY`); the first calendar-valid date wins and is returned as
/// `YYYY-MM-DD`.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules() -> [Rule<NaiveDate>; 3] {
        [
            Rule {
                name: "iso date",
                pattern: &DATE_ISO,
                capture: |caps| ymd(caps, 1, 2, 3),
            },
            Rule {
                name: "mm/dd/yyyy",
                pattern: &DATE_MDY_SLASH,
                capture: |caps| ymd(caps, 3, 1, 2),
            },
            Rule {
                name: "dd-mm-yyyy",
                pattern: &DATE_DMY_DASH,
                capture: |caps| ymd(caps, 3, 2, 1),
            },
        ]
    }
}

fn ymd(caps: &Captures<'_>, year: usize, month: usize, day: usize) -> Option<NaiveDate> {
    let year: i32 = caps.get(year)?.as_str().parse().ok()?;
    let month: u32 = caps.get(month)?.as_str().parse().ok()?;
    let day: u32 = caps.get(day)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<NaiveDate> {
        first_match(&Self::rules(), text)
    }
}

/// Extract the document date as an ISO string.
pub fn extract_date(text: &str) -> Option<String> {
    DateExtractor::new()
        .extract(text)
        .map(|date| date.format(ISO_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(extract_date("Date: 2024-01-15").as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_iso_preferred_over_earlier_slash_date() {
        let text = "Shipped 01/02/2024\nIssued 2024-01-15";
        assert_eq!(extract_date(text).as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_slash_date_is_month_first() {
        assert_eq!(extract_date("01/02/2024").as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_dash_date_is_day_first() {
        assert_eq!(extract_date("Due 15-01-2024").as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn test_invalid_calendar_date_is_skipped() {
        assert_eq!(extract_date("2024-13-45 and 2024-02-29").as_deref(), Some("2024-02-29"));
        assert_eq!(extract_date("31/31/2024"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(parse_date("2024-03-09"), expected);
        assert_eq!(parse_date(" 03/09/2024 "), expected);
        assert_eq!(parse_date("09-03-2024"), expected);
        assert_eq!(parse_date("Mar 9, 2024"), expected);
        assert_eq!(parse_date("9 March 2024"), expected);
        assert_eq!(parse_date("2024-03-32"), None);
        assert_eq!(parse_date("next week"), None);
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("no dates here, only 2024"), None);
    }
}
