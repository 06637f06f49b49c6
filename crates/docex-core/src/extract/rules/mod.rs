//! Deterministic pattern cascade.
//!
//! Each field owns an ordered list of [`Rule`]s evaluated top to bottom; the
//! first rule that yields a value wins. Fields are extracted independently of
//! each other and unresolved fields fall back to null or a default, so the
//! cascade always produces a record.

pub mod amounts;
pub mod currency;
pub mod dates;
pub mod doc_type;
pub mod number;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_total, TotalExtractor};
pub use currency::{extract_currency, CurrencyExtractor};
pub use dates::{extract_date, DateExtractor};
pub use doc_type::{extract_doc_type, DocTypeExtractor};
pub use number::{extract_document_number, DocumentNumberExtractor};
pub use vendor::{extract_vendor, VendorExtractor};

use regex::{Captures, Regex};
use serde_json::{json, Value};
use tracing::{debug, trace, warn};

use crate::models::record::ExtractionRecord;
use crate::models::validate::validate;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// One candidate rule: a pattern plus a function turning a match into a value.
///
/// The function may reject a match (for example an unparsable number), in
/// which case later matches of the same pattern are tried before moving on.
pub struct Rule<T> {
    /// Name used in trace output.
    pub name: &'static str,
    /// Pattern searched for anywhere in the text.
    pub pattern: &'static Regex,
    /// Converts a match into a value.
    pub capture: fn(&Captures<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    /// First accepted match of this rule in `text`.
    pub fn apply(&self, text: &str) -> Option<T> {
        self.pattern
            .captures_iter(text)
            .find_map(|caps| (self.capture)(&caps))
    }
}

/// Evaluate `rules` in order and return the first value produced.
pub fn first_match<T>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules.iter().find_map(|rule| {
        let value = rule.apply(text)?;
        trace!("Rule '{}' matched", rule.name);
        Some(value)
    })
}

/// Trimmed text of capture group 1, if non-empty.
pub(crate) fn group_text(caps: &Captures<'_>) -> Option<String> {
    caps.get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Raw candidate structure produced by the cascade, before validation.
pub fn rule_candidate(text: &str) -> Value {
    json!({
        "doc_type": extract_doc_type(text).as_str(),
        "vendor": extract_vendor(text),
        "document_number": extract_document_number(text),
        "document_date": extract_date(text),
        "total_amount": extract_total(text),
        "currency": extract_currency(text),
        "line_items": [],
    })
}

/// Extract a record with the pattern cascade. Never fails.
pub fn extract_rules(text: &str) -> ExtractionRecord {
    let candidate = rule_candidate(text);
    match validate(&candidate) {
        Ok(record) => {
            debug!(
                "Rule cascade produced {} record, missing {:?}",
                record.doc_type,
                record.missing_fields()
            );
            record
        }
        Err(e) => {
            warn!("Rule candidate failed validation ({}), using fallback record", e);
            ExtractionRecord::fallback()
        }
    }
}
