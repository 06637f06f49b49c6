//! Recovery of a JSON object from free-form model output.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::error::DocexError;
use crate::Result;

lazy_static! {
    /// From the first `{` to the last `}`, across lines.
    static ref BRACED_SPAN: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Parse the model's reply into JSON.
///
/// The widest brace-delimited span is tried first, so prose around the object
/// is tolerated. If that span does not parse, the whole reply is parsed as-is.
pub fn parse_response(response: &str) -> Result<Value> {
    if let Some(span) = BRACED_SPAN.find(response) {
        match serde_json::from_str::<Value>(span.as_str()) {
            Ok(value) => return Ok(value),
            Err(e) => trace!("Braced span is not valid JSON: {}", e),
        }
    }

    serde_json::from_str(response.trim()).map_err(|e| DocexError::ResponseParse(e.to_string()))
}
