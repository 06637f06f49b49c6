//! Prompt construction for the generation service.

/// Instructions and target schema placed before the document text.
const PREAMBLE: &str = r#"You are a document parser. Extract structured information from the following document text and return ONLY valid JSON with no additional explanation.

Required JSON structure:
{
  "doc_type": "invoice|receipt|contract|other",
  "vendor": "vendor/company name or null",
  "invoice_number": "invoice/document number or null",
  "invoice_date": "date in YYYY-MM-DD format or null",
  "total_amount": numeric value or null,
  "currency": "USD|EUR|GBP|etc or null",
  "line_items": [
    {"description": "item description", "quantity": number or null, "unit_price": number or null, "total": number or null}
  ]
}

Document text:
"#;

const CLOSING: &str = "\n\nReturn only the JSON object:";

/// Build the extraction prompt, embedding at most `char_limit` characters of
/// `text`.
pub fn build_prompt(text: &str, char_limit: usize) -> String {
    let excerpt = truncate_chars(text, char_limit);
    let mut prompt = String::with_capacity(PREAMBLE.len() + excerpt.len() + CLOSING.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str(excerpt);
    prompt.push_str(CLOSING);
    prompt
}

/// Longest prefix of `text` with at most `limit` characters.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
