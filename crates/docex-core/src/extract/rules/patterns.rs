//! Common regex patterns for field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document type keywords
    pub static ref INVOICE_KEYWORD: Regex = Regex::new(r"(?i)\binvoice\b").unwrap();

    pub static ref RECEIPT_KEYWORD: Regex = Regex::new(r"(?i)\breceipt\b").unwrap();

    pub static ref CONTRACT_KEYWORD: Regex = Regex::new(r"(?i)\b(?:contract|agreement)\b").unwrap();

    // Receipt heuristic: "2x Coffee" style quantities or item/quantity headers
    pub static ref ITEM_QUANTITY: Regex = Regex::new(r"\d+x\s+[A-Za-z]").unwrap();

    pub static ref ITEM_KEYWORD: Regex = Regex::new(r"(?i)quantity|qty|items").unwrap();

    pub static ref TOTAL_PRESENCE: Regex = Regex::new(r"(?i)total:?\s*\$?\s*[\d,]+\.?\d*").unwrap();

    // Vendor
    pub static ref VENDOR_LABEL: Regex = Regex::new(
        r"(?im)\b(?:from|vendor|seller):[ \t]*([A-Z][A-Za-z &.,]+?)[ \t]*$"
    ).unwrap();

    pub static ref VENDOR_HEADER_LINE: Regex = Regex::new(
        r"(?m)^([A-Z][A-Za-z \t&.,]{2,40})$"
    ).unwrap();

    // Document number
    pub static ref INVOICE_NUMBER_SHORT: Regex = Regex::new(
        r"(?i)\binvoice\s*(?:#|no\b\.?|:)\s*:?\s*([A-Z0-9][A-Z0-9/_\-]*)"
    ).unwrap();

    pub static ref INVOICE_NUMBER_LONG: Regex = Regex::new(
        r"(?i)\binvoice\s+number\s*:?\s*([A-Z0-9][A-Z0-9/_\-]*)"
    ).unwrap();

    pub static ref HASH_NUMBER: Regex = Regex::new(r"#\s*(\d{4,})").unwrap();

    // Dates
    pub static ref DATE_ISO: Regex = Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap();

    pub static ref DATE_MDY_SLASH: Regex = Regex::new(r"\b(\d{2})/(\d{2})/(\d{4})\b").unwrap();

    pub static ref DATE_DMY_DASH: Regex = Regex::new(r"\b(\d{2})-(\d{2})-(\d{4})\b").unwrap();

    // Totals
    pub static ref TOTAL_LABEL: Regex = Regex::new(
        r"(?i)\btotal:?\s*[$€£]?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref AMOUNT_LABEL: Regex = Regex::new(
        r"(?i)\bamount:?\s*[$€£]?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref GRAND_TOTAL_LABEL: Regex = Regex::new(
        r"(?i)\bgrand\s+total:?\s*[$€£]?\s*([\d,]+\.?\d*)"
    ).unwrap();

    // Currency markers
    pub static ref CURRENCY_USD: Regex = Regex::new(r"(?i)\$|usd").unwrap();

    pub static ref CURRENCY_EUR: Regex = Regex::new(r"(?i)€|eur").unwrap();

    pub static ref CURRENCY_GBP: Regex = Regex::new(r"(?i)£|gbp").unwrap();
}
