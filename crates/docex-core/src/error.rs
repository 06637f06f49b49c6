//! Error types for the docex-core library.

use thiserror::Error;

/// Main error type for the docex library.
#[derive(Error, Debug)]
pub enum DocexError {
    /// Acquisition produced too little usable text to extract from.
    #[error("insufficient text: extracted {chars} characters, need at least {minimum}")]
    InsufficientText { chars: usize, minimum: usize },

    /// Calling the generation service failed.
    #[error("generation service error: {0}")]
    GenerationService(#[from] GenerationError),

    /// The generation service returned text that is not recoverable as JSON.
    #[error("failed to parse model response: {0}")]
    ResponseParse(String),

    /// A candidate record failed validation.
    #[error("schema violation: {0}")]
    SchemaViolation(#[from] SchemaViolation),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// Failed to extract images from PDF.
    #[error("failed to extract images: {0}")]
    ImageExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Model files are not present in the configured directory.
    #[error("OCR models not found in {0}")]
    ModelsMissing(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The crate was built without an OCR backend.
    #[error("OCR support not compiled in")]
    Unavailable,
}

/// Errors raised while talking to the generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Connection, timeout, or other transport failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The service reply was not the expected JSON envelope.
    #[error("malformed service reply: {0}")]
    MalformedReply(String),
}

/// Ways a candidate record can fail validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// The candidate is not a JSON object.
    #[error("candidate must be a JSON object")]
    NotAnObject,

    /// Required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field holds a value of the wrong kind.
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A line item failed validation.
    #[error("line item {index}: {reason}")]
    InvalidLineItem { index: usize, reason: String },
}

/// Result type for the docex library.
pub type Result<T> = std::result::Result<T, DocexError>;
