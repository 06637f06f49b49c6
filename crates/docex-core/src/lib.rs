//! Core library for document field extraction.
//!
//! This crate provides:
//! - Text acquisition (PDF text layer first, OCR for image-only documents)
//! - A deterministic pattern cascade over the acquired text
//! - Model-assisted extraction through an Ollama-compatible service
//! - A shared validator that both extraction paths must pass

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;
pub mod text;

pub use error::{DocexError, GenerationError, OcrError, PdfError, Result, SchemaViolation};
pub use extract::rules::{
    extract_currency, extract_date, extract_doc_type, extract_document_number, extract_total,
    extract_vendor,
};
pub use extract::{extract_model, extract_rules, ModelExtractor, OllamaClient, TextGenerator};
pub use models::{validate, DocType, DocexConfig, ExtractionRecord, LineItem};
pub use ocr::{OcrRenderer, OcrResult, TextBox};
pub use pdf::{NativeRenderer, PdfExtractor, PdfProcessor};
pub use pipeline::{DocumentPipeline, ExtractionMode};
pub use text::{normalize, AcquiredText, TextAcquirer, TextRenderer, TextSource};
