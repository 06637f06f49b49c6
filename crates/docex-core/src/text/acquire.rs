//! Text acquisition: text layer first, OCR only when the text layer is thin.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::DocexError;
use crate::models::config::AcquisitionConfig;
use crate::Result;

use super::normalize::{non_whitespace_len, normalize};
use super::TextRenderer;

/// Which render path produced the acquired text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Embedded text layer.
    Native,
    /// OCR over page images.
    Ocr,
}

/// Normalized document text and where it came from.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    /// Normalized text.
    pub text: String,
    /// Render path that produced `text`.
    pub source: TextSource,
}

/// Chooses between the native text layer and OCR for each document.
pub struct TextAcquirer {
    native: Box<dyn TextRenderer + Send + Sync>,
    ocr: Option<Box<dyn TextRenderer + Send + Sync>>,
    config: AcquisitionConfig,
}

impl TextAcquirer {
    /// Create an acquirer without an OCR fallback.
    pub fn new(native: Box<dyn TextRenderer + Send + Sync>, config: AcquisitionConfig) -> Self {
        Self {
            native,
            ocr: None,
            config,
        }
    }

    /// Attach the OCR renderer used for image-only documents.
    pub fn with_ocr(mut self, ocr: Box<dyn TextRenderer + Send + Sync>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Thresholds in effect.
    pub fn config(&self) -> &AcquisitionConfig {
        &self.config
    }

    /// Acquire normalized text from document bytes.
    pub fn acquire(&self, document: &[u8]) -> Result<String> {
        self.acquire_with_source(document).map(|acquired| acquired.text)
    }

    /// Acquire normalized text and report which render path produced it.
    pub fn acquire_with_source(&self, document: &[u8]) -> Result<AcquiredText> {
        let native_text = match self.native.render(document) {
            Ok(text) => normalize(&text),
            Err(e) => {
                warn!("{} extraction failed: {}", self.native.name(), e);
                String::new()
            }
        };

        let native_chars = non_whitespace_len(&native_text);
        debug!(
            "{} extraction yielded {} non-whitespace characters",
            self.native.name(),
            native_chars
        );

        let mut acquired = AcquiredText {
            text: native_text,
            source: TextSource::Native,
        };

        if native_chars < self.config.native_min_chars {
            match &self.ocr {
                Some(ocr) => {
                    info!(
                        "Low text content ({} < {}), falling back to {}",
                        native_chars,
                        self.config.native_min_chars,
                        ocr.name()
                    );
                    match ocr.render(document) {
                        Ok(text) => {
                            let text = normalize(&text);
                            if text.is_empty() {
                                warn!("{} produced no text, keeping text layer", ocr.name());
                            } else {
                                acquired = AcquiredText {
                                    text,
                                    source: TextSource::Ocr,
                                };
                            }
                        }
                        Err(e) => {
                            warn!("{} failed, keeping text layer: {}", ocr.name(), e);
                        }
                    }
                }
                None => debug!("Low text content but no OCR renderer configured"),
            }
        }

        let chars = acquired.text.chars().count();
        if chars < self.config.min_text_length {
            return Err(DocexError::InsufficientText {
                chars,
                minimum: self.config.min_text_length,
            });
        }

        info!("Acquired {} characters of text via {:?}", chars, acquired.source);
        Ok(acquired)
    }
}
