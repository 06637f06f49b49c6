//! OCR rendering for image-only PDFs.

#[cfg(feature = "ocr")]
mod pure_engine;

#[cfg(feature = "ocr")]
pub use pure_engine::PureOcrEngine;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ocr")]
use tracing::{debug, warn};

#[cfg(not(feature = "ocr"))]
use crate::error::OcrError;
use crate::models::config::OcrConfig;
use crate::text::TextRenderer;

/// A detected text box with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of OCR processing on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Detected and recognized text boxes.
    pub boxes: Vec<TextBox>,

    /// Full text (boxes joined with newlines).
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl OcrResult {
    /// Sort boxes by reading order (top-to-bottom, left-to-right).
    pub fn sort_by_reading_order(&mut self) {
        self.boxes.sort_by(|a, b| {
            let (ax, ay, _, _) = a.rect();
            let (bx, by, _, _) = b.rect();

            // Group by approximate vertical position (within 20 pixels)
            let row_a = (ay / 20.0) as i32;
            let row_b = (by / 20.0) as i32;

            row_a
                .cmp(&row_b)
                .then(ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal))
        });

        self.text = self
            .boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

/// Renders a PDF by running OCR over its page images.
///
/// Models are loaded per render call; nothing is cached between documents.
pub struct OcrRenderer {
    #[cfg_attr(not(feature = "ocr"), allow(dead_code))]
    config: OcrConfig,
}

impl OcrRenderer {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl TextRenderer for OcrRenderer {
    fn name(&self) -> &'static str {
        "OCR"
    }

    #[cfg(feature = "ocr")]
    fn render(&self, document: &[u8]) -> crate::Result<String> {
        use crate::pdf::{PdfExtractor, PdfProcessor};

        let mut extractor = PdfExtractor::new();
        extractor.load(document)?;
        let pages = extractor.page_images()?;

        let engine = PureOcrEngine::from_config(&self.config)?;

        let mut page_texts = Vec::with_capacity(pages.len());
        for (index, images) in pages.iter().enumerate() {
            let mut parts = Vec::new();
            for image in images {
                match engine.process(image) {
                    Ok(result) if !result.text.trim().is_empty() => parts.push(result.text),
                    Ok(_) => debug!("No text detected in image on page {}", index + 1),
                    Err(e) => warn!("OCR failed on page {}: {}", index + 1, e),
                }
            }
            page_texts.push(parts.join("\n"));
        }

        debug!("OCR processed {} pages", page_texts.len());
        Ok(page_texts.join("\n"))
    }

    #[cfg(not(feature = "ocr"))]
    fn render(&self, _document: &[u8]) -> crate::Result<String> {
        Err(OcrError::Unavailable.into())
    }
}
