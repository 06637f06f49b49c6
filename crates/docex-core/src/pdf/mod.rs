//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use crate::text::TextRenderer;
use image::DynamicImage;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract embedded images from a page.
    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>>;
}

/// Renders a PDF through its embedded text layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeRenderer;

impl NativeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for NativeRenderer {
    fn name(&self) -> &'static str {
        "text layer"
    }

    fn render(&self, document: &[u8]) -> crate::Result<String> {
        let mut extractor = PdfExtractor::new();
        extractor.load(document)?;
        Ok(extractor.extract_text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocexError;

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Single-page PDF with `line` drawn in Helvetica.
    fn text_pdf(line: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_native_renderer_reads_text_layer() {
        let pdf = text_pdf("Invoice Number 4711");
        let text = NativeRenderer::new().render(&pdf).unwrap();
        assert!(text.contains("Invoice Number 4711"), "got {:?}", text);
    }

    #[test]
    fn test_page_images_on_text_only_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&text_pdf("no pictures")).unwrap();
        assert_eq!(extractor.page_count(), 1);
        assert!(extractor.page_images().unwrap().is_empty());
    }

    #[test]
    fn test_native_renderer_rejects_non_pdf() {
        let err = NativeRenderer::new().render(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DocexError::Pdf(PdfError::Parse(_))));
    }
}
