//! PDF text and image extraction using lopdf and pdf-extract.

use image::{DynamicImage, ImageBuffer, Rgba};
use lopdf::{Document, Object, ObjectId};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Images for every page in page order.
    ///
    /// Scanned PDFs sometimes reference their page images outside the page
    /// resources; when no page yields an image the whole document is scanned
    /// and each image is treated as one page.
    pub fn page_images(&self) -> Result<Vec<Vec<DynamicImage>>> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            match self.extract_images(page) {
                Ok(images) => pages.push(images),
                Err(e) => {
                    warn!("Failed to extract images from page {}: {}", page, e);
                    pages.push(Vec::new());
                }
            }
        }

        if pages.iter().all(Vec::is_empty) {
            debug!("No XObject images found on any page, scanning all objects");
            return Ok(self.extract_all_images().into_iter().map(|img| vec![img]).collect());
        }

        Ok(pages)
    }

    /// Extract all images from the entire document
    fn extract_all_images(&self) -> Vec<DynamicImage> {
        let doc = match self.document.as_ref() {
            Some(d) => d,
            None => return vec![],
        };

        let mut images = Vec::new();
        let mut seen_objects: HashSet<ObjectId> = HashSet::new();

        for (id, object) in doc.objects.iter() {
            if !seen_objects.insert(*id) {
                continue;
            }

            if let Some(img) = self.try_extract_image_from_object(doc, object) {
                images.push(img);
            }
        }

        debug!("Found {} images in document", images.len());
        images
    }

    fn try_extract_image_from_object(&self, doc: &Document, obj: &Object) -> Option<DynamicImage> {
        if let Object::Stream(stream) = obj {
            let dict = &stream.dict;

            let subtype = dict.get(b"Subtype").ok()?;
            if subtype.as_name().ok()? != b"Image" {
                return None;
            }

            let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
            let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;

            trace!("Found image object: {}x{}", width, height);

            if let Ok(filter) = dict.get(b"Filter") {
                let filter_name = match filter {
                    Object::Name(name) => Some(name.as_slice()),
                    Object::Array(arr) if !arr.is_empty() => {
                        arr.first().and_then(|o| o.as_name().ok())
                    }
                    _ => None,
                };

                match filter_name {
                    Some(b"DCTDecode") => {
                        // JPEG bytes are stored as-is
                        return image::load_from_memory_with_format(
                            &stream.content,
                            image::ImageFormat::Jpeg,
                        )
                        .ok();
                    }
                    Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                        trace!("Skipping image with unsupported filter");
                        return None;
                    }
                    _ => {}
                }
            }

            let data = match stream.decompressed_content() {
                Ok(d) => d,
                Err(_) => stream.content.clone(),
            };

            let color_space = dict
                .get(b"ColorSpace")
                .ok()
                .and_then(|o| match o {
                    Object::Name(name) => Some(name.as_slice()),
                    Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                    Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
                    _ => None,
                })
                .unwrap_or(b"DeviceRGB");

            let bits = dict
                .get(b"BitsPerComponent")
                .ok()
                .and_then(|o| o.as_i64().ok())
                .unwrap_or(8) as u8;

            return image_from_raw(&data, width, height, color_space, bits);
        }
        None
    }

    /// Get resources dictionary for a page, walking up the page tree.
    fn page_resources(&self, doc: &Document, node_id: ObjectId) -> Option<lopdf::Dictionary> {
        let Ok(Object::Dictionary(dict)) = doc.get_object(node_id) else {
            return None;
        };

        if let Ok(resources) = dict.get(b"Resources") {
            if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                return Some(res_dict.clone());
            }
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => self.page_resources(doc, *parent_id),
            _ => None,
        }
    }
}

/// Build an RGBA image from an uncompressed 8-bit RGB or gray sample buffer.
fn image_from_raw(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
    bits_per_component: u8,
) -> Option<DynamicImage> {
    if bits_per_component != 8 {
        trace!("Unsupported bits per component: {}", bits_per_component);
        return None;
    }

    let pixels = (width as usize) * (height as usize);
    let rgba_data: Vec<u8> = match color_space {
        b"DeviceRGB" | b"RGB" if data.len() >= pixels * 3 => data[..pixels * 3]
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        b"DeviceGray" | b"G" if data.len() >= pixels => data[..pixels]
            .iter()
            .flat_map(|&gray| [gray, gray, gray, 255])
            .collect(),
        _ => {
            trace!(
                "Could not decode image: colorspace={}, data_len={}",
                String::from_utf8_lossy(color_space),
                data.len()
            );
            return None;
        }
    };

    ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba_data).map(DynamicImage::ImageRgba8)
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>> {
        let doc = self.document.as_ref().ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let pages = doc.get_pages();
        let page_id = pages.get(&page).ok_or(PdfError::InvalidPage(page))?;

        let mut images = Vec::new();

        if let Some(resources) = self.page_resources(doc, *page_id) {
            if let Ok(xobjects) = resources.get(b"XObject") {
                if let Ok((_, Object::Dictionary(xobj_dict))) = doc.dereference(xobjects) {
                    for (_name, obj_ref) in xobj_dict.iter() {
                        if let Ok((_, obj)) = doc.dereference(obj_ref) {
                            if let Some(img) = self.try_extract_image_from_object(doc, obj) {
                                images.push(img);
                            }
                        }
                    }
                }
            }
        }

        debug!("Extracted {} images from page {}", images.len(), page);
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_unloaded_extractor_errors() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
        assert!(matches!(extractor.page_images(), Err(PdfError::NoPages)));
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"hello"), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_image_from_raw_gray() {
        let img = image_from_raw(&[0, 128, 255, 64], 2, 2, b"DeviceGray", 8).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.to_rgba8().get_pixel(1, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_image_from_raw_rejects_short_buffer() {
        assert!(image_from_raw(&[1, 2, 3], 2, 2, b"DeviceRGB", 8).is_none());
        assert!(image_from_raw(&[0; 16], 2, 2, b"DeviceGray", 1).is_none());
    }
}
