//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DocexError;
use crate::pipeline::ExtractionMode;

/// Main configuration for the docex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocexConfig {
    /// Text acquisition thresholds.
    pub acquisition: AcquisitionConfig,

    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Generation service configuration.
    pub generation: GenerationConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Thresholds for choosing between the text layer and OCR.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Non-whitespace characters the text layer must yield to skip OCR.
    pub native_min_chars: usize,

    /// Minimum normalized text length to attempt field extraction.
    pub min_text_length: usize,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            native_min_chars: 50,
            min_text_length: 10,
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Fall back to OCR for image-only documents.
    pub enabled: bool,

    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` markers for unrecognized glyphs instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, file_name: &str) -> PathBuf {
        self.model_dir.join(file_name)
    }
}

/// Generation service (Ollama-compatible) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Base URL of the service.
    pub base_url: String,

    /// Model identifier sent with each request.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of document characters embedded in the prompt.
    pub prompt_char_limit: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 60,
            prompt_char_limit: 3000,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Strategy used when the caller does not choose one.
    pub mode: ExtractionMode,
}

impl DocexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Overlay values from environment-style variables.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`. Recognized keys are
    /// `OLLAMA_BASE_URL`, `OLLAMA_MODEL`, `EXTRACTION_MODE` and
    /// `DOCEX_OCR_MODEL_DIR`; empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, DocexError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("OLLAMA_BASE_URL") {
            self.generation.base_url = url;
        }
        if let Some(model) = get("OLLAMA_MODEL") {
            self.generation.model = model;
        }
        if let Some(mode) = get("EXTRACTION_MODE") {
            self.extraction.mode = mode.parse()?;
        }
        if let Some(dir) = get("DOCEX_OCR_MODEL_DIR") {
            self.ocr.model_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    /// Check values that would make the pipeline unusable.
    pub fn validate(&self) -> Result<(), DocexError> {
        if self.generation.base_url.trim().is_empty() {
            return Err(DocexError::Config("generation.base_url is empty".to_string()));
        }
        if self.generation.model.trim().is_empty() {
            return Err(DocexError::Config("generation.model is empty".to_string()));
        }
        if self.generation.timeout_secs == 0 {
            return Err(DocexError::Config("generation.timeout_secs must be positive".to_string()));
        }
        if self.generation.prompt_char_limit == 0 {
            return Err(DocexError::Config(
                "generation.prompt_char_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
