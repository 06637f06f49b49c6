//! Document processing pipeline: acquire text, then run one extraction strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::DocexError;
use crate::extract::model::ModelExtractor;
use crate::extract::rules::extract_rules;
use crate::models::config::DocexConfig;
use crate::models::record::ExtractionRecord;
use crate::ocr::OcrRenderer;
use crate::pdf::NativeRenderer;
use crate::text::TextAcquirer;
use crate::Result;

/// Which extraction strategy to run over the acquired text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Ask the generation service.
    #[default]
    #[serde(alias = "llm")]
    Model,
    /// Deterministic pattern cascade.
    Rules,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Model => "model",
            ExtractionMode::Rules => "rules",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = DocexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "model" | "llm" => Ok(ExtractionMode::Model),
            "rules" => Ok(ExtractionMode::Rules),
            other => Err(DocexError::Config(format!(
                "unknown extraction mode '{}', expected 'model' or 'rules'",
                other
            ))),
        }
    }
}

/// Acquisition plus extraction for one document at a time.
///
/// Holds no per-document state, so a single pipeline can serve any number of
/// sequential or concurrent calls.
pub struct DocumentPipeline {
    acquirer: TextAcquirer,
    model: Option<ModelExtractor>,
}

impl DocumentPipeline {
    /// Assemble a pipeline from already-built parts.
    pub fn new(acquirer: TextAcquirer, model: ModelExtractor) -> Self {
        Self {
            acquirer,
            model: Some(model),
        }
    }

    /// A pipeline that can only run the rule cascade.
    pub fn rules_only(acquirer: TextAcquirer) -> Self {
        Self {
            acquirer,
            model: None,
        }
    }

    /// Wire the PDF text layer, OCR (when enabled) and the generation client.
    pub fn from_config(config: &DocexConfig) -> Result<Self> {
        config.validate()?;

        let mut acquirer = TextAcquirer::new(Box::new(NativeRenderer::new()), config.acquisition.clone());
        if config.ocr.enabled {
            acquirer = acquirer.with_ocr(Box::new(OcrRenderer::new(config.ocr.clone())));
        } else {
            info!("OCR disabled by configuration");
        }

        let model = ModelExtractor::from_config(&config.generation)?;
        Ok(Self::new(acquirer, model))
    }

    /// The text acquirer in use.
    pub fn acquirer(&self) -> &TextAcquirer {
        &self.acquirer
    }

    /// Process a document with exactly one extraction strategy.
    ///
    /// Acquisition errors abort before extraction. In [`ExtractionMode::Model`]
    /// any service, parse, or validation failure is returned as-is; use
    /// [`process_with_fallback`](Self::process_with_fallback) to degrade to the
    /// rule cascade instead.
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    pub fn process(&self, document: &[u8], mode: ExtractionMode) -> Result<ExtractionRecord> {
        let text = self.acquirer.acquire(document)?;
        self.extract(&text, mode)
    }

    /// Like [`process`](Self::process), but a failed model path falls back to
    /// the rule cascade. Acquisition errors are still returned.
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    pub fn process_with_fallback(
        &self,
        document: &[u8],
        mode: ExtractionMode,
    ) -> Result<ExtractionRecord> {
        let text = self.acquirer.acquire(document)?;
        match self.extract(&text, mode) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!("Model extraction failed ({}), falling back to rules", e);
                Ok(extract_rules(&text))
            }
        }
    }

    fn extract(&self, text: &str, mode: ExtractionMode) -> Result<ExtractionRecord> {
        match mode {
            ExtractionMode::Rules => Ok(extract_rules(text)),
            ExtractionMode::Model => {
                let model = self.model.as_ref().ok_or_else(|| {
                    DocexError::Config("no generation service configured".to_string())
                })?;
                model.extract(text)
            }
        }
    }
}
