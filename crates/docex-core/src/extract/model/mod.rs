//! Model-assisted extraction.
//!
//! The normalized text is embedded in a fixed prompt, sent to a generation
//! service, and the reply is recovered as JSON and run through the same
//! validator as the rule cascade.

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{OllamaClient, TextGenerator};
pub use prompt::build_prompt;
pub use response::parse_response;

use tracing::{debug, info};

use crate::models::config::GenerationConfig;
use crate::models::record::ExtractionRecord;
use crate::models::validate::validate;
use crate::Result;

/// Extracts records by asking a generation service.
pub struct ModelExtractor {
    generator: Box<dyn TextGenerator + Send + Sync>,
    prompt_char_limit: usize,
}

impl ModelExtractor {
    /// Wrap any generator.
    pub fn new(generator: Box<dyn TextGenerator + Send + Sync>, prompt_char_limit: usize) -> Self {
        Self {
            generator,
            prompt_char_limit,
        }
    }

    /// Build an extractor backed by [`OllamaClient`].
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        let client = OllamaClient::new(config)?;
        info!("Model extraction via {} ({})", client.endpoint(), client.model());
        Ok(Self::new(Box::new(client), config.prompt_char_limit))
    }

    /// Extract a record from normalized text.
    ///
    /// Service failures, unparsable replies, and replies that fail validation
    /// are all returned as errors; nothing is retried.
    pub fn extract(&self, text: &str) -> Result<ExtractionRecord> {
        let prompt = build_prompt(text, self.prompt_char_limit);
        let reply = self.generator.generate(&prompt)?;
        debug!("Model reply: {} characters", reply.len());

        let candidate = parse_response(&reply)?;
        let record = validate(&candidate)?;
        Ok(record)
    }
}

/// Extract a record with `generator` using the default prompt limit.
pub fn extract_model(generator: &dyn TextGenerator, text: &str) -> Result<ExtractionRecord> {
    let prompt = build_prompt(text, GenerationConfig::default().prompt_char_limit);
    let reply = generator.generate(&prompt)?;
    Ok(validate(&parse_response(&reply)?)?)
}
