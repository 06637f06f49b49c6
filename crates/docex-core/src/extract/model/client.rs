//! Generation service client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::models::config::GenerationConfig;

/// Anything that turns a prompt into generated text.
pub trait TextGenerator {
    /// Run one non-streaming generation.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: String,
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    /// Create a client from generation settings.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Calling {} with model {}", self.endpoint, self.model);

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            format: "json",
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!("Generation request failed: {}", e);
                GenerationError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let reply: GenerateReply = resp
            .json()
            .map_err(|e| GenerationError::MalformedReply(e.to_string()))?;

        debug!("Generation returned {} characters", reply.response.len());
        Ok(reply.response)
    }
}
