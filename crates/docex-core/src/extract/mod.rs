//! Field extraction: the deterministic rule cascade and the model-assisted path.

pub mod model;
pub mod rules;

pub use model::{extract_model, ModelExtractor, OllamaClient, TextGenerator};
pub use rules::{extract_rules, FieldExtractor};
