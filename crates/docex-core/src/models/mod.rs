//! Data models: the extraction record, its validator, and pipeline configuration.

pub mod config;
pub mod record;
pub mod validate;

pub use config::DocexConfig;
pub use record::{DocType, ExtractionRecord, LineItem, DEFAULT_CURRENCY};
pub use validate::validate;
