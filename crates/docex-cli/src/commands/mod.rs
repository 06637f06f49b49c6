//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use docex_core::models::config::DocexConfig;
use docex_core::ExtractionRecord;
use tracing::{debug, warn};

/// Per-user configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docex")
        .join("config.json")
}

/// The `--config` path if given, otherwise the per-user location.
pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Configuration as stored on disk, without environment overrides.
///
/// A missing file means defaults.
pub fn load_file_config(config_path: Option<&str>) -> anyhow::Result<DocexConfig> {
    let path = resolve_config_path(config_path);
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        load_from(&path)
    } else {
        if config_path.is_some() {
            warn!("Config file {} not found, using defaults", path.display());
        }
        Ok(DocexConfig::default())
    }
}

/// Effective configuration: file (or defaults) plus environment overrides.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocexConfig> {
    let config = load_file_config(config_path)?.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn load_from(path: &Path) -> anyhow::Result<DocexConfig> {
    DocexConfig::from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
}

/// Human-readable rendering of a record.
pub fn format_record_text(record: &ExtractionRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document type: {}\n", record.doc_type));
    output.push_str(&format!("Vendor:        {}\n", record.vendor.as_deref().unwrap_or("-")));
    output.push_str(&format!(
        "Number:        {}\n",
        record.document_number.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Date:          {}\n",
        record.document_date.as_deref().unwrap_or("-")
    ));
    match record.total_amount {
        Some(total) => output.push_str(&format!("Total:         {:.2} {}\n", total, record.currency)),
        None => output.push_str(&format!("Total:         - {}\n", record.currency)),
    }

    if !record.line_items.is_empty() {
        output.push_str("\nLine items:\n");
        for item in &record.line_items {
            output.push_str(&format!("  - {}", item.description));
            if let Some(quantity) = item.quantity {
                output.push_str(&format!("  x{}", quantity));
            }
            if let Some(unit_price) = item.unit_price {
                output.push_str(&format!("  @ {:.2}", unit_price));
            }
            if let Some(total) = item.total {
                output.push_str(&format!("  = {:.2}", total));
            }
            output.push('\n');
        }
    }

    output
}
