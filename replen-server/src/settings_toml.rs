//! Settings file ingestion.
//!
//! Settings live in a TOML file with every key optional; anything missing
//! inherits the built-in defaults, so an empty file is valid.

use std::fs;

use replen_engine::settings::ReplenSettings;

use crate::error::{CliError, CliResult};

pub fn load_settings_file(path: &str) -> CliResult<ReplenSettings> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    log::info!(
        "loaded settings from {path}: {} categories, {} SKU overrides",
        settings.category_lead_times.len(),
        settings.sku_settings.len()
    );
    Ok(settings)
}

pub fn parse_settings(text: &str, path: &str) -> CliResult<ReplenSettings> {
    toml::from_str(text).map_err(|source| CliError::Settings {
        path: path.to_string(),
        source,
    })
}
