//! JSON and ES-module encodings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::CommitlintConfig;

/// Serializes a value as pretty-printed JSON with a trailing newline.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;
    json.push('\n');
    Ok(json)
}

/// Deserializes a value from JSON.
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json).context("Failed to deserialize JSON")
}

/// Renders the configuration as the `commitlint.config.js` module the lint
/// engine imports.
pub fn to_es_module(config: &CommitlintConfig) -> Result<String> {
    let body = serde_json::to_string_pretty(config).context("Failed to serialize to JSON")?;
    Ok(format!("export default {body};\n"))
}
