//! Configuration file support for dep-analyzer.
//!
//! Provides YAML-based configuration through `dep-analyzer.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::reporting::domain::Gav;
use crate::reporting::policies::BuildSuffixProvenance;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-analyzer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Maven repository holding the rebuilt artifacts
    pub repository_url: Option<String>,
    /// Build suffix of internally produced versions (e.g. `redhat`)
    pub internal_suffix: Option<String>,
    pub max_concurrent_lookups: Option<usize>,
    /// Coordinates (`group:artifact:version`) on the allow-list
    pub allow_list: Option<Vec<String>>,
    /// Coordinates (`group:artifact:version`) on the deny-list
    pub deny_list: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed allow-list; empty when the field is absent.
    pub fn allowed_gavs(&self) -> Result<Vec<Gav>> {
        parse_gav_list("allow_list", self.allow_list.as_deref())
    }

    /// Parsed deny-list; empty when the field is absent.
    pub fn denied_gavs(&self) -> Result<Vec<Gav>> {
        parse_gav_list("deny_list", self.deny_list.as_deref())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        format.parse::<OutputFormat>().with_context(|| {
            format!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'json' or 'markdown'.",
                format
            )
        })?;
    }

    if config.max_concurrent_lookups == Some(0) {
        bail!(
            "Invalid config: max_concurrent_lookups must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default limit."
        );
    }

    if let Some(ref suffix) = config.internal_suffix {
        BuildSuffixProvenance::new(suffix.as_str())
            .context("Invalid config: internal_suffix")?;
    }

    config.allowed_gavs()?;
    config.denied_gavs()?;
    Ok(())
}

fn parse_gav_list(field: &str, entries: Option<&[String]>) -> Result<Vec<Gav>> {
    entries
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry.parse::<Gav>().with_context(|| {
                format!(
                    "Invalid config: {}[{}] '{}' is not a valid coordinate.\n\n\
                     💡 Hint: Entries must look like \"group:artifact:version\".",
                    field, i, entry
                )
            })
        })
        .collect()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
