//! Configuration file support.
//!
//! Reads `component-sync.config.yml`, either from an explicit path or
//! discovered next to the inventory file, and folds it into the
//! `SyncOptions` the engines run with.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::application::dto::OutputFormat;
use crate::reconciliation::policies::{NamePolicy, SyncOptions};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "component-sync.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub name_comparison: Option<NameComparison>,
    #[serde(alias = "compare_description")]
    pub sync_descriptions: Option<bool>,
    pub exclude_virtual_interfaces: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Name matching sensitivity; omitted flags keep their default.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct NameComparison {
    #[serde(alias = "case-insensitive")]
    pub case_insensitive: Option<bool>,
    #[serde(alias = "space-insensitive")]
    pub space_insensitive: Option<bool>,
}

impl ConfigFile {
    /// Overlays the values set in this file onto `options`
    pub fn apply_to(&self, options: SyncOptions) -> SyncOptions {
        let mut options = options;
        if let Some(names) = self.name_comparison {
            let defaults = options.name_comparison;
            options = options.with_name_comparison(NamePolicy {
                case_insensitive: names.case_insensitive.unwrap_or(defaults.case_insensitive),
                space_insensitive: names.space_insensitive.unwrap_or(defaults.space_insensitive),
            });
        }
        if let Some(sync_descriptions) = self.sync_descriptions {
            options = options.with_sync_descriptions(sync_descriptions);
        }
        if let Some(exclude) = self.exclude_virtual_interfaces {
            options = options.with_exclude_virtual_interfaces(exclude);
        }
        options
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| OutputFormat::from_str(format).map_err(anyhow::Error::msg))
            .transpose()
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

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to markdown or json.",
            e
        );
    }
    if let Some(names) = config.name_comparison {
        if names.case_insensitive == Some(false) && names.space_insensitive == Some(false) {
            warn!("Strict name comparison: components match only on identical names");
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = key.as_str(), "Unknown config field will be ignored");
    }
}
