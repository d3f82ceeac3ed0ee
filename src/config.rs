//! Summary configuration -- output style and template overrides.
//!
//! Loaded from `{config_dir}/thread-summary/config.toml`. Every field has a
//! default; a missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL};
use crate::styled::MarkupStyle;
use crate::text::TemplateCatalog;
use crate::SummaryResult;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Default markup for CLI output.
    pub format: MarkupStyle,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Template overrides, keyed by template name (e.g. `draft_label`).
    pub templates: HashMap<String, String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            format: MarkupStyle::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            templates: HashMap::new(),
        }
    }
}

impl SummaryConfig {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    /// Load and validate. A missing file is not an error.
    pub fn load(path: &Path) -> SummaryResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let mut cfg = Self::from_toml(&raw)?;
        cfg.validate();
        tracing::debug!(path = %path.display(), templates = cfg.templates.len(), "Config loaded");
        Ok(cfg)
    }

    pub fn from_toml(raw: &str) -> SummaryResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Repair out-of-range values in place.
    pub fn validate(&mut self) {
        let level = self.log_level.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            self.log_level = level;
        } else {
            tracing::warn!(
                log_level = %self.log_level,
                "Unknown log level, falling back to default"
            );
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
        self.templates.retain(|key, text| {
            let keep = !text.is_empty();
            if !keep {
                tracing::warn!(key = %key, "Empty template override ignored");
            }
            keep
        });
    }

    /// Template catalog with this config's overrides applied.
    pub fn catalog(&self) -> SummaryResult<TemplateCatalog> {
        TemplateCatalog::with_overrides(&self.templates)
    }
}
