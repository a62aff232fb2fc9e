#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::NamepickError;

/// Top-level namepick configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub namepick: GeneralConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Options shaping how a [`Picker`](crate::Picker) resolves names.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// Extra codes to try after the requested one, keyed by requested code.
    #[serde(default, alias = "languageMap")]
    pub language_map: HashMap<String, LanguageFallback>,
    /// The untranslated local name tag, e.g. `name`. Also enables
    /// `{name_tag}_{code}` keys.
    #[serde(default, alias = "nameTag")]
    pub name_tag: Option<String>,
    /// Prefix for namespaced keys, e.g. `name:` for `name:en`.
    #[serde(default, alias = "multiTag")]
    pub multi_tag: Option<String>,
    /// Ignore the requested language and show the local name.
    #[serde(default, alias = "forceLocal")]
    pub force_local: bool,
}

impl PickerConfig {
    /// Fallback codes configured for `lang`, empty when none are.
    pub fn fallbacks_for(&self, lang: &str) -> Vec<String> {
        self.language_map
            .get(lang)
            .map(LanguageFallback::to_vec)
            .unwrap_or_default()
    }
}

/// A `language_map` entry: one code or an ordered list of codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LanguageFallback {
    One(String),
    Many(Vec<String>),
}

impl LanguageFallback {
    /// The configured codes as an ordered list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            LanguageFallback::One(code) => vec![code.clone()],
            LanguageFallback::Many(codes) => codes.clone(),
        }
    }
}

impl From<&str> for LanguageFallback {
    fn from(code: &str) -> Self {
        LanguageFallback::One(code.to_string())
    }
}

impl From<Vec<&str>> for LanguageFallback {
    fn from(codes: Vec<&str>) -> Self {
        LanguageFallback::Many(codes.into_iter().map(String::from).collect())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: defaults are returned.
pub fn load(path: &str) -> Result<Config, NamepickError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| NamepickError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, NamepickError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| NamepickError::Config(format!("failed to parse config: {}", e)))?;

    if config.picker.force_local && config.picker.name_tag.is_none() {
        tracing::warn!("force_local is set without name_tag; the first value will always win");
    }

    Ok(config)
}
