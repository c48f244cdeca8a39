use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::selector::{FilterSelector, SortSelector};
use crate::state::ViewState;

/// Settings for the companion binary
#[derive(Debug, Deserialize, Clone)]
pub struct CompanionConfig {
    /// Filter selected when the page first renders
    #[serde(default = "default_filter")]
    pub default_filter: String,
    /// Sort order selected when the page first renders
    #[serde(default = "default_sort")]
    pub default_sort: String,
    /// JSON file with recipes to show instead of the built-in collection
    #[serde(default)]
    pub recipes_file: Option<String>,
    /// HTML page to read filter and sort controls from
    #[serde(default)]
    pub page_file: Option<String>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
            default_sort: default_sort(),
            recipes_file: None,
            page_file: None,
        }
    }
}

// Default value functions
fn default_filter() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "none".to_string()
}

impl CompanionConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COMPANION__ prefix
    /// 2. companion.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COMPANION__DEFAULT_FILTER
    pub fn load() -> std::result::Result<Self, ConfigError> {
        load_config()
    }

    /// Starting view state. Unknown selector names are rejected here rather
    /// than silently falling back.
    pub fn initial_state(&self) -> Result<ViewState> {
        Ok(ViewState::new(
            self.default_filter.parse::<FilterSelector>()?,
            self.default_sort.parse::<SortSelector>()?,
        ))
    }
}

/// Load configuration from `companion.toml` and `COMPANION__*` environment variables
pub fn load_config() -> std::result::Result<CompanionConfig, ConfigError> {
    load_config_from("companion")
}

/// Same as [`load_config`] but with an explicit config file stem or path
pub fn load_config_from(file: &str) -> std::result::Result<CompanionConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix("COMPANION")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompanionError;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = CompanionConfig::default();
        assert_eq!(config.default_filter, "all");
        assert_eq!(config.default_sort, "none");
        assert!(config.recipes_file.is_none());
        assert!(config.page_file.is_none());
        assert_eq!(config.initial_state().unwrap(), ViewState::default());
    }

    #[test]
    fn test_initial_state_rejects_unknown_selector() {
        let config = CompanionConfig {
            default_filter: "spicy".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.initial_state(),
            Err(CompanionError::UnknownFilter(_))
        ));

        let config = CompanionConfig {
            default_sort: "rating".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.initial_state(),
            Err(CompanionError::UnknownSort(_))
        ));
    }

    #[test]
    fn test_load_config_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "default_filter = \"quick\"").unwrap();
        writeln!(file, "default_sort = \"time\"").unwrap();
        writeln!(file, "recipes_file = \"recipes.json\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = load_config_from(&path).unwrap();

        assert_eq!(
            config.initial_state().unwrap(),
            ViewState::new(FilterSelector::Quick, SortSelector::Time)
        );
        assert_eq!(config.recipes_file.as_deref(), Some("recipes.json"));
        assert!(config.page_file.is_none());
    }

    #[test]
    fn test_load_config_without_file() {
        let result = load_config_from("definitely-not-a-companion-config");
        // Missing file is fine; values come from defaults or the environment
        assert!(result.is_ok());
    }
}
