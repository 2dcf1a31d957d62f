//! TOML config file loading
//!
//! The config file is optional; a missing file means defaults everywhere.
//! Three sections: `[input]` toggles validation, `[output]` selects format
//! and base file name, `[filtering]` picks the endpoint.

use apitab_common::{Result, TableError};
use apitab_parser::FilterRules;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tool configuration, one struct per section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub filtering: FilteringConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Validate the document structure before building tables
    pub validate: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "xlsx" (or "excel") or "csv"
    pub format: String,

    /// Base file name override; empty or the historical placeholder
    /// "api_tab_desc" falls back to the input-derived default
    pub file_name: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "xlsx".to_string(),
            file_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilteringConfig {
    /// Endpoint path to keep
    pub path: Option<String>,

    /// HTTP method to keep
    pub method: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file; a missing file yields defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            TableError::Parse(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Filtering rules with whitespace-only values treated as absent
    pub fn filter_rules(&self) -> FilterRules {
        FilterRules {
            path: non_blank(self.filtering.path.as_deref()),
            method: non_blank(self.filtering.method.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert!(config.input.validate);
        assert_eq!(config.output.format, "xlsx");
        assert!(config.filter_rules().is_empty());
    }

    #[test]
    fn test_full_config_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[input]
validate = false

[output]
format = "csv"
file_name = "petstore_tables"

[filtering]
path = "/pets"
method = "get"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(!config.input.validate);
        assert_eq!(config.output.format, "csv");
        assert_eq!(config.output.file_name.as_deref(), Some("petstore_tables"));

        let rules = config.filter_rules();
        assert_eq!(rules.path.as_deref(), Some("/pets"));
        assert_eq!(rules.method.as_deref(), Some("get"));
    }

    #[test]
    fn test_blank_filter_values_are_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[filtering]
path = "  "
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.filter_rules().is_empty());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[output\nformat=").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
