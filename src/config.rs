use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::io::loader::LoadOptions;
use crate::Result;

/// Largest vertex count accepted from a graph description by default
///
/// Descriptions must declare fewer than 128 vertices. This is a soft limit
/// kept for compatibility with existing graph files and can be raised
/// through [`RouteConfig::max_vertices`].
pub const DEFAULT_MAX_VERTICES: usize = 127;

/// How a graph description that ends early is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Fail with `IncompleteInput`
    #[default]
    Strict,
    /// Warn and keep the unread cells as "no edge"
    Lenient,
}

/// Output format of the result report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// JSON document
    Json,
}

/// Configuration for a route computation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub max_vertices: usize,
    pub input_mode: InputMode,
    pub format: ReportFormat,
    pub show_routes: bool,
    pub column_width: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            input_mode: InputMode::Strict,
            format: ReportFormat::Table,
            show_routes: false,
            column_width: 8,
        }
    }
}

impl RouteConfig {
    /// Reads a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Options handed to the graph description loader
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_vertices: self.max_vertices,
            mode: self.input_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RouteConfig =
            serde_json::from_str(r#"{ "input_mode": "lenient", "show_routes": true }"#).unwrap();
        assert_eq!(config.input_mode, InputMode::Lenient);
        assert!(config.show_routes);
        assert_eq!(config.max_vertices, DEFAULT_MAX_VERTICES);
        assert_eq!(config.format, ReportFormat::Table);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.json");
        fs::write(&path, r#"{ "format": "json", "max_vertices": 500 }"#).unwrap();

        let config = RouteConfig::from_json_file(&path).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.load_options().max_vertices, 500);
    }

    #[test]
    fn malformed_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            RouteConfig::from_json_file(&path),
            Err(crate::Error::Json(_))
        ));
    }
}
