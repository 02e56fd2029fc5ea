//! Pipeline configuration.
//!
//! A run is described by three keys: `events_path`, `event_schema` and
//! `validate`. Configuration files may be TOML (`.toml`) or JSON (anything
//! else). Keys reserved for later stages (`cluster`, `priority`,
//! `dashboard`) are accepted and ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};

/// Schema used when a run is started straight from an events file
pub const DEFAULT_EVENT_SCHEMA: &str = "schemas/event.schema.json";

/// Resolved configuration for one daily run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub events_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_schema: Option<PathBuf>,
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_validate() -> bool {
    true
}

impl PipelineConfig {
    /// Validating run over `events_path` with the default schema location.
    pub fn for_events(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
            event_schema: Some(PathBuf::from(DEFAULT_EVENT_SCHEMA)),
            validate: true,
        }
    }

    /// Load configuration from a TOML or JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PipelineConfig)` if successful
    /// * `Err(PipelineError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> PipelineResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| PipelineError::Config(format!("Failed to parse JSON config: {}", e)))
    }

    pub fn from_toml_str(content: &str) -> PipelineResult<Self> {
        toml::from_str(content)
            .map_err(|e| PipelineError::Config(format!("Failed to parse TOML config: {}", e)))
    }

    /// Schema path required by a validating run.
    pub fn schema_path(&self) -> PipelineResult<&Path> {
        self.event_schema.as_deref().ok_or_else(|| {
            PipelineError::Config(
                "'event_schema' is required when validation is enabled".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_json_config_defaults() {
        let config =
            PipelineConfig::from_json_str(r#"{"events_path": "data/events/2025-11-14.jsonl"}"#)
                .unwrap();
        assert!(config.validate);
        assert!(config.event_schema.is_none());
        assert!(config.schema_path().is_err());
    }

    #[test]
    fn test_json_config_full() {
        let config = PipelineConfig::from_json_str(
            r#"{
                "events_path": "day.jsonl",
                "event_schema": "schemas/event.schema.json",
                "validate": false,
                "cluster": {"k": 4}
            }"#,
        )
        .unwrap();
        assert!(!config.validate);
        assert_eq!(
            config.schema_path().unwrap(),
            Path::new("schemas/event.schema.json")
        );
    }

    #[test]
    fn test_missing_events_path() {
        let err = PipelineConfig::from_json_str(r#"{"validate": true}"#).unwrap_err();
        assert!(err.to_string().contains("events_path"));
    }

    #[test]
    fn test_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "events_path = \"day.jsonl\"").unwrap();
        writeln!(file, "event_schema = \"event.schema.json\"").unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.events_path, PathBuf::from("day.jsonl"));
        assert!(config.validate);
    }

    #[test]
    fn test_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"events_path": "day.jsonl", "validate": false}}"#).unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert!(!config.validate);
    }

    #[test]
    fn test_unreadable_file() {
        let err = PipelineConfig::from_file("/nonexistent/run.json").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_for_events_uses_default_schema() {
        let config = PipelineConfig::for_events("day.jsonl");
        assert!(config.validate);
        assert_eq!(config.schema_path().unwrap(), Path::new(DEFAULT_EVENT_SCHEMA));
    }
}
