//! Error types for the ingest pipeline.
//!
//! Every variant of [`PipelineError`] is fatal for a run: it reaches the caller
//! through `?` and no partial result is produced. Per-record schema violations
//! are not errors at this level; they are collected as strings in
//! [`ValidationReport`](crate::preprocessing::ValidationReport).

use std::path::PathBuf;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal failure of a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSONL source {} at line {line}: {reason}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Failed to map record at line {line}: {source}")]
    Mapping {
        line: usize,
        #[source]
        source: MappingError,
    },

    #[error("Failed to load schema {}: {reason}", .path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// True for the failures that come from reading the input source itself.
    pub fn is_source_read(&self) -> bool {
        matches!(
            self,
            PipelineError::SourceRead { .. } | PipelineError::MalformedLine { .. }
        )
    }
}

/// A raw record that cannot be turned into an [`Event`](crate::models::Event).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingError {
    #[error("missing mandatory field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl MappingError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            MappingError::MissingField(field) => field,
            MappingError::InvalidType { field, .. } => field,
            MappingError::InvalidTimestamp { .. } => "timestamp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_names_field() {
        let err = MappingError::MissingField("source");
        assert_eq!(err.field(), "source");
        assert_eq!(err.to_string(), "missing mandatory field 'source'");

        let err = MappingError::InvalidTimestamp {
            value: "yesterday".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(err.field(), "timestamp");
    }

    #[test]
    fn test_source_read_classification() {
        let err = PipelineError::MalformedLine {
            path: PathBuf::from("day.jsonl"),
            line: 3,
            reason: "expected value".to_string(),
        };
        assert!(err.is_source_read());
        assert!(err.to_string().contains("line 3"));

        let err = PipelineError::Config("no schema".to_string());
        assert!(!err.is_source_read());
    }
}
