//! Schema-driven event validation with per-record error reporting.
//!
//! Each event is serialized to its canonical JSON form and checked against a
//! JSON Schema. A failing event never stops the batch: it is recorded as an
//! `"<id>: <violation>"` string and left out of the valid set.

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};
use crate::models::Event;
use crate::parsing::jsonl::load_schema;

/// Outcome of validating a batch of events.
///
/// `valid` keeps input order. `errors` holds one human-readable message per
/// rejected event, also in input order.
///
/// # Examples
///
/// ```
/// use nore_core::preprocessing::validator::ValidationReport;
///
/// let report = ValidationReport::passthrough(Vec::new());
/// assert!(report.is_clean());
/// assert_eq!(report.stats.total, 0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: Vec<Event>,
    pub errors: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary counts of a validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl ValidationReport {
    fn with_capacity(total: usize) -> Self {
        Self {
            valid: Vec::with_capacity(total),
            errors: Vec::new(),
            stats: ValidationStats {
                total,
                ..ValidationStats::default()
            },
        }
    }

    /// Report for a run with validation disabled: everything passes.
    pub fn passthrough(events: Vec<Event>) -> Self {
        let total = events.len();
        Self {
            valid: events,
            errors: Vec::new(),
            stats: ValidationStats {
                total,
                valid: total,
                invalid: 0,
            },
        }
    }

    fn accept(&mut self, event: Event) {
        self.stats.valid += 1;
        self.valid.push(event);
    }

    fn reject(&mut self, message: String) {
        self.stats.invalid += 1;
        self.errors.push(message);
    }

    /// True when no event was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Event>, Vec<String>) {
        (self.valid, self.errors)
    }
}

/// Compiled JSON Schema for canonical events.
///
/// Load once per run with [`SchemaValidator::from_file`], then validate any
/// number of events. Loading failures are fatal; per-event failures are not.
pub struct SchemaValidator {
    source: PathBuf,
    compiled: Validator,
}

impl SchemaValidator {
    /// Load and compile a schema document from disk.
    ///
    /// # Errors
    ///
    /// [`PipelineError::SchemaLoad`] if the file is missing, is not JSON, or
    /// is not a valid JSON Schema.
    pub fn from_file(path: &Path) -> PipelineResult<Self> {
        let schema = load_schema(path)?;
        let validator = Self::compile(&schema, path)?;
        debug!(schema = %path.display(), "loaded event schema");
        Ok(validator)
    }

    /// Compile an in-memory schema document.
    pub fn from_value(schema: &Value) -> PipelineResult<Self> {
        Self::compile(schema, Path::new("<inline>"))
    }

    fn compile(schema: &Value, source: &Path) -> PipelineResult<Self> {
        let compiled = jsonschema::validator_for(schema).map_err(|e| PipelineError::SchemaLoad {
            path: source.to_path_buf(),
            reason: format!("invalid JSON Schema: {}", e),
        })?;

        Ok(Self {
            source: source.to_path_buf(),
            compiled,
        })
    }

    /// Where the schema was loaded from (`<inline>` for in-memory schemas).
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Check one event; `Err` carries the violation description.
    pub fn validate_event(&self, event: &Event) -> Result<(), String> {
        let instance = event
            .to_value()
            .map_err(|e| format!("cannot serialize event: {}", e))?;

        self.compiled
            .validate(&instance)
            .map_err(|violation| violation.to_string())
    }

    /// Partition events into valid ones and per-event error messages.
    ///
    /// Validation never modifies an event and never stops early.
    pub fn validate_events(&self, events: Vec<Event>) -> ValidationReport {
        let mut report = ValidationReport::with_capacity(events.len());

        for event in events {
            match self.validate_event(&event) {
                Ok(()) => report.accept(event),
                Err(violation) => {
                    warn!(
                        id = %event.id,
                        schema = %self.source().display(),
                        %violation,
                        "event failed schema validation"
                    );
                    report.reject(format!("{}: {}", event.id, violation));
                }
            }
        }

        report
    }
}

/// Validate events against the schema stored at `schema_path`.
///
/// The schema is loaded fresh for this call.
pub fn validate_events(events: Vec<Event>, schema_path: &Path) -> PipelineResult<ValidationReport> {
    let validator = SchemaValidator::from_file(schema_path)?;
    Ok(validator.validate_events(events))
}
