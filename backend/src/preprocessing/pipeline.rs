use std::path::Path;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::models::Event;
use crate::parsing::event_mapper::ingest_events;
use crate::preprocessing::validator::{SchemaValidator, ValidationReport, ValidationStats};

/// Result of one daily run
#[derive(Debug, Clone)]
pub struct DayResult {
    /// Events that passed validation (all mapped events if validation is off)
    pub events: Vec<Event>,
    /// One `"<id>: <violation>"` message per rejected event
    pub errors: Vec<String>,
    pub stats: ValidationStats,
}

impl DayResult {
    pub fn into_parts(self) -> (Vec<Event>, Vec<String>) {
        (self.events, self.errors)
    }
}

impl From<ValidationReport> for DayResult {
    fn from(report: ValidationReport) -> Self {
        Self {
            events: report.valid,
            errors: report.errors,
            stats: report.stats,
        }
    }
}

/// Ingest → validate pipeline for a single day's events file
pub struct DayPipeline {
    config: PipelineConfig,
}

impl DayPipeline {
    /// Create a validating pipeline over `events_path` with the default schema
    pub fn new(events_path: impl AsRef<Path>) -> Self {
        Self::with_config(PipelineConfig::for_events(events_path.as_ref()))
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline.
    ///
    /// Any read, mapping or schema-load failure aborts the run with no
    /// result. Schema violations are collected per event in the result.
    pub fn run(&self) -> PipelineResult<DayResult> {
        // Step 1: Resolve the schema before touching the input
        let schema_path = if self.config.validate {
            Some(self.config.schema_path()?)
        } else {
            None
        };

        // Step 2: Ingest
        let events = ingest_events(&self.config.events_path)?;

        // Step 3: Validate (if requested)
        let report = match schema_path {
            Some(path) => SchemaValidator::from_file(path)?.validate_events(events),
            None => ValidationReport::passthrough(events),
        };

        // --- later stages (clustering, prioritization, dashboard) attach here ---

        info!(
            events_path = %self.config.events_path.display(),
            validated = self.config.validate,
            valid = report.stats.valid,
            invalid = report.stats.invalid,
            "day pipeline completed"
        );

        Ok(report.into())
    }
}

/// Run the pipeline for one day and return `(valid_events, validation_errors)`.
pub fn run_day_pipeline(config: &PipelineConfig) -> PipelineResult<(Vec<Event>, Vec<String>)> {
    DayPipeline::with_config(config.clone())
        .run()
        .map(DayResult::into_parts)
}
