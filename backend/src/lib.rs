//! # NORE core
//!
//! Daily event ingest and schema validation.
//!
//! This crate reads one day's batch of event records from a line-delimited
//! JSON file, maps each record into a canonical [`Event`](models::Event), and
//! validates the events against a JSON Schema. The result is a pair: the
//! events that conform, and one error message per event that does not.
//!
//! ## Architecture
//!
//! - [`parsing`]: JSONL record reader and record → event mapping
//! - [`preprocessing`]: Schema validator and the day pipeline that wires everything together
//! - [`models`]: Event model and the downstream holders built on it
//! - [`config`]: Run configuration (`events_path`, `event_schema`, `validate`)
//! - [`error`]: Fatal error taxonomy
//!
//! ## Failure model
//!
//! Unreadable input, malformed lines, unmappable records and unloadable
//! schemas abort the run with a [`PipelineError`](error::PipelineError).
//! Schema violations are per-event and only end up in the error list.
//!
//! ```no_run
//! use nore_core::config::PipelineConfig;
//! use nore_core::preprocessing::run_day_pipeline;
//!
//! let config = PipelineConfig::for_events("data/events/2025-11-14.jsonl");
//! let (events, errors) = run_day_pipeline(&config)?;
//! println!("{} valid, {} rejected", events.len(), errors.len());
//! # Ok::<(), nore_core::error::PipelineError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod preprocessing;

pub use config::PipelineConfig;
pub use error::{MappingError, PipelineError, PipelineResult};
pub use models::Event;
pub use preprocessing::{run_day_pipeline, DayPipeline, DayResult};
