//! Parsers for daily event input.
//!
//! # Parsers
//!
//! - [`jsonl`]: Stream records from line-delimited JSON, write JSONL, load schema documents
//! - [`event_mapper`]: Map raw records into canonical events
//!
//! # Example
//!
//! ```no_run
//! use nore_core::parsing::ingest_events;
//! use std::path::Path;
//!
//! let events = ingest_events(Path::new("data/events/2025-11-14.jsonl"))
//!     .expect("Failed to ingest events");
//! ```

pub mod event_mapper;
pub mod jsonl;


pub use event_mapper::{ingest_events, map_record};
pub use jsonl::{load_schema, parse_jsonl_str, read_jsonl, write_jsonl, JsonlReader, Record};
