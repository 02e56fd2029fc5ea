//! Mapping of raw records into canonical [`Event`]s.
//!
//! Shape problems on mandatory fields are fatal ([`MappingError`]); anything
//! else is copied through for schema validation to judge.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{MappingError, PipelineError, PipelineResult};
use crate::models::{Event, EventTime, FieldValue, Meta};
use crate::parsing::jsonl::{read_jsonl, Record};

/// Map one decoded record into an event.
///
/// # Errors
///
/// - [`MappingError::MissingField`] if `id`, `timestamp`, `source`, `channel`
///   or `text` is absent or `null`
/// - [`MappingError::InvalidType`] if one of those is not a string
/// - [`MappingError::InvalidTimestamp`] if `timestamp` is not ISO-8601
///
/// # Examples
///
/// ```
/// use nore_core::parsing::event_mapper::map_record;
/// use serde_json::json;
///
/// let record = json!({
///     "id": "s-1",
///     "timestamp": "2025-11-14T10:30:00-05:00",
///     "source": "cnbc",
///     "channel": "corporate",
///     "text": "Walmart CEO to retire"
/// });
/// let event = map_record(record.as_object().unwrap().clone()).unwrap();
/// assert_eq!(event.id, "s-1");
/// assert!(event.vector_labels().is_empty());
/// assert!(event.confidence.is_none());
/// ```
pub fn map_record(mut record: Record) -> Result<Event, MappingError> {
    let id = take_string(&mut record, "id")?;
    let raw_timestamp = take_string(&mut record, "timestamp")?;
    let timestamp =
        EventTime::parse(&raw_timestamp).map_err(|e| MappingError::InvalidTimestamp {
            value: raw_timestamp.clone(),
            reason: e.to_string(),
        })?;
    let source = take_string(&mut record, "source")?;
    let channel = take_string(&mut record, "channel")?;
    let text = take_string(&mut record, "text")?;

    // `vectors` defaults only when absent; an explicit null is kept for the schema to reject.
    let vectors = match record.remove("vectors") {
        Some(value) => FieldValue::from_json(value),
        None => FieldValue::Typed(Vec::new()),
    };
    let meta = take_optional::<Meta>(&mut record, "meta")
        .unwrap_or_else(|| FieldValue::Typed(Meta::new()));

    let event = Event {
        id,
        timestamp,
        source,
        channel,
        vectors,
        text,
        meta,
        laws: take_optional(&mut record, "laws"),
        confidence: take_optional(&mut record, "confidence"),
        severity: take_optional(&mut record, "severity"),
        decision: take_optional(&mut record, "decision"),
        status: take_optional(&mut record, "status"),
        runtime: take_optional(&mut record, "runtime"),
    };

    if !record.is_empty() {
        debug!(
            id = %event.id,
            ignored = ?record.keys().collect::<Vec<_>>(),
            "dropping fields outside the event model"
        );
    }

    Ok(event)
}

/// Read a JSONL file and map every record into an event.
///
/// The first unreadable line or unmappable record aborts the batch; no
/// partial list is returned.
pub fn ingest_events(path: &Path) -> PipelineResult<Vec<Event>> {
    let mut reader = read_jsonl(path)?;
    let mut events = Vec::new();

    while let Some(record) = reader.next() {
        let event = map_record(record?).map_err(|source| PipelineError::Mapping {
            line: reader.line(),
            source,
        })?;
        events.push(event);
    }

    info!(path = %reader.path().display(), events = events.len(), "ingested events");
    Ok(events)
}

fn take_string(record: &mut Record, field: &'static str) -> Result<String, MappingError> {
    match record.remove(field) {
        None | Some(Value::Null) => Err(MappingError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(MappingError::InvalidType {
            field,
            expected: "a string",
        }),
    }
}

/// Present-and-non-null values only; `null` counts as not supplied.
fn take_optional<T: DeserializeOwned>(record: &mut Record, field: &str) -> Option<FieldValue<T>> {
    record
        .remove(field)
        .filter(|value| !value.is_null())
        .map(FieldValue::from_json)
}
