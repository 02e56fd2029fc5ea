//! Shared fixtures for integration tests.

use std::io::Write;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Repository root (one level above the crate).
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crate lives inside the repository")
        .to_path_buf()
}

pub fn event_schema_path() -> PathBuf {
    repo_root().join("schemas").join("event.schema.json")
}

pub fn example_events_path() -> PathBuf {
    repo_root()
        .join("data")
        .join("examples")
        .join("events")
        .join("2025-11-14.jsonl")
}

/// A fully conformant event record with the given id.
pub fn conformant_event(id: &str) -> Value {
    json!({
        "id": id,
        "timestamp": "2025-11-14T10:30:00-05:00",
        "source": "cnbc",
        "channel": "corporate",
        "vectors": ["exposure", "retrieval"],
        "text": "Walmart CEO Doug McMillon to retire...",
        "meta": {"tags": ["walmart", "retail"], "window": false}
    })
}

/// Write raw lines to a temporary JSONL file.
pub fn jsonl_file<I, S>(lines: I) -> NamedTempFile
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line.as_ref()).expect("Failed to write temp file");
    }
    file.flush().expect("Failed to flush temp file");
    file
}
