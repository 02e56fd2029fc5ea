//! Line-delimited JSON input and output.
//!
//! [`JsonlReader`] streams one JSON object per non-empty line. Reading is
//! fail-fast: the first malformed line ends the stream with an error, it is
//! never skipped.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};

/// Raw, untyped record as decoded from one input line
pub type Record = Map<String, Value>;

/// Lazy, single-pass iterator over the records of a JSONL source.
///
/// Yields records in source order. After the first error it yields nothing
/// more. The underlying reader (and file handle) is released on drop.
pub struct JsonlReader<R> {
    lines: Lines<R>,
    path: PathBuf,
    line: usize,
    failed: bool,
}

impl<R: BufRead> JsonlReader<R> {
    /// Wrap a buffered reader. `path` is only used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line: 0,
            failed: false,
        }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = PipelineResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(PipelineError::SourceRead {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            self.line += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                debug!(line = self.line, "skipping blank line");
                continue;
            }

            return match serde_json::from_str::<Record>(trimmed) {
                Ok(record) => Some(Ok(record)),
                Err(e) => {
                    self.failed = true;
                    Some(Err(PipelineError::MalformedLine {
                        path: self.path.clone(),
                        line: self.line,
                        reason: e.to_string(),
                    }))
                }
            };
        }
    }
}

/// Open a JSONL file for streaming.
pub fn read_jsonl(path: &Path) -> PipelineResult<JsonlReader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| PipelineError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(JsonlReader::new(BufReader::new(file), path))
}

/// Parse JSONL content held in memory.
pub fn parse_jsonl_str(input: &str) -> PipelineResult<Vec<Record>> {
    JsonlReader::new(input.as_bytes(), "<memory>").collect()
}

/// Write records as JSONL, one compact document per line.
///
/// Non-ASCII text is written as-is (UTF-8). Returns the number of records
/// written.
pub fn write_jsonl<I, T>(path: &Path, records: I) -> PipelineResult<usize>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let to_write_error = |source: std::io::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for record in records {
        serde_json::to_writer(&mut writer, &record)
            .map_err(|e| to_write_error(e.into()))?;
        writer.write_all(b"\n").map_err(to_write_error)?;
        count += 1;
    }

    writer.flush().map_err(to_write_error)?;
    Ok(count)
}

/// Load a JSON Schema document.
pub fn load_schema(path: &Path) -> PipelineResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| PipelineError::SchemaLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| PipelineError::SchemaLoad {
        path: path.to_path_buf(),
        reason: format!("invalid JSON: {}", e),
    })
}
