//! [`DatasetSource`] implementations: in-memory rows, a JSON array file and a
//! JSON Lines file.

pub mod in_memory;
pub mod json_file;
pub mod json_lines;

use std::path::Path;

use causenet_core::errors::SourceError;
use causenet_core::{CausenetResult, DatasetSource};

pub use in_memory::InMemorySource;
pub use json_file::JsonFileSource;
pub use json_lines::JsonLinesSource;

/// Pick a file source from the extension: `.json` for an array of rows,
/// `.jsonl` or `.ndjson` for one row per line.
pub fn from_path(path: &Path) -> CausenetResult<Box<dyn DatasetSource>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonFileSource::new(path))),
        Some("jsonl") | Some("ndjson") => Ok(Box::new(JsonLinesSource::new(path))),
        _ => Err(SourceError::UnsupportedFormat {
            path: path.display().to_string(),
        }
        .into()),
    }
}

fn read_text(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
