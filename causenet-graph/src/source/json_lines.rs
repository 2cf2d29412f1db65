use std::path::{Path, PathBuf};

use causenet_core::errors::SourceError;
use causenet_core::{CausenetResult, Dataset, DatasetSource, RawRow};

/// A JSON Lines file: one row object per line. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct JsonLinesSource {
    path: PathBuf,
}

impl JsonLinesSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonLinesSource {
    fn load(&self) -> CausenetResult<Dataset> {
        let text = super::read_text(&self.path)?;
        let mut rows = Vec::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row: RawRow = serde_json::from_str(line).map_err(|e| SourceError::Malformed {
                path: self.path.display().to_string(),
                message: format!("line {}: {e}", number + 1),
            })?;
            rows.push(row);
        }
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "dataset loaded");
        Ok(Dataset::new(rows))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
