use std::path::{Path, PathBuf};

use causenet_core::errors::SourceError;
use causenet_core::{CausenetResult, Dataset, DatasetSource, RawRow};

/// A file holding one JSON array of row objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonFileSource {
    fn load(&self) -> CausenetResult<Dataset> {
        let text = super::read_text(&self.path)?;
        let rows: Vec<RawRow> =
            serde_json::from_str(&text).map_err(|e| SourceError::Malformed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "dataset loaded");
        Ok(Dataset::new(rows))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
