use causenet_core::{CausenetResult, Dataset, DatasetSource, RawRow};

/// Rows held directly in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: Vec<RawRow>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

impl DatasetSource for InMemorySource {
    fn load(&self) -> CausenetResult<Dataset> {
        Ok(Dataset::new(self.rows.clone()))
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }
}
