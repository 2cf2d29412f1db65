//! Relation-cell parse errors. Always recovered: the cell counts as empty.

use super::error_code::{self, CausenetErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    #[error("relation cell is not valid JSON after repair: {message}")]
    InvalidJson { message: String },

    #[error("relation cell must hold a JSON array, found {found}")]
    NotAnArray { found: String },
}

impl CausenetErrorCode for CellError {
    fn error_code(&self) -> &'static str {
        error_code::CELL_PARSE_ERROR
    }
}
