//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::{self, CausenetErrorCode};
use super::{CellError, ConfigError, LookupError, SourceError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CausenetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Source(#[from] SourceError),

    #[error("Cell error: {0}")]
    Cell(#[from] CellError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Lock poisoned: {0}")]
    Concurrency(String),
}

impl CausenetErrorCode for CausenetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
            Self::Cell(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Lookup(e) => e.error_code(),
            Self::Concurrency(_) => error_code::CONCURRENCY_ERROR,
        }
    }
}

pub type CausenetResult<T> = Result<T, CausenetError>;
