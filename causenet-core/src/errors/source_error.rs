//! Dataset source errors. The only failures that abort a graph build.

use super::error_code::{self, CausenetErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Cannot read dataset {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Unsupported dataset format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Malformed dataset {path}: {message}")]
    Malformed { path: String, message: String },
}

impl CausenetErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            _ => error_code::SOURCE_ERROR,
        }
    }
}
