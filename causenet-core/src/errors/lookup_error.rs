//! Query-time lookup errors, surfaced to the user. Never fatal.

use super::error_code::{self, CausenetErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("cause not found: {cause}")]
    CauseNotFound { cause: String },

    #[error("no exploration has been run yet")]
    NoResultYet,
}

impl CausenetErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CauseNotFound { .. } => error_code::CAUSE_NOT_FOUND,
            Self::NoResultYet => error_code::NO_RESULT,
        }
    }
}
