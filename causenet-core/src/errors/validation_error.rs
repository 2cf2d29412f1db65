//! Relation-list validation errors. Always recovered: the whole list is
//! discarded for that row.

use super::error_code::{self, CausenetErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("element {position} is not an object")]
    ElementNotObject { position: usize },

    #[error("element {position} has no `{key}` key")]
    MissingCounterpart { position: usize, key: &'static str },

    #[error("element {position} has an unusable `{key}` value: {found}")]
    InvalidCounterpart {
        position: usize,
        key: &'static str,
        found: String,
    },

    #[error("element {position} has no `impact` key")]
    MissingImpact { position: usize },
}

impl CausenetErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
