//! CausenetErrorCode trait for messages shown by the display layer.

/// Every error enum provides a stable code string so front ends can branch on
/// it without matching message text.
pub trait CausenetErrorCode {
    /// Returns the error code string (e.g., "CAUSE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted user-facing string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const CELL_PARSE_ERROR: &str = "CELL_PARSE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CAUSE_NOT_FOUND: &str = "CAUSE_NOT_FOUND";
pub const NO_RESULT: &str = "NO_RESULT";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
