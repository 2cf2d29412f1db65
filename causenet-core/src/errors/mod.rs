//! Error handling for causenet.
//! One error enum per subsystem, `thiserror` only.

pub mod causenet_error;
pub mod cell_error;
pub mod config_error;
pub mod error_code;
pub mod lookup_error;
pub mod source_error;
pub mod validation_error;

pub use causenet_error::{CausenetError, CausenetResult};
pub use cell_error::CellError;
pub use config_error::ConfigError;
pub use error_code::CausenetErrorCode;
pub use lookup_error::LookupError;
pub use source_error::SourceError;
pub use validation_error::ValidationError;
