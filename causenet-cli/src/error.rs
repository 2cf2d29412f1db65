use causenet_core::errors::CausenetErrorCode;
use causenet_core::CausenetError;

/// Everything `causenet` can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CausenetError),

    #[error("Cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// `[CODE] message`, as shown to the user.
    pub fn display_string(&self) -> String {
        match self {
            Self::Core(e) => e.display_string(),
            Self::Encode(_) | Self::Io(_) => format!("[OUTPUT_ERROR] {self}"),
        }
    }
}
