//! Application-wide error types using thiserror.

use reelgraph_common::ReelGraphError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration, input, or rendering failure from the library crates.
    #[error(transparent)]
    Core(#[from] ReelGraphError),

    /// The configured delimiter is not a single-byte character.
    #[error("Delimiter {0:?} must be a single ASCII character")]
    Delimiter(char),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the failure comes from the input table rather than the environment.
    pub const fn is_input_error(&self) -> bool {
        match self {
            Self::Core(error) => error.is_fatal_input(),
            Self::Delimiter(_) | Self::Io(_) => false,
        }
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
