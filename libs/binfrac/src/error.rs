//! Error types for binfrac

use thiserror::Error;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
}

impl ConvertError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The offending decimal text
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidInput { input, .. } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
