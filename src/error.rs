use thiserror::Error;

/// Errors raised by the I/O layer around the translation engine.
///
/// The engine itself (escaping, translating, parsing) is total and never
/// produces one of these.
#[derive(Debug, Error)]
pub enum StepError {
    /// A line of JSON input could not be read as a recorded action
    #[error("Invalid recorded action on line {line}: {reason}\n\nTip: Each action must be a JSON object with at least a \"kind\" field")]
    InvalidAction { line: usize, reason: String },

    /// Failed to serialize output
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StepError {
    /// Create an InvalidAction error for a 1-indexed input line
    pub fn invalid_action(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for StepError
pub type Result<T> = std::result::Result<T, StepError>;
