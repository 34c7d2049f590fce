use thiserror::Error;

/// Core domain errors
///
/// The first five variants are the outcomes an account operation can report
/// to its caller. `Storage` and `Internal` wrap failures of the collaborators
/// (row store, password hasher) themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed input, or a failed credential check
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Username or email already taken
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// No-op change attempted
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// A write that must have affected exactly one row did not
    #[error("Fatal: {message}")]
    Fatal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The bare message, without the kind prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::InvalidState { message }
            | Self::Fatal { message }
            | Self::Storage { message }
            | Self::Internal { message } => message,
        }
    }
}
