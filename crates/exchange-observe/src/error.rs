use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid logger format {0:?} (expected: text|json|journald)")]
    InvalidFormat(String),

    #[error("invalid log filter {directive:?}: {reason}")]
    InvalidLevel { directive: String, reason: String },

    #[error("journald logging unavailable: {0}")]
    JournaldUnavailable(String),

    #[error("global logger already installed: {0}")]
    AlreadyInitialized(String),
}
