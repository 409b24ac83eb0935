use thiserror::Error;

/// Failure to parse a task or output buffer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("invalid task id {raw:?}: {reason}")]
    InvalidTaskId { raw: String, reason: &'static str },

    #[error("invalid output buffer id {raw:?}: expected a non-negative 32-bit integer")]
    InvalidBufferId { raw: String },
}

/// Failure to decode a buffer location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location is empty")]
    Empty,

    #[error("location {0:?} has no scheme")]
    MissingScheme(String),

    #[error("location {0:?} has no authority")]
    MissingAuthority(String),

    #[error("location path {path:?} has {found} segments, expected at least {expected}")]
    TooFewSegments {
        path: String,
        found: usize,
        expected: usize,
    },

    #[error("location path segment {index} is {found:?}, expected {expected:?}")]
    UnexpectedSegment {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("location task id: {0}")]
    InvalidTaskId(#[source] IdError),

    #[error("location buffer id: {0}")]
    InvalidBufferId(#[source] IdError),
}
