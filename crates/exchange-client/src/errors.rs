use thiserror::Error;

use exchange_model::LocationError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid buffer location: {0}")]
    InvalidLocation(#[from] LocationError),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Remote rejection, timeout, or connection failure. Channels connect
    /// lazily, so a worker that cannot be reached shows up here as
    /// `Unavailable` on the first call.
    #[error("results call failed: {0}")]
    Rpc(#[source] Box<tonic::Status>),
}

impl ClientError {
    /// Raised while building the client; retrying the same input cannot succeed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidLocation(_) | ClientError::InvalidEndpoint(_)
        )
    }

    /// Status returned by the remote side or the transport, if any.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            ClientError::Rpc(status) => Some(status.as_ref()),
            _ => None,
        }
    }
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        ClientError::Rpc(Box::new(status))
    }
}
