use async_trait::async_trait;

use exchange_model::{BufferRef, Token};

use crate::errors::ClientError;
use crate::proto::GetResultsResponse;

/// Typed stub for the task results service of one worker.
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait]
pub trait TaskResultsRpc: Send + Sync + 'static {
    async fn get_results(
        &self,
        buffer: &BufferRef,
        token: Token,
        max_size_bytes: u64,
    ) -> Result<GetResultsResponse, ClientError>;

    async fn acknowledge_results(
        &self,
        buffer: &BufferRef,
        next_token: Token,
    ) -> Result<(), ClientError>;

    async fn abort_results(&self, buffer: &BufferRef) -> Result<(), ClientError>;
}

/// Produces stubs bound to a worker's network authority (`host:port`).
///
/// Binding must not perform network I/O.
pub trait RpcClientFactory {
    type Client: TaskResultsRpc;

    fn bind(&self, authority: &str) -> Result<Self::Client, ClientError>;
}
