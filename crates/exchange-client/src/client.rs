use std::{fmt, num::NonZeroU64, sync::Arc};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tracing::{debug, trace};

use exchange_model::{BufferLocation, BufferRef, PagesResponse, Token};

use crate::errors::ClientError;
use crate::rpc::{RpcClientFactory, TaskResultsRpc};

/// Result retrieval for one remote output buffer.
///
/// The driver owns flow control: it picks the token for every fetch, decides
/// when to acknowledge and when to abort. The client forwards every call, even
/// after an abort, and never retries.
#[async_trait]
pub trait RpcShuffleClient: Send + Sync {
    /// Pages starting at `token`, bounded by the size hint.
    async fn fetch(
        &self,
        token: Token,
        max_response_size: NonZeroU64,
    ) -> Result<PagesResponse, ClientError>;

    /// Tell the buffer that pages before `next_token` were consumed.
    ///
    /// Returns as soon as the call is scheduled. Its outcome is not observable
    /// by the caller: failures are logged at debug level and dropped.
    fn acknowledge(&self, next_token: Token);

    /// Drop all state of the buffer on the remote side.
    async fn abort(&self) -> Result<(), ClientError>;
}

/// [`RpcShuffleClient`] bound to a single `(task, buffer)` pair.
///
/// Holds no mutable state after construction; clones share the stub.
pub struct ShuffleResultClient<C> {
    rpc: Arc<C>,
    runtime: Handle,
    buffer: Arc<BufferRef>,
}

impl<C> ShuffleResultClient<C>
where
    C: TaskResultsRpc,
{
    /// Bind a stub for `location`'s authority. No remote call is made.
    ///
    /// `runtime` runs background acknowledgements.
    pub fn new<F>(
        factory: &F,
        location: BufferLocation,
        runtime: Handle,
    ) -> Result<Self, ClientError>
    where
        F: RpcClientFactory<Client = C>,
    {
        let (authority, buffer) = location.into_parts();
        let rpc = {
            let _guard = runtime.enter();
            factory.bind(&authority)?
        };

        debug!(
            %authority,
            task_id = %buffer.task_id,
            buffer_id = %buffer.buffer_id,
            "shuffle result client bound"
        );
        Ok(Self::from_rpc(Arc::new(rpc), buffer, runtime))
    }

    /// Decode a v1 location string, then bind as [`ShuffleResultClient::new`].
    pub fn from_location<F>(
        factory: &F,
        location: &str,
        runtime: Handle,
    ) -> Result<Self, ClientError>
    where
        F: RpcClientFactory<Client = C>,
    {
        let location = BufferLocation::decode_v1(location)?;
        Self::new(factory, location, runtime)
    }

    /// Wrap an already bound stub.
    pub fn from_rpc(rpc: Arc<C>, buffer: BufferRef, runtime: Handle) -> Self {
        Self {
            rpc,
            runtime,
            buffer: Arc::new(buffer),
        }
    }

    pub fn buffer(&self) -> &BufferRef {
        &self.buffer
    }

    /// Fetch pages starting at `token`.
    ///
    /// The reply is reshaped inside this future right after the call
    /// completes: no spawn, no I/O. Errors come back exactly as the stub
    /// produced them. Dropping the future cancels the call.
    pub async fn fetch(
        &self,
        token: Token,
        max_response_size: NonZeroU64,
    ) -> Result<PagesResponse, ClientError> {
        let reply = self
            .rpc
            .get_results(&self.buffer, token, max_response_size.get())
            .await?;

        let response = PagesResponse::from(reply);
        trace!(
            buffer = %self.buffer,
            token,
            next_token = response.next_token,
            pages = response.page_count(),
            complete = response.buffer_complete,
            "fetched results"
        );
        Ok(response)
    }

    /// Schedule one acknowledgement on the background runtime and return.
    pub fn acknowledge(&self, next_token: Token) {
        let rpc = Arc::clone(&self.rpc);
        let buffer = Arc::clone(&self.buffer);

        // Detached: the outcome is intentionally unobservable.
        self.runtime.spawn(async move {
            if let Err(e) = rpc.acknowledge_results(&buffer, next_token).await {
                debug!(
                    task_id = %buffer.task_id,
                    buffer_id = %buffer.buffer_id,
                    token = next_token,
                    error = %e,
                    "acknowledge request failed"
                );
            }
        });
    }

    /// Abort the remote buffer. Not guarded: repeated calls are all forwarded.
    pub async fn abort(&self) -> Result<(), ClientError> {
        debug!(buffer = %self.buffer, "aborting results");
        self.rpc.abort_results(&self.buffer).await
    }
}

#[async_trait]
impl<C> RpcShuffleClient for ShuffleResultClient<C>
where
    C: TaskResultsRpc,
{
    async fn fetch(
        &self,
        token: Token,
        max_response_size: NonZeroU64,
    ) -> Result<PagesResponse, ClientError> {
        ShuffleResultClient::fetch(self, token, max_response_size).await
    }

    fn acknowledge(&self, next_token: Token) {
        ShuffleResultClient::acknowledge(self, next_token)
    }

    async fn abort(&self) -> Result<(), ClientError> {
        ShuffleResultClient::abort(self).await
    }
}

impl<C> Clone for ShuffleResultClient<C> {
    fn clone(&self) -> Self {
        Self {
            rpc: Arc::clone(&self.rpc),
            runtime: self.runtime.clone(),
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<C> fmt::Debug for ShuffleResultClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffleResultClient")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
