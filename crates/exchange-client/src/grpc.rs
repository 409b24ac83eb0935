use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use exchange_model::{BufferRef, Token};

use crate::config::ClientConfig;
use crate::convert;
use crate::errors::ClientError;
use crate::proto::{GetResultsResponse, task_results_client::TaskResultsClient};
use crate::rpc::{RpcClientFactory, TaskResultsRpc};

/// Binds lazily connected gRPC stubs.
#[derive(Debug, Clone, Default)]
pub struct GrpcClientFactory {
    config: ClientConfig,
}

impl GrpcClientFactory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, authority: &str) -> Result<Endpoint, ClientError> {
        let uri = format!("{}://{}", self.config.scheme, authority);
        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| ClientError::InvalidEndpoint(format!("{uri}: {e}")))?
            .connect_timeout(self.config.connect_timeout())
            .tcp_nodelay(self.config.tcp_nodelay);

        if let Some(timeout) = self.config.request_timeout() {
            endpoint = endpoint.timeout(timeout);
        }
        if let Some(interval) = self.config.keep_alive_interval() {
            endpoint = endpoint.http2_keep_alive_interval(interval);
        }
        Ok(endpoint)
    }
}

impl RpcClientFactory for GrpcClientFactory {
    type Client = GrpcTaskResults;

    /// Must run inside a Tokio runtime: the lazy channel spawns its worker on bind.
    fn bind(&self, authority: &str) -> Result<Self::Client, ClientError> {
        let endpoint = self.endpoint(authority)?;
        debug!(uri = %endpoint.uri(), "binding task results stub");
        Ok(GrpcTaskResults::new(endpoint.connect_lazy()))
    }
}

/// [`TaskResultsRpc`] over a shared gRPC channel.
///
/// The generated client is cloned per call; clones share the channel, so
/// concurrent calls never wait on each other here.
#[derive(Debug, Clone)]
pub struct GrpcTaskResults {
    inner: TaskResultsClient<Channel>,
}

impl GrpcTaskResults {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: TaskResultsClient::new(channel),
        }
    }
}

#[async_trait]
impl TaskResultsRpc for GrpcTaskResults {
    async fn get_results(
        &self,
        buffer: &BufferRef,
        token: Token,
        max_size_bytes: u64,
    ) -> Result<GetResultsResponse, ClientError> {
        let mut client = self.inner.clone();
        let request = convert::get_results_request(buffer, token, max_size_bytes);
        Ok(client.get_results(request).await?.into_inner())
    }

    async fn acknowledge_results(
        &self,
        buffer: &BufferRef,
        next_token: Token,
    ) -> Result<(), ClientError> {
        let mut client = self.inner.clone();
        let request = convert::acknowledge_results_request(buffer, next_token);
        client.acknowledge_results(request).await?;
        Ok(())
    }

    async fn abort_results(&self, buffer: &BufferRef) -> Result<(), ClientError> {
        let mut client = self.inner.clone();
        let request = convert::abort_results_request(buffer);
        client.abort_results(request).await?;
        Ok(())
    }
}
