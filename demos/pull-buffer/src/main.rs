use std::num::NonZeroU64;
use std::time::Duration;

use anyhow::{Context, bail};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use exchange_client::{ClientConfig, GrpcClientFactory, RpcShuffleClient, ShuffleResultClient};
use exchange_model::Token;
use exchange_observe::{LoggerConfig, init_logger};

const MAX_RESPONSE_SIZE: NonZeroU64 = NonZeroU64::new(16 * 1024 * 1024).unwrap();
const MIN_IDLE_DELAY: Duration = Duration::from_millis(10);
const MAX_IDLE_DELAY: Duration = Duration::from_secs(1);

/// Doubling pause between fetches that came back empty.
#[derive(Debug)]
struct IdleBackoff {
    next: Duration,
}

impl IdleBackoff {
    fn new() -> Self {
        Self {
            next: MIN_IDLE_DELAY,
        }
    }

    fn reset(&mut self) {
        self.next = MIN_IDLE_DELAY;
    }

    fn next_delay(&mut self) -> Duration {
        let delay = self.next;
        self.next = (self.next * 2).min(MAX_IDLE_DELAY);
        delay
    }
}

#[derive(Debug, Default)]
struct Drained {
    pages: usize,
    bytes: usize,
    next_token: Token,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    let cfg = LoggerConfig::from_env("PULL")?;
    init_logger(&cfg)?;

    // 2) Transport config
    let config = match std::env::var("PULL_CLIENT_CONFIG") {
        Ok(path) => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading client config {path}"))?;
            ClientConfig::from_json(&raw)
                .with_context(|| format!("parsing client config {path}"))?
        }
        Err(_) => ClientConfig::default(),
    };

    // 3) Client
    let Some(location) = std::env::args().nth(1) else {
        bail!("usage: pull-buffer <scheme://host:port/v1/task/{{taskId}}/results/{{bufferId}}/>");
    };
    let factory = GrpcClientFactory::new(config);
    let client = ShuffleResultClient::from_location(&factory, &location, Handle::current())?;
    info!(buffer = %client.buffer(), "client ready");

    // 4) Pull until the buffer completes or Ctrl+C
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let outcome = tokio::select! {
        res = drain(&client) => res,
        _ = cancel.cancelled() => {
            info!("interrupted, abandoning buffer");
            Ok(Drained::default())
        }
    };

    // 5) Release the remote buffer either way
    if let Err(e) = client.abort().await {
        warn!(error = %e, "abort failed; remote buffer state unknown");
    }

    let drained = outcome?;
    info!(
        pages = drained.pages,
        bytes = drained.bytes,
        next_token = drained.next_token,
        "done"
    );
    Ok(())
}

async fn drain(client: &dyn RpcShuffleClient) -> anyhow::Result<Drained> {
    let mut drained = Drained::default();
    let mut instance: Option<String> = None;
    let mut idle = IdleBackoff::new();

    loop {
        let response = client.fetch(drained.next_token, MAX_RESPONSE_SIZE).await?;

        let seen = instance.get_or_insert_with(|| response.task_instance_id.clone());
        if *seen != response.task_instance_id {
            bail!(
                "remote task restarted ({seen} -> {}), token {} is no longer valid",
                response.task_instance_id,
                drained.next_token
            );
        }

        drained.pages += response.page_count();
        drained.bytes += response.payload_bytes();
        drained.next_token = response.next_token;
        if response.buffer_complete {
            if !response.is_empty() {
                client.acknowledge(response.next_token);
            }
            return Ok(drained);
        }

        if response.is_empty() {
            // Producer has nothing yet.
            tokio::time::sleep(idle.next_delay()).await;
        } else {
            client.acknowledge(response.next_token);
            idle.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use exchange_client::ClientError;
    use exchange_model::{PagesResponse, SerializedPage};

    /// Serves scripted replies in order and records acknowledgements.
    struct Scripted {
        replies: Mutex<Vec<PagesResponse>>,
        acks: Mutex<Vec<Token>>,
    }

    #[async_trait]
    impl RpcShuffleClient for Scripted {
        async fn fetch(
            &self,
            _token: Token,
            _max_response_size: NonZeroU64,
        ) -> Result<PagesResponse, ClientError> {
            Ok(self.replies.lock().unwrap().remove(0))
        }

        fn acknowledge(&self, next_token: Token) {
            self.acks.lock().unwrap().push(next_token);
        }

        async fn abort(&self) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn reply(token: Token, pages: usize, complete: bool) -> PagesResponse {
        let pages: Vec<_> = (0..pages)
            .map(|_| SerializedPage::new(vec![0; 4], 1, 4))
            .collect();
        let next_token = token + pages.len() as Token;
        PagesResponse::new("i-1", token, next_token, pages, complete)
    }

    #[test]
    fn idle_backoff_doubles_up_to_cap_and_resets() {
        let mut idle = IdleBackoff::new();
        assert_eq!(idle.next_delay(), MIN_IDLE_DELAY);
        assert_eq!(idle.next_delay(), MIN_IDLE_DELAY * 2);
        for _ in 0..20 {
            idle.next_delay();
        }
        assert_eq!(idle.next_delay(), MAX_IDLE_DELAY);

        idle.reset();
        assert_eq!(idle.next_delay(), MIN_IDLE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_replies_wait_before_refetching() {
        let client = Scripted {
            replies: Mutex::new(vec![
                reply(0, 0, false),
                reply(0, 0, false),
                reply(0, 2, false),
                reply(2, 1, true),
            ]),
            acks: Mutex::new(Vec::new()),
        };

        let started = tokio::time::Instant::now();
        let drained = drain(&client).await.unwrap();

        assert_eq!(started.elapsed(), MIN_IDLE_DELAY * 3);
        assert_eq!(drained.pages, 3);
        assert_eq!(drained.next_token, 3);
        assert_eq!(*client.acks.lock().unwrap(), vec![2, 3]);
    }
}
