//! Client side of the task results protocol.
//!
//! A [`ShuffleResultClient`] is bound to one remote output buffer and pulls
//! pages from it with caller-supplied tokens, acknowledges consumed pages in
//! the background and aborts the buffer when it is no longer needed.

pub mod proto {
    tonic::include_proto!("exchange.results.v1");
}

mod config;
pub use config::ClientConfig;

mod errors;
pub use errors::ClientError;

mod rpc;
pub use rpc::{RpcClientFactory, TaskResultsRpc};

mod grpc;
pub use grpc::{GrpcClientFactory, GrpcTaskResults};

mod convert;

mod client;
pub use client::{RpcShuffleClient, ShuffleResultClient};

pub use proto::task_results_server::{TaskResults, TaskResultsServer};
pub use tonic;
