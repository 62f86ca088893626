use crate::clients::InvalidEndpoint;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::task::JoinError;

/// Failure to start, run or stop a service.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),

    #[error("{service} stopped with an error: {message}")]
    Serve {
        service: &'static str,
        message: String,
    },

    #[error("failed to listen for the shutdown signal: {source}")]
    Signal {
        #[source]
        source: std::io::Error,
    },

    #[error("{service} task failed: {source}")]
    TaskFailed {
        service: &'static str,
        #[source]
        source: JoinError,
    },
}
