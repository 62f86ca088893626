use crate::lifecycle::LifecycleError;
use std::fmt::Display;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Binds `addr`, returning the listener and the address actually bound (which
/// differs from `addr` when the port is 0).
pub(crate) async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr), LifecycleError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| LifecycleError::Bind { addr, source })?;
    let local = listener
        .local_addr()
        .map_err(|source| LifecycleError::Bind { addr, source })?;
    Ok((listener, local))
}

/// A server running in its own Tokio task.
pub(crate) struct ServiceTask {
    name: &'static str,
    handle: JoinHandle<Result<(), LifecycleError>>,
}

impl ServiceTask {
    pub(crate) fn spawn<F, E>(name: &'static str, server: F) -> Self
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
        E: Display,
    {
        let handle = tokio::spawn(async move {
            server.await.map_err(|e| {
                error!(service = name, error = %e, "Server stopped with an error");
                LifecycleError::Serve {
                    service: name,
                    message: e.to_string(),
                }
            })
        });
        Self { name, handle }
    }

    /// Waits for the server to finish draining.
    pub(crate) async fn join(self) -> Result<(), LifecycleError> {
        match self.handle.await {
            Ok(result) => {
                if result.is_ok() {
                    info!(service = self.name, "Stopped");
                }
                result
            }
            Err(source) => {
                error!(service = self.name, "Task failed: {:?}", source);
                Err(LifecycleError::TaskFailed {
                    service: self.name,
                    source,
                })
            }
        }
    }
}

/// Joins every task, returning the first failure after all have finished.
pub(crate) async fn join_all(tasks: Vec<ServiceTask>) -> Result<(), LifecycleError> {
    let mut first_error = None;
    for task in tasks {
        if let Err(e) = task.join().await {
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Waits for `signal`. A signal source that fails is an error, not a request
/// to stop.
pub(crate) async fn wait_for_signal<S>(signal: S) -> Result<(), LifecycleError>
where
    S: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Shutdown signal received");
            Ok(())
        }
        Err(source) => {
            error!(error = %source, "Failed to listen for the shutdown signal");
            Err(LifecycleError::Signal { source })
        }
    }
}
