use crate::catalog::Catalog;
use crate::config::ProductServiceConfig;
use crate::lifecycle::task::{bind, join_all, wait_for_signal, ServiceTask};
use crate::lifecycle::LifecycleError;
use crate::transport::ProductRpc;
use order_proto::product_service_server::ProductServiceServer;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use tracing::info;

/// The running Product service.
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::start(ProductServiceConfig::default(), Arc::new(Catalog::sample())).await?;
/// // ... serve until asked to stop ...
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Address the gRPC listener is bound to.
    pub addr: SocketAddr,
    shutdown: CancellationToken,
    tasks: Vec<ServiceTask>,
}

impl ProductSystem {
    /// Binds the listener and starts serving `ProductService` from `catalog`.
    pub async fn start(
        config: ProductServiceConfig,
        catalog: Arc<Catalog>,
    ) -> Result<Self, LifecycleError> {
        let (listener, addr) = bind(config.listen_addr).await?;
        let shutdown = CancellationToken::new();
        let signal = shutdown.clone();

        let products = catalog.len();
        let server = Server::builder()
            .add_service(ProductServiceServer::new(ProductRpc::new(catalog)))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                signal.cancelled().await
            });
        let task = ServiceTask::spawn("product-grpc", server);

        info!(%addr, products, "Product service listening");
        Ok(Self {
            addr,
            shutdown,
            tasks: vec![task],
        })
    }

    /// Serves until `signal` resolves, then shuts down.
    ///
    /// If `signal` fails, the service is still stopped but the signal error
    /// is returned, so the caller can tell it apart from a requested stop.
    pub async fn run_until<S>(self, signal: S) -> Result<(), LifecycleError>
    where
        S: Future<Output = io::Result<()>>,
    {
        let signalled = wait_for_signal(signal).await;
        self.shutdown().await?;
        signalled
    }

    /// Stops accepting requests and waits for in-flight ones to finish.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down product service...");
        self.shutdown.cancel();
        join_all(self.tasks).await?;
        info!("Product service shutdown complete.");
        Ok(())
    }
}
