use crate::clients::{AvailabilityClient, GrpcAvailabilityClient};
use crate::config::OrderServiceConfig;
use crate::lifecycle::task::{bind, join_all, wait_for_signal, ServiceTask};
use crate::lifecycle::LifecycleError;
use crate::transport::{router, OrderRpc};
use crate::workflow::OrderWorkflow;
use order_proto::order_service_server::OrderServiceServer;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use tracing::info;

/// The running Order service: one workflow shared by a gRPC and an HTTP
/// front-end.
///
/// ```text
///   gRPC :50052 ──► OrderRpc ──┐
///                              ├──► OrderWorkflow ──► AvailabilityClient ──► Product service
///   HTTP :8080 ───► router ────┘
/// ```
pub struct OrderSystem {
    pub grpc_addr: SocketAddr,
    pub http_addr: SocketAddr,
    shutdown: CancellationToken,
    tasks: Vec<ServiceTask>,
}

impl OrderSystem {
    /// Starts the Order service against the Product service at
    /// `config.catalog_endpoint`.
    ///
    /// The catalog connection is lazy: startup succeeds even if the Product
    /// service is not running yet.
    pub async fn start(config: OrderServiceConfig) -> Result<Self, LifecycleError> {
        let client =
            GrpcAvailabilityClient::connect_lazy(config.catalog_endpoint.clone(), config.connect_timeout)?;
        info!(endpoint = %config.catalog_endpoint, "Catalog client ready");
        Self::start_with_client(config, Arc::new(client)).await
    }

    /// Starts the Order service with an injected availability client.
    pub async fn start_with_client(
        config: OrderServiceConfig,
        availability: Arc<dyn AvailabilityClient>,
    ) -> Result<Self, LifecycleError> {
        // Bind both before spawning so a port conflict leaves nothing running.
        let (grpc_listener, grpc_addr) = bind(config.grpc_addr).await?;
        let (http_listener, http_addr) = bind(config.http_addr).await?;

        let workflow = OrderWorkflow::new(availability);
        let shutdown = CancellationToken::new();

        let grpc_signal = shutdown.clone();
        let grpc_server = Server::builder()
            .add_service(OrderServiceServer::new(OrderRpc::new(workflow.clone())))
            .serve_with_incoming_shutdown(TcpListenerStream::new(grpc_listener), async move {
                grpc_signal.cancelled().await
            });

        let http_signal = shutdown.clone();
        let app = router(workflow, config.http_request_timeout);
        let http_server = async move {
            axum::serve(http_listener, app)
                .with_graceful_shutdown(async move { http_signal.cancelled().await })
                .await
        };

        let tasks = vec![
            ServiceTask::spawn("order-grpc", grpc_server),
            ServiceTask::spawn("order-http", http_server),
        ];

        info!(%grpc_addr, %http_addr, "Order service listening");
        Ok(Self {
            grpc_addr,
            http_addr,
            shutdown,
            tasks,
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

    /// Gracefully shuts down both front-ends.
    ///
    /// Returns an error if either server failed or its task panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down order service...");
        self.shutdown.cancel();
        join_all(self.tasks).await?;
        info!("Order service shutdown complete.");
        Ok(())
    }
}
