//! Order service: gRPC on port 50052 and HTTP/JSON on port 8080, backed by the
//! Product service at `localhost:50051`. Runs until Ctrl-C.

use order_system::config::OrderServiceConfig;
use order_system::lifecycle::{setup_tracing, LifecycleError, OrderSystem};

#[tokio::main]
async fn main() -> Result<(), LifecycleError> {
    setup_tracing();

    let system = OrderSystem::start(OrderServiceConfig::default()).await?;

    system.run_until(tokio::signal::ctrl_c()).await
}
