//! Product service: serves availability checks from the sample catalog on
//! port 50051 until Ctrl-C.

use order_system::catalog::Catalog;
use order_system::config::ProductServiceConfig;
use order_system::lifecycle::{setup_tracing, LifecycleError, ProductSystem};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), LifecycleError> {
    setup_tracing();

    let catalog = Arc::new(Catalog::sample());
    let system = ProductSystem::start(ProductServiceConfig::default(), catalog).await?;

    system.run_until(tokio::signal::ctrl_c()).await
}
