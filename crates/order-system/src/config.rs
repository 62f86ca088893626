//! Service addresses and timeouts.
//!
//! The services run on fixed, well-known ports. Every field is public so tests
//! can point a service at an ephemeral port (`127.0.0.1:0`) instead.

use std::net::SocketAddr;
use std::time::Duration;

/// Port of the Product service's gRPC listener.
pub const PRODUCT_SERVICE_PORT: u16 = 50051;
/// Port of the Order service's gRPC listener.
pub const ORDER_SERVICE_PORT: u16 = 50052;
/// Port of the Order service's HTTP/JSON listener.
pub const ORDER_HTTP_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    pub listen_addr: SocketAddr,
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], PRODUCT_SERVICE_PORT)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// gRPC `OrderService` listener.
    pub grpc_addr: SocketAddr,
    /// HTTP `POST /api/orders` listener.
    pub http_addr: SocketAddr,
    /// URI of the Product service, e.g. `http://localhost:50051`.
    pub catalog_endpoint: String,
    /// Bound on establishing the catalog connection.
    pub connect_timeout: Duration,
    /// Deadline given to each HTTP request. gRPC callers bring their own.
    pub http_request_timeout: Duration,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            grpc_addr: SocketAddr::from(([0, 0, 0, 0], ORDER_SERVICE_PORT)),
            http_addr: SocketAddr::from(([0, 0, 0, 0], ORDER_HTTP_PORT)),
            catalog_endpoint: format!("http://localhost:{}", PRODUCT_SERVICE_PORT),
            connect_timeout: Duration::from_secs(5),
            http_request_timeout: Duration::from_secs(5),
        }
    }
}

/// Settings for the `order-client` binary.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub order_endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            order_endpoint: format!("http://localhost:{}", ORDER_SERVICE_PORT),
            timeout: Duration::from_secs(1),
        }
    }
}
