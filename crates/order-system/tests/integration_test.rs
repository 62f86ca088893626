use order_proto::order_service_client::OrderServiceClient;
use order_proto::product_service_client::ProductServiceClient;
use order_proto::{OrderRequest, ProductRequest};
use order_system::catalog::Catalog;
use order_system::clients::mock::MockAvailabilityClient;
use order_system::config::{OrderServiceConfig, ProductServiceConfig};
use order_system::lifecycle::{OrderSystem, ProductSystem};
use order_system::model::AvailabilityAnswer;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Channel;
use tonic::Code;

fn local() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

async fn start_product() -> ProductSystem {
    let config = ProductServiceConfig { listen_addr: local() };
    ProductSystem::start(config, Arc::new(Catalog::sample()))
        .await
        .expect("Failed to start product service")
}

fn order_config(catalog_endpoint: String) -> OrderServiceConfig {
    OrderServiceConfig {
        grpc_addr: local(),
        http_addr: local(),
        catalog_endpoint,
        connect_timeout: Duration::from_secs(1),
        http_request_timeout: Duration::from_secs(5),
    }
}

async fn start_order(catalog: &ProductSystem) -> OrderSystem {
    OrderSystem::start(order_config(format!("http://{}", catalog.addr)))
        .await
        .expect("Failed to start order service")
}

async fn grpc_client(addr: SocketAddr) -> OrderServiceClient<Channel> {
    OrderServiceClient::connect(format!("http://{}", addr))
        .await
        .expect("Failed to connect to order service")
}

fn order_request(product_id: &str, quantity: i32, user_id: &str) -> tonic::Request<OrderRequest> {
    let mut request = tonic::Request::new(OrderRequest {
        product_id: product_id.to_string(),
        quantity,
        user_id: user_id.to_string(),
    });
    request.set_timeout(Duration::from_secs(2));
    request
}

async fn post_order(http_addr: SocketAddr, body: Value) -> (reqwest::StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/orders", http_addr))
        .json(&body)
        .send()
        .await
        .expect("HTTP request failed");
    let status = response.status();
    let json = response.json::<Value>().await.expect("Body was not JSON");
    (status, json)
}

/// Full end-to-end test: both services on real sockets, orders placed over
/// gRPC and over HTTP.
#[tokio::test]
async fn test_full_order_system_integration() {
    let product = start_product().await;
    let order = start_order(&product).await;

    // gRPC: available product.
    let mut client = grpc_client(order.grpc_addr).await;
    let response = client
        .create_order(order_request("P1", 2, "USER123"))
        .await
        .expect("CreateOrder failed")
        .into_inner();
    assert_eq!(response.order_id, "ORD-USER123-P1");
    assert_eq!(response.status, "SUCCESS");
    assert_eq!(response.total_price, "1999.98");

    // gRPC: more than in stock.
    let response = client
        .create_order(order_request("P2", 21, "USER123"))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.order_id, "");
    assert_eq!(response.status, "FAILED");
    assert_eq!(response.total_price, "0");

    // gRPC: invalid input.
    let status = client
        .create_order(order_request("P1", 1, ""))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    // HTTP agrees with gRPC on the business content.
    let (status, json) = post_order(
        order.http_addr,
        json!({"product_id": "P1", "quantity": 2, "user_id": "USER123"}),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(json["order_id"], "ORD-USER123-P1");
    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(json["total_price"].as_f64(), Some(1999.98));

    let (status, json) = post_order(
        order.http_addr,
        json!({"product_id": "UNKNOWN", "quantity": 1, "user_id": "USER123"}),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(json["status"], "FAILED");

    let (status, _) = post_order(order.http_addr, json!({"product_id": "P1"})).await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);

    drop(client);
    order.shutdown().await.expect("Order service shutdown failed");
    product.shutdown().await.expect("Product service shutdown failed");
}

#[tokio::test]
async fn test_product_service_over_grpc() {
    let product = start_product().await;
    let mut client = ProductServiceClient::connect(format!("http://{}", product.addr))
        .await
        .unwrap();

    let laptop = client
        .check_product_availability(ProductRequest {
            product_id: "P1".to_string(),
            quantity: 10,
        })
        .await
        .unwrap()
        .into_inner();
    assert!(laptop.is_available);
    assert_eq!(laptop.price, "999.99");
    assert_eq!(laptop.product_name, "Laptop");

    let unknown = client
        .check_product_availability(ProductRequest {
            product_id: "P3".to_string(),
            quantity: 1,
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!unknown.is_available);
    assert_eq!(unknown.price, "");
    assert_eq!(unknown.product_name, "");

    drop(client);
    product.shutdown().await.unwrap();
}

/// With the catalog down, the Order service still starts; orders fail with
/// UNAVAILABLE over gRPC and 500 over HTTP.
#[tokio::test]
async fn test_catalog_down() {
    // Reserve a port, then free it so nothing is listening there.
    let unused = std::net::TcpListener::bind(local()).unwrap().local_addr().unwrap();

    let order = OrderSystem::start(order_config(format!("http://{}", unused)))
        .await
        .expect("Order service should start without its catalog");

    let mut client = grpc_client(order.grpc_addr).await;
    let status = client
        .create_order(order_request("P1", 2, "USER123"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);

    let (status, json) = post_order(
        order.http_addr,
        json!({"product_id": "P1", "quantity": 2, "user_id": "USER123"}),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());

    drop(client);
    order.shutdown().await.unwrap();
}

/// The caller's gRPC deadline bounds the wait on a slow catalog.
#[tokio::test]
async fn test_grpc_deadline_reaches_catalog_call() {
    let mock = MockAvailabilityClient::new();
    mock.expect_query("P1")
        .after(Duration::from_secs(10))
        .return_ok(AvailabilityAnswer {
            is_available: true,
            unit_price: Decimal::new(99999, 2),
            product_name: "Laptop".to_string(),
        });

    let order = OrderSystem::start_with_client(
        order_config("http://unused".to_string()),
        Arc::new(mock.clone()),
    )
    .await
    .unwrap();

    let mut client = grpc_client(order.grpc_addr).await;
    let mut request = order_request("P1", 1, "USER123");
    request.set_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let status = client.create_order(request).await.unwrap_err();
    assert!(
        matches!(status.code(), Code::DeadlineExceeded | Code::Cancelled),
        "unexpected status: {:?}",
        status
    );
    assert!(started.elapsed() < Duration::from_secs(5));

    drop(client);
    order.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders() {
    let product = start_product().await;
    let order = start_order(&product).await;
    let client = grpc_client(order.grpc_addr).await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let mut client = client.clone();
        handles.push(tokio::spawn(async move {
            let user = format!("USER{}", i);
            let response = client
                .create_order(order_request("P2", 1, &user))
                .await
                .unwrap()
                .into_inner();
            (user, response)
        }));
    }

    for handle in handles {
        let (user, response) = handle.await.unwrap();
        assert_eq!(response.status, "SUCCESS");
        assert_eq!(response.order_id, format!("ORD-{}-P2", user));
        assert_eq!(response.total_price, "599.99");
    }

    // Placing orders never changes stock.
    let mut client = client;
    let response = client
        .create_order(order_request("P2", 20, "USER0"))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.status, "SUCCESS");

    drop(client);
    order.shutdown().await.unwrap();
    product.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_port_conflict_is_reported() {
    let product = start_product().await;
    let config = ProductServiceConfig { listen_addr: product.addr };

    let result = ProductSystem::start(config, Arc::new(Catalog::sample())).await;
    assert!(matches!(
        result,
        Err(order_system::lifecycle::LifecycleError::Bind { .. })
    ));

    product.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_run_until_stops_on_signal() {
    let product = start_product().await;
    product
        .run_until(async { Ok(()) })
        .await
        .expect("Clean stop should succeed");
}

/// A broken signal source still stops the servers but is reported as an
/// error rather than a clean stop.
#[tokio::test]
async fn test_run_until_reports_failed_signal() {
    let product = start_product().await;
    let order = start_order(&product).await;
    let http_addr = order.http_addr;

    let result = order
        .run_until(async { Err(std::io::Error::other("no signal handler")) })
        .await;
    assert!(matches!(
        result,
        Err(order_system::lifecycle::LifecycleError::Signal { .. })
    ));

    // The HTTP listener is closed.
    assert!(tokio::net::TcpStream::connect(http_addr).await.is_err());

    product.shutdown().await.unwrap();
}
