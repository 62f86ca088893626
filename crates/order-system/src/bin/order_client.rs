//! Sample client: places one order (2 × `P1` for `USER123`) against the Order
//! service with a one-second deadline and logs the reply.

use order_proto::order_service_client::OrderServiceClient;
use order_proto::OrderRequest;
use order_system::config::ClientConfig;
use order_system::lifecycle::setup_tracing;
use tonic::transport::Endpoint;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let config = ClientConfig::default();

    let channel = Endpoint::from_shared(config.order_endpoint.clone())
        .map_err(|e| e.to_string())?
        .connect()
        .await
        .map_err(|e| {
            error!(endpoint = %config.order_endpoint, error = %e, "Did not connect");
            e.to_string()
        })?;
    let mut client = OrderServiceClient::new(channel);

    let mut request = tonic::Request::new(OrderRequest {
        product_id: "P1".to_string(),
        quantity: 2,
        user_id: "USER123".to_string(),
    });
    request.set_timeout(config.timeout);

    let response = client
        .create_order(request)
        .await
        .map_err(|status| {
            error!(code = ?status.code(), message = status.message(), "Could not create order");
            status.to_string()
        })?
        .into_inner();

    info!(
        "Order Response: ID={}, Status={}, Total Price={}",
        response.order_id, response.status, response.total_price
    );
    Ok(())
}
