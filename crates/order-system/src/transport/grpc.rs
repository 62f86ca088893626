//! gRPC adapters for both services.
//!
//! [`ProductRpc`] serves `order_system.ProductService` from a shared
//! [`Catalog`]. [`OrderRpc`] serves `order_system.OrderService` by validating
//! the request and handing it to the [`OrderWorkflow`].

use crate::catalog::Catalog;
use crate::clients::AvailabilityError;
use crate::model::{AvailabilityQuery, OrderIntent, OrderRequestError};
use crate::transport::deadline::context_from_metadata;
use crate::workflow::OrderWorkflow;
use order_proto::order_service_server::OrderService;
use order_proto::product_service_server::ProductService;
use order_proto::{OrderRequest, OrderResponse, ProductRequest, ProductResponse};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, info, warn};

impl From<AvailabilityError> for Status {
    fn from(error: AvailabilityError) -> Self {
        let message = error.to_string();
        match error {
            AvailabilityError::Unreachable(_) => Status::unavailable(message),
            AvailabilityError::DeadlineExceeded => Status::deadline_exceeded(message),
            AvailabilityError::Cancelled => Status::cancelled(message),
            AvailabilityError::Rejected { code, message } => Status::new(code, message),
            AvailabilityError::MalformedAnswer(_) => Status::internal(message),
        }
    }
}

impl From<OrderRequestError> for Status {
    fn from(error: OrderRequestError) -> Self {
        Status::invalid_argument(error.to_string())
    }
}

/// `ProductService` backed by an in-memory catalog.
#[derive(Debug, Clone)]
pub struct ProductRpc {
    catalog: Arc<Catalog>,
}

impl ProductRpc {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[tonic::async_trait]
impl ProductService for ProductRpc {
    async fn check_product_availability(
        &self,
        request: Request<ProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let request = request.into_inner();
        debug!(product_id = %request.product_id, quantity = request.quantity, "CheckProductAvailability");

        let quantity = u32::try_from(request.quantity).map_err(|_| {
            Status::invalid_argument(format!(
                "quantity must not be negative, got {}",
                request.quantity
            ))
        })?;

        let query = AvailabilityQuery::new(request.product_id, quantity);
        let answer = self.catalog.check_availability(&query);
        Ok(Response::new(ProductResponse::from(answer)))
    }
}

/// `OrderService` backed by the order workflow.
#[derive(Clone)]
pub struct OrderRpc {
    workflow: OrderWorkflow,
}

impl OrderRpc {
    pub fn new(workflow: OrderWorkflow) -> Self {
        Self { workflow }
    }
}

#[tonic::async_trait]
impl OrderService for OrderRpc {
    async fn create_order(
        &self,
        request: Request<OrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let ctx = context_from_metadata(request.metadata());
        let request = request.into_inner();

        let intent = OrderIntent::parse(request.product_id, request.quantity, request.user_id)
            .inspect_err(|e| info!(error = %e, "Rejected CreateOrder request"))?;

        let outcome = self.workflow.place_order(&intent, &ctx).await.map_err(|e| {
            warn!(error = %e, "CreateOrder failed");
            Status::from(e)
        })?;

        Ok(Response::new(OrderResponse::from(outcome)))
    }
}
