//! # Availability Client
//!
//! The Order service's view of the Product service: one question, one answer.
//!
//! [`AvailabilityClient`] is the seam the workflow depends on. Production code
//! uses [`GrpcAvailabilityClient`]; tests use
//! [`MockAvailabilityClient`](crate::clients::mock::MockAvailabilityClient).

use crate::clients::{AvailabilityError, CallContext, InvalidEndpoint};
use crate::model::{AvailabilityAnswer, AvailabilityQuery};
use async_trait::async_trait;
use order_proto::product_service_client::ProductServiceClient;
use order_proto::ProductRequest;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, instrument};

/// Remote availability check against the catalog.
///
/// Implementations must not retry and must surface every transport failure,
/// including the caller's deadline or cancellation, as an
/// [`AvailabilityError`].
#[async_trait]
pub trait AvailabilityClient: Send + Sync {
    async fn query(
        &self,
        query: AvailabilityQuery,
        ctx: &CallContext,
    ) -> Result<AvailabilityAnswer, AvailabilityError>;
}

/// gRPC client for `ProductService.CheckProductAvailability`.
///
/// Holds one [`Channel`] for the lifetime of the process. The channel is an
/// HTTP/2 connection multiplexing every in-flight call, so cloning the client
/// per request is cheap and concurrent use is safe.
#[derive(Clone)]
pub struct GrpcAvailabilityClient {
    inner: ProductServiceClient<Channel>,
}

impl GrpcAvailabilityClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: ProductServiceClient::new(channel),
        }
    }

    /// Builds a client whose connection is established on first use.
    ///
    /// The Order service can therefore start while the catalog is down;
    /// calls made in the meantime fail with
    /// [`AvailabilityError::Unreachable`].
    pub fn connect_lazy(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, InvalidEndpoint> {
        let endpoint = endpoint.into();
        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| InvalidEndpoint {
                endpoint,
                reason: e.to_string(),
            })?
            .connect_timeout(connect_timeout)
            .connect_lazy();
        Ok(Self::new(channel))
    }
}

#[async_trait]
impl AvailabilityClient for GrpcAvailabilityClient {
    #[instrument(skip(self, ctx), fields(product_id = %query.product_id, quantity = query.quantity))]
    async fn query(
        &self,
        query: AvailabilityQuery,
        ctx: &CallContext,
    ) -> Result<AvailabilityAnswer, AvailabilityError> {
        ctx.check()?;
        debug!("Sending availability check");

        let mut request = tonic::Request::new(ProductRequest::try_from(&query)?);
        if let Some(remaining) = ctx.remaining() {
            request.set_timeout(remaining);
        }

        let mut client = self.inner.clone();
        let response = ctx.run(client.check_product_availability(request)).await??;
        let answer = AvailabilityAnswer::try_from(response.into_inner())?;

        debug!(is_available = answer.is_available, "Availability answered");
        Ok(answer)
    }
}
