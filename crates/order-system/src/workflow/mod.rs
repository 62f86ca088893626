//! # Order Workflow
//!
//! The one piece of decision logic in the system: turn an [`OrderIntent`] into
//! an [`OrderOutcome`] by asking the catalog whether the order can be filled.
//!
//! ```text
//! OrderIntent ──► AvailabilityQuery ──► AvailabilityClient::query
//!                                            │
//!                      ┌─────────────────────┼───────────────────────┐
//!                      ▼                     ▼                       ▼
//!               Err(transport)      answer unavailable       answer available
//!               propagated as-is    FAILED, "", 0            SUCCESS, ORD-{user}-{product},
//!                                                            unit_price × quantity
//!                                                            (MalformedAnswer on overflow)
//! ```
//!
//! The workflow keeps no state between calls. Two identical calls make two
//! independent remote checks; nothing is retried or deduplicated.

use crate::clients::{AvailabilityClient, AvailabilityError, CallContext};
use crate::model::{AvailabilityQuery, OrderId, OrderIntent, OrderOutcome};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Places orders by consulting the catalog through an [`AvailabilityClient`].
///
/// Cheap to clone; every clone shares the same client.
#[derive(Clone)]
pub struct OrderWorkflow {
    availability: Arc<dyn AvailabilityClient>,
}

impl OrderWorkflow {
    pub fn new(availability: Arc<dyn AvailabilityClient>) -> Self {
        Self { availability }
    }

    /// Places an order.
    ///
    /// Returns `Ok` with a `FAILED` outcome when the product is unknown or
    /// short on stock: that is a business answer, not an error. Returns `Err`
    /// only when the availability check itself failed, with the client's error
    /// untouched, or when the answered price cannot be multiplied out
    /// ([`AvailabilityError::MalformedAnswer`]).
    #[instrument(
        name = "place_order",
        skip(self, intent, ctx),
        fields(product_id = %intent.product_id, user_id = %intent.user_id, quantity = intent.quantity)
    )]
    pub async fn place_order(
        &self,
        intent: &OrderIntent,
        ctx: &CallContext,
    ) -> Result<OrderOutcome, AvailabilityError> {
        let query = AvailabilityQuery::new(intent.product_id.clone(), intent.quantity);

        let answer = self
            .availability
            .query(query, ctx)
            .await
            .inspect_err(|e| warn!(error = %e, "Availability check failed"))?;

        if !answer.is_available {
            info!("Product unavailable, order failed");
            return Ok(OrderOutcome::failed());
        }

        let total_price = answer
            .unit_price
            .checked_mul(Decimal::from(intent.quantity))
            .ok_or_else(|| {
                let e = AvailabilityError::MalformedAnswer(format!(
                    "unit price {} x quantity {} overflows",
                    answer.unit_price, intent.quantity
                ));
                warn!(error = %e, "Availability answer unusable");
                e
            })?;
        let order_id = OrderId::derive(&intent.user_id, &intent.product_id);
        info!(order_id = %order_id, %total_price, "Order placed");

        Ok(OrderOutcome::succeeded(order_id, total_price))
    }
}
