//! # Mock Availability Client
//!
//! An in-memory [`AvailabilityClient`] driven by a queue of expectations, for
//! testing the workflow and the transports without a Product service.
//!
//! | | MockAvailabilityClient | GrpcAvailabilityClient |
//! |---|---|---|
//! | **Speed** | Instant | Network round trip |
//! | **Error injection** | `return_err` | Needs a failing peer |
//! | **Latency injection** | `after(..)` | Needs a slow peer |
//!
//! ```rust
//! use order_system::clients::mock::MockAvailabilityClient;
//! use order_system::clients::{AvailabilityClient, CallContext};
//! use order_system::model::{AvailabilityAnswer, AvailabilityQuery};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockAvailabilityClient::new();
//! mock.expect_query("P1").return_ok(AvailabilityAnswer::unknown_product());
//!
//! let answer = mock
//!     .query(AvailabilityQuery::new("P1", 1), &CallContext::background())
//!     .await
//!     .unwrap();
//! assert!(!answer.is_available);
//! mock.verify();
//! # }
//! ```

use crate::clients::{AvailabilityClient, AvailabilityError, CallContext};
use crate::model::{AvailabilityAnswer, AvailabilityQuery, ProductId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Expectation {
    product_id: ProductId,
    delay: Option<Duration>,
    response: Result<AvailabilityAnswer, AvailabilityError>,
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A query with no expectation left, or
/// for a different product than the next expectation, panics.
#[derive(Clone, Default)]
pub struct MockAvailabilityClient {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<AvailabilityQuery>>>,
}

impl MockAvailabilityClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a query for `product_id`.
    pub fn expect_query(&self, product_id: impl Into<ProductId>) -> QueryExpectationBuilder {
        QueryExpectationBuilder {
            product_id: product_id.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every query received so far, in arrival order.
    pub fn calls(&self) -> Vec<AvailabilityQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder {
    product_id: ProductId,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl QueryExpectationBuilder {
    /// Delays the response, simulating a slow catalog.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful answer.
    pub fn return_ok(self, answer: AvailabilityAnswer) {
        self.push(Ok(answer));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: AvailabilityError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<AvailabilityAnswer, AvailabilityError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            product_id: self.product_id,
            delay: self.delay,
            response,
        });
    }
}

#[async_trait]
impl AvailabilityClient for MockAvailabilityClient {
    async fn query(
        &self,
        query: AvailabilityQuery,
        ctx: &CallContext,
    ) -> Result<AvailabilityAnswer, AvailabilityError> {
        self.calls.lock().unwrap().push(query.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = expectation else {
            panic!("Unexpected availability query for {}", query.product_id);
        };
        assert_eq!(
            expectation.product_id, query.product_id,
            "Availability query for the wrong product"
        );

        let response = async move {
            if let Some(delay) = expectation.delay {
                tokio::time::sleep(delay).await;
            }
            expectation.response
        };
        ctx.run(response).await?
    }
}
