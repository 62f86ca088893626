//! HTTP/JSON front-end of the Order service: `POST /api/orders`.
//!
//! ```text
//! 200 {"order_id": "ORD-USER123-P1", "status": "SUCCESS", "total_price": 1999.98}
//! 400 {"error": "..."}   malformed JSON, missing or invalid fields
//! 500 {"error": "..."}   the availability check failed
//! ```

use crate::clients::{AvailabilityError, CallContext};
use crate::model::{OrderIntent, OrderOutcome, OrderRequestError, OrderStatus};
use crate::workflow::OrderWorkflow;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

pub const ORDERS_PATH: &str = "/api/orders";

/// Request body. Every field is optional here so that a missing field is
/// reported by name instead of as a generic decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderBody {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderReply {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<OrderOutcome> for CreateOrderReply {
    fn from(outcome: OrderOutcome) -> Self {
        Self {
            order_id: outcome.order_id_or_empty(),
            status: outcome.status,
            total_price: outcome.total_price,
        }
    }
}

/// Error response with an HTTP status and a `{"error": ...}` body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<OrderRequestError> for ApiError {
    fn from(error: OrderRequestError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, error.to_string())
    }
}

impl From<AvailabilityError> for ApiError {
    fn from(error: AvailabilityError) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    }
}

#[derive(Clone)]
struct HttpState {
    workflow: OrderWorkflow,
    request_timeout: Duration,
}

/// Builds the router. Each request gets `request_timeout` to complete its
/// availability check.
pub fn router(workflow: OrderWorkflow, request_timeout: Duration) -> Router {
    Router::new()
        .route(ORDERS_PATH, post(create_order))
        .with_state(HttpState {
            workflow,
            request_timeout,
        })
}

async fn create_order(
    State(state): State<HttpState>,
    payload: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<Json<CreateOrderReply>, ApiError> {
    let Json(body) = payload.inspect_err(|e| info!(error = %e, "Rejected order body"))?;

    let intent = OrderIntent::parse(
        body.product_id.unwrap_or_default(),
        body.quantity.unwrap_or(0),
        body.user_id.unwrap_or_default(),
    )
    .inspect_err(|e| info!(error = %e, "Rejected order request"))?;

    let ctx = CallContext::background().with_timeout(state.request_timeout);
    let outcome = state
        .workflow
        .place_order(&intent, &ctx)
        .await
        .inspect_err(|e| warn!(error = %e, "Order request failed"))?;

    Ok(Json(CreateOrderReply::from(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_serializes_price_as_number() {
        let reply = CreateOrderReply {
            order_id: String::new(),
            status: OrderStatus::Failed,
            total_price: Decimal::ZERO,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["status"], "FAILED");
        assert_eq!(json["order_id"], "");
        assert!(json["total_price"].is_number());
    }

    #[test]
    fn test_error_status_mapping() {
        let missing = ApiError::from(OrderRequestError::MissingField("user_id"));
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.message, "user_id is required");

        let down = ApiError::from(AvailabilityError::Unreachable("refused".into()));
        assert_eq!(down.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
