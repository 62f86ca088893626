//! Order-side types: the intent a caller submits and the outcome the workflow derives.
use crate::model::{OrderRequestError, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a placed order, `ORD-{user_id}-{product_id}`.
///
/// The id carries no sequence or timestamp, so two successful orders by the
/// same user for the same product share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn derive(user_id: &UserId, product_id: &ProductId) -> Self {
        Self(format!("ORD-{}-{}", user_id, product_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request to buy `quantity` units of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    pub product_id: ProductId,
    pub quantity: u32,
    pub user_id: UserId,
}

impl OrderIntent {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32, user_id: impl Into<UserId>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            user_id: user_id.into(),
        }
    }

    /// Validates raw transport fields into an intent.
    ///
    /// Empty strings and a zero quantity count as missing, mirroring how both
    /// protobuf and JSON bindings represent absent scalars.
    pub fn parse(
        product_id: impl Into<String>,
        quantity: i32,
        user_id: impl Into<String>,
    ) -> Result<Self, OrderRequestError> {
        let product_id = product_id.into();
        let user_id = user_id.into();

        if product_id.is_empty() {
            return Err(OrderRequestError::MissingField("product_id"));
        }
        let quantity = match quantity {
            0 => return Err(OrderRequestError::MissingField("quantity")),
            q if q < 0 => return Err(OrderRequestError::NegativeQuantity(q.into())),
            q => q.unsigned_abs(),
        };
        if user_id.is_empty() {
            return Err(OrderRequestError::MissingField("user_id"));
        }

        Ok(Self::new(product_id, quantity, user_id))
    }
}

/// Final status of an order attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Success,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Success => "SUCCESS",
            OrderStatus::Failed => "FAILED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of placing an order.
///
/// A `Failed` outcome always has no id and a zero total; a `Success` outcome
/// always has both. Use [`OrderOutcome::succeeded`] and [`OrderOutcome::failed`]
/// to keep that pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub order_id: Option<OrderId>,
    pub status: OrderStatus,
    pub total_price: Decimal,
}

impl OrderOutcome {
    pub fn succeeded(order_id: OrderId, total_price: Decimal) -> Self {
        Self {
            order_id: Some(order_id),
            status: OrderStatus::Success,
            total_price,
        }
    }

    pub fn failed() -> Self {
        Self {
            order_id: None,
            status: OrderStatus::Failed,
            total_price: Decimal::ZERO,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OrderStatus::Success
    }

    /// The order id as rendered on the wire: empty for failed orders.
    pub fn order_id_or_empty(&self) -> String {
        self.order_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default()
    }
}
