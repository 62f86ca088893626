//! Conversions between domain types and the protobuf messages in `order_proto`.
//!
//! Prices cross the wire as decimal strings so neither side rounds them.

use crate::clients::AvailabilityError;
use crate::model::{AvailabilityAnswer, AvailabilityQuery, OrderOutcome};
use order_proto::{OrderResponse, ProductRequest, ProductResponse};
use rust_decimal::Decimal;
use std::str::FromStr;

impl From<AvailabilityAnswer> for ProductResponse {
    fn from(answer: AvailabilityAnswer) -> Self {
        // Unknown products carry no price at all.
        let price = if answer.product_name.is_empty() && answer.unit_price.is_zero() {
            String::new()
        } else {
            answer.unit_price.to_string()
        };
        ProductResponse {
            is_available: answer.is_available,
            price,
            product_name: answer.product_name,
        }
    }
}

impl TryFrom<ProductResponse> for AvailabilityAnswer {
    type Error = AvailabilityError;

    fn try_from(response: ProductResponse) -> Result<Self, Self::Error> {
        let unit_price = if response.price.is_empty() {
            // Only an unavailable product may come without a price.
            if response.is_available {
                return Err(AvailabilityError::MalformedAnswer(format!(
                    "available product {:?} has no price",
                    response.product_name
                )));
            }
            Decimal::ZERO
        } else {
            Decimal::from_str(&response.price).map_err(|e| {
                AvailabilityError::MalformedAnswer(format!("price {:?}: {}", response.price, e))
            })?
        };
        Ok(AvailabilityAnswer {
            is_available: response.is_available,
            unit_price,
            product_name: response.product_name,
        })
    }
}

impl TryFrom<&AvailabilityQuery> for ProductRequest {
    type Error = AvailabilityError;

    fn try_from(query: &AvailabilityQuery) -> Result<Self, Self::Error> {
        let quantity = i32::try_from(query.quantity).map_err(|_| AvailabilityError::Rejected {
            code: tonic::Code::InvalidArgument,
            message: format!("quantity {} exceeds the protocol range", query.quantity),
        })?;
        Ok(ProductRequest {
            product_id: query.product_id.to_string(),
            quantity,
        })
    }
}

impl From<OrderOutcome> for OrderResponse {
    fn from(outcome: OrderOutcome) -> Self {
        OrderResponse {
            order_id: outcome.order_id_or_empty(),
            status: outcome.status.to_string(),
            total_price: outcome.total_price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, ProductId};

    #[test]
    fn test_unknown_product_answer_has_empty_price() {
        let response = ProductResponse::from(AvailabilityAnswer::unknown_product());
        assert!(!response.is_available);
        assert!(response.price.is_empty());
        assert!(response.product_name.is_empty());

        let decoded = AvailabilityAnswer::try_from(response).unwrap();
        assert_eq!(decoded, AvailabilityAnswer::unknown_product());
    }

    #[test]
    fn test_known_product_price_is_exact() {
        let response = ProductResponse {
            is_available: true,
            price: "999.99".into(),
            product_name: "Laptop".into(),
        };
        let answer = AvailabilityAnswer::try_from(response).unwrap();
        assert_eq!(answer.unit_price, Decimal::new(99999, 2));
        assert_eq!(ProductResponse::from(answer).price, "999.99");
    }

    #[test]
    fn test_unparsable_price_is_malformed() {
        let response = ProductResponse {
            is_available: true,
            price: "nine".into(),
            product_name: "Laptop".into(),
        };
        assert!(matches!(
            AvailabilityAnswer::try_from(response),
            Err(AvailabilityError::MalformedAnswer(_))
        ));
    }

    #[test]
    fn test_available_answer_without_price_is_malformed() {
        let response = ProductResponse {
            is_available: true,
            price: String::new(),
            product_name: "Laptop".into(),
        };
        assert!(matches!(
            AvailabilityAnswer::try_from(response),
            Err(AvailabilityError::MalformedAnswer(_))
        ));
    }

    #[test]
    fn test_query_quantity_out_of_range() {
        let query = AvailabilityQuery {
            product_id: ProductId::from("P1"),
            quantity: u32::MAX,
        };
        assert!(matches!(
            ProductRequest::try_from(&query),
            Err(AvailabilityError::Rejected {
                code: tonic::Code::InvalidArgument,
                ..
            })
        ));
    }

    #[test]
    fn test_order_response_rendering() {
        let success = OrderResponse::from(OrderOutcome::succeeded(
            OrderId("ORD-USER123-P1".into()),
            Decimal::new(199998, 2),
        ));
        assert_eq!(success.order_id, "ORD-USER123-P1");
        assert_eq!(success.status, "SUCCESS");
        assert_eq!(success.total_price, "1999.98");

        let failed = OrderResponse::from(OrderOutcome::failed());
        assert_eq!(failed.order_id, "");
        assert_eq!(failed.status, "FAILED");
        assert_eq!(failed.total_price, "0");
    }
}
