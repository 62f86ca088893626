//! Error types for inbound order requests.

use thiserror::Error;

/// A request rejected at a transport boundary before it reaches the workflow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderRequestError {
    /// A required field was absent or held its zero value.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The quantity was negative. Zero is reported as
    /// `MissingField("quantity")` instead, since it is the unset value on both
    /// wires. Negative quantities are refused here rather than priced as a
    /// negative total.
    #[error("quantity must be positive, got {0}")]
    NegativeQuantity(i64),
}
