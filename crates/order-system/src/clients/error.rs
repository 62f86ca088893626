//! Error types for the availability client.

use crate::clients::ContextDone;
use thiserror::Error;
use tonic::{Code, Status};

/// A failed availability check.
///
/// These are transport or remote failures, never business outcomes: an
/// out-of-stock product is a successful answer with `is_available = false`.
/// The workflow returns this type unchanged so each transport can map the
/// variant to its own failure response.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AvailabilityError {
    /// The Product service could not be reached.
    #[error("catalog service unreachable: {0}")]
    Unreachable(String),

    /// The caller's deadline passed before an answer arrived.
    #[error("availability check deadline exceeded")]
    DeadlineExceeded,

    /// The caller cancelled the check.
    #[error("availability check cancelled")]
    Cancelled,

    /// The Product service answered with a gRPC error.
    #[error("catalog service rejected the check ({code:?}): {message}")]
    Rejected { code: Code, message: String },

    /// The Product service answered, but the answer could not be decoded.
    #[error("malformed availability answer: {0}")]
    MalformedAnswer(String),
}

impl From<ContextDone> for AvailabilityError {
    fn from(done: ContextDone) -> Self {
        match done {
            ContextDone::DeadlineExceeded => AvailabilityError::DeadlineExceeded,
            ContextDone::Cancelled => AvailabilityError::Cancelled,
        }
    }
}

impl From<Status> for AvailabilityError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::Unavailable => AvailabilityError::Unreachable(status.message().to_string()),
            Code::DeadlineExceeded => AvailabilityError::DeadlineExceeded,
            Code::Cancelled => AvailabilityError::Cancelled,
            code => AvailabilityError::Rejected {
                code,
                message: status.message().to_string(),
            },
        }
    }
}

/// The catalog endpoint could not be parsed as a URI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid catalog endpoint {endpoint:?}: {reason}")]
pub struct InvalidEndpoint {
    pub endpoint: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_map_to_variants() {
        assert_eq!(
            AvailabilityError::from(Status::unavailable("connection refused")),
            AvailabilityError::Unreachable("connection refused".into())
        );
        assert_eq!(
            AvailabilityError::from(Status::deadline_exceeded("late")),
            AvailabilityError::DeadlineExceeded
        );
        assert_eq!(
            AvailabilityError::from(Status::cancelled("gone")),
            AvailabilityError::Cancelled
        );
        assert_eq!(
            AvailabilityError::from(Status::internal("boom")),
            AvailabilityError::Rejected {
                code: Code::Internal,
                message: "boom".into()
            }
        );
    }

    #[test]
    fn test_context_done_maps_to_variants() {
        assert_eq!(
            AvailabilityError::from(ContextDone::DeadlineExceeded),
            AvailabilityError::DeadlineExceeded
        );
        assert_eq!(
            AvailabilityError::from(ContextDone::Cancelled),
            AvailabilityError::Cancelled
        );
    }
}
