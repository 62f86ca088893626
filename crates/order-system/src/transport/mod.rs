//! Front-ends that turn external requests into workflow calls and workflow
//! results back into wire responses.

pub mod deadline;
pub mod grpc;
pub mod http;

pub use grpc::{OrderRpc, ProductRpc};
pub use http::{router, ApiError};
