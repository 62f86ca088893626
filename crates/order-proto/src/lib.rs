//! # Order System Protocol
//!
//! Messages and gRPC stubs shared by the Product service, the Order service and the
//! command-line client.
//!
//! The code under `src/generated/` is the prost/tonic output for
//! `proto/order_system.proto`. It is checked in so building the workspace does not need
//! `protoc`. After editing the `.proto` file, regenerate it with
//! `cargo build -p order-proto --features codegen` and commit the result.

#[rustfmt::skip]
#[allow(clippy::all)]
mod generated {
    pub mod order_system;
}

pub use generated::order_system::*;

/// Fully-qualified protobuf package name.
pub const PACKAGE: &str = "order_system";

#[cfg(test)]
mod tests {
    use super::*;

    const PROTO: &str = include_str!("../proto/order_system.proto");

    /// The checked-in stubs must describe the same services as the `.proto`.
    #[test]
    fn test_generated_code_matches_proto() {
        assert!(PROTO.contains(&format!("package {};", PACKAGE)));
        assert!(PROTO.contains("service ProductService"));
        assert!(PROTO.contains("service OrderService"));

        assert_eq!(
            product_service_server::SERVICE_NAME,
            format!("{}.ProductService", PACKAGE)
        );
        assert_eq!(
            order_service_server::SERVICE_NAME,
            format!("{}.OrderService", PACKAGE)
        );
    }

    #[test]
    fn test_messages_default_to_proto3_zero_values() {
        let response = ProductResponse::default();
        assert!(!response.is_available);
        assert!(response.price.is_empty());
        assert_eq!(OrderRequest::default().quantity, 0);
    }
}
