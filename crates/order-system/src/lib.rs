//! # Order System
//!
//! > **Two services, one question: can this order be filled, and for how much?**
//!
//! The **Product service** owns a read-only catalog and answers availability
//! checks over gRPC. The **Order service** accepts orders over gRPC and
//! HTTP/JSON, asks the Product service whether the requested quantity is in
//! stock and at what price, and replies with an order id, a status and a total.
//!
//! ```text
//!  order-client ──gRPC──┐
//!                       ▼
//!  curl ──HTTP/JSON──► Order service ──gRPC──► Product service ──► Catalog
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`], [`catalog`])
//! Typed ids, the order intent and outcome, and the catalog lookup itself.
//! - **Key items**: [`OrderIntent`](model::OrderIntent), [`OrderOutcome`](model::OrderOutcome),
//!   [`Catalog::check_availability`](catalog::Catalog::check_availability).
//!
//! ### 2. The Decision ([`workflow`])
//! [`OrderWorkflow::place_order`](workflow::OrderWorkflow::place_order) is the only
//! business logic. It is transport-agnostic and stateless.
//!
//! ### 3. The Outbound Interface ([`clients`])
//! The workflow reaches the catalog through the
//! [`AvailabilityClient`](clients::AvailabilityClient) trait, with a gRPC
//! implementation for production and [`MockAvailabilityClient`](clients::mock::MockAvailabilityClient)
//! for tests. Deadlines and cancellation travel in a [`CallContext`](clients::CallContext).
//!
//! ### 4. The Front-ends ([`transport`], [`wire`])
//! gRPC and HTTP adapters that validate input, call the workflow and map
//! results and errors onto their own protocol.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! Binds listeners, spawns servers and shuts them down gracefully.
//!
//! ## Error Handling
//!
//! Three kinds of failure are kept apart:
//! - invalid input ([`OrderRequestError`](model::OrderRequestError)) is rejected at the
//!   front-end as HTTP 400 or `INVALID_ARGUMENT` and never reaches the catalog;
//! - an unavailable product is a normal `FAILED` outcome;
//! - a failed availability check ([`AvailabilityError`](clients::AvailabilityError)) is
//!   passed through the workflow unchanged and becomes HTTP 500 or a matching gRPC status.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run --bin product-service
//! RUST_LOG=info cargo run --bin order-service
//! cargo run --bin order-client
//!
//! curl -X POST localhost:8080/api/orders \
//!   -d '{"product_id":"P1","quantity":2,"user_id":"USER123"}' \
//!   -H 'content-type: application/json'
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod transport;
pub mod wire;
pub mod workflow;
