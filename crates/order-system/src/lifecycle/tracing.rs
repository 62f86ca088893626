//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber for the binaries.
//! The level comes from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin order-service
//! RUST_LOG=order_system::catalog=debug cargo run --bin product-service
//! ```
//!
//! With `info`, one order through the Order service logs its outcome inside the
//! `place_order` span:
//!
//! ```text
//! INFO place_order{product_id=P1 user_id=USER123 quantity=2}: Order placed order_id=ORD-USER123-P1 total_price=1999.98
//! INFO place_order{product_id=P9 user_id=USER123 quantity=1}: Product unavailable, order failed
//! ```
//!
//! `debug` adds the outbound availability query and, on the Product service,
//! each catalog lookup.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
