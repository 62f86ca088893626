//! Starting and stopping the services.
//!
//! [`ProductSystem`] and [`OrderSystem`] bind their listeners, spawn one Tokio
//! task per server and keep the handles so that `shutdown` can signal every
//! server, wait for in-flight requests to drain and report a task that failed.
//! Binding happens before `start` returns, so the `*_addr` fields are usable
//! immediately, including when a config asks for port 0.

pub mod error;
pub mod order_system;
pub mod product_system;
mod task;
pub mod tracing;

pub use error::LifecycleError;
pub use order_system::OrderSystem;
pub use product_system::ProductSystem;
pub use self::tracing::setup_tracing;
