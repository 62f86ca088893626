//! Clients the Order service uses to reach the Product service.

pub mod availability_client;
pub mod context;
pub mod error;
pub mod mock;

pub use availability_client::*;
pub use context::*;
pub use error::*;
