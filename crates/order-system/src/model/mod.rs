//! Pure data structures shared by the catalog, the workflow and the transports.

pub mod error;
pub mod order;
pub mod product;

pub use error::*;
pub use order::*;
pub use product::*;
