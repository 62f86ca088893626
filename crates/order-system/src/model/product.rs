//! Catalog-side types: product identifiers, catalog entries and the
//! availability question/answer pair exchanged with the Product service.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product in the catalog.
///
/// Entries are fixed when the catalog is built and never change afterwards;
/// an availability check reads `quantity_on_hand` but never decrements it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity_on_hand: u32,
}

impl CatalogEntry {
    /// Creates a new CatalogEntry.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `name` - Display name
    /// * `unit_price` - Price of a single unit
    /// * `quantity_on_hand` - Units in stock
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity_on_hand: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity_on_hand,
        }
    }
}

/// Asks whether `quantity` units of `product_id` can be fulfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl AvailabilityQuery {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// The catalog's answer to an [`AvailabilityQuery`].
///
/// `unit_price` and `product_name` are only meaningful for known products.
/// An unknown product yields the zero value (`Default`), so callers must not
/// read a price out of an unavailable answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityAnswer {
    pub is_available: bool,
    pub unit_price: Decimal,
    pub product_name: String,
}

impl AvailabilityAnswer {
    /// Answer for a product the catalog does not know.
    pub fn unknown_product() -> Self {
        Self::default()
    }
}
