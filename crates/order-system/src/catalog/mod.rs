//! # Catalog
//!
//! The fixed product catalog served by the Product service.
//!
//! A [`Catalog`] is built once at startup and handed to the service as an
//! `Arc<Catalog>`. Nothing mutates it afterwards, so any number of request
//! tasks can read it at the same time without a lock.
//!
//! ```rust
//! use order_system::catalog::Catalog;
//! use order_system::model::AvailabilityQuery;
//!
//! let catalog = Catalog::sample();
//! let answer = catalog.check_availability(&AvailabilityQuery::new("P1", 2));
//! assert!(answer.is_available);
//! assert_eq!(answer.product_name, "Laptop");
//! ```

use crate::model::{AvailabilityAnswer, AvailabilityQuery, CatalogEntry, ProductId};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Immutable mapping from product id to catalog entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<ProductId, CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from its entries. A later entry with a duplicate id
    /// replaces an earlier one.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self { entries }
    }

    /// The demo catalog: a laptop and a phone.
    pub fn sample() -> Self {
        Self::new([
            CatalogEntry::new("P1", "Laptop", Decimal::new(99999, 2), 10),
            CatalogEntry::new("P2", "Phone", Decimal::new(59999, 2), 20),
        ])
    }

    pub fn get(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Answers whether the requested quantity can be fulfilled.
    ///
    /// Known products always report their price and name, whether or not there
    /// is enough stock. Stock is never reserved or decremented.
    pub fn check_availability(&self, query: &AvailabilityQuery) -> AvailabilityAnswer {
        let Some(entry) = self.entries.get(&query.product_id) else {
            debug!(product_id = %query.product_id, "Unknown product");
            return AvailabilityAnswer::unknown_product();
        };

        let is_available = entry.quantity_on_hand >= query.quantity;
        debug!(
            product_id = %query.product_id,
            requested = query.quantity,
            on_hand = entry.quantity_on_hand,
            is_available,
            "Availability checked"
        );

        AvailabilityAnswer {
            is_available,
            unit_price: entry.unit_price,
            product_name: entry.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 2);

        let laptop = catalog.get(&ProductId::from("P1")).unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.unit_price.to_string(), "999.99");
        assert_eq!(laptop.quantity_on_hand, 10);

        let phone = catalog.get(&ProductId::from("P2")).unwrap();
        assert_eq!(phone.unit_price.to_string(), "599.99");
        assert_eq!(phone.quantity_on_hand, 20);
    }

    #[test]
    fn test_available_when_stock_covers_quantity() {
        let catalog = Catalog::sample();
        let answer = catalog.check_availability(&AvailabilityQuery::new("P1", 10));
        assert!(answer.is_available);
        assert_eq!(answer.unit_price, Decimal::new(99999, 2));
        assert_eq!(answer.product_name, "Laptop");
    }

    #[test]
    fn test_insufficient_stock_still_reports_price_and_name() {
        let catalog = Catalog::sample();
        let answer = catalog.check_availability(&AvailabilityQuery::new("P1", 11));
        assert!(!answer.is_available);
        assert_eq!(answer.unit_price, Decimal::new(99999, 2));
        assert_eq!(answer.product_name, "Laptop");
    }

    #[test]
    fn test_unknown_product_is_zero_valued() {
        let catalog = Catalog::sample();
        let answer = catalog.check_availability(&AvailabilityQuery::new("P404", 1));
        assert_eq!(answer, AvailabilityAnswer::unknown_product());
        assert!(!answer.is_available);
        assert_eq!(answer.unit_price, Decimal::ZERO);
        assert!(answer.product_name.is_empty());
    }

    #[test]
    fn test_check_does_not_consume_stock() {
        let catalog = Catalog::sample();
        for _ in 0..5 {
            let answer = catalog.check_availability(&AvailabilityQuery::new("P2", 20));
            assert!(answer.is_available);
        }
        assert_eq!(
            catalog.get(&ProductId::from("P2")).unwrap().quantity_on_hand,
            20
        );
    }

    #[test]
    fn test_duplicate_ids_keep_last_entry() {
        let catalog = Catalog::new([
            CatalogEntry::new("X", "Old", Decimal::ONE, 1),
            CatalogEntry::new("X", "New", Decimal::TWO, 2),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&ProductId::from("X")).unwrap().name, "New");
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_catalog() {
        let catalog = Arc::new(Catalog::sample());
        let mut handles = vec![];
        for i in 0..32u32 {
            let catalog = catalog.clone();
            handles.push(tokio::spawn(async move {
                catalog.check_availability(&AvailabilityQuery::new("P1", i % 12))
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let answer = handle.await.unwrap();
            assert_eq!(answer.is_available, (i as u32 % 12) <= 10);
            assert_eq!(answer.unit_price, Decimal::new(99999, 2));
        }
    }
}
