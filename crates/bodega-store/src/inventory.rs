//! # Inventory Store
//!
//! Owns the product collection for the inventory screen.

use tracing::{debug, info, warn};

use bodega_core::inventory::{self, InventoryQuery, ProductDraft};
use bodega_core::types::Product;
use bodega_core::{CoreError, CoreResult};

use crate::next_id_after;

/// Owning store for the product collection.
///
/// Ids are issued from a monotonic counter seeded one past the largest
/// existing id. Deleting a product never frees its id for reuse; sound
/// because only this instance ever writes the collection.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    next_id: i64,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InventoryStore {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store over injected seed data.
    ///
    /// Emits one aggregate stock alert when any seeded product is already
    /// at or below its alert level (mirrors the screen-mount notification).
    pub fn with_seed(products: Vec<Product>) -> Self {
        let low = inventory::low_stock(&products);
        if !low.is_empty() {
            warn!(count = low.len(), "products are low on stock");
        }

        let next_id = next_id_after(products.iter().map(|p| p.id));
        InventoryStore { products, next_id }
    }

    /// The whole collection, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filters for display. Never mutates the collection.
    pub fn query(&self, query: &InventoryQuery) -> Vec<Product> {
        inventory::filter(&self.products, query)
    }

    /// Every product currently low on stock.
    pub fn low_stock(&self) -> Vec<Product> {
        inventory::low_stock(&self.products)
    }

    /// Adds a product from a validated draft and returns it.
    ///
    /// The draft constructor already rejected invalid field combinations,
    /// so the only work left is id issuance and insertion.
    pub fn add(&mut self, draft: ProductDraft) -> &Product {
        let product = draft.into_product(self.next_id);
        info!(id = product.id, name = %product.name, "product added");

        self.next_id += 1;
        self.products.push(product);
        self.products.last().expect("just pushed")
    }

    /// Replaces the product at `id` with the draft, preserving the id.
    pub fn update(&mut self, id: i64, draft: ProductDraft) -> CoreResult<&Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        *slot = draft.into_product(id);
        info!(id, "product updated");
        Ok(slot)
    }

    /// Removes a product by id and returns it.
    ///
    /// Historical sales keep their denormalized line items; deleting a
    /// product never cascades into them.
    pub fn delete(&mut self, id: i64) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let removed = self.products.remove(index);
        debug!(id, name = %removed.name, "product removed");
        Ok(removed)
    }

    /// Replaces the collection. Test hook.
    pub fn reset(&mut self, products: Vec<Product>) {
        self.next_id = next_id_after(products.iter().map(|p| p.id));
        self.products = products;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_products;
    use bodega_core::money::Money;
    use bodega_core::types::Unit;
    use bodega_core::DEFAULT_PRODUCT_IMAGE;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft::new(
            name,
            "Grains",
            40,
            Unit::Kg,
            Money::from_cents(200),
            Money::from_cents(300),
            "Global Foods Inc.",
            10,
            date(2023, 4, 11),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_add_issues_sequential_ids() {
        let mut store = InventoryStore::with_seed(sample_products());

        let id = store.add(draft("Millet")).id;
        assert_eq!(id, 4); // seed ids are 1..=3

        let next = store.add(draft("Oats")).id;
        assert_eq!(next, 5);
    }

    #[test]
    fn test_add_from_empty_starts_at_one() {
        let mut store = InventoryStore::new();
        assert_eq!(store.add(draft("Millet")).id, 1);
    }

    #[test]
    fn test_add_substitutes_default_image() {
        let mut store = InventoryStore::new();
        let product = store.add(draft("Millet"));
        assert_eq!(product.image.as_deref(), Some(DEFAULT_PRODUCT_IMAGE));
    }

    #[test]
    fn test_update_preserves_id() {
        let mut store = InventoryStore::with_seed(sample_products());

        let updated = store.update(2, draft("Brown Sugar")).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Brown Sugar");

        assert!(matches!(
            store.update(99, draft("Ghost")),
            Err(CoreError::ProductNotFound(99))
        ));
    }

    #[test]
    fn test_delete_does_not_reuse_ids() {
        let mut store = InventoryStore::with_seed(sample_products());

        store.delete(3).unwrap();
        // The counter is monotonic: id 3 is never handed out again
        assert_eq!(store.add(draft("Millet")).id, 4);

        assert!(matches!(
            store.delete(3),
            Err(CoreError::ProductNotFound(3))
        ));
    }

    #[test]
    fn test_query_low_stock_only() {
        let mut seed = sample_products();
        seed[0].quantity = seed[0].stock_alert; // Rice sits at the boundary
        let store = InventoryStore::with_seed(seed);

        let query = InventoryQuery {
            low_stock_only: true,
            ..Default::default()
        };
        let result = store.query(&query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert_eq!(store.low_stock().len(), 1);
    }
}
