//! # Supplier Store
//!
//! Owns the supplier collection for the suppliers screen. Pure CRUD plus
//! search; suppliers carry no derived state.

use tracing::{debug, info};

use bodega_core::supplier::{self, SupplierDraft};
use bodega_core::types::Supplier;
use bodega_core::{CoreError, CoreResult};

use crate::next_id_after;

/// Owning store for the supplier collection.
#[derive(Debug, Default)]
pub struct SupplierStore {
    suppliers: Vec<Supplier>,
    next_id: i64,
}

impl SupplierStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        SupplierStore {
            suppliers: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store over injected seed data.
    pub fn with_seed(suppliers: Vec<Supplier>) -> Self {
        let next_id = next_id_after(suppliers.iter().map(|s| s.id));
        SupplierStore { suppliers, next_id }
    }

    /// The whole collection, in insertion order.
    pub fn list(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Looks up a supplier by id.
    pub fn get(&self, id: i64) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Case-insensitive search across name, category and contact person.
    pub fn search(&self, term: &str) -> Vec<Supplier> {
        supplier::filter(&self.suppliers, term)
    }

    /// Adds a supplier from a validated draft and returns it.
    pub fn add(&mut self, draft: SupplierDraft) -> &Supplier {
        let supplier = draft.into_supplier(self.next_id);
        info!(id = supplier.id, name = %supplier.name, "supplier added");

        self.next_id += 1;
        self.suppliers.push(supplier);
        self.suppliers.last().expect("just pushed")
    }

    /// Replaces the supplier at `id` with the draft, preserving the id.
    pub fn update(&mut self, id: i64, draft: SupplierDraft) -> CoreResult<&Supplier> {
        let slot = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::SupplierNotFound(id))?;

        *slot = draft.into_supplier(id);
        info!(id, "supplier updated");
        Ok(slot)
    }

    /// Removes a supplier by id and returns it.
    ///
    /// Products keep their denormalized supplier name; no cascade.
    pub fn delete(&mut self, id: i64) -> CoreResult<Supplier> {
        let index = self
            .suppliers
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::SupplierNotFound(id))?;

        let removed = self.suppliers.remove(index);
        debug!(id, name = %removed.name, "supplier removed");
        Ok(removed)
    }

    /// Replaces the collection. Test hook.
    pub fn reset(&mut self, suppliers: Vec<Supplier>) {
        self.next_id = next_id_after(suppliers.iter().map(|s| s.id));
        self.suppliers = suppliers;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_suppliers;
    use bodega_core::types::SupplierStatus;

    fn draft(name: &str) -> SupplierDraft {
        SupplierDraft::new(
            name,
            "Food",
            "Jane Roe",
            "+1 (555) 222-3333",
            "jane@example.com",
            "1 First Street",
            "Townsville",
            "State",
            "00001",
            "USA",
            SupplierStatus::Active,
        )
        .unwrap()
    }

    #[test]
    fn test_add_update_delete() {
        let mut store = SupplierStore::with_seed(sample_suppliers());

        let id = store.add(draft("Fresh Farms")).id;
        assert_eq!(id, 4); // seed ids are 1..=3

        let updated = store.update(id, draft("Fresher Farms")).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Fresher Farms");

        store.delete(id).unwrap();
        assert!(store.get(id).is_none());
        assert!(matches!(
            store.update(id, draft("Ghost")),
            Err(CoreError::SupplierNotFound(_))
        ));
    }

    #[test]
    fn test_search_matches_contact() {
        let store = SupplierStore::with_seed(sample_suppliers());

        let result = store.search("michael");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Fashion World");
    }
}
