//! # bodega-store: In-Memory Stores for Bodega
//!
//! This crate owns every collection in the application. Each screen gets
//! exactly one store instance, created on mount from constructor-injected
//! seed data and discarded on unmount.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Data Flow                                 │
//! │                                                                         │
//! │  Screen event (click, submit)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bodega-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐  │   │
//! │  │   │  DebtStore   │  │ InventoryStore │  │    SaleStore     │  │   │
//! │  │   │  reclassify  │  │  CRUD + alerts │  │  cart + records  │  │   │
//! │  │   │  totals      │  │  id issuance   │  │  id issuance     │  │   │
//! │  │   └──────────────┘  └────────────────┘  └──────────────────┘  │   │
//! │  │                     ┌────────────────┐                         │   │
//! │  │                     │ SupplierStore  │                         │   │
//! │  │                     └────────────────┘                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bodega-core (pure rules: every computation delegated there)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rules
//!
//! - Each collection is exclusively owned by one store; there is no
//!   cross-store shared mutable state and no synchronization
//! - Every mutation is synchronous and goes through `&mut self`; the
//!   single logical writer is the current user's event loop
//! - Ids come from a per-store monotonic counter seeded at
//!   `max(existing ids) + 1`; sound only under this single-writer model
//! - `reset` replaces a collection wholesale, for tests

// =============================================================================
// Module Declarations
// =============================================================================

pub mod debts;
pub mod inventory;
pub mod sales;
pub mod seed;
pub mod suppliers;

// =============================================================================
// Re-exports
// =============================================================================

pub use debts::DebtStore;
pub use inventory::InventoryStore;
pub use sales::SaleStore;
pub use suppliers::SupplierStore;

/// Computes the first id a store may issue over seeded records.
///
/// `max(existing ids) + 1`, or `1` for an empty collection. The counter
/// only ever moves forward from here; deletions never free ids.
pub(crate) fn next_id_after(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_after() {
        assert_eq!(next_id_after(std::iter::empty()), 1);
        assert_eq!(next_id_after([1, 2, 3].into_iter()), 4);
        assert_eq!(next_id_after([7, 2].into_iter()), 8);
    }
}
