//! # Sale Store
//!
//! Owns the recorded-sales collection and the single in-progress cart for
//! the sales screen.
//!
//! ## New Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Recording a Sale                                  │
//! │                                                                         │
//! │  Select product ──► add_to_cart(product, qty)                           │
//! │                        │  stock ceiling + merge-by-product checks       │
//! │                        ▼                                                │
//! │                     cart builds up (totals recomputed on read)          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  complete_sale(payment, customer?, due?) ──► Sale prepended to list     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                fresh empty cart for the next sale                       │
//! │                                                                         │
//! │  NOTE: completing a sale does not decrement inventory stock and does    │
//! │  not record a debt; both links are explicit follow-up calls owned by    │
//! │  the caller (see DebtStore::record_credit_sale).                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use bodega_core::cart::Cart;
use bodega_core::report::{self, SalesSummary};
use bodega_core::sales::{self, SalesQuery};
use bodega_core::types::{PaymentType, Product, Sale};
use bodega_core::{CoreError, CoreResult, ValidationError};

use crate::next_id_after;

/// Owning store for recorded sales plus the in-progress cart.
#[derive(Debug, Default)]
pub struct SaleStore {
    sales: Vec<Sale>,
    cart: Cart,
    next_id: i64,
}

impl SaleStore {
    /// Creates an empty store with a fresh cart.
    pub fn new() -> Self {
        SaleStore {
            sales: Vec::new(),
            cart: Cart::new(),
            next_id: 1,
        }
    }

    /// Creates a store over injected seed data.
    pub fn with_seed(sales: Vec<Sale>) -> Self {
        let next_id = next_id_after(sales.iter().map(|s| s.id));
        SaleStore {
            sales,
            cart: Cart::new(),
            next_id,
        }
    }

    /// The whole collection. Seed data and new sales keep newest-first
    /// order: completed sales are prepended.
    pub fn list(&self) -> &[Sale] {
        &self.sales
    }

    /// Looks up a sale by id.
    pub fn get(&self, id: i64) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    /// Filters for display. Never mutates the collection.
    pub fn query(&self, query: &SalesQuery) -> Vec<Sale> {
        sales::filter(&self.sales, query)
    }

    /// Read access to the in-progress cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds the selected product to the cart.
    ///
    /// `selection` is `None` when no product was picked in the form, which
    /// is a validation error, not a panic.
    pub fn add_to_cart(&mut self, selection: Option<&Product>, quantity: i64) -> CoreResult<()> {
        let product = selection.ok_or_else(|| {
            CoreError::Validation(ValidationError::Required {
                field: "product".to_string(),
            })
        })?;

        debug!(product_id = product.id, quantity, "add to cart");
        self.cart.add_item(product, quantity)
    }

    /// Removes a cart line by position. Out-of-range is a no-op.
    pub fn remove_from_cart(&mut self, index: usize) -> CoreResult<()> {
        self.cart.remove_item(index)
    }

    /// Completes the in-progress sale and starts a fresh cart.
    ///
    /// On error the cart is left exactly as it was and no sale is
    /// recorded. On success the sale is prepended to the list (newest
    /// first, matching the screen).
    pub fn complete_sale(
        &mut self,
        today: NaiveDate,
        payment_type: PaymentType,
        customer_name: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> CoreResult<&Sale> {
        let sale = self
            .cart
            .complete(self.next_id, today, payment_type, customer_name, due_date)?;

        info!(
            sale_id = sale.id,
            total = %sale.total_amount(),
            payment = ?payment_type,
            "sale completed"
        );

        self.next_id += 1;
        self.sales.insert(0, sale);
        self.cart = Cart::new();
        Ok(self.sales.first().expect("just inserted"))
    }

    /// Deletes a recorded sale by id.
    pub fn delete(&mut self, id: i64) -> CoreResult<Sale> {
        let index = self
            .sales
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::SaleNotFound(id))?;

        let removed = self.sales.remove(index);
        debug!(id, "sale deleted");
        Ok(removed)
    }

    /// Aggregates the recorded sales over `[start, end]` (inclusive).
    pub fn summary(&self, start: NaiveDate, end: NaiveDate) -> SalesSummary {
        report::sales_summary(&self.sales, start, end)
    }

    /// Replaces the collection and discards the cart. Test hook.
    pub fn reset(&mut self, sales: Vec<Sale>) {
        self.next_id = next_id_after(sales.iter().map(|s| s.id));
        self.sales = sales;
        self.cart = Cart::new();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
