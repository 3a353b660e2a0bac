//! # Domain Types
//!
//! Core domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │      Debt       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  quantity       │   │  items          │   │  customer_name  │       │
//! │  │  stock_alert    │   │  payment_type   │   │  due_date       │       │
//! │  │  selling_price  │   │  total_amount   │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │   DebtStatus    │   │  PaymentType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  quantity×price │   │  Pending        │   │  Cash           │       │
//! │  │  = total        │   │  Overdue        │   │  Credit         │       │
//! │  │  (frozen copy)  │   │  Paid           │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries an `i64` id issued by its owning store from a
//! monotonic counter. The counter is seeded at `max(existing ids) + 1` and
//! never reuses an id, which is only sound under the single-writer model:
//! exactly one store instance ever mutates a given collection.
//!
//! ## Snapshot Pattern
//! Line items inside sales and debts are frozen copies of product data at
//! the time of sale. Deleting a product later never changes history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_quantity};

// =============================================================================
// Measurement Unit
// =============================================================================

/// The unit a product is measured and sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilogram (kg)
    Kg,
    /// Gram (g)
    G,
    /// Liter (l)
    L,
    /// Milliliter (ml)
    Ml,
    /// Pieces (pcs)
    Pcs,
    /// Box
    Box,
    /// Pack
    Pack,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Kg
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pcs => "pcs",
            Unit::Box => "box",
            Unit::Pack => "pack",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity/price entry within a sale or debt record.
///
/// Uses the snapshot pattern: name, unit and price are frozen copies of the
/// product at sale time, so later edits to the inventory never rewrite
/// history.
///
/// ## Invariant
/// `total == price × quantity`, enforced by construction: [`LineItem::new`]
/// computes the total itself and never accepts one from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit at time of sale (frozen).
    pub unit: Unit,

    /// Unit price in cents at time of sale (frozen).
    pub price_cents: i64,

    /// Line total in cents (`price_cents × quantity`).
    pub total_cents: i64,
}

impl LineItem {
    /// Creates a line item, computing the total from quantity and price.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    /// use bodega_core::types::{LineItem, Unit};
    ///
    /// let item = LineItem::new("Rice", 10, Unit::Kg, Money::from_cents(350)).unwrap();
    /// assert_eq!(item.total_cents, 3500);
    /// ```
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        unit: Unit,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_quantity(quantity)?;

        Ok(LineItem {
            name,
            quantity,
            unit,
            price_cents: price.cents(),
            total_cents: price.multiply_quantity(quantity).cents(),
        })
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Debt
// =============================================================================

/// The payment status of a customer debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// Not yet due, or due and awaiting reclassification.
    Pending,
    /// Past its due date and still unpaid.
    Overdue,
    /// Settled. Terminal: due-date comparisons no longer apply.
    Paid,
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DebtStatus::Pending => "pending",
            DebtStatus::Overdue => "overdue",
            DebtStatus::Paid => "paid",
        };
        write!(f, "{}", s)
    }
}

/// A customer debt created by a credit sale.
///
/// ## Lifecycle
/// ```text
/// credit sale ──► Pending ──► (due date passes) ──► Overdue ──► Paid
///                    │                                            ▲
///                    └──────────── mark as paid ──────────────────┘
/// ```
/// Debts are never deleted; `Paid` is terminal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: i64,

    /// The customer who owes the amount.
    pub customer_name: String,

    /// Total owed in cents. Equals the sum of the item totals.
    pub amount_cents: i64,

    /// When the credit sale happened.
    #[ts(as = "String")]
    pub created_date: NaiveDate,

    /// Agreed payment deadline.
    #[ts(as = "String")]
    pub due_date: NaiveDate,

    /// What was bought on credit (frozen copies).
    pub items: Vec<LineItem>,

    pub status: DebtStatus,

    /// Whether a payment reminder has been sent. One reminder per debt.
    pub notified: bool,
}

impl Debt {
    /// Returns the owed amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Paid in full at the counter.
    Cash,
    /// Deferred payment, tracked as a debt.
    Credit,
}

/// The status of a recorded sale.
///
/// `Pending` holds exactly when the payment type is credit: the money has
/// not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Cash received, transaction closed.
    Completed,
    /// Credit sale awaiting payment.
    Pending,
}

/// A recorded sale transaction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,

    /// The day the sale was recorded.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// What was sold (frozen copies).
    pub items: Vec<LineItem>,

    /// Grand total in cents. Equals the sum of the item totals.
    pub total_amount_cents: i64,

    pub payment_type: PaymentType,

    pub status: SaleStatus,

    /// Present for credit sales only.
    pub customer_name: Option<String>,

    /// Payment deadline. Present for credit sales only.
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
}

impl Sale {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product tracked in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,

    /// Display name shown to the shopkeeper.
    pub name: String,

    /// Category label (e.g. "Grains", "Sweeteners").
    pub category: String,

    /// Current stock level in `unit`s.
    pub quantity: i64,

    pub unit: Unit,

    /// Purchase price per unit in cents (for margin calculations).
    pub cost_price_cents: i64,

    /// Sale price per unit in cents.
    pub selling_price_cents: i64,

    /// Supplier name (denormalized; suppliers are a separate collection).
    pub supplier: String,

    /// Stock level at or below which the product counts as low stock.
    pub stock_alert: i64,

    /// When stock was last replenished.
    #[ts(as = "String")]
    pub last_restocked: NaiveDate,

    /// Image reference (URL or data URI). Always present after creation:
    /// a fixed placeholder is substituted when none was supplied.
    pub image: Option<String>,
}

impl Product {
    /// Returns the selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    /// Returns the cost price as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_price_cents)
    }

    /// Checks whether the product is low on stock.
    ///
    /// Low stock holds at the boundary too: a product whose quantity equals
    /// its alert level is already low.
    ///
    /// ## Example
    /// ```rust
    /// # use bodega_core::types::{Product, Unit};
    /// # use chrono::NaiveDate;
    /// # let mut product = Product {
    /// #     id: 1, name: "Rice".into(), category: "Grains".into(),
    /// #     quantity: 10, unit: Unit::Kg, cost_price_cents: 250,
    /// #     selling_price_cents: 350, supplier: "Global Foods Inc.".into(),
    /// #     stock_alert: 10,
    /// #     last_restocked: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
    /// #     image: None,
    /// # };
    /// assert!(product.is_low_stock()); // quantity == stock_alert
    /// product.quantity = 11;
    /// assert!(!product.is_low_stock());
    /// ```
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.stock_alert
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// Whether a supplier relationship is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl Default for SupplierStatus {
    fn default() -> Self {
        SupplierStatus::Active
    }
}

/// A supplier contact record. Pure CRUD data, no derived logic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Contact person's name.
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub status: SupplierStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_total_is_computed() {
        let item = LineItem::new("Sugar", 5, Unit::Kg, Money::from_cents(250)).unwrap();
        assert_eq!(item.total_cents, 1250);
        assert_eq!(item.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_line_item_rejects_empty_name() {
        let result = LineItem::new("", 5, Unit::Kg, Money::from_cents(250));
        assert!(result.is_err());
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let result = LineItem::new("Sugar", 0, Unit::Kg, Money::from_cents(250));
        assert!(result.is_err());
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut product = Product {
            id: 1,
            name: "Rice".to_string(),
            category: "Grains".to_string(),
            quantity: 10,
            unit: Unit::Kg,
            cost_price_cents: 250,
            selling_price_cents: 350,
            supplier: "Global Foods Inc.".to_string(),
            stock_alert: 10,
            last_restocked: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            image: None,
        };

        assert!(product.is_low_stock()); // at the boundary

        product.quantity = 11;
        assert!(!product.is_low_stock());

        product.quantity = 0;
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_unit_display_matches_wire_values() {
        assert_eq!(Unit::Kg.to_string(), "kg");
        assert_eq!(Unit::Pcs.to_string(), "pcs");
        assert_eq!(
            serde_json::to_string(&Unit::Kg).unwrap(),
            "\"kg\""
        );
    }

    #[test]
    fn test_debt_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DebtStatus::Overdue).unwrap(),
            "\"overdue\""
        );
    }
}
