//! # Sales Cart
//!
//! State machine over a single in-progress sale.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Machine                                 │
//! │                                                                         │
//! │   ┌──────────┐  add_item   ┌──────────┐  complete   ┌───────────┐      │
//! │   │  Empty   │────────────►│ Building │────────────►│ Submitted │      │
//! │   └──────────┘             └──────────┘             └───────────┘      │
//! │        ▲                     │      ▲                  (terminal)      │
//! │        │   remove last line  │      │ add/remove                       │
//! │        └─────────────────────┘      │ more lines                       │
//! │                                     └───────                           │
//! │                                                                         │
//! │   Submitted is terminal for this instance: the owning store creates    │
//! │   a fresh cart for the next sale.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id: adding the same product merges
//!   quantities, re-checked against the product's current stock
//! - No line may exceed the selected product's stock, whether on first add
//!   or after a merge
//! - The cart total is the exact sum of the line totals (integer cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, PaymentType, Product, Sale, SaleStatus, Unit};
use crate::validation::{validate_customer_name, validate_quantity};

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the in-progress cart.
///
/// The price is frozen at the moment the product is added: later edits to
/// the inventory do not change what's in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Inventory product this line refers to (for stock checks and merging).
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Quantity in the cart.
    pub quantity: i64,

    /// Unit at time of adding (frozen).
    pub unit: Unit,

    /// Unit price in cents at time of adding (frozen).
    pub price_cents: i64,
}

impl CartLine {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The lifecycle phase the cart is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    /// No line items yet.
    Empty,
    /// At least one line item, not yet submitted.
    Building,
    /// A sale has been produced. Terminal for this instance.
    Submitted,
}

/// A single in-progress sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
    submitted: bool,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            submitted: false,
        }
    }

    /// Returns the current lifecycle phase.
    pub fn status(&self) -> CartStatus {
        if self.submitted {
            CartStatus::Submitted
        } else if self.lines.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::Building
        }
    }

    /// The line items currently in the cart.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Calculates the cart total in cents.
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.total_cents()).sum()
    }

    /// Returns the cart total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Adds a product to the cart or merges into its existing line.
    ///
    /// ## Behavior
    /// - Same product already in cart: quantities sum, and the cumulative
    ///   quantity is re-checked against the product's current stock
    /// - New product: added as a fresh line with the price frozen
    ///
    /// ## Errors
    /// - `Validation` when `quantity <= 0`
    /// - `InsufficientStock` when the requested (or cumulative) quantity
    ///   exceeds the product's stock; the cart is left unchanged
    /// - `CartAlreadySubmitted` when this cart has already produced a sale
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if self.submitted {
            return Err(CoreError::CartAlreadySubmitted);
        }

        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let cumulative = line.quantity + quantity;
            if cumulative > product.quantity {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.quantity,
                    requested: cumulative,
                });
            }
            line.quantity = cumulative;
            return Ok(());
        }

        if quantity > product.quantity {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            unit: product.unit,
            price_cents: product.selling_price_cents,
        });

        Ok(())
    }

    /// Removes a line by position.
    ///
    /// An out-of-range index is a no-op.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<()> {
        if self.submitted {
            return Err(CoreError::CartAlreadySubmitted);
        }

        if index < self.lines.len() {
            self.lines.remove(index);
        }

        Ok(())
    }

    /// Completes the sale and transitions the cart to `Submitted`.
    ///
    /// ## Rules
    /// - The cart must not be empty
    /// - Credit sales require a customer name and a due date
    /// - Cash sales produce a `Completed` sale; credit sales a `Pending` one
    ///
    /// On any error the cart is left unchanged and no sale exists. Note
    /// that completing a sale does not touch the inventory: whether stock
    /// should be decremented here is an unresolved product decision, so
    /// the two collections stay decoupled.
    ///
    /// ## Arguments
    /// * `id` - Sale id issued by the owning store
    /// * `today` - The day the sale is recorded
    pub fn complete(
        &mut self,
        id: i64,
        today: NaiveDate,
        payment_type: PaymentType,
        customer_name: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> CoreResult<Sale> {
        if self.submitted {
            return Err(CoreError::CartAlreadySubmitted);
        }

        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let (customer_name, due_date) = match payment_type {
            PaymentType::Cash => (None, None),
            PaymentType::Credit => {
                let name = customer_name.unwrap_or_default();
                validate_customer_name(&name)?;

                let due = due_date.ok_or(ValidationError::Required {
                    field: "due date".to_string(),
                })?;

                (Some(name), Some(due))
            }
        };

        let items: Vec<LineItem> = self
            .lines
            .iter()
            .map(|line| {
                LineItem::new(
                    line.name.clone(),
                    line.quantity,
                    line.unit,
                    Money::from_cents(line.price_cents),
                )
            })
            .collect::<Result<_, _>>()?;

        let sale = Sale {
            id,
            date: today,
            items,
            total_amount_cents: self.total_cents(),
            payment_type,
            status: match payment_type {
                PaymentType::Cash => SaleStatus::Completed,
                PaymentType::Credit => SaleStatus::Pending,
            },
            customer_name,
            due_date,
        };

        self.submitted = true;
        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rice(stock: i64) -> Product {
        Product {
            id: 1,
            name: "Rice".to_string(),
            category: "Grains".to_string(),
            quantity: stock,
            unit: Unit::Kg,
            cost_price_cents: 250,
            selling_price_cents: 350,
            supplier: "Global Foods Inc.".to_string(),
            stock_alert: 10,
            last_restocked: date(2023, 4, 1),
            image: None,
        }
    }

    fn sugar(stock: i64) -> Product {
        Product {
            id: 2,
            name: "Sugar".to_string(),
            selling_price_cents: 250,
            cost_price_cents: 180,
            category: "Sweeteners".to_string(),
            ..rice(stock)
        }
    }

    #[test]
    fn test_status_transitions() {
        let mut cart = Cart::new();
        assert_eq!(cart.status(), CartStatus::Empty);

        cart.add_item(&rice(50), 2).unwrap();
        assert_eq!(cart.status(), CartStatus::Building);

        cart.complete(1, date(2023, 4, 12), PaymentType::Cash, None, None)
            .unwrap();
        assert_eq!(cart.status(), CartStatus::Submitted);

        // Terminal: no further mutation allowed
        assert!(matches!(
            cart.add_item(&rice(50), 1),
            Err(CoreError::CartAlreadySubmitted)
        ));
    }

    #[test]
    fn test_total_is_exact_sum() {
        let mut cart = Cart::new();
        cart.add_item(&rice(50), 5).unwrap(); // 5 × 350 = 1750
        cart.add_item(&sugar(30), 2).unwrap(); // 2 × 250 = 500

        assert_eq!(cart.total_cents(), 2250);

        cart.remove_item(0).unwrap();
        assert_eq!(cart.total_cents(), 500);
    }

    #[test]
    fn test_merge_by_product_id_with_stock_ceiling() {
        let product = rice(10);
        let mut cart = Cart::new();

        cart.add_item(&product, 3).unwrap();
        cart.add_item(&product, 4).unwrap();

        // One merged line: 3 + 4 = 7
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.total_cents(), 7 * 350);

        // Cumulative 11 exceeds stock of 10: rejected, cart unchanged
        let err = cart.add_item(&product, 4).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 10,
                requested: 11,
                ..
            }
        ));
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_add_rejects_invalid_quantity_and_over_stock() {
        let product = rice(3);
        let mut cart = Cart::new();

        assert!(cart.add_item(&product, 0).is_err());
        assert!(cart.add_item(&product, -2).is_err());
        assert!(matches!(
            cart.add_item(&product, 5),
            Err(CoreError::InsufficientStock { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&rice(50), 2).unwrap();

        cart.remove_item(5).unwrap();
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_complete_cash_sale() {
        let mut cart = Cart::new();
        cart.add_item(&rice(50), 5).unwrap();

        let sale = cart
            .complete(1, date(2023, 4, 12), PaymentType::Cash, None, None)
            .unwrap();

        assert_eq!(sale.id, 1);
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.total_amount_cents, 1750);
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].total_cents, 1750);
        assert!(sale.customer_name.is_none());
        assert!(sale.due_date.is_none());
    }

    #[test]
    fn test_complete_credit_sale() {
        let mut cart = Cart::new();
        cart.add_item(&rice(50), 10).unwrap();

        let sale = cart
            .complete(
                3,
                date(2023, 4, 10),
                PaymentType::Credit,
                Some("John Doe".to_string()),
                Some(date(2023, 4, 20)),
            )
            .unwrap();

        assert_eq!(sale.status, SaleStatus::Pending);
        assert_eq!(sale.customer_name.as_deref(), Some("John Doe"));
        assert_eq!(sale.due_date, Some(date(2023, 4, 20)));
    }

    #[test]
    fn test_complete_empty_cart_fails() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.complete(1, date(2023, 4, 12), PaymentType::Cash, None, None),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_complete_credit_requires_customer_and_due_date() {
        let mut cart = Cart::new();
        cart.add_item(&rice(50), 2).unwrap();

        // Missing customer name
        let err = cart.complete(
            1,
            date(2023, 4, 12),
            PaymentType::Credit,
            None,
            Some(date(2023, 4, 20)),
        );
        assert!(matches!(err, Err(CoreError::Validation(_))));

        // Empty customer name counts as missing
        let err = cart.complete(
            1,
            date(2023, 4, 12),
            PaymentType::Credit,
            Some("  ".to_string()),
            Some(date(2023, 4, 20)),
        );
        assert!(matches!(err, Err(CoreError::Validation(_))));

        // Missing due date
        let err = cart.complete(
            1,
            date(2023, 4, 12),
            PaymentType::Credit,
            Some("John Doe".to_string()),
            None,
        );
        assert!(matches!(err, Err(CoreError::Validation(_))));

        // Cart is still usable: the failed attempts produced no sale
        assert_eq!(cart.status(), CartStatus::Building);
        let sale = cart
            .complete(
                1,
                date(2023, 4, 12),
                PaymentType::Credit,
                Some("John Doe".to_string()),
                Some(date(2023, 4, 20)),
            )
            .unwrap();
        assert_eq!(sale.status, SaleStatus::Pending);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut product = rice(50);
        let mut cart = Cart::new();
        cart.add_item(&product, 2).unwrap();

        // Inventory price change does not reach the cart
        product.selling_price_cents = 999;
        assert_eq!(cart.lines()[0].price_cents, 350);
        assert_eq!(cart.total_cents(), 700);
    }
}
