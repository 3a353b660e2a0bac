//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bodega Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Web UI)                            │   │
//! │  │   Inventory UI ──► Sales UI ──► Debts UI ──► Suppliers UI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bodega-store (screen state)                  │   │
//! │  │    DebtStore, InventoryStore, SaleStore, SupplierStore          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   debt    │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │  aging    │  │  totals   │  │   │
//! │  │   │   Sale    │  │  (cents)  │  │  totals   │  │  merging  │  │   │
//! │  │   │   Debt    │  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   └───────────┘  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │                  │ inventory │  │  report   │  │ validation│  │   │
//! │  │                  │ low stock │  │ summaries │  │   rules   │  │   │
//! │  │                  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK READS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Debt, Supplier, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//! - [`debt`] - Debt aging engine (overdue detection, totals, reminders)
//! - [`inventory`] - Stock monitor (low-stock rule, product drafts)
//! - [`cart`] - In-progress sale state machine
//! - [`sales`] - Sales list queries
//! - [`report`] - Sales summaries over date ranges
//! - [`supplier`] - Supplier drafts and search
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No Clock Reads**: "today" is always an explicit parameter
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::cart::Cart;
//! use bodega_core::money::Money;
//! use bodega_core::types::{PaymentType, Product, Unit};
//! use chrono::NaiveDate;
//!
//! let rice = Product {
//!     id: 1,
//!     name: "Rice".into(),
//!     category: "Grains".into(),
//!     quantity: 50,
//!     unit: Unit::Kg,
//!     cost_price_cents: 250,
//!     selling_price_cents: 350,
//!     supplier: "Global Foods Inc.".into(),
//!     stock_alert: 10,
//!     last_restocked: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
//!     image: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&rice, 5).unwrap();
//! assert_eq!(cart.total(), Money::from_cents(1750));
//!
//! let today = NaiveDate::from_ymd_opt(2023, 4, 12).unwrap();
//! let sale = cart.complete(1, today, PaymentType::Cash, None, None).unwrap();
//! assert_eq!(sale.total_amount_cents, 1750);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod debt;
pub mod error;
pub mod inventory;
pub mod money;
pub mod report;
pub mod sales;
pub mod supplier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Image reference substituted when a product is created without one.
///
/// Every stored product carries an image reference so list views never have
/// to special-case a missing thumbnail.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1553395572-53de71bbcfe7?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3";

/// A pending debt due within this many days (inclusive) counts as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;
