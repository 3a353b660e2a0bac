//! # Inventory Stock Monitor
//!
//! Classifies products as low-stock, filters the product list for display,
//! and validates product drafts before they enter the collection.
//!
//! ## Low Stock Rule
//! A product is low on stock iff `quantity <= stock_alert`. The boundary
//! counts: a shelf sitting exactly at its alert level is already low.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, Unit};
use crate::validation::{
    validate_category, validate_price_cents, validate_product_name, validate_stock_alert,
    validate_stock_quantity,
};
use crate::DEFAULT_PRODUCT_IMAGE;

// =============================================================================
// Filtering
// =============================================================================

/// Search and filter parameters for the product list.
#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    /// Case-insensitive substring match against name OR supplier.
    /// Empty matches everything.
    pub search_term: String,

    /// Exact category to keep, or `None` for all.
    pub category: Option<String>,

    /// Keep only low-stock products.
    pub low_stock_only: bool,
}

/// Filters a product collection for display.
///
/// The search term matches the product name or the supplier name,
/// case-insensitively; the category filter is exact-match or all. The
/// input collection is never mutated.
pub fn filter(products: &[Product], query: &InventoryQuery) -> Vec<Product> {
    let needle = query.search_term.to_lowercase();

    products
        .iter()
        .filter(|product| {
            let matches_search = needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.supplier.to_lowercase().contains(&needle);
            let matches_category = match &query.category {
                Some(category) => &product.category == category,
                None => true,
            };
            let matches_stock = !query.low_stock_only || product.is_low_stock();

            matches_search && matches_category && matches_stock
        })
        .cloned()
        .collect()
}

/// Returns every low-stock product, in collection order.
///
/// The count of the returned list drives the one-per-load stock alert
/// notification.
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_low_stock())
        .cloned()
        .collect()
}

// =============================================================================
// Product Draft
// =============================================================================

/// A validated, not-yet-identified product record.
///
/// The constructor rejects invalid combinations up front, so by the time a
/// draft reaches a store it can only succeed. Field-by-field mutation of a
/// half-valid record is not possible from outside this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    name: String,
    category: String,
    quantity: i64,
    unit: Unit,
    cost_price_cents: i64,
    selling_price_cents: i64,
    supplier: String,
    stock_alert: i64,
    last_restocked: NaiveDate,
    image: Option<String>,
}

impl ProductDraft {
    /// Creates a validated draft.
    ///
    /// ## Rules
    /// - `name` and `category` must be non-empty
    /// - `quantity` must not be negative (zero stock is a valid state)
    /// - prices and the stock alert level must not be negative
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::inventory::ProductDraft;
    /// use bodega_core::money::Money;
    /// use bodega_core::types::Unit;
    /// use chrono::NaiveDate;
    ///
    /// let draft = ProductDraft::new(
    ///     "Rice",
    ///     "Grains",
    ///     50,
    ///     Unit::Kg,
    ///     Money::from_cents(250),
    ///     Money::from_cents(350),
    ///     "Global Foods Inc.",
    ///     10,
    ///     NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
    ///     None,
    /// ).unwrap();
    ///
    /// assert!(ProductDraft::new(
    ///     "", "Grains", 50, Unit::Kg,
    ///     Money::from_cents(250), Money::from_cents(350),
    ///     "Global Foods Inc.", 10,
    ///     NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(), None,
    /// ).is_err());
    /// # drop(draft);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit: Unit,
        cost_price: Money,
        selling_price: Money,
        supplier: impl Into<String>,
        stock_alert: i64,
        last_restocked: NaiveDate,
        image: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        let supplier = supplier.into();

        validate_product_name(&name)?;
        validate_category(&category)?;
        validate_stock_quantity(quantity)?;
        validate_price_cents(cost_price.cents())?;
        validate_price_cents(selling_price.cents())?;
        validate_stock_alert(stock_alert)?;

        Ok(ProductDraft {
            name,
            category,
            quantity,
            unit,
            cost_price_cents: cost_price.cents(),
            selling_price_cents: selling_price.cents(),
            supplier,
            stock_alert,
            last_restocked,
            image,
        })
    }

    /// Builds a draft from an existing product, for edit flows.
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            unit: product.unit,
            cost_price_cents: product.cost_price_cents,
            selling_price_cents: product.selling_price_cents,
            supplier: product.supplier.clone(),
            stock_alert: product.stock_alert,
            last_restocked: product.last_restocked,
            image: product.image.clone(),
        }
    }

    /// Materializes the draft into a product under the given id.
    ///
    /// Substitutes the fixed placeholder image when none was supplied, so
    /// every stored product has an image reference.
    pub fn into_product(self, id: i64) -> Product {
        let image = match self.image {
            Some(image) if !image.trim().is_empty() => Some(image),
            _ => Some(DEFAULT_PRODUCT_IMAGE.to_string()),
        };

        Product {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            cost_price_cents: self.cost_price_cents,
            selling_price_cents: self.selling_price_cents,
            supplier: self.supplier,
            stock_alert: self.stock_alert,
            last_restocked: self.last_restocked,
            image,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
