//! # Sales Reports
//!
//! Aggregates recorded sales over a date range: total revenue, sale count,
//! and the best-performing products with their revenue share. Chart
//! rendering is the frontend's job; this module only produces the numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::Sale;

// =============================================================================
// Report Period
// =============================================================================

/// The reporting window preset selected by the user.
///
/// `Custom` means the start/end dates were chosen by hand; the presets
/// exist so the backend can label generated reports consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

// =============================================================================
// Sales Summary
// =============================================================================

/// One product's aggregate performance within a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub name: String,
    /// Total quantity sold across all sales in the window.
    pub quantity: i64,
    /// Revenue attributed to this product in cents.
    pub revenue_cents: i64,
    /// Whole-percent share of the window's total revenue.
    pub share_pct: i64,
}

/// Aggregate sales figures for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sale_count: usize,
    pub total_cents: i64,
    /// Products ordered by quantity sold, descending; ties break by name.
    pub top_products: Vec<ProductPerformance>,
}

impl SalesSummary {
    /// Returns the window's total revenue as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Summarizes the sales that fall within `[start, end]` (inclusive).
///
/// Line items are aggregated by product name (sales carry denormalized
/// snapshots, not product ids, so name is the identity that survives
/// inventory deletions).
pub fn sales_summary(sales: &[Sale], start: NaiveDate, end: NaiveDate) -> SalesSummary {
    let in_range: Vec<&Sale> = sales
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .collect();

    let total_cents: i64 = in_range.iter().map(|s| s.total_amount_cents).sum();

    // BTreeMap keeps the aggregation deterministic before the final sort
    let mut by_product: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for sale in &in_range {
        for item in &sale.items {
            let entry = by_product.entry(item.name.as_str()).or_insert((0, 0));
            entry.0 += item.quantity;
            entry.1 += item.total_cents;
        }
    }

    let mut top_products: Vec<ProductPerformance> = by_product
        .into_iter()
        .map(|(name, (quantity, revenue_cents))| ProductPerformance {
            name: name.to_string(),
            quantity,
            revenue_cents,
            share_pct: if total_cents > 0 {
                revenue_cents * 100 / total_cents
            } else {
                0
            },
        })
        .collect();
    top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.name.cmp(&b.name)));

    SalesSummary {
        start,
        end,
        sale_count: in_range.len(),
        total_cents,
        top_products,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, PaymentType, SaleStatus, Unit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: i64, day: NaiveDate, items: Vec<(&str, i64, i64)>) -> Sale {
        let items: Vec<LineItem> = items
            .into_iter()
            .map(|(name, qty, price)| {
                LineItem::new(name, qty, Unit::Kg, Money::from_cents(price)).unwrap()
            })
            .collect();
        let total_amount_cents = items.iter().map(|i| i.total_cents).sum();

        Sale {
            id,
            date: day,
            items,
            total_amount_cents,
            payment_type: PaymentType::Cash,
            status: SaleStatus::Completed,
            customer_name: None,
            due_date: None,
        }
    }

    #[test]
    fn test_summary_window_is_inclusive() {
        let sales = vec![
            sale(1, date(2023, 4, 10), vec![("Rice", 5, 350)]),
            sale(2, date(2023, 4, 12), vec![("Sugar", 2, 250)]),
            sale(3, date(2023, 4, 15), vec![("Beans", 3, 450)]),
        ];

        let summary = sales_summary(&sales, date(2023, 4, 10), date(2023, 4, 12));
        assert_eq!(summary.sale_count, 2);
        assert_eq!(summary.total_cents, 5 * 350 + 2 * 250);
    }

    #[test]
    fn test_top_products_ordered_by_quantity() {
        let sales = vec![
            sale(1, date(2023, 4, 10), vec![("Rice", 5, 350), ("Sugar", 2, 250)]),
            sale(2, date(2023, 4, 11), vec![("Rice", 10, 350)]),
        ];

        let summary = sales_summary(&sales, date(2023, 4, 1), date(2023, 4, 30));
        assert_eq!(summary.top_products.len(), 2);
        assert_eq!(summary.top_products[0].name, "Rice");
        assert_eq!(summary.top_products[0].quantity, 15);
        assert_eq!(summary.top_products[0].revenue_cents, 15 * 350);

        let rice_share = summary.top_products[0].share_pct;
        let total = 15 * 350 + 2 * 250;
        assert_eq!(rice_share, 15 * 350 * 100 / total);
    }

    #[test]
    fn test_empty_window_has_zero_share() {
        let sales = vec![sale(1, date(2023, 4, 10), vec![("Rice", 5, 350)])];

        let summary = sales_summary(&sales, date(2023, 5, 1), date(2023, 5, 31));
        assert_eq!(summary.sale_count, 0);
        assert_eq!(summary.total_cents, 0);
        assert!(summary.top_products.is_empty());
    }
}
