//! # Sales List Queries
//!
//! Filtering for the recorded-sales list. Recording itself lives in
//! [`crate::cart`]; this module only answers "which sales should the list
//! show".

use crate::types::{Sale, SaleStatus};

/// Search and filter parameters for the sales list.
#[derive(Debug, Clone, Default)]
pub struct SalesQuery {
    /// Case-insensitive substring match against any line item name OR the
    /// customer name. Empty matches everything.
    pub search_term: String,

    /// Exact status to keep, or `None` for all.
    pub status: Option<SaleStatus>,
}

/// Filters a sales collection for display.
///
/// A sale matches when any of its line items' names, or its customer name
/// (credit sales only), contains the search term case-insensitively. The
/// input collection is never mutated.
pub fn filter(sales: &[Sale], query: &SalesQuery) -> Vec<Sale> {
    let needle = query.search_term.to_lowercase();

    sales
        .iter()
        .filter(|sale| {
            let matches_search = needle.is_empty()
                || sale
                    .items
                    .iter()
                    .any(|item| item.name.to_lowercase().contains(&needle))
                || sale
                    .customer_name
                    .as_ref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle));
            let matches_status = match query.status {
                Some(status) => sale.status == status,
                None => true,
            };

            matches_search && matches_status
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{LineItem, PaymentType, Unit};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: i64, item: &str, status: SaleStatus, customer: Option<&str>) -> Sale {
        let line = LineItem::new(item, 2, Unit::Kg, Money::from_cents(350)).unwrap();
        Sale {
            id,
            date: date(2023, 4, 12),
            total_amount_cents: line.total_cents,
            items: vec![line],
            payment_type: if customer.is_some() {
                PaymentType::Credit
            } else {
                PaymentType::Cash
            },
            status,
            customer_name: customer.map(str::to_string),
            due_date: customer.map(|_| date(2023, 4, 20)),
        }
    }

    #[test]
    fn test_filter_matches_item_or_customer() {
        let sales = vec![
            sale(1, "Rice", SaleStatus::Completed, None),
            sale(2, "Sugar", SaleStatus::Completed, None),
            sale(3, "Beans", SaleStatus::Pending, Some("John Doe")),
        ];

        let query = SalesQuery {
            search_term: "rice".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&sales, &query).len(), 1);

        let query = SalesQuery {
            search_term: "john".to_string(),
            ..Default::default()
        };
        let result = filter(&sales, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn test_filter_by_status() {
        let sales = vec![
            sale(1, "Rice", SaleStatus::Completed, None),
            sale(2, "Beans", SaleStatus::Pending, Some("John Doe")),
        ];

        let query = SalesQuery {
            status: Some(SaleStatus::Pending),
            ..Default::default()
        };
        let result = filter(&sales, &query);
        assert_eq!(result.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    }
}
