//! # Debt Aging Engine
//!
//! Classifies and aggregates customer debts by due-date proximity and
//! payment status.
//!
//! ## Aging Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Debt Aging Timeline                                │
//! │                                                                         │
//! │   due_days(debt, today) = due_date − today, in whole days               │
//! │                                                                         │
//! │   ◄──────── overdue ────────┼──── due soon ────┼──── comfortable ────►  │
//! │        due_days < 0         │  0 ≤ due_days ≤ 3│     due_days > 3       │
//! │   "N days overdue"          │  "Due today" /   │     "N days"           │
//! │                             │  "N days"        │                        │
//! │                                                                         │
//! │   Paid debts leave the timeline entirely: once status == Paid,          │
//! │   due-date comparisons no longer apply.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Time
//! Classification happens at read time against an explicit `today`
//! parameter, once per session load, not on a timer. Callers decide what
//! "today" is; this module never reads the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Debt, DebtStatus, PaymentType, Sale};
use crate::DUE_SOON_WINDOW_DAYS;

// =============================================================================
// Aging Queries
// =============================================================================

impl Debt {
    /// Checks whether the debt is past due and still awaiting payment.
    ///
    /// True iff the debt is `Pending` and its due date is strictly before
    /// `today`. A debt due today is not overdue yet. Paid and already
    /// reclassified debts return false.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == DebtStatus::Pending && self.due_date < today
    }

    /// Returns the signed number of days until the due date.
    ///
    /// Negative means overdue by that many days; zero means due today.
    ///
    /// ## Example
    /// ```rust
    /// # use bodega_core::types::{Debt, DebtStatus};
    /// # use chrono::NaiveDate;
    /// # let debt = Debt {
    /// #     id: 1, customer_name: "John Doe".into(), amount_cents: 3500,
    /// #     created_date: NaiveDate::from_ymd_opt(2023, 4, 10).unwrap(),
    /// #     due_date: NaiveDate::from_ymd_opt(2023, 4, 20).unwrap(),
    /// #     items: vec![], status: DebtStatus::Pending, notified: false,
    /// # };
    /// let today = NaiveDate::from_ymd_opt(2023, 4, 25).unwrap();
    /// assert_eq!(debt.due_days(today), -5); // 5 days overdue
    /// ```
    pub fn due_days(&self, today: NaiveDate) -> i64 {
        self.due_date.signed_duration_since(today).num_days()
    }

    /// Builds the debt a credit sale implies.
    ///
    /// The caller decides whether and when to record it; recording a sale
    /// never creates a debt implicitly. Returns `None` for cash sales and
    /// for credit sales missing their customer name or due date.
    pub fn from_credit_sale(id: i64, sale: &Sale) -> Option<Debt> {
        if sale.payment_type != PaymentType::Credit {
            return None;
        }

        let customer_name = sale.customer_name.clone()?;
        let due_date = sale.due_date?;

        Some(Debt {
            id,
            customer_name,
            amount_cents: sale.total_amount_cents,
            created_date: sale.date,
            due_date,
            items: sale.items.clone(),
            status: DebtStatus::Pending,
            notified: false,
        })
    }
}

/// Returns the UI-facing payment status label for a debt.
///
/// - Paid debts: `"Paid"`
/// - Overdue: `"5 days overdue"`
/// - Due today: `"Due today"`
/// - Otherwise: `"7 days"`
pub fn payment_status_label(debt: &Debt, today: NaiveDate) -> String {
    if debt.status == DebtStatus::Paid {
        return "Paid".to_string();
    }

    let days = debt.due_days(today);
    if days < 0 {
        format!("{} days overdue", days.abs())
    } else if days == 0 {
        "Due today".to_string()
    } else {
        format!("{} days", days)
    }
}

// =============================================================================
// Reclassification
// =============================================================================

/// Reclassifies every pending debt whose due date has passed as overdue.
///
/// All other debts are unchanged. Runs once per session load, not on a
/// timer. Returns the number of newly reclassified debts so the caller can
/// emit a single aggregate notification when the count is non-zero.
///
/// Applying this twice with the same `today` yields the same collection as
/// applying it once: a debt already `Overdue` is not pending anymore, so
/// the second pass finds nothing.
pub fn reclassify(debts: &mut [Debt], today: NaiveDate) -> usize {
    let mut reclassified = 0;

    for debt in debts.iter_mut() {
        if debt.is_overdue(today) {
            debt.status = DebtStatus::Overdue;
            reclassified += 1;
        }
    }

    reclassified
}

// =============================================================================
// Aggregate Totals
// =============================================================================

/// Summary figures for the debts dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtTotals {
    /// Sum over every debt that is not paid.
    pub outstanding_cents: i64,
    /// Number of unpaid debts.
    pub outstanding_count: usize,
    /// Sum over debts already classified overdue.
    pub overdue_cents: i64,
    pub overdue_count: usize,
    /// Sum over pending debts due within the next 3 days (inclusive).
    pub due_soon_cents: i64,
    pub due_soon_count: usize,
}

impl DebtTotals {
    /// Returns the outstanding total as Money.
    #[inline]
    pub fn outstanding(&self) -> Money {
        Money::from_cents(self.outstanding_cents)
    }

    /// Returns the overdue total as Money.
    #[inline]
    pub fn overdue(&self) -> Money {
        Money::from_cents(self.overdue_cents)
    }

    /// Returns the due-soon total as Money.
    #[inline]
    pub fn due_soon(&self) -> Money {
        Money::from_cents(self.due_soon_cents)
    }
}

/// Computes outstanding, overdue and due-soon totals over a collection.
///
/// "Due soon" is a pending debt with `0 <= due_days <= 3`; overdue debts
/// are counted separately even though they are also unpaid.
pub fn totals(debts: &[Debt], today: NaiveDate) -> DebtTotals {
    let mut t = DebtTotals {
        outstanding_cents: 0,
        outstanding_count: 0,
        overdue_cents: 0,
        overdue_count: 0,
        due_soon_cents: 0,
        due_soon_count: 0,
    };

    for debt in debts {
        if debt.status != DebtStatus::Paid {
            t.outstanding_cents += debt.amount_cents;
            t.outstanding_count += 1;
        }

        if debt.status == DebtStatus::Overdue {
            t.overdue_cents += debt.amount_cents;
            t.overdue_count += 1;
        }

        if debt.status == DebtStatus::Pending {
            let days = debt.due_days(today);
            if (0..=DUE_SOON_WINDOW_DAYS).contains(&days) {
                t.due_soon_cents += debt.amount_cents;
                t.due_soon_count += 1;
            }
        }
    }

    t
}

// =============================================================================
// Mutations
// =============================================================================

/// Marks the matching debt as paid.
///
/// Idempotent: paying an already-paid debt simply re-sets the field.
/// Fails only when no debt with that id exists.
pub fn mark_paid(debts: &mut [Debt], id: i64) -> CoreResult<()> {
    let debt = debts
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or(CoreError::DebtNotFound(id))?;

    debt.status = DebtStatus::Paid;
    Ok(())
}

/// Records that a payment reminder was sent for the matching debt.
///
/// Blocked once a reminder was already sent or once the debt is paid;
/// a blocked call is a no-op and returns `Ok(false)`. Returns `Ok(true)`
/// when the reminder flag was actually set.
pub fn send_reminder(debts: &mut [Debt], id: i64) -> CoreResult<bool> {
    let debt = debts
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or(CoreError::DebtNotFound(id))?;

    if debt.notified || debt.status == DebtStatus::Paid {
        return Ok(false);
    }

    debt.notified = true;
    Ok(true)
}

// =============================================================================
// Filtering and Sorting
// =============================================================================

/// The column the debt list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtSortKey {
    /// Ascending: the most urgent deadlines first.
    DueDate,
    /// Descending: the largest debts first.
    Amount,
    /// Lexicographic ascending by customer name.
    CustomerName,
}

impl Default for DebtSortKey {
    fn default() -> Self {
        DebtSortKey::DueDate
    }
}

/// Search, filter and sort parameters for the debt list.
#[derive(Debug, Clone, Default)]
pub struct DebtQuery {
    /// Case-insensitive substring match on the customer name.
    /// Empty matches everything.
    pub search_term: String,

    /// Exact status to keep, or `None` for all.
    pub status: Option<DebtStatus>,

    pub sort_by: DebtSortKey,
}

/// Filters and sorts a debt collection for display.
///
/// Matching is a case-insensitive substring test on the customer name;
/// the status filter is exact-match or all. The input collection is never
/// mutated: the result is a fresh, sorted copy.
pub fn filter_and_sort(debts: &[Debt], query: &DebtQuery) -> Vec<Debt> {
    let needle = query.search_term.to_lowercase();

    let mut result: Vec<Debt> = debts
        .iter()
        .filter(|debt| {
            let matches_search =
                needle.is_empty() || debt.customer_name.to_lowercase().contains(&needle);
            let matches_status = match query.status {
                Some(status) => debt.status == status,
                None => true,
            };

            matches_search && matches_status
        })
        .cloned()
        .collect();

    match query.sort_by {
        DebtSortKey::DueDate => result.sort_by_key(|d| d.due_date),
        DebtSortKey::Amount => result.sort_by(|a, b| b.amount_cents.cmp(&a.amount_cents)),
        DebtSortKey::CustomerName => {
            result.sort_by(|a, b| a.customer_name.cmp(&b.customer_name))
        }
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, Unit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn debt(id: i64, customer: &str, amount_cents: i64, due: NaiveDate, status: DebtStatus) -> Debt {
        Debt {
            id,
            customer_name: customer.to_string(),
            amount_cents,
            created_date: date(2023, 4, 1),
            due_date: due,
            items: vec![
                LineItem::new("Rice", 10, Unit::Kg, Money::from_cents(350)).unwrap(),
            ],
            status,
            notified: false,
        }
    }

    #[test]
    fn test_is_overdue_only_for_pending_past_due() {
        let today = date(2023, 4, 15);

        let pending_past = debt(1, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Pending);
        assert!(pending_past.is_overdue(today));

        let pending_today = debt(2, "John Doe", 3500, today, DebtStatus::Pending);
        assert!(!pending_today.is_overdue(today));

        let paid_past = debt(3, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Paid);
        assert!(!paid_past.is_overdue(today));
    }

    #[test]
    fn test_due_days_and_labels() {
        let today = date(2023, 4, 15);

        let overdue = debt(1, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Pending);
        assert_eq!(overdue.due_days(today), -5);
        assert_eq!(payment_status_label(&overdue, today), "5 days overdue");

        let due_today = debt(2, "John Doe", 3500, today, DebtStatus::Pending);
        assert_eq!(due_today.due_days(today), 0);
        assert_eq!(payment_status_label(&due_today, today), "Due today");

        let comfortable = debt(3, "John Doe", 3500, date(2023, 4, 22), DebtStatus::Pending);
        assert_eq!(comfortable.due_days(today), 7);
        assert_eq!(payment_status_label(&comfortable, today), "7 days");

        let paid = debt(4, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Paid);
        assert_eq!(payment_status_label(&paid, today), "Paid");
    }

    #[test]
    fn test_reclassify_marks_pending_past_due() {
        let today = date(2023, 4, 15);
        let mut debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Pending),
            debt(2, "Sarah Williams", 4550, date(2023, 4, 20), DebtStatus::Pending),
            debt(3, "Michael Johnson", 6725, date(2023, 4, 7), DebtStatus::Paid),
        ];

        let count = reclassify(&mut debts, today);

        assert_eq!(count, 1);
        assert_eq!(debts[0].status, DebtStatus::Overdue);
        assert_eq!(debts[1].status, DebtStatus::Pending);
        assert_eq!(debts[2].status, DebtStatus::Paid);
    }

    #[test]
    fn test_reclassify_is_idempotent() {
        let today = date(2023, 4, 15);
        let mut debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Pending),
            debt(2, "Linda Brown", 2375, date(2023, 4, 8), DebtStatus::Pending),
        ];

        let first = reclassify(&mut debts, today);
        let after_first = debts.clone();
        let second = reclassify(&mut debts, today);

        assert_eq!(first, 2);
        assert_eq!(second, 0);
        assert_eq!(
            debts.iter().map(|d| d.status).collect::<Vec<_>>(),
            after_first.iter().map(|d| d.status).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_totals() {
        let today = date(2023, 4, 15);
        let debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 17), DebtStatus::Pending), // due soon
            debt(2, "Sarah Williams", 4550, date(2023, 4, 30), DebtStatus::Pending),
            debt(3, "Michael Johnson", 6725, date(2023, 4, 7), DebtStatus::Overdue),
            debt(4, "Linda Brown", 2375, date(2023, 4, 8), DebtStatus::Paid),
        ];

        let t = totals(&debts, today);

        assert_eq!(t.outstanding_cents, 3500 + 4550 + 6725);
        assert_eq!(t.outstanding_count, 3);
        assert_eq!(t.overdue_cents, 6725);
        assert_eq!(t.overdue_count, 1);
        assert_eq!(t.due_soon_cents, 3500);
        assert_eq!(t.due_soon_count, 1);
    }

    #[test]
    fn test_due_soon_window_is_inclusive() {
        let today = date(2023, 4, 15);
        let debts = vec![
            debt(1, "A", 100, today, DebtStatus::Pending),              // 0 days
            debt(2, "B", 200, date(2023, 4, 18), DebtStatus::Pending),  // 3 days
            debt(3, "C", 400, date(2023, 4, 19), DebtStatus::Pending),  // 4 days: out
            debt(4, "D", 800, date(2023, 4, 14), DebtStatus::Pending),  // overdue: out
        ];

        let t = totals(&debts, today);
        assert_eq!(t.due_soon_cents, 300);
        assert_eq!(t.due_soon_count, 2);
    }

    #[test]
    fn test_mark_paid_is_idempotent() {
        let mut debts = vec![debt(1, "John Doe", 3500, date(2023, 4, 10), DebtStatus::Pending)];

        mark_paid(&mut debts, 1).unwrap();
        assert_eq!(debts[0].status, DebtStatus::Paid);

        // Re-setting the field is a no-op status-wise
        mark_paid(&mut debts, 1).unwrap();
        assert_eq!(debts[0].status, DebtStatus::Paid);

        assert!(matches!(
            mark_paid(&mut debts, 99),
            Err(CoreError::DebtNotFound(99))
        ));
    }

    #[test]
    fn test_send_reminder_blocked_after_first_send_or_payment() {
        let mut debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 20), DebtStatus::Pending),
            debt(2, "Linda Brown", 2375, date(2023, 4, 8), DebtStatus::Paid),
        ];

        assert!(send_reminder(&mut debts, 1).unwrap());
        assert!(debts[0].notified);

        // Second reminder for the same debt is blocked
        assert!(!send_reminder(&mut debts, 1).unwrap());

        // Paid debts never get reminders
        assert!(!send_reminder(&mut debts, 2).unwrap());
        assert!(!debts[1].notified);
    }

    #[test]
    fn test_filter_and_sort_by_due_date() {
        let debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 20), DebtStatus::Pending),
            debt(2, "Sarah Williams", 4550, date(2023, 4, 15), DebtStatus::Pending),
            debt(3, "Michael Johnson", 6725, date(2023, 4, 7), DebtStatus::Overdue),
            debt(4, "Johnny Cake", 1000, date(2023, 4, 10), DebtStatus::Pending),
        ];

        let query = DebtQuery {
            search_term: "john".to_string(),
            status: None,
            sort_by: DebtSortKey::DueDate,
        };
        let result = filter_and_sort(&debts, &query);

        // Case-insensitive substring: John Doe, Michael Johnson, Johnny Cake
        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![3, 4, 1] // ascending due date
        );

        // Input order untouched
        assert_eq!(debts[0].id, 1);
    }

    #[test]
    fn test_filter_by_status_and_sort_by_amount() {
        let debts = vec![
            debt(1, "John Doe", 3500, date(2023, 4, 20), DebtStatus::Pending),
            debt(2, "Sarah Williams", 4550, date(2023, 4, 15), DebtStatus::Pending),
            debt(3, "Michael Johnson", 6725, date(2023, 4, 7), DebtStatus::Overdue),
        ];

        let query = DebtQuery {
            search_term: String::new(),
            status: Some(DebtStatus::Pending),
            sort_by: DebtSortKey::Amount,
        };
        let result = filter_and_sort(&debts, &query);

        assert_eq!(
            result.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![2, 1] // descending amount
        );
    }

    #[test]
    fn test_sort_by_customer_name() {
        let debts = vec![
            debt(1, "Sarah Williams", 3500, date(2023, 4, 20), DebtStatus::Pending),
            debt(2, "John Doe", 4550, date(2023, 4, 15), DebtStatus::Pending),
            debt(3, "Linda Brown", 6725, date(2023, 4, 7), DebtStatus::Overdue),
        ];

        let query = DebtQuery {
            sort_by: DebtSortKey::CustomerName,
            ..Default::default()
        };
        let result = filter_and_sort(&debts, &query);

        assert_eq!(
            result.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn test_from_credit_sale() {
        let sale = Sale {
            id: 3,
            date: date(2023, 4, 10),
            items: vec![LineItem::new("Rice", 10, Unit::Kg, Money::from_cents(350)).unwrap()],
            total_amount_cents: 3500,
            payment_type: PaymentType::Credit,
            status: crate::types::SaleStatus::Pending,
            customer_name: Some("John Doe".to_string()),
            due_date: Some(date(2023, 4, 20)),
        };

        let d = Debt::from_credit_sale(1, &sale).unwrap();
        assert_eq!(d.customer_name, "John Doe");
        assert_eq!(d.amount_cents, 3500);
        assert_eq!(d.status, DebtStatus::Pending);
        assert!(!d.notified);

        let cash = Sale {
            payment_type: PaymentType::Cash,
            status: crate::types::SaleStatus::Completed,
            customer_name: None,
            due_date: None,
            ..sale
        };
        assert!(Debt::from_credit_sale(2, &cash).is_none());
    }
}
