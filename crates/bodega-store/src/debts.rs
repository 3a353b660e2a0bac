//! # Debt Store
//!
//! Owns the customer debt collection for the debts screen.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Debt Store Lifecycle                               │
//! │                                                                         │
//! │  screen mount ──► DebtStore::with_seed(...)                             │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   load(today) ──► reclassify pending → overdue          │
//! │                        │          (once per session, not on a timer)    │
//! │                        ▼                                                │
//! │                   one aggregate warn! when anything was reclassified    │
//! │                        │                                                │
//! │                        ▼                                                │
//! │         query / totals / mark_paid / send_reminder                      │
//! │                        │                                                │
//! │  screen unmount ──► store dropped, collection discarded                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use bodega_core::debt::{self, DebtQuery, DebtTotals};
use bodega_core::types::{Debt, Sale};
use bodega_core::CoreResult;

use crate::next_id_after;

/// Owning store for the debt collection.
///
/// Exactly one instance exists per debts screen; every mutation goes
/// through `&mut self` (single-writer model).
#[derive(Debug, Default)]
pub struct DebtStore {
    debts: Vec<Debt>,
    next_id: i64,
}

impl DebtStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        DebtStore {
            debts: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store over injected seed data.
    ///
    /// The id counter starts one past the largest seeded id and never
    /// reuses a value, even after the record with the largest id is paid
    /// off or the collection shrinks.
    pub fn with_seed(debts: Vec<Debt>) -> Self {
        let next_id = next_id_after(debts.iter().map(|d| d.id));
        DebtStore { debts, next_id }
    }

    /// Runs the once-per-session-load overdue reclassification.
    ///
    /// Emits a single aggregate notification event when at least one debt
    /// was reclassified, reporting the count. Returns that count.
    pub fn load(&mut self, today: NaiveDate) -> usize {
        let count = debt::reclassify(&mut self.debts, today);

        if count > 0 {
            warn!(
                overdue = count,
                "some customers have not paid within the agreed time"
            );
        }

        count
    }

    /// The whole collection, in insertion order.
    pub fn list(&self) -> &[Debt] {
        &self.debts
    }

    /// Looks up a debt by id.
    pub fn get(&self, id: i64) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    /// Filters and sorts for display. Never mutates the collection.
    pub fn query(&self, query: &DebtQuery) -> Vec<Debt> {
        debt::filter_and_sort(&self.debts, query)
    }

    /// Summary figures for the dashboard cards.
    pub fn totals(&self, today: NaiveDate) -> DebtTotals {
        debt::totals(&self.debts, today)
    }

    /// Records the debt implied by a credit sale.
    ///
    /// This is the explicit opt-in wiring between the sales and debt
    /// collections: nothing calls it automatically. Returns `None` when
    /// the sale is not a credit sale.
    pub fn record_credit_sale(&mut self, sale: &Sale) -> Option<&Debt> {
        let debt = Debt::from_credit_sale(self.next_id, sale)?;

        info!(debt_id = debt.id, customer = %debt.customer_name, "recording credit sale as debt");
        self.next_id += 1;
        self.debts.push(debt);
        self.debts.last()
    }

    /// Marks a debt as paid. Idempotent.
    pub fn mark_paid(&mut self, id: i64) -> CoreResult<()> {
        debug!(id, "mark debt as paid");
        debt::mark_paid(&mut self.debts, id)
    }

    /// Sends a payment reminder for a debt.
    ///
    /// Returns `Ok(false)` when the reminder is blocked (already sent, or
    /// the debt is paid).
    pub fn send_reminder(&mut self, id: i64) -> CoreResult<bool> {
        let sent = debt::send_reminder(&mut self.debts, id)?;
        if sent {
            info!(id, "payment reminder sent to customer");
        } else {
            debug!(id, "payment reminder suppressed");
        }
        Ok(sent)
    }

    /// Replaces the collection. Test hook.
    pub fn reset(&mut self, debts: Vec<Debt>) {
        self.next_id = next_id_after(debts.iter().map(|d| d.id));
        self.debts = debts;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{sample_debts, sample_sales};
    use bodega_core::types::DebtStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_reclassifies_once() {
        // Both pending seeds (due 2023-04-20 and 2023-04-15) are past due
        let mut store = DebtStore::with_seed(sample_debts());
        let today = date(2023, 5, 1);

        assert_eq!(store.load(today), 2);
        assert!(store
            .list()
            .iter()
            .all(|d| d.status != DebtStatus::Pending));

        // Second load finds nothing new
        assert_eq!(store.load(today), 0);
    }

    #[test]
    fn test_load_before_due_dates_changes_nothing() {
        let mut store = DebtStore::with_seed(sample_debts());
        let today = date(2023, 4, 12);

        assert_eq!(store.load(today), 0);
        assert_eq!(
            store.get(1).unwrap().status,
            DebtStatus::Pending
        );
    }

    #[test]
    fn test_id_counter_survives_collection_changes() {
        let mut store = DebtStore::with_seed(sample_debts());
        let credit_sale = sample_sales().into_iter().find(|s| s.id == 3).unwrap();

        let id = store.record_credit_sale(&credit_sale).unwrap().id;
        assert_eq!(id, 5); // max seed id is 4

        let second = store.record_credit_sale(&credit_sale).unwrap().id;
        assert_eq!(second, 6);
    }

    #[test]
    fn test_record_credit_sale_ignores_cash() {
        let mut store = DebtStore::with_seed(vec![]);
        let cash_sale = sample_sales().into_iter().find(|s| s.id == 1).unwrap();

        assert!(store.record_credit_sale(&cash_sale).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_mark_paid_and_totals() {
        let mut store = DebtStore::with_seed(sample_debts());
        let today = date(2023, 4, 12);

        store.mark_paid(1).unwrap();

        let totals = store.totals(today);
        assert_eq!(totals.outstanding_cents, 4550 + 6725 + 2375);
        assert_eq!(totals.outstanding_count, 3);
    }

    #[test]
    fn test_send_reminder_blocked_for_notified_seed() {
        let mut store = DebtStore::with_seed(sample_debts());

        // Seed debt 2 is already notified
        assert!(!store.send_reminder(2).unwrap());
        // Seed debt 1 is not
        assert!(store.send_reminder(1).unwrap());
        assert!(!store.send_reminder(1).unwrap());
    }

    #[test]
    fn test_reset_restores_seed_state() {
        let mut store = DebtStore::with_seed(sample_debts());
        store.mark_paid(1).unwrap();

        store.reset(sample_debts());
        assert_eq!(store.get(1).unwrap().status, DebtStatus::Pending);
    }
}
