//! Returnable crate ledger models and running-balance computation

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Customer;

/// One movement in the returnable-crate ledger. The running balance is
/// never stored; it is recomputed over the whole ledger on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrateLedgerEntry {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub date: DateTime<Utc>,
    pub crates_issued: u32,
    pub crates_returned: u32,
}

impl CrateLedgerEntry {
    /// Signed crate movement of this entry
    pub fn net(&self) -> i64 {
        i64::from(self.crates_issued) - i64::from(self.crates_returned)
    }
}

/// A ledger entry annotated with the customer's running balance as of
/// that entry
#[derive(Debug, Clone, Serialize)]
pub struct CrateEntryWithBalance {
    #[serde(flatten)]
    pub entry: CrateLedgerEntry,
    pub balance: i64,
}

/// Ledger display filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrateView {
    #[default]
    All,
    Issued,
    Returned,
}

impl CrateView {
    fn matches(&self, entry: &CrateLedgerEntry) -> bool {
        match self {
            CrateView::All => true,
            CrateView::Issued => entry.crates_issued > 0,
            CrateView::Returned => entry.crates_returned > 0,
        }
    }
}

/// Per-customer crate debt summary
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCrateSummary {
    #[serde(flatten)]
    pub customer: Customer,
    pub outstanding_crates: i64,
}

/// Annotate every ledger entry with its customer's running balance.
///
/// Entries are walked in global chronological order (stable sort by date,
/// ties keep insertion order) while the accumulator is tracked per customer:
/// an entry's balance depends on that customer's earlier entries wherever
/// they sit in the input. Filtering or re-sorting for display must happen
/// only after this annotation.
pub fn with_running_balances(entries: &[CrateLedgerEntry]) -> Vec<CrateEntryWithBalance> {
    let mut ordered = entries.to_vec();
    ordered.sort_by_key(|e| e.date);

    let mut running: HashMap<Uuid, i64> = HashMap::new();
    ordered
        .into_iter()
        .map(|entry| {
            let balance = running.entry(entry.customer_id).or_insert(0);
            *balance += entry.net();
            CrateEntryWithBalance {
                balance: *balance,
                entry,
            }
        })
        .collect()
}

/// Annotated ledger ready for display: balances computed over the full
/// ledger first, then filtered by view and re-sorted newest-first.
pub fn display_ledger(entries: &[CrateLedgerEntry], view: CrateView) -> Vec<CrateEntryWithBalance> {
    let mut annotated = with_running_balances(entries);
    annotated.retain(|e| view.matches(&e.entry));
    annotated.sort_by(|a, b| b.entry.date.cmp(&a.entry.date));
    annotated
}

/// Per-customer summary: total issued minus total returned across the whole
/// ledger, which equals that customer's final running balance.
pub fn crate_summary(
    customers: &[Customer],
    entries: &[CrateLedgerEntry],
) -> Vec<CustomerCrateSummary> {
    customers
        .iter()
        .map(|customer| CustomerCrateSummary {
            outstanding_crates: entries
                .iter()
                .filter(|e| e.customer_id == customer.id)
                .map(|e| e.net())
                .sum(),
            customer: customer.clone(),
        })
        .collect()
}
