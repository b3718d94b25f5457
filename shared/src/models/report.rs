//! Statement building and ledger views over the transaction stream

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{resolve_customer_name, Customer, Transaction, TransactionKind};
use crate::types::DateRange;

/// Scope of a printed statement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Customer,
    Business,
}

/// On-screen ledger filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerView {
    #[default]
    All,
    Sales,
    Payments,
}

impl LedgerView {
    fn matches(&self, tx: &Transaction) -> bool {
        match self {
            LedgerView::All => true,
            LedgerView::Sales => tx.is_sale(),
            LedgerView::Payments => tx.is_payment(),
        }
    }
}

/// One statement line: the transaction plus the customer name resolved at
/// build time, so later customer edits never alter an already-built report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub customer_name: String,
}

impl ReportLine {
    pub fn sale_amount(&self) -> Option<Decimal> {
        self.transaction.is_sale().then(|| self.transaction.total())
    }

    pub fn payment_amount(&self) -> Option<Decimal> {
        self.transaction
            .is_payment()
            .then(|| self.transaction.total())
    }
}

/// A date-range-scoped, read-only statement ready for printing or export
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub kind: ReportKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    /// Oldest first for the printed body
    pub lines: Vec<ReportLine>,
    pub total_sales: Decimal,
    pub total_payments: Decimal,
    pub final_balance: Decimal,
}

fn matches_item_filter(tx: &Transaction, filter: Option<&str>) -> bool {
    let needle = match filter {
        Some(f) if !f.trim().is_empty() => f.trim().to_lowercase(),
        _ => return true,
    };
    match &tx.kind {
        // Payments carry no items; they are excluded while the filter is on
        TransactionKind::Payment { .. } => false,
        TransactionKind::Sale { lines } => lines
            .iter()
            .any(|l| l.item_name.to_lowercase().contains(&needle)),
    }
}

/// Build a printable statement over the inclusive date range.
///
/// Lines are sorted oldest-first and each carries a customer-name snapshot.
/// Totals are aggregated from exactly the included lines, so re-deriving
/// them from the statement reproduces the same figures.
pub fn build_statement(
    transactions: &[Transaction],
    customers: &[Customer],
    kind: ReportKind,
    range: DateRange,
    customer_filter: Option<Uuid>,
    item_filter: Option<&str>,
) -> Statement {
    let mut included: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| range.contains(tx.date))
        .filter(|tx| customer_filter.map_or(true, |id| tx.customer_id == id))
        .filter(|tx| matches_item_filter(tx, item_filter))
        .cloned()
        .collect();
    included.sort_by_key(|tx| tx.date);

    let mut total_sales = Decimal::ZERO;
    let mut total_payments = Decimal::ZERO;
    for tx in &included {
        match &tx.kind {
            TransactionKind::Sale { .. } => total_sales += tx.total(),
            TransactionKind::Payment { .. } => total_payments += tx.total(),
        }
    }

    let lines = included
        .into_iter()
        .map(|tx| ReportLine {
            customer_name: resolve_customer_name(customers, tx.customer_id),
            transaction: tx,
        })
        .collect();

    let customer =
        customer_filter.and_then(|id| customers.iter().find(|c| c.id == id).cloned());

    let title = match kind {
        ReportKind::Customer => "Customer Transaction Statement".to_string(),
        ReportKind::Business => "Business Transaction Report".to_string(),
    };

    Statement {
        kind,
        title,
        customer,
        start_date: range.start,
        end_date: range.end,
        lines,
        total_sales,
        total_payments,
        final_balance: total_sales - total_payments,
    }
}

/// The on-screen ledger consumer of the same filtered set: newest first.
pub fn ledger_view(
    transactions: &[Transaction],
    view: LedgerView,
    customer_filter: Option<Uuid>,
    item_filter: Option<&str>,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| view.matches(tx))
        .filter(|tx| customer_filter.map_or(true, |id| tx.customer_id == id))
        .filter(|tx| matches_item_filter(tx, item_filter))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}
