//! Sales/payment ledger models and balance aggregation

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Customer, CustomerWithBalance};
use crate::types::Unit;

/// A ledger transaction. The kind-specific payload is a tagged union, so a
/// sale always carries its lines and a payment always carries its amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: TransactionKind,
}

/// Kind-specific transaction payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    Sale { lines: Vec<SaleLine> },
    Payment { amount: Decimal },
}

/// One line of a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    pub inventory_lot_id: Uuid,
    /// Item label snapshot taken at sale time
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub price_per_unit: Decimal,
    pub total: Decimal,
}

impl SaleLine {
    pub fn new(
        inventory_lot_id: Uuid,
        item_name: String,
        quantity: Decimal,
        unit: Unit,
        price_per_unit: Decimal,
    ) -> Self {
        Self {
            inventory_lot_id,
            item_name,
            quantity,
            unit,
            price_per_unit,
            total: quantity * price_per_unit,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.quantity * self.price_per_unit
    }

    /// A line with a non-positive quantity or price is malformed and is
    /// dropped from aggregation rather than aborting the computation.
    pub fn is_well_formed(&self) -> bool {
        self.quantity > Decimal::ZERO && self.price_per_unit > Decimal::ZERO
    }
}

impl Transaction {
    /// Total amount of the transaction: sum of well-formed line totals for a
    /// sale, the payment amount for a payment.
    pub fn total(&self) -> Decimal {
        match &self.kind {
            TransactionKind::Sale { lines } => lines
                .iter()
                .filter(|l| l.is_well_formed())
                .map(|l| l.line_total())
                .sum(),
            TransactionKind::Payment { amount } => *amount,
        }
    }

    pub fn is_sale(&self) -> bool {
        matches!(self.kind, TransactionKind::Sale { .. })
    }

    pub fn is_payment(&self) -> bool {
        matches!(self.kind, TransactionKind::Payment { .. })
    }

    /// Short human-readable description of the transaction contents
    pub fn details(&self) -> String {
        match &self.kind {
            TransactionKind::Sale { lines } => lines
                .iter()
                .map(|l| format!("{} {} {}", l.quantity, l.unit, l.item_name))
                .collect::<Vec<_>>()
                .join(", "),
            TransactionKind::Payment { .. } => "Payment Received".to_string(),
        }
    }
}

/// Fold the transaction stream into per-customer outstanding balances.
///
/// Every known customer starts at zero so customers with no transactions
/// still report a balance. Sales add their total, payments subtract theirs.
/// Pure summation: the iteration order of the stream does not matter, and
/// the result is unclamped in both directions.
pub fn outstanding_balances(
    customers: &[Customer],
    transactions: &[Transaction],
) -> HashMap<Uuid, Decimal> {
    let mut balances: HashMap<Uuid, Decimal> =
        customers.iter().map(|c| (c.id, Decimal::ZERO)).collect();

    for tx in transactions {
        let balance = balances.entry(tx.customer_id).or_insert(Decimal::ZERO);
        match &tx.kind {
            TransactionKind::Sale { .. } => *balance += tx.total(),
            TransactionKind::Payment { .. } => *balance -= tx.total(),
        }
    }

    balances
}

/// Attach derived balances to customers, preserving customer input order
pub fn with_balances(
    customers: &[Customer],
    transactions: &[Transaction],
) -> Vec<CustomerWithBalance> {
    let balances = outstanding_balances(customers, transactions);
    customers
        .iter()
        .map(|customer| CustomerWithBalance {
            outstanding_balance: balances
                .get(&customer.id)
                .copied()
                .unwrap_or(Decimal::ZERO),
            customer: customer.clone(),
        })
        .collect()
}
