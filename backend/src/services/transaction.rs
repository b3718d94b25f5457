//! Sales/payment ledger service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    ledger_view, resolve_customer_name, validate_payment_amount, CrateLedgerEntry, LedgerView,
    ReportLine, SaleLine, Transaction, TransactionKind, Unit,
};

use crate::error::{AppError, AppResult};
use crate::state::{SharedStore, Store};

/// Transaction service over the in-memory ledger
#[derive(Clone)]
pub struct TransactionService {
    store: SharedStore,
}

/// Input for recording or replacing a transaction
#[derive(Debug, Deserialize)]
pub struct RecordTransactionInput {
    pub customer_id: Uuid,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: TransactionKindInput,
}

/// Kind-specific transaction input
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKindInput {
    Sale {
        lines: Vec<SaleLineInput>,
        /// Crates handed over with this sale, recorded in the crate ledger
        #[serde(default)]
        crates_issued: u32,
    },
    Payment {
        amount: Decimal,
    },
}

/// One sale line as entered on the form
#[derive(Debug, Deserialize)]
pub struct SaleLineInput {
    pub inventory_lot_id: Uuid,
    pub quantity: Decimal,
    pub unit: Unit,
    pub price_per_unit: Decimal,
}

impl TransactionService {
    /// Create a new TransactionService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// On-screen ledger view: filtered, newest first, with customer names
    /// resolved for display
    pub async fn ledger(
        &self,
        view: LedgerView,
        customer_filter: Option<Uuid>,
        item_filter: Option<&str>,
    ) -> Vec<ReportLine> {
        let guard = self.store.read().await;
        ledger_view(&guard.transactions, view, customer_filter, item_filter)
            .into_iter()
            .map(|tx| ReportLine {
                customer_name: resolve_customer_name(&guard.customers, tx.customer_id),
                transaction: tx,
            })
            .collect()
    }

    /// Record a new transaction. A sale with crates attached also appends a
    /// crate-issue entry to the crate ledger.
    pub async fn record(&self, input: RecordTransactionInput) -> AppResult<Transaction> {
        let mut guard = self.store.write().await;

        ensure_customer_exists(&guard, input.customer_id)?;

        let date = input.date.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let mut crates_from_sale: u32 = 0;

        let kind = match input.kind {
            TransactionKindInput::Sale {
                lines,
                crates_issued,
            } => {
                crates_from_sale = crates_issued;
                TransactionKind::Sale {
                    lines: build_sale_lines(&guard, lines)?,
                }
            }
            TransactionKindInput::Payment { amount } => {
                validate_payment(amount)?;
                TransactionKind::Payment { amount }
            }
        };

        let transaction = Transaction {
            id: Uuid::new_v4(),
            customer_id: input.customer_id,
            date,
            kind,
        };

        let mut next = guard.transactions.clone();
        next.push(transaction.clone());
        guard.transactions = next;

        if crates_from_sale > 0 {
            let entry = CrateLedgerEntry {
                id: Uuid::new_v4(),
                customer_id: input.customer_id,
                date,
                crates_issued: crates_from_sale,
                crates_returned: 0,
            };
            let mut next = guard.crate_ledger.clone();
            next.push(entry);
            guard.crate_ledger = next;
        }

        Ok(transaction)
    }

    /// Replace an existing transaction wholesale. Crate issues attached to
    /// the original sale are not replayed on edit.
    pub async fn update(
        &self,
        transaction_id: Uuid,
        input: RecordTransactionInput,
    ) -> AppResult<Transaction> {
        let mut guard = self.store.write().await;

        ensure_customer_exists(&guard, input.customer_id)?;

        if !guard.transactions.iter().any(|tx| tx.id == transaction_id) {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        let kind = match input.kind {
            TransactionKindInput::Sale { lines, .. } => TransactionKind::Sale {
                lines: build_sale_lines(&guard, lines)?,
            },
            TransactionKindInput::Payment { amount } => {
                validate_payment(amount)?;
                TransactionKind::Payment { amount }
            }
        };

        let updated = Transaction {
            id: transaction_id,
            customer_id: input.customer_id,
            date: input.date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
            kind,
        };

        let next: Vec<Transaction> = guard
            .transactions
            .iter()
            .map(|tx| {
                if tx.id == transaction_id {
                    updated.clone()
                } else {
                    tx.clone()
                }
            })
            .collect();
        guard.transactions = next;

        Ok(updated)
    }

    /// Remove a transaction
    pub async fn delete(&self, transaction_id: Uuid) -> AppResult<()> {
        let mut guard = self.store.write().await;

        if !guard.transactions.iter().any(|tx| tx.id == transaction_id) {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        let next: Vec<Transaction> = guard
            .transactions
            .iter()
            .filter(|tx| tx.id != transaction_id)
            .cloned()
            .collect();
        guard.transactions = next;

        Ok(())
    }
}

fn ensure_customer_exists(store: &Store, customer_id: Uuid) -> AppResult<()> {
    if store.customers.iter().any(|c| c.id == customer_id) {
        Ok(())
    } else {
        Err(AppError::NotFound("Customer".to_string()))
    }
}

fn validate_payment(amount: Decimal) -> AppResult<()> {
    validate_payment_amount(amount).map_err(|message| AppError::Validation {
        field: "amount".to_string(),
        message: message.to_string(),
        message_hi: "भुगतान राशि धनात्मक होनी चाहिए".to_string(),
    })
}

/// Resolve entered sale lines against the inventory. Lines referencing a
/// missing lot or carrying a non-positive quantity or price are dropped; a
/// sale must end up with at least one valid line.
fn build_sale_lines(store: &Store, inputs: Vec<SaleLineInput>) -> AppResult<Vec<SaleLine>> {
    let lines: Vec<SaleLine> = inputs
        .into_iter()
        .filter_map(|input| {
            let lot = store
                .inventory
                .iter()
                .find(|l| l.id == input.inventory_lot_id)?;
            if input.quantity <= Decimal::ZERO || input.price_per_unit <= Decimal::ZERO {
                return None;
            }
            Some(SaleLine::new(
                lot.id,
                lot.label(),
                input.quantity,
                input.unit,
                input.price_per_unit,
            ))
        })
        .collect();

    if lines.is_empty() {
        return Err(AppError::Validation {
            field: "lines".to_string(),
            message: "At least one valid sale item is required".to_string(),
            message_hi: "कम से कम एक मान्य बिक्री आइटम आवश्यक है".to_string(),
        });
    }

    Ok(lines)
}
