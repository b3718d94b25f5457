//! Returnable-crate ledger service

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{
    crate_summary, display_ledger, resolve_customer_name, CrateEntryWithBalance, CrateLedgerEntry,
    CrateView, CustomerCrateSummary,
};

use crate::error::{AppError, AppResult};
use crate::state::SharedStore;

/// Crate ledger service over the in-memory entry collection
#[derive(Clone)]
pub struct CrateService {
    store: SharedStore,
}

/// Direction of a crate movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrateMovement {
    Issue,
    Return,
}

/// Input for recording or replacing a crate ledger entry.
/// Exactly one of issued/returned ends up non-zero.
#[derive(Debug, Deserialize)]
pub struct CrateEntryInput {
    pub customer_id: Uuid,
    pub date: NaiveDate,
    pub movement: CrateMovement,
    pub quantity: u32,
}

/// A ledger row ready for display
#[derive(Debug, Serialize)]
pub struct CrateLedgerRow {
    #[serde(flatten)]
    pub entry: CrateEntryWithBalance,
    pub customer_name: String,
}

impl CrateService {
    /// Create a new CrateService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Annotated ledger for display: running balances over the whole ledger,
    /// then filtered by view and sorted newest first
    pub async fn ledger(&self, view: CrateView) -> Vec<CrateLedgerRow> {
        let guard = self.store.read().await;
        display_ledger(&guard.crate_ledger, view)
            .into_iter()
            .map(|entry| CrateLedgerRow {
                customer_name: resolve_customer_name(&guard.customers, entry.entry.customer_id),
                entry,
            })
            .collect()
    }

    /// Per-customer crate debt summary
    pub async fn summary(&self) -> Vec<CustomerCrateSummary> {
        let guard = self.store.read().await;
        crate_summary(&guard.customers, &guard.crate_ledger)
    }

    /// Record a crate issue or return
    pub async fn record(&self, input: CrateEntryInput) -> AppResult<CrateLedgerEntry> {
        let entry = self.build_entry(Uuid::new_v4(), &input)?;

        let mut guard = self.store.write().await;

        if !guard.customers.iter().any(|c| c.id == input.customer_id) {
            return Err(AppError::NotFound("Customer".to_string()));
        }

        let mut next = guard.crate_ledger.clone();
        next.push(entry.clone());
        guard.crate_ledger = next;

        Ok(entry)
    }

    /// Replace an existing ledger entry wholesale
    pub async fn update(
        &self,
        entry_id: Uuid,
        input: CrateEntryInput,
    ) -> AppResult<CrateLedgerEntry> {
        let updated = self.build_entry(entry_id, &input)?;

        let mut guard = self.store.write().await;

        if !guard.customers.iter().any(|c| c.id == input.customer_id) {
            return Err(AppError::NotFound("Customer".to_string()));
        }
        if !guard.crate_ledger.iter().any(|e| e.id == entry_id) {
            return Err(AppError::NotFound("Crate entry".to_string()));
        }

        let next: Vec<CrateLedgerEntry> = guard
            .crate_ledger
            .iter()
            .map(|e| {
                if e.id == entry_id {
                    updated.clone()
                } else {
                    e.clone()
                }
            })
            .collect();
        guard.crate_ledger = next;

        Ok(updated)
    }

    /// Remove a ledger entry
    pub async fn delete(&self, entry_id: Uuid) -> AppResult<()> {
        let mut guard = self.store.write().await;

        if !guard.crate_ledger.iter().any(|e| e.id == entry_id) {
            return Err(AppError::NotFound("Crate entry".to_string()));
        }

        let next: Vec<CrateLedgerEntry> = guard
            .crate_ledger
            .iter()
            .filter(|e| e.id != entry_id)
            .cloned()
            .collect();
        guard.crate_ledger = next;

        Ok(())
    }

    fn build_entry(&self, id: Uuid, input: &CrateEntryInput) -> AppResult<CrateLedgerEntry> {
        if input.quantity == 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
                message_hi: "मात्रा धनात्मक होनी चाहिए".to_string(),
            });
        }

        let (issued, returned) = match input.movement {
            CrateMovement::Issue => (input.quantity, 0),
            CrateMovement::Return => (0, input.quantity),
        };

        Ok(CrateLedgerEntry {
            id,
            customer_id: input.customer_id,
            date: input.date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
            crates_issued: issued,
            crates_returned: returned,
        })
    }
}
