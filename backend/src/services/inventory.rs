//! Inventory service for lot tracking and FEFO-ranked stock views

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    available_for_sale, generate_lot_number, rank_for_fefo, validate_quantity, InventoryLot,
    RankedLot, Unit,
};

use crate::error::{AppError, AppResult};
use crate::state::SharedStore;

/// Inventory service over the in-memory lot collection
#[derive(Clone)]
pub struct InventoryService {
    store: SharedStore,
}

/// Input for creating or replacing an inventory lot
#[derive(Debug, Deserialize)]
pub struct LotInput {
    pub name: String,
    #[serde(default)]
    pub variant: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub expiry_date: NaiveDate,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all lots in FEFO order with freshness annotations.
    /// The ranking is derived fresh on every call, never cached.
    pub async fn list(&self) -> Vec<RankedLot> {
        let inventory = self.store.read().await.inventory.clone();
        rank_for_fefo(&inventory, Utc::now())
    }

    /// List lots still eligible for sale (unexpired)
    pub async fn available(&self) -> Vec<InventoryLot> {
        let inventory = self.store.read().await.inventory.clone();
        available_for_sale(&inventory, Utc::now())
    }

    /// Record a newly received lot
    pub async fn create(&self, input: LotInput) -> AppResult<InventoryLot> {
        validate_quantity(input.quantity).map_err(|message| AppError::Validation {
            field: "quantity".to_string(),
            message: message.to_string(),
            message_hi: "मात्रा धनात्मक होनी चाहिए".to_string(),
        })?;

        let mut guard = self.store.write().await;

        let lot = InventoryLot {
            id: Uuid::new_v4(),
            name: input.name,
            variant: input.variant,
            lot_number: generate_lot_number(guard.inventory.len() as u32 + 1),
            quantity: input.quantity,
            unit: input.unit,
            purchase_date: Utc::now(),
            expiry_date: input.expiry_date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        };

        // Replace the collection wholesale so readers never see a partial update
        let mut next = guard.inventory.clone();
        next.push(lot.clone());
        guard.inventory = next;

        Ok(lot)
    }

    /// Replace an existing lot record
    pub async fn update(&self, lot_id: Uuid, input: LotInput) -> AppResult<InventoryLot> {
        validate_quantity(input.quantity).map_err(|message| AppError::Validation {
            field: "quantity".to_string(),
            message: message.to_string(),
            message_hi: "मात्रा धनात्मक होनी चाहिए".to_string(),
        })?;

        let mut guard = self.store.write().await;

        let existing = guard
            .inventory
            .iter()
            .find(|l| l.id == lot_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Lot".to_string()))?;

        let updated = InventoryLot {
            id: existing.id,
            name: input.name,
            variant: input.variant,
            lot_number: existing.lot_number,
            quantity: input.quantity,
            unit: input.unit,
            purchase_date: existing.purchase_date,
            expiry_date: input.expiry_date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        };

        let next: Vec<InventoryLot> = guard
            .inventory
            .iter()
            .map(|l| {
                if l.id == lot_id {
                    updated.clone()
                } else {
                    l.clone()
                }
            })
            .collect();
        guard.inventory = next;

        Ok(updated)
    }

    /// Remove a lot
    pub async fn delete(&self, lot_id: Uuid) -> AppResult<()> {
        let mut guard = self.store.write().await;

        if !guard.inventory.iter().any(|l| l.id == lot_id) {
            return Err(AppError::NotFound("Lot".to_string()));
        }

        let next: Vec<InventoryLot> = guard
            .inventory
            .iter()
            .filter(|l| l.id != lot_id)
            .cloned()
            .collect();
        guard.inventory = next;

        Ok(())
    }
}
