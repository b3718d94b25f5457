//! Inventory lot models, expiry classification, and FEFO ranking

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Unit;

/// A perishable inventory lot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLot {
    pub id: Uuid,
    pub name: String,
    /// Variant or grade (e.g., "Heirloom", "Organic")
    pub variant: String,
    /// Human-readable lot number (e.g., "LOT-0101")
    pub lot_number: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl InventoryLot {
    /// Display label used on sale lines, snapshotting name and variant
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.variant)
    }
}

/// Freshness status of a lot relative to "now"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    Fresh,
    ExpiringSoon,
    Expired,
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotStatus::Fresh => write!(f, "Fresh"),
            LotStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            LotStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// A lot annotated with its FEFO rank context
#[derive(Debug, Clone, Serialize)]
pub struct RankedLot {
    #[serde(flatten)]
    pub lot: InventoryLot,
    pub status: LotStatus,
    pub days_left: i64,
    /// Set on the first sellable lot in FEFO order
    pub sell_first: bool,
}

/// Whole days until expiry, rounded up. An expiry earlier today counts as 0;
/// strictly negative means the lot expired on a previous day.
pub fn days_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (expiry - now).num_seconds();
    secs.div_euclid(86_400) + i64::from(secs.rem_euclid(86_400) > 0)
}

/// Classify a lot's freshness. Checked in order, first match wins:
/// expired, then expiring within 3 days, then fresh.
pub fn classify(lot: &InventoryLot, now: DateTime<Utc>) -> LotStatus {
    let days = days_until_expiry(lot.expiry_date, now);
    if days < 0 {
        LotStatus::Expired
    } else if days <= 3 {
        LotStatus::ExpiringSoon
    } else {
        LotStatus::Fresh
    }
}

/// Rank lots for First-Expiry-First-Out fulfillment.
///
/// Stable ascending sort by expiry instant (ties keep insertion order). The
/// first non-expired lot in rank order is flagged `sell_first`; an expired
/// lot is never promoted for sale even when it sorts ahead of everything.
/// Callers must rank over a fresh snapshot on every read.
pub fn rank_for_fefo(lots: &[InventoryLot], now: DateTime<Utc>) -> Vec<RankedLot> {
    let mut ranked: Vec<RankedLot> = lots
        .iter()
        .map(|lot| RankedLot {
            status: classify(lot, now),
            days_left: days_until_expiry(lot.expiry_date, now),
            sell_first: false,
            lot: lot.clone(),
        })
        .collect();

    ranked.sort_by_key(|r| r.lot.expiry_date);

    if let Some(first_sellable) = ranked.iter_mut().find(|r| r.status != LotStatus::Expired) {
        first_sellable.sell_first = true;
    }

    ranked
}

/// Lots still eligible for sale (not yet expired)
pub fn available_for_sale(lots: &[InventoryLot], now: DateTime<Utc>) -> Vec<InventoryLot> {
    lots.iter()
        .filter(|lot| lot.expiry_date > now)
        .cloned()
        .collect()
}

/// Generate a lot number from a running sequence
pub fn generate_lot_number(sequence: u32) -> String {
    format!("LOT-{:04}", sequence % 10_000)
}
