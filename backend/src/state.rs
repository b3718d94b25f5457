//! In-memory application state
//!
//! The canonical collections are the single source of truth, held behind one
//! `RwLock`. Readers clone a consistent snapshot and derive everything they
//! need from it; writers replace whole collections rather than mutating
//! elements in place, so a reader never observes a half-updated collection.

use std::sync::Arc;

use tokio::sync::RwLock;

use shared::{CrateLedgerEntry, Customer, InventoryLot, Transaction};

use crate::config::Config;

/// The canonical in-memory collections
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub inventory: Vec<InventoryLot>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub crate_ledger: Vec<CrateLedgerEntry>,
}

pub type SharedStore = Arc<RwLock<Store>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Store, config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}
