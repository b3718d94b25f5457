//! Domain models for the Perishable Goods Vendor Management System

mod crate_ledger;
mod customer;
mod forecast;
mod inventory;
mod report;
mod transaction;

pub use crate_ledger::*;
pub use customer::*;
pub use forecast::*;
pub use inventory::*;
pub use report::*;
pub use transaction::*;
