//! HTTP handlers for the Perishable Goods Vendor Management API

pub mod crates;
pub mod customers;
pub mod forecast;
pub mod health;
pub mod inventory;
pub mod reports;
pub mod transactions;

pub use crates::*;
pub use customers::*;
pub use forecast::*;
pub use health::*;
pub use inventory::*;
pub use reports::*;
pub use transactions::*;
