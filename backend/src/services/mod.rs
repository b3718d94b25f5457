//! Business logic services for the Perishable Goods Vendor Management System

pub mod crates;
pub mod customer;
pub mod inventory;
pub mod reporting;
pub mod transaction;

pub use crates::CrateService;
pub use customer::CustomerService;
pub use inventory::InventoryService;
pub use reporting::ReportingService;
pub use transaction::TransactionService;
