//! Shared types and models for the Perishable Goods Vendor Management System
//!
//! This crate contains the domain models and the derived-state computations
//! (expiry classification, FEFO ranking, balance aggregation, crate ledger,
//! statement building) shared between the backend and other components.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
