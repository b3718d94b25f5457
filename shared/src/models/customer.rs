//! Customer profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer profile. The outstanding balance is never stored here; it is
/// derived from the transaction stream on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub photo_url: String,
    /// KYC status
    pub aadhaar_verified: bool,
}

/// A customer together with their derived outstanding balance
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithBalance {
    #[serde(flatten)]
    pub customer: Customer,
    pub outstanding_balance: Decimal,
}

/// Resolve a customer name for display, falling back when the reference
/// cannot be resolved.
pub fn resolve_customer_name(customers: &[Customer], customer_id: Uuid) -> String {
    customers
        .iter()
        .find(|c| c.id == customer_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown Customer".to_string())
}
