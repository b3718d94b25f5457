//! Customer profile service with derived outstanding balances

use serde::Deserialize;
use uuid::Uuid;

use shared::{
    validate_aadhaar, validate_indian_phone, with_balances, Customer, CustomerWithBalance,
};

use crate::error::{AppError, AppResult};
use crate::state::SharedStore;

/// Customer service over the in-memory profile collection
#[derive(Clone)]
pub struct CustomerService {
    store: SharedStore,
}

/// Input for creating or replacing a customer profile
#[derive(Debug, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub photo_url: Option<String>,
    /// Providing a valid Aadhaar number marks the customer KYC-verified
    pub aadhaar_number: Option<String>,
}

impl CustomerService {
    /// Create a new CustomerService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all customers with their derived outstanding balances
    pub async fn list(&self) -> Vec<CustomerWithBalance> {
        let guard = self.store.read().await;
        with_balances(&guard.customers, &guard.transactions)
    }

    /// Register a new customer
    pub async fn create(&self, input: CustomerInput) -> AppResult<Customer> {
        validate_contact_and_kyc(&input)?;

        let id = Uuid::new_v4();
        let customer = Customer {
            id,
            name: input.name,
            address: input.address,
            contact_number: input.contact_number,
            photo_url: input
                .photo_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/100", id.simple())),
            aadhaar_verified: input.aadhaar_number.is_some(),
        };

        let mut guard = self.store.write().await;
        let mut next = guard.customers.clone();
        next.push(customer.clone());
        guard.customers = next;

        Ok(customer)
    }

    /// Replace an existing customer profile
    pub async fn update(&self, customer_id: Uuid, input: CustomerInput) -> AppResult<Customer> {
        validate_contact_and_kyc(&input)?;

        let mut guard = self.store.write().await;

        let existing = guard
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        let updated = Customer {
            id: existing.id,
            name: input.name,
            address: input.address,
            contact_number: input.contact_number,
            photo_url: input
                .photo_url
                .filter(|url| !url.is_empty())
                .unwrap_or(existing.photo_url),
            // A fresh valid Aadhaar number verifies; otherwise keep the flag
            aadhaar_verified: input.aadhaar_number.is_some() || existing.aadhaar_verified,
        };

        let next: Vec<Customer> = guard
            .customers
            .iter()
            .map(|c| {
                if c.id == customer_id {
                    updated.clone()
                } else {
                    c.clone()
                }
            })
            .collect();
        guard.customers = next;

        Ok(updated)
    }

    /// Remove a customer profile
    pub async fn delete(&self, customer_id: Uuid) -> AppResult<()> {
        let mut guard = self.store.write().await;

        if !guard.customers.iter().any(|c| c.id == customer_id) {
            return Err(AppError::NotFound("Customer".to_string()));
        }

        let next: Vec<Customer> = guard
            .customers
            .iter()
            .filter(|c| c.id != customer_id)
            .cloned()
            .collect();
        guard.customers = next;

        Ok(())
    }
}

fn validate_contact_and_kyc(input: &CustomerInput) -> AppResult<()> {
    validate_indian_phone(&input.contact_number).map_err(|message| AppError::Validation {
        field: "contact_number".to_string(),
        message: message.to_string(),
        message_hi: "अमान्य संपर्क नंबर".to_string(),
    })?;

    if let Some(aadhaar) = &input.aadhaar_number {
        validate_aadhaar(aadhaar).map_err(|message| AppError::Validation {
            field: "aadhaar_number".to_string(),
            message: message.to_string(),
            message_hi: "अमान्य आधार संख्या".to_string(),
        })?;
    }

    Ok(())
}
