//! Validation utilities for the Perishable Goods Vendor Management System
//!
//! Includes India-specific validations for KYC and contact details.

use rust_decimal::Decimal;

// ============================================================================
// Ledger Validations
// ============================================================================

/// Validate a sale or crate quantity is strictly positive
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a payment amount is strictly positive
pub fn validate_payment_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Payment amount must be positive");
    }
    Ok(())
}

/// Validate a unit price is strictly positive
pub fn validate_unit_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Price per unit must be positive");
    }
    Ok(())
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// Validate an Indian mobile number
/// Accepts: 9876543210, 09876543210, +919876543210
pub fn validate_indian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    fn mobile_start(s: &str) -> bool {
        matches!(s.chars().next(), Some('6'..='9'))
    }

    // Standard mobile: 10 digits starting 6-9
    if digits.len() == 10 && mobile_start(&digits) {
        return Ok(());
    }
    // With leading trunk zero: 11 digits
    if digits.len() == 11 && digits.starts_with('0') && mobile_start(&digits[1..]) {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 91
    if digits.len() == 12 && digits.starts_with("91") && mobile_start(&digits[2..]) {
        return Ok(());
    }

    Err("Invalid Indian mobile number format")
}

/// Dihedral group multiplication table for the Verhoeff checksum
const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation table for the Verhoeff checksum
const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Validate an Aadhaar number (आधार) for KYC
/// 12-digit number, first digit 2-9, Verhoeff checksum
pub fn validate_aadhaar(aadhaar: &str) -> Result<(), &'static str> {
    let digits: Vec<u32> = aadhaar
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 12 {
        return Err("Aadhaar number must be 12 digits");
    }

    // Issued numbers never start with 0 or 1
    if digits[0] < 2 {
        return Err("Invalid Aadhaar number format");
    }

    let mut c: u8 = 0;
    for (i, &digit) in digits.iter().rev().enumerate() {
        c = VERHOEFF_D[c as usize][VERHOEFF_P[i % 8][digit as usize] as usize];
    }

    if c != 0 {
        return Err("Invalid Aadhaar checksum");
    }

    Ok(())
}
