//! Static sample data seeded at process start
//!
//! Stands in for a persistence layer: collections are transient and lost on
//! restart.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    CrateLedgerEntry, Customer, InventoryLot, SaleLine, Transaction, TransactionKind, Unit,
};

use crate::state::Store;

fn lot(
    name: &str,
    variant: &str,
    lot_number: &str,
    quantity: i64,
    unit: Unit,
    purchased_days_ago: i64,
    expires_in_days: i64,
) -> InventoryLot {
    let now = Utc::now();
    InventoryLot {
        id: Uuid::new_v4(),
        name: name.to_string(),
        variant: variant.to_string(),
        lot_number: lot_number.to_string(),
        quantity: Decimal::from(quantity),
        unit,
        purchase_date: now - Duration::days(purchased_days_ago),
        expiry_date: now + Duration::days(expires_in_days),
    }
}

fn customer(name: &str, address: &str, contact: &str, seed: &str, verified: bool) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
        contact_number: contact.to_string(),
        photo_url: format!("https://picsum.photos/seed/{}/100", seed),
        aadhaar_verified: verified,
    }
}

/// Build the sample collections the server starts with
pub fn sample_store() -> Store {
    let now = Utc::now();

    let tomatoes = lot("Tomatoes", "Heirloom", "LOT-0101", 50, Unit::Kg, 5, 2);
    let apples = lot("Apples", "Granny Smith", "LOT-0202", 100, Unit::Lot, 2, 12);
    let potatoes = lot("Potatoes", "Russet", "LOT-0303", 200, Unit::Kg, 10, 20);
    let roma = lot("Tomatoes", "Roma", "LOT-0102", 75, Unit::Kg, 1, 6);
    let bananas = lot("Bananas", "Cavendish", "LOT-0401", 30, Unit::Lot, 3, 4);
    let carrots = lot("Old Carrots", "Organic", "LOT-0501", 10, Unit::Kg, 10, -1);

    let rajesh = customer(
        "Rajesh Kumar",
        "123 Main St, Delhi",
        "9876543210",
        "rajesh",
        true,
    );
    let sunita = customer(
        "Sunita Sharma",
        "456 Market Rd, Mumbai",
        "9876543211",
        "sunita",
        true,
    );
    let amit = customer(
        "Amit Singh",
        "789 Central Ave, Bangalore",
        "9876543212",
        "amit",
        false,
    );

    let transactions = vec![
        Transaction {
            id: Uuid::new_v4(),
            customer_id: rajesh.id,
            date: now - Duration::days(2),
            kind: TransactionKind::Sale {
                lines: vec![SaleLine::new(
                    tomatoes.id,
                    tomatoes.label(),
                    Decimal::from(10),
                    Unit::Kg,
                    Decimal::from(40),
                )],
            },
        },
        Transaction {
            id: Uuid::new_v4(),
            customer_id: rajesh.id,
            date: now - Duration::days(3),
            kind: TransactionKind::Sale {
                lines: vec![SaleLine::new(
                    potatoes.id,
                    potatoes.label(),
                    Decimal::from(50),
                    Unit::Kg,
                    Decimal::from(30),
                )],
            },
        },
        Transaction {
            id: Uuid::new_v4(),
            customer_id: sunita.id,
            date: now - Duration::days(1),
            kind: TransactionKind::Sale {
                lines: vec![SaleLine::new(
                    apples.id,
                    apples.label(),
                    Decimal::from(2),
                    Unit::Lot,
                    Decimal::from(1200),
                )],
            },
        },
        Transaction {
            id: Uuid::new_v4(),
            customer_id: rajesh.id,
            date: now - Duration::days(1),
            kind: TransactionKind::Payment {
                amount: Decimal::from(500),
            },
        },
    ];

    let crate_ledger = vec![
        CrateLedgerEntry {
            id: Uuid::new_v4(),
            customer_id: rajesh.id,
            date: now - Duration::days(5),
            crates_issued: 10,
            crates_returned: 0,
        },
        CrateLedgerEntry {
            id: Uuid::new_v4(),
            customer_id: sunita.id,
            date: now - Duration::days(3),
            crates_issued: 25,
            crates_returned: 0,
        },
        CrateLedgerEntry {
            id: Uuid::new_v4(),
            customer_id: rajesh.id,
            date: now - Duration::days(1),
            crates_issued: 0,
            crates_returned: 5,
        },
    ];

    Store {
        inventory: vec![tomatoes, apples, potatoes, roma, bananas, carrots],
        customers: vec![rajesh, sunita, amit],
        transactions,
        crate_ledger,
    }
}
