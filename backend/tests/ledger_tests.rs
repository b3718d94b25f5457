//! Customer balance aggregation tests
//!
//! Verifies that outstanding balances are a pure, order-independent fold of
//! the transaction stream: sales minus payments, unclamped in both
//! directions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    outstanding_balances, with_balances, Customer, SaleLine, Transaction, TransactionKind, Unit,
};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn customer(name: &str) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: "456 Market Rd, Mumbai".to_string(),
        contact_number: "9876543211".to_string(),
        photo_url: String::new(),
        aadhaar_verified: false,
    }
}

fn sale(customer_id: Uuid, days_ago: i64, amount: i64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        customer_id,
        date: base_date() - Duration::days(days_ago),
        kind: TransactionKind::Sale {
            lines: vec![SaleLine::new(
                Uuid::new_v4(),
                "Potatoes (Russet)".to_string(),
                Decimal::ONE,
                Unit::Kg,
                Decimal::from(amount),
            )],
        },
    }
}

fn payment(customer_id: Uuid, days_ago: i64, amount: i64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        customer_id,
        date: base_date() - Duration::days(days_ago),
        kind: TransactionKind::Payment {
            amount: Decimal::from(amount),
        },
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn customers_without_transactions_report_zero() {
    let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];
    let balances = outstanding_balances(&customers, &[]);

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[&customers[0].id], Decimal::ZERO);
    assert_eq!(balances[&customers[1].id], Decimal::ZERO);
}

#[test]
fn balance_is_sales_minus_payments() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;

    // Sale 400 two days ago, sale 1500 three days ago, payment 500 yesterday
    let transactions = vec![sale(id, 2, 400), sale(id, 3, 1500), payment(id, 1, 500)];

    let balances = outstanding_balances(&customers, &transactions);
    assert_eq!(balances[&id], Decimal::from(1400));
}

#[test]
fn overpayment_yields_a_negative_balance() {
    let customers = vec![customer("Amit Singh")];
    let id = customers[0].id;

    let transactions = vec![sale(id, 2, 200), payment(id, 1, 700)];
    let balances = outstanding_balances(&customers, &transactions);
    assert_eq!(balances[&id], Decimal::from(-500));
}

#[test]
fn balances_are_tracked_per_customer() {
    let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];
    let (a, b) = (customers[0].id, customers[1].id);

    let transactions = vec![sale(a, 3, 1000), sale(b, 2, 2400), payment(a, 1, 250)];

    let balances = outstanding_balances(&customers, &transactions);
    assert_eq!(balances[&a], Decimal::from(750));
    assert_eq!(balances[&b], Decimal::from(2400));
}

#[test]
fn with_balances_preserves_customer_order() {
    let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];
    let enriched = with_balances(&customers, &[]);

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].customer.name, "Rajesh Kumar");
    assert_eq!(enriched[1].customer.name, "Sunita Sharma");
}

#[test]
fn transactions_for_unknown_customers_still_accumulate() {
    let stray = Uuid::new_v4();
    let balances = outstanding_balances(&[], &[sale(stray, 1, 300), payment(stray, 0, 100)]);
    assert_eq!(balances[&stray], Decimal::from(200));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The aggregation is order-independent: reversing the stream yields
    /// identical balances
    #[test]
    fn prop_balances_ignore_stream_order(
        movements in prop::collection::vec((any::<bool>(), 1i64..10_000), 1..40)
    ) {
        let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];

        let transactions: Vec<Transaction> = movements
            .iter()
            .enumerate()
            .map(|(i, &(is_sale, amount))| {
                let id = customers[i % 2].id;
                if is_sale {
                    sale(id, (i % 7) as i64, amount)
                } else {
                    payment(id, (i % 7) as i64, amount)
                }
            })
            .collect();

        let forward = outstanding_balances(&customers, &transactions);

        let mut reversed = transactions.clone();
        reversed.reverse();
        let backward = outstanding_balances(&customers, &reversed);

        prop_assert_eq!(forward, backward);
    }

    /// Balance always equals the signed sum of the customer's movements
    #[test]
    fn prop_balance_equals_signed_sum(
        movements in prop::collection::vec((any::<bool>(), 1i64..10_000), 0..40)
    ) {
        let customers = vec![customer("Amit Singh")];
        let id = customers[0].id;

        let transactions: Vec<Transaction> = movements
            .iter()
            .enumerate()
            .map(|(i, &(is_sale, amount))| {
                if is_sale {
                    sale(id, (i % 7) as i64, amount)
                } else {
                    payment(id, (i % 7) as i64, amount)
                }
            })
            .collect();

        let expected: Decimal = movements
            .iter()
            .map(|&(is_sale, amount)| {
                if is_sale {
                    Decimal::from(amount)
                } else {
                    -Decimal::from(amount)
                }
            })
            .sum();

        let balances = outstanding_balances(&customers, &transactions);
        prop_assert_eq!(balances[&id], expected);
    }
}
