//! Statement building and ledger view tests
//!
//! Covers inclusive date-range filtering, customer/item filters, the two
//! deterministic sort orders, and the totals round-trip.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    build_statement, ledger_view, DateRange, LedgerView, ReportKind, SaleLine, Transaction,
    TransactionKind, Unit,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn customer(name: &str) -> shared::Customer {
    shared::Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: "123 Main St, Delhi".to_string(),
        contact_number: "9876543210".to_string(),
        photo_url: String::new(),
        aadhaar_verified: true,
    }
}

fn sale_of(customer_id: Uuid, at: DateTime<Utc>, item: &str, amount: i64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        customer_id,
        date: at,
        kind: TransactionKind::Sale {
            lines: vec![SaleLine::new(
                Uuid::new_v4(),
                item.to_string(),
                Decimal::ONE,
                Unit::Kg,
                Decimal::from(amount),
            )],
        },
    }
}

fn payment_of(customer_id: Uuid, at: DateTime<Utc>, amount: i64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        customer_id,
        date: at,
        kind: TransactionKind::Payment {
            amount: Decimal::from(amount),
        },
    }
}

// ============================================================================
// Date Range Filtering
// ============================================================================

#[test]
fn range_includes_any_time_on_the_end_date() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

    let transactions = vec![
        sale_of(id, instant(2024, 6, 30, 18), "Tomatoes (Roma)", 400),
        sale_of(id, instant(2024, 7, 1, 0), "Tomatoes (Roma)", 999),
    ];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Business,
        range,
        None,
        None,
    );

    assert_eq!(statement.lines.len(), 1);
    assert_eq!(statement.total_sales, Decimal::from(400));
}

#[test]
fn range_includes_the_start_of_the_first_day() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

    let transactions = vec![
        sale_of(id, instant(2024, 6, 1, 0), "Apples (Granny Smith)", 250),
        sale_of(id, instant(2024, 5, 31, 23), "Apples (Granny Smith)", 999),
    ];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Business,
        range,
        None,
        None,
    );

    assert_eq!(statement.lines.len(), 1);
    assert_eq!(statement.total_sales, Decimal::from(250));
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn customer_filter_keeps_only_that_customer() {
    let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];
    let (a, b) = (customers[0].id, customers[1].id);
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

    let transactions = vec![
        sale_of(a, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400),
        sale_of(b, instant(2024, 6, 3, 9), "Apples (Granny Smith)", 2400),
        payment_of(a, instant(2024, 6, 4, 9), 100),
    ];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Customer,
        range,
        Some(a),
        None,
    );

    assert_eq!(statement.lines.len(), 2);
    assert!(statement.lines.iter().all(|l| l.transaction.customer_id == a));
    assert_eq!(statement.customer.as_ref().unwrap().name, "Rajesh Kumar");
    assert_eq!(statement.final_balance, Decimal::from(300));
}

#[test]
fn item_filter_is_case_insensitive_and_excludes_payments() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;

    let transactions = vec![
        sale_of(id, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400),
        sale_of(id, instant(2024, 6, 3, 9), "Apples (Granny Smith)", 2400),
        payment_of(id, instant(2024, 6, 4, 9), 500),
    ];

    let view = ledger_view(&transactions, LedgerView::All, None, Some("toma"));

    assert_eq!(view.len(), 1);
    assert!(view[0].is_sale());
    assert_eq!(view[0].total(), Decimal::from(400));
}

#[test]
fn blank_item_filter_is_ignored() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;

    let transactions = vec![
        sale_of(id, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400),
        payment_of(id, instant(2024, 6, 4, 9), 500),
    ];

    let view = ledger_view(&transactions, LedgerView::All, None, Some("  "));
    assert_eq!(view.len(), 2);
}

#[test]
fn ledger_view_tabs_split_sales_and_payments() {
    let id = Uuid::new_v4();
    let transactions = vec![
        sale_of(id, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400),
        payment_of(id, instant(2024, 6, 4, 9), 500),
    ];

    assert_eq!(ledger_view(&transactions, LedgerView::Sales, None, None).len(), 1);
    assert_eq!(
        ledger_view(&transactions, LedgerView::Payments, None, None).len(),
        1
    );
    assert_eq!(ledger_view(&transactions, LedgerView::All, None, None).len(), 2);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn statement_body_is_oldest_first_and_ledger_is_newest_first() {
    let customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

    let transactions = vec![
        sale_of(id, instant(2024, 6, 10, 9), "Bananas (Cavendish)", 100),
        sale_of(id, instant(2024, 6, 2, 9), "Bananas (Cavendish)", 200),
        sale_of(id, instant(2024, 6, 20, 9), "Bananas (Cavendish)", 300),
    ];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Business,
        range,
        None,
        None,
    );
    let printed: Vec<_> = statement.lines.iter().map(|l| l.transaction.date).collect();
    assert!(printed.windows(2).all(|w| w[0] <= w[1]));

    let on_screen = ledger_view(&transactions, LedgerView::All, None, None);
    let screen_dates: Vec<_> = on_screen.iter().map(|tx| tx.date).collect();
    assert!(screen_dates.windows(2).all(|w| w[0] >= w[1]));
}

// ============================================================================
// Totals and Snapshots
// ============================================================================

#[test]
fn totals_round_trip_from_included_lines() {
    let customers = vec![customer("Rajesh Kumar"), customer("Sunita Sharma")];
    let (a, b) = (customers[0].id, customers[1].id);
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

    let transactions = vec![
        sale_of(a, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400),
        sale_of(b, instant(2024, 6, 3, 9), "Apples (Granny Smith)", 2400),
        payment_of(a, instant(2024, 6, 4, 9), 500),
        payment_of(b, instant(2024, 6, 5, 9), 1000),
    ];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Business,
        range,
        None,
        None,
    );

    let rederived_sales: Decimal = statement.lines.iter().filter_map(|l| l.sale_amount()).sum();
    let rederived_payments: Decimal = statement
        .lines
        .iter()
        .filter_map(|l| l.payment_amount())
        .sum();

    assert_eq!(statement.total_sales, rederived_sales);
    assert_eq!(statement.total_payments, rederived_payments);
    assert_eq!(
        statement.final_balance,
        rederived_sales - rederived_payments
    );
    assert_eq!(statement.final_balance, Decimal::from(1300));
}

#[test]
fn lines_snapshot_the_customer_name_at_build_time() {
    let mut customers = vec![customer("Rajesh Kumar")];
    let id = customers[0].id;
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));
    let transactions = vec![sale_of(id, instant(2024, 6, 2, 9), "Tomatoes (Roma)", 400)];

    let statement = build_statement(
        &transactions,
        &customers,
        ReportKind::Business,
        range,
        None,
        None,
    );

    // A later customer edit must not retroactively alter the printed report
    customers[0].name = "R. Kumar & Sons".to_string();
    assert_eq!(statement.lines[0].customer_name, "Rajesh Kumar");
}

#[test]
fn unresolvable_customers_fall_back_to_a_placeholder() {
    let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));
    let transactions = vec![sale_of(
        Uuid::new_v4(),
        instant(2024, 6, 2, 9),
        "Tomatoes (Roma)",
        400,
    )];

    let statement = build_statement(&transactions, &[], ReportKind::Business, range, None, None);
    assert_eq!(statement.lines[0].customer_name, "Unknown Customer");
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Re-deriving totals from a statement's lines always reproduces the
    /// stored totals
    #[test]
    fn prop_totals_round_trip(
        movements in prop::collection::vec((any::<bool>(), 1i64..10_000, 1u32..28), 0..30)
    ) {
        let customers = vec![customer("Rajesh Kumar")];
        let id = customers[0].id;
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

        let transactions: Vec<Transaction> = movements
            .iter()
            .map(|&(is_sale, amount, day)| {
                let at = instant(2024, 6, day, 9);
                if is_sale {
                    sale_of(id, at, "Potatoes (Russet)", amount)
                } else {
                    payment_of(id, at, amount)
                }
            })
            .collect();

        let statement = build_statement(
            &transactions,
            &customers,
            ReportKind::Business,
            range,
            None,
            None,
        );

        let sales: Decimal = statement.lines.iter().filter_map(|l| l.sale_amount()).sum();
        let payments: Decimal = statement.lines.iter().filter_map(|l| l.payment_amount()).sum();

        prop_assert_eq!(statement.total_sales, sales);
        prop_assert_eq!(statement.total_payments, payments);
        prop_assert_eq!(statement.final_balance, sales - payments);
    }

    /// The printed body and the on-screen ledger contain the same
    /// transactions in opposite orders
    #[test]
    fn prop_two_consumers_same_set_opposite_orders(
        movements in prop::collection::vec((1i64..10_000, 1u32..28), 1..30)
    ) {
        let customers = vec![customer("Sunita Sharma")];
        let id = customers[0].id;
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 30));

        let transactions: Vec<Transaction> = movements
            .iter()
            .map(|&(amount, day)| sale_of(id, instant(2024, 6, day, 9), "Apples (Granny Smith)", amount))
            .collect();

        let statement = build_statement(
            &transactions,
            &customers,
            ReportKind::Business,
            range,
            None,
            None,
        );
        let screen = ledger_view(&transactions, LedgerView::All, None, None);

        prop_assert_eq!(statement.lines.len(), screen.len());

        let mut printed_ids: Vec<Uuid> =
            statement.lines.iter().map(|l| l.transaction.id).collect();
        let mut screen_ids: Vec<Uuid> = screen.iter().map(|tx| tx.id).collect();
        printed_ids.sort();
        screen_ids.sort();
        prop_assert_eq!(printed_ids, screen_ids);

        prop_assert!(statement
            .lines
            .windows(2)
            .all(|w| w[0].transaction.date <= w[1].transaction.date));
        prop_assert!(screen.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
