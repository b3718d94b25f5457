//! Route definitions for the Perishable Goods Vendor Management API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Inventory management
        .nest("/inventory", inventory_routes())
        // Customer management
        .nest("/customers", customer_routes())
        // Sales/payment ledger
        .nest("/transactions", transaction_routes())
        // Returnable crate ledger
        .nest("/crates", crate_routes())
        // Business-wide reports
        .nest("/reports", report_routes())
        // Demand forecast collaborator
        .route("/forecast", post(handlers::generate_forecast))
}

/// Inventory management routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_inventory).post(handlers::create_lot),
        )
        .route("/available", get(handlers::list_available_inventory))
        .route(
            "/:lot_id",
            put(handlers::update_lot).delete(handlers::delete_lot),
        )
}

/// Customer management routes
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/:customer_id",
            put(handlers::update_customer).delete(handlers::delete_customer),
        )
        .route(
            "/:customer_id/statement",
            get(handlers::get_customer_statement),
        )
        .route(
            "/:customer_id/statement.csv",
            get(handlers::get_customer_statement_csv),
        )
}

/// Transaction ledger routes
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_transactions).post(handlers::record_transaction),
        )
        .route(
            "/:transaction_id",
            put(handlers::update_transaction).delete(handlers::delete_transaction),
        )
}

/// Crate ledger routes
fn crate_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_crate_ledger).post(handlers::record_crate_entry),
        )
        .route("/summary", get(handlers::get_crate_summary))
        .route(
            "/:entry_id",
            put(handlers::update_crate_entry).delete(handlers::delete_crate_entry),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/business", get(handlers::get_business_report))
        .route("/business.csv", get(handlers::get_business_report_csv))
}
