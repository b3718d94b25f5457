//! HTTP handlers for customer endpoints

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use shared::{Customer, CustomerWithBalance, DateRange, Statement};

use crate::error::AppResult;
use crate::handlers::reports::{csv_response, StatementQuery};
use crate::services::customer::{CustomerInput, CustomerService};
use crate::services::ReportingService;
use crate::AppState;

/// List all customers with derived outstanding balances
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<CustomerWithBalance>> {
    let service = CustomerService::new(state.store);
    Json(service.list().await)
}

/// Register a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> AppResult<Json<Customer>> {
    let service = CustomerService::new(state.store);
    let customer = service.create(input).await?;
    Ok(Json(customer))
}

/// Replace an existing customer profile
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(input): Json<CustomerInput>,
) -> AppResult<Json<Customer>> {
    let service = CustomerService::new(state.store);
    let customer = service.update(customer_id, input).await?;
    Ok(Json(customer))
}

/// Remove a customer profile
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = CustomerService::new(state.store);
    service.delete(customer_id).await?;
    Ok(Json(()))
}

/// Build a customer's statement over a date range
pub async fn get_customer_statement(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(query): Query<StatementQuery>,
) -> AppResult<Json<Statement>> {
    let service = ReportingService::new(state.store);
    let statement = service
        .customer_statement(customer_id, DateRange::new(query.start_date, query.end_date))
        .await?;
    Ok(Json(statement))
}

/// Export a customer's statement as CSV
pub async fn get_customer_statement_csv(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(query): Query<StatementQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.store);
    let statement = service
        .customer_statement(customer_id, DateRange::new(query.start_date, query.end_date))
        .await?;
    let csv = ReportingService::statement_to_csv(&statement)?;
    Ok(csv_response(csv))
}
