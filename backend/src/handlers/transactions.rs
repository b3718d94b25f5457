//! HTTP handlers for transaction ledger endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::{LedgerView, ReportLine, Transaction};

use crate::error::AppResult;
use crate::services::transaction::{RecordTransactionInput, TransactionService};
use crate::AppState;

/// Ledger view and filter parameters
#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    #[serde(default)]
    pub view: LedgerView,
    pub customer_id: Option<Uuid>,
    pub item: Option<String>,
}

/// On-screen ledger: filtered, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<LedgerQuery>,
) -> Json<Vec<ReportLine>> {
    let service = TransactionService::new(state.store);
    Json(
        service
            .ledger(query.view, query.customer_id, query.item.as_deref())
            .await,
    )
}

/// Record a new sale or payment
pub async fn record_transaction(
    State(state): State<AppState>,
    Json(input): Json<RecordTransactionInput>,
) -> AppResult<Json<Transaction>> {
    let service = TransactionService::new(state.store);
    let transaction = service.record(input).await?;
    Ok(Json(transaction))
}

/// Replace an existing transaction
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
    Json(input): Json<RecordTransactionInput>,
) -> AppResult<Json<Transaction>> {
    let service = TransactionService::new(state.store);
    let transaction = service.update(transaction_id, input).await?;
    Ok(Json(transaction))
}

/// Remove a transaction
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = TransactionService::new(state.store);
    service.delete(transaction_id).await?;
    Ok(Json(()))
}
