//! HTTP handlers for crate ledger endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::{CrateLedgerEntry, CrateView, CustomerCrateSummary};

use crate::error::AppResult;
use crate::services::crates::{CrateEntryInput, CrateLedgerRow, CrateService};
use crate::AppState;

/// Crate ledger view parameter
#[derive(Debug, Deserialize)]
pub struct CrateLedgerQuery {
    #[serde(default)]
    pub view: CrateView,
}

/// Annotated crate ledger, newest first
pub async fn list_crate_ledger(
    State(state): State<AppState>,
    Query(query): Query<CrateLedgerQuery>,
) -> Json<Vec<CrateLedgerRow>> {
    let service = CrateService::new(state.store);
    Json(service.ledger(query.view).await)
}

/// Per-customer crate debt summary
pub async fn get_crate_summary(State(state): State<AppState>) -> Json<Vec<CustomerCrateSummary>> {
    let service = CrateService::new(state.store);
    Json(service.summary().await)
}

/// Record a crate issue or return
pub async fn record_crate_entry(
    State(state): State<AppState>,
    Json(input): Json<CrateEntryInput>,
) -> AppResult<Json<CrateLedgerEntry>> {
    let service = CrateService::new(state.store);
    let entry = service.record(input).await?;
    Ok(Json(entry))
}

/// Replace an existing crate ledger entry
pub async fn update_crate_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
    Json(input): Json<CrateEntryInput>,
) -> AppResult<Json<CrateLedgerEntry>> {
    let service = CrateService::new(state.store);
    let entry = service.update(entry_id, input).await?;
    Ok(Json(entry))
}

/// Remove a crate ledger entry
pub async fn delete_crate_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = CrateService::new(state.store);
    service.delete(entry_id).await?;
    Ok(Json(()))
}
