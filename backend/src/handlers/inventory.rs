//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::{InventoryLot, RankedLot};

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, LotInput};
use crate::AppState;

/// List all lots in FEFO order with freshness annotations
pub async fn list_inventory(State(state): State<AppState>) -> Json<Vec<RankedLot>> {
    let service = InventoryService::new(state.store);
    Json(service.list().await)
}

/// List unexpired lots eligible for sale
pub async fn list_available_inventory(State(state): State<AppState>) -> Json<Vec<InventoryLot>> {
    let service = InventoryService::new(state.store);
    Json(service.available().await)
}

/// Record a newly received lot
pub async fn create_lot(
    State(state): State<AppState>,
    Json(input): Json<LotInput>,
) -> AppResult<Json<InventoryLot>> {
    let service = InventoryService::new(state.store);
    let lot = service.create(input).await?;
    Ok(Json(lot))
}

/// Replace an existing lot
pub async fn update_lot(
    State(state): State<AppState>,
    Path(lot_id): Path<Uuid>,
    Json(input): Json<LotInput>,
) -> AppResult<Json<InventoryLot>> {
    let service = InventoryService::new(state.store);
    let lot = service.update(lot_id, input).await?;
    Ok(Json(lot))
}

/// Remove a lot
pub async fn delete_lot(
    State(state): State<AppState>,
    Path(lot_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = InventoryService::new(state.store);
    service.delete(lot_id).await?;
    Ok(Json(()))
}
