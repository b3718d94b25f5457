//! HTTP handler for the demand forecast endpoint

use axum::{extract::State, Json};

use shared::{ForecastInput, ForecastRow};

use crate::error::AppResult;
use crate::external::ForecastClient;
use crate::AppState;

/// Request a demand forecast from the external collaborator
pub async fn generate_forecast(
    State(state): State<AppState>,
    Json(input): Json<ForecastInput>,
) -> AppResult<Json<Vec<ForecastRow>>> {
    let client = ForecastClient::new(&state.config.forecast);
    let rows = client.get_demand_forecast(&input).await?;
    Ok(Json(rows))
}
