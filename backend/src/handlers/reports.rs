//! HTTP handlers for business-wide report endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::{DateRange, Statement};

use crate::error::AppResult;
use crate::services::ReportingService;
use crate::AppState;

/// Inclusive date range for a statement
#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub(crate) fn csv_response(csv: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv)
}

/// Build the business-wide report over a date range
pub async fn get_business_report(
    State(state): State<AppState>,
    Query(query): Query<StatementQuery>,
) -> AppResult<Json<Statement>> {
    let service = ReportingService::new(state.store);
    let statement = service
        .business_report(DateRange::new(query.start_date, query.end_date))
        .await;
    Ok(Json(statement))
}

/// Export the business-wide report as CSV
pub async fn get_business_report_csv(
    State(state): State<AppState>,
    Query(query): Query<StatementQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.store);
    let statement = service
        .business_report(DateRange::new(query.start_date, query.end_date))
        .await;
    let csv = ReportingService::statement_to_csv(&statement)?;
    Ok(csv_response(csv))
}
