//! Demand forecast collaborator contract types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One historical sale observation fed to the forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSale {
    pub date: NaiveDate,
    pub item_name: String,
    pub sold_qty: Decimal,
}

/// Request payload for the external demand forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInput {
    pub historical: Vec<HistoricalSale>,
    /// Free-form weather label, e.g. "Sunny and Warm"
    pub weather: String,
    /// Free-form season label, e.g. "Summer"
    pub season: String,
    pub items_to_forecast: Vec<String>,
}

/// One predicted-demand row returned by the forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub item_name: String,
    pub predicted_demand: Decimal,
    /// Unit label, e.g. "kg", "box"
    pub unit: String,
    pub justification: String,
}
