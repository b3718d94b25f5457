//! Demand forecast client
//!
//! Integrates with the Gemini generateContent API to turn historical sales,
//! weather, and season labels into predicted-demand rows. One attempt per
//! call: any transport, HTTP, or parse failure surfaces as a single
//! descriptive error.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use shared::{ForecastInput, ForecastRow};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};

/// Client for the external demand forecaster
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// generateContent API response envelope
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ContentPart>>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: String,
}

impl ForecastClient {
    /// Create a new ForecastClient from configuration
    pub fn new(config: &ForecastConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Create a ForecastClient with a custom base URL (for testing)
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Request a demand forecast. Fire-and-forget from the core's view:
    /// no retry, no partial results.
    pub async fn get_demand_forecast(&self, input: &ForecastInput) -> AppResult<Vec<ForecastRow>> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "forecast API key is not configured".to_string(),
            ));
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(input) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "item_name": { "type": "STRING" },
                            "predicted_demand": { "type": "NUMBER" },
                            "unit": { "type": "STRING", "description": "e.g., kg, box, piece" },
                            "justification": { "type": "STRING" }
                        },
                        "required": ["item_name", "predicted_demand", "unit", "justification"]
                    }
                }
            }
        });

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Forecast(format!("Forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Forecast(format!(
                "Forecast API error: {} - {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Forecast(format!("Failed to parse forecast response: {}", e)))?;

        parse_forecast(data)
    }
}

/// Build the forecasting prompt from historical sales and current conditions
fn build_prompt(input: &ForecastInput) -> String {
    let historical = serde_json::to_string_pretty(&input.historical).unwrap_or_default();

    format!(
        "You are a demand forecasting expert for a perishable goods business in India.\n\
         Analyze the following historical sales data, weather conditions, and seasonality \
         to predict demand for the given items.\n\
         Provide a justification for each prediction.\n\n\
         Historical Sales Data:\n{}\n\n\
         Current Conditions:\n- Weather: {}\n- Season: {}\n\n\
         Items to Forecast:\n{}\n\n\
         Provide the forecast in a structured JSON format.",
        historical,
        input.weather,
        input.season,
        input.items_to_forecast.join(", ")
    )
}

/// Extract the forecast rows from the first candidate's JSON text
fn parse_forecast(data: GenerateContentResponse) -> AppResult<Vec<ForecastRow>> {
    let text = data
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.unwrap_or_default().into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AppError::Forecast("Forecast response contained no candidates".to_string()))?;

    serde_json::from_str(text.trim())
        .map_err(|e| AppError::Forecast(format!("Failed to parse forecast rows: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_input() -> ForecastInput {
        ForecastInput {
            historical: vec![shared::HistoricalSale {
                date: chrono::NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
                item_name: "Tomatoes".to_string(),
                sold_qty: Decimal::from(150),
            }],
            weather: "Sunny and Warm".to_string(),
            season: "Summer".to_string(),
            items_to_forecast: vec!["Tomatoes".to_string(), "Apples".to_string()],
        }
    }

    #[test]
    fn test_prompt_includes_conditions_and_items() {
        let prompt = build_prompt(&sample_input());
        assert!(prompt.contains("Sunny and Warm"));
        assert!(prompt.contains("Summer"));
        assert!(prompt.contains("Tomatoes, Apples"));
    }

    #[test]
    fn test_parse_forecast_rows() {
        let payload = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "[{\"item_name\":\"Tomatoes\",\"predicted_demand\":165,\"unit\":\"kg\",\"justification\":\"Warm weather lifts salad demand.\"}]"
                    }]
                }
            }]
        }"#;

        let data: GenerateContentResponse = serde_json::from_str(payload).unwrap();
        let rows = parse_forecast(data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_name, "Tomatoes");
        assert_eq!(rows[0].predicted_demand, Decimal::from(165));
    }

    #[test]
    fn test_parse_forecast_without_candidates_fails() {
        let data: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(parse_forecast(data), Err(AppError::Forecast(_))));
    }

    #[test]
    fn test_parse_forecast_with_unparseable_text_fails() {
        let payload = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "not json" }] }
            }]
        }"#;

        let data: GenerateContentResponse = serde_json::from_str(payload).unwrap();
        assert!(matches!(parse_forecast(data), Err(AppError::Forecast(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_configuration_error() {
        let client = ForecastClient::with_base_url(
            String::new(),
            "gemini-2.5-flash".to_string(),
            "http://localhost:0".to_string(),
        );

        let result = client.get_demand_forecast(&sample_input()).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
