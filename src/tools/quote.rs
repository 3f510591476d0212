//! Quote tool — monthly premium calculation

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Error;
use crate::Result;

use super::Tool;

/// Generate an auto-insurance premium quote
pub struct QuoteTool;

impl QuoteTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuoteTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Base monthly rates per coverage level.
const BASE_RATES: &[(&str, f64)] = &[("basic", 49.0), ("standard", 78.0), ("premium", 124.0)];

/// Pure premium computation. Total for any valid parameter combination.
fn monthly_premium(driver_age: u64, annual_mileage: u64, coverage: &str) -> Result<f64> {
    let base = BASE_RATES
        .iter()
        .find(|(name, _)| *name == coverage)
        .map(|(_, rate)| *rate)
        .ok_or_else(|| Error::Tool(format!("Unknown coverage level: {coverage}")))?;

    let age_factor = match driver_age {
        0..=17 => {
            return Err(Error::Tool(
                "Driver must be at least 18 years old".to_string(),
            ))
        }
        18..=24 => 1.6,
        25..=64 => 1.0,
        _ => 1.25,
    };

    let mileage_factor = match annual_mileage {
        0..=7_999 => 0.9,
        8_000..=14_999 => 1.0,
        _ => 1.15,
    };

    Ok(base * age_factor * mileage_factor)
}

#[async_trait]
impl Tool for QuoteTool {
    fn name(&self) -> &str {
        "get_quote"
    }

    fn description(&self) -> &str {
        "Calculate a monthly auto-insurance premium quote from driver age, \
         annual mileage, and coverage level"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "driver_age": {
                    "type": "integer",
                    "description": "Age of the primary driver in years"
                },
                "annual_mileage": {
                    "type": "integer",
                    "description": "Expected miles driven per year"
                },
                "coverage": {
                    "type": "string",
                    "enum": ["basic", "standard", "premium"],
                    "description": "Coverage level"
                }
            },
            "required": ["driver_age", "annual_mileage"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let driver_age = params
            .get("driver_age")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| Error::Tool("Missing 'driver_age' parameter".to_string()))?;

        let annual_mileage = params
            .get("annual_mileage")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| Error::Tool("Missing 'annual_mileage' parameter".to_string()))?;

        let coverage = params
            .get("coverage")
            .and_then(|v| v.as_str())
            .unwrap_or("standard");

        let premium = monthly_premium(driver_age, annual_mileage, coverage)?;
        Ok(format!("Quote generated: ${premium:.2} per month"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_quote_format_has_two_decimal_places() {
        let tool = QuoteTool::new();
        let result = tool
            .execute(json!({
                "driver_age": 30,
                "annual_mileage": 12000,
                "coverage": "standard"
            }))
            .await
            .unwrap();

        assert_eq!(result, "Quote generated: $78.00 per month");
    }

    #[tokio::test]
    async fn test_young_driver_surcharge() {
        let tool = QuoteTool::new();
        let result = tool
            .execute(json!({
                "driver_age": 20,
                "annual_mileage": 5000,
                "coverage": "basic"
            }))
            .await
            .unwrap();

        // 49.0 * 1.6 * 0.9
        assert_eq!(result, "Quote generated: $70.56 per month");
    }

    #[tokio::test]
    async fn test_coverage_defaults_to_standard() {
        let tool = QuoteTool::new();
        let result = tool
            .execute(json!({"driver_age": 40, "annual_mileage": 10000}))
            .await
            .unwrap();

        assert_eq!(result, "Quote generated: $78.00 per month");
    }

    #[tokio::test]
    async fn test_missing_parameter_is_a_tool_error() {
        let tool = QuoteTool::new();
        let result = tool.execute(json!({"driver_age": 40})).await;
        assert!(matches!(result, Err(Error::Tool(_))));
    }

    #[tokio::test]
    async fn test_underage_driver_is_rejected() {
        let tool = QuoteTool::new();
        let result = tool
            .execute(json!({"driver_age": 16, "annual_mileage": 4000}))
            .await;
        assert!(matches!(result, Err(Error::Tool(_))));
    }

    #[tokio::test]
    async fn test_unknown_coverage_is_rejected() {
        let tool = QuoteTool::new();
        let result = tool
            .execute(json!({
                "driver_age": 40,
                "annual_mileage": 10000,
                "coverage": "platinum"
            }))
            .await;
        assert!(matches!(result, Err(Error::Tool(_))));
    }
}
