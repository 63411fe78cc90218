//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculate::{Calculation, CalculationInput};
use crate::domain::{Postcode, format_gbp, format_travel_time, round_money};

/// JSON request to calculate a travel cost.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Origin postcode, any case/spacing
    pub start_postcode: String,

    /// Destination postcode, any case/spacing
    pub end_postcode: String,

    /// Hourly rate in pounds
    pub base_rate: RateInput,
}

/// Hourly rate as sent by clients: either a JSON number or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RateInput {
    Number(serde_json::Number),
    Text(String),
}

impl RateInput {
    /// The rate as text, for parsing as a decimal.
    pub fn into_raw(self) -> String {
        match self {
            RateInput::Number(n) => n.to_string(),
            RateInput::Text(s) => s,
        }
    }
}

impl From<CalculateRequest> for CalculationInput {
    fn from(req: CalculateRequest) -> Self {
        CalculationInput {
            start_postcode: req.start_postcode,
            end_postcode: req.end_postcode,
            hourly_rate: req.base_rate.into_raw(),
        }
    }
}

/// Form submission from the calculator page.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateForm {
    #[serde(default)]
    pub start_postcode: String,
    #[serde(default)]
    pub end_postcode: String,
    #[serde(default)]
    pub hourly_rate: String,
}

impl From<&CalculateForm> for CalculationInput {
    fn from(form: &CalculateForm) -> Self {
        CalculationInput {
            start_postcode: form.start_postcode.clone(),
            end_postcode: form.end_postcode.clone(),
            hourly_rate: form.hourly_rate.clone(),
        }
    }
}

/// Successful calculation.
///
/// Money fields are rounded to pence.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub start_postcode: Postcode,
    pub end_postcode: Postcode,

    /// Travel time in seconds
    pub travel_time: u64,

    /// Travel time for display, e.g. "1h 5m"
    pub travel_time_text: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_rate: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub cost_per_minute: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub time_based_cost: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,

    /// Total for display, e.g. "£78.75"
    pub total_cost_text: String,

    pub calculated_at: DateTime<Utc>,
}

impl CalculateResponse {
    /// Create from a completed calculation.
    pub fn from_calculation(calc: &Calculation, calculated_at: DateTime<Utc>) -> Self {
        let b = &calc.breakdown;
        Self {
            start_postcode: calc.request.origin.clone(),
            end_postcode: calc.request.destination.clone(),
            travel_time: b.travel_time_seconds,
            travel_time_text: format_travel_time(b.travel_time_seconds),
            hourly_rate: round_money(b.hourly_rate),
            cost_per_minute: round_money(b.per_minute_rate),
            time_based_cost: round_money(b.time_cost),
            base_rate: round_money(b.base_rate),
            total_cost: round_money(b.total_cost),
            total_cost_text: format_gbp(b.total_cost),
            calculated_at,
        }
    }
}

/// Query for as-you-type postcode formatting.
#[derive(Debug, Deserialize)]
pub struct FormatPostcodeQuery {
    #[serde(default)]
    pub value: String,
}

/// Formatted postcode and whether it would pass validation.
#[derive(Debug, Serialize)]
pub struct FormatPostcodeResponse {
    pub formatted: String,
    pub valid: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Offending input field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}
