//! Askama templates for the web frontend.

use askama::Template;

use crate::calculate::Calculation;
use crate::domain::{format_gbp, format_travel_time};

/// Calculator page, optionally showing a result or an error.
#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub start_postcode: String,
    pub end_postcode: String,
    pub hourly_rate: String,
    pub breakdown: Option<BreakdownView>,
    pub error: Option<String>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// Cost breakdown view model for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownView {
    pub origin: String,
    pub destination: String,
    pub travel_time: String,
    pub hourly_rate: String,
    pub minute_rate: String,
    pub time_cost: String,
    pub base_rate: String,
    pub total_cost: String,
}

impl BreakdownView {
    /// Create from a completed calculation.
    pub fn from_calculation(calc: &Calculation) -> Self {
        let b = &calc.breakdown;
        Self {
            origin: calc.request.origin.to_string(),
            destination: calc.request.destination.to_string(),
            travel_time: format_travel_time(b.travel_time_seconds),
            hourly_rate: format_gbp(b.hourly_rate),
            minute_rate: format_gbp(b.per_minute_rate),
            time_cost: format_gbp(b.time_cost),
            base_rate: format_gbp(b.base_rate),
            total_cost: format_gbp(b.total_cost),
        }
    }
}
