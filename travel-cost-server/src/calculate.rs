//! End-to-end cost calculation.
//!
//! Validates all input up front, makes one travel-time lookup, then prices
//! the journey. Any validation failure short-circuits before the lookup.

use tracing::{info, warn};

use crate::domain::{
    CostBreakdown, HourlyRate, Postcode, PostcodeField, ValidationError, compute_cost, validate,
};
use crate::travel::{TravelCostError, TravelTimeSource};

/// Raw input as submitted by the form.
#[derive(Debug, Clone, Default)]
pub struct CalculationInput {
    pub start_postcode: String,
    pub end_postcode: String,
    pub hourly_rate: String,
}

/// A validated origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    pub origin: Postcode,
    pub destination: Postcode,
}

/// A completed calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub request: TravelRequest,
    pub breakdown: CostBreakdown,
}

/// Errors from a calculation.
#[derive(Debug, thiserror::Error)]
pub enum CalculateError {
    /// Input rejected before any lookup
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Travel-time lookup failed
    #[error(transparent)]
    Travel(#[from] TravelCostError),
}

impl CalculateError {
    /// Message suitable for showing to the person who filled in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalculateError::Validation(ValidationError::InvalidPostcode { field, .. }) => {
                match field {
                    PostcodeField::Start => "Invalid start postcode",
                    PostcodeField::End => "Invalid end postcode",
                }
            }
            CalculateError::Validation(ValidationError::InvalidRate { .. }) => {
                "Please enter a valid base rate"
            }
            CalculateError::Travel(TravelCostError::InvalidUrl(_)) => {
                "Invalid URL. Please check your postcodes."
            }
            CalculateError::Travel(TravelCostError::InvalidResponse(_)) => {
                "Could not calculate travel time. Please try again."
            }
            CalculateError::Travel(TravelCostError::Network(_)) => {
                "Network error. Please check your internet connection."
            }
        }
    }
}

impl CalculationInput {
    /// Validate both postcodes and the rate, in form order.
    pub fn validate(&self) -> Result<(TravelRequest, HourlyRate), ValidationError> {
        let origin = validate(&self.start_postcode, PostcodeField::Start)?;
        let destination = validate(&self.end_postcode, PostcodeField::End)?;
        let rate = HourlyRate::parse(&self.hourly_rate)?;

        Ok((
            TravelRequest {
                origin,
                destination,
            },
            rate,
        ))
    }
}

/// Run a full calculation against the given travel-time source.
pub async fn calculate(
    source: &dyn TravelTimeSource,
    input: &CalculationInput,
) -> Result<Calculation, CalculateError> {
    let (request, rate) = input.validate()?;

    let seconds = source
        .fetch_travel_time(&request.origin, &request.destination)
        .await
        .inspect_err(|e| warn!(error = %e, "travel time lookup failed"))?;

    let breakdown = compute_cost(seconds, rate.value())?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        seconds,
        total = %breakdown.total_cost,
        "calculated travel cost"
    );

    Ok(Calculation { request, breakdown })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::travel::{FixedOutcome, FixedTravelTimes, NetworkError, ResponseError};

    fn input(start: &str, end: &str, rate: &str) -> CalculationInput {
        CalculationInput {
            start_postcode: start.into(),
            end_postcode: end.into(),
            hourly_rate: rate.into(),
        }
    }

    fn pc(s: &str) -> Postcode {
        Postcode::parse(s).unwrap()
    }

    fn london() -> FixedTravelTimes {
        FixedTravelTimes::new().with_route(pc("SW1A1AA"), pc("EC1A1BB"), 2700)
    }

    #[tokio::test]
    async fn end_to_end_total() {
        let source = london();
        let calc = calculate(&source, &input("SW1A1AA", "EC1A1BB", "45.00"))
            .await
            .unwrap();

        assert_eq!(calc.request.origin.as_str(), "SW1A 1AA");
        assert_eq!(calc.request.destination.as_str(), "EC1A 1BB");
        assert_eq!(calc.breakdown.travel_time_seconds, 2700);
        assert_eq!(calc.breakdown.time_cost, Decimal::new(3375, 2));
        assert_eq!(calc.breakdown.total_cost, Decimal::new(7875, 2));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_start_short_circuits() {
        let source = london();
        let err = calculate(&source, &input("12345", "EC1A1BB", "45"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid start postcode");
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_end_short_circuits() {
        let source = london();
        let err = calculate(&source, &input("SW1A1AA", "", "45"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid end postcode");
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_rate_short_circuits() {
        let source = london();
        for rate in ["0", "-5", "abc", ""] {
            let err = calculate(&source, &input("SW1A1AA", "EC1A1BB", rate))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                CalculateError::Validation(ValidationError::InvalidRate { .. })
            ));
            assert_eq!(err.user_message(), "Please enter a valid base rate");
        }
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn start_checked_before_end_and_rate() {
        let source = london();
        let err = calculate(&source, &input("bad", "bad", "bad"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Invalid start postcode");
    }

    #[tokio::test]
    async fn travel_errors_propagate() {
        let source = FixedTravelTimes::always(FixedOutcome::HttpStatus(500));
        let err = calculate(&source, &input("SW1A1AA", "EC1A1BB", "45"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CalculateError::Travel(TravelCostError::Network(NetworkError::Status {
                status: 500,
                ..
            }))
        ));
        assert_eq!(
            err.user_message(),
            "Network error. Please check your internet connection."
        );

        let source = FixedTravelTimes::always(FixedOutcome::InvalidResponse(
            ResponseError::MissingDuration,
        ));
        let err = calculate(&source, &input("SW1A1AA", "EC1A1BB", "45"))
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Could not calculate travel time. Please try again."
        );
    }

    #[test]
    fn invalid_url_message() {
        let err = CalculateError::from(TravelCostError::InvalidUrl("bad".into()));
        assert_eq!(
            err.user_message(),
            "Invalid URL. Please check your postcodes."
        );
    }
}
