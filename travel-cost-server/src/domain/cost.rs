//! Reimbursement cost calculation.
//!
//! The cost of a visit is a time-based component plus a flat call-out fee:
//!
//! ```text
//! per_minute_rate = hourly_rate / 60
//! time_cost       = (travel_time_seconds / 60) * per_minute_rate
//! total_cost      = time_cost + hourly_rate
//! ```
//!
//! Minutes are real-valued, never truncated. All arithmetic is done in
//! `Decimal` at full precision; rounding to pence happens only for display.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ValidationError;
use super::rate::HourlyRate;

const SECONDS_PER_MINUTE: u32 = 60;
const MINUTES_PER_HOUR: u32 = 60;

/// Fractional digits shown for monetary values.
pub const DISPLAY_DP: u32 = 2;

/// Breakdown of a reimbursement cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Driving time reported by the distance-matrix provider.
    pub travel_time_seconds: u64,
    pub hourly_rate: Decimal,
    pub per_minute_rate: Decimal,
    pub time_cost: Decimal,
    /// Flat fee, equal to the hourly rate.
    pub base_rate: Decimal,
    pub total_cost: Decimal,
}

impl CostBreakdown {
    /// Travel time in (fractional) minutes.
    pub fn travel_minutes(&self) -> Decimal {
        Decimal::from(self.travel_time_seconds) / Decimal::from(SECONDS_PER_MINUTE)
    }
}

/// Compute the cost breakdown for a journey.
///
/// Fails with [`ValidationError::InvalidRate`] if the rate is not positive,
/// or if the result does not fit in a `Decimal`.
///
/// ```
/// use rust_decimal::Decimal;
/// use travel_cost_server::domain::compute_cost;
///
/// let cost = compute_cost(1800, Decimal::from(60)).unwrap();
/// assert_eq!(cost.per_minute_rate, Decimal::ONE);
/// assert_eq!(cost.time_cost, Decimal::from(30));
/// assert_eq!(cost.total_cost, Decimal::from(90));
/// ```
pub fn compute_cost(
    travel_time_seconds: u64,
    hourly_rate: Decimal,
) -> Result<CostBreakdown, ValidationError> {
    let hourly_rate = HourlyRate::new(hourly_rate)?.value();

    let overflow = || ValidationError::InvalidRate {
        reason: "too large to compute a cost",
    };

    let per_minute_rate = hourly_rate / Decimal::from(MINUTES_PER_HOUR);
    let minutes = Decimal::from(travel_time_seconds) / Decimal::from(SECONDS_PER_MINUTE);
    let time_cost = minutes.checked_mul(per_minute_rate).ok_or_else(overflow)?;
    let total_cost = time_cost.checked_add(hourly_rate).ok_or_else(overflow)?;

    Ok(CostBreakdown {
        travel_time_seconds,
        hourly_rate,
        per_minute_rate,
        time_cost,
        base_rate: hourly_rate,
        total_cost,
    })
}

/// Round a monetary value to pence, halves away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}
