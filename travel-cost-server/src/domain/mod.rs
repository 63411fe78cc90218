//! Domain types for the travel cost calculator.
//!
//! Value types enforce their invariants at construction time, so code that
//! receives a `Postcode` or `HourlyRate` can trust its validity.

mod cost;
mod error;
mod format;
mod postcode;
mod rate;

pub use cost::{CostBreakdown, DISPLAY_DP, compute_cost, round_money};
pub use error::{PostcodeField, ValidationError};
pub use format::{CURRENCY_SYMBOL, format_gbp, format_travel_time};
pub use postcode::{InvalidPostcode, Postcode, format_postcode, validate};
pub use rate::HourlyRate;
