//! Display formatting for costs and durations.

use rust_decimal::Decimal;

use super::cost::round_money;

/// Currency symbol prefixed to every amount.
pub const CURRENCY_SYMBOL: &str = "£";

/// Format an amount in pounds to two decimal places.
///
/// ```
/// use rust_decimal::Decimal;
/// use travel_cost_server::domain::format_gbp;
///
/// assert_eq!(format_gbp(Decimal::new(7875, 2)), "£78.75");
/// assert_eq!(format_gbp(Decimal::from(45)), "£45.00");
/// ```
pub fn format_gbp(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round_money(amount))
}

/// Format a travel time as shown in the cost breakdown.
///
/// Whole minutes only; seconds are dropped.
pub fn format_travel_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes} minutes")
    }
}
