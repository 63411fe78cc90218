//! Travel-time lookup against a distance-matrix API.
//!
//! The production source is [`TravelCostService`], an HTTP client for the
//! distance-matrix endpoint. [`FixedTravelTimes`] serves canned answers for
//! tests and local development without API access.

mod client;
mod error;
mod mock;
mod types;

use async_trait::async_trait;

use crate::domain::Postcode;

pub use client::{DEFAULT_BASE_URL, TravelCostConfig, TravelCostService};
pub use error::{NetworkError, ResponseError, TravelCostError};
pub use mock::{FixedOutcome, FixedTravelTimes};
pub use types::{DistanceMatrixResponse, Element, Row, STATUS_OK, TextValue};

/// Something that can report the driving time between two postcodes.
#[async_trait]
pub trait TravelTimeSource: Send + Sync {
    /// Driving time from `origin` to `destination`, in whole seconds.
    async fn fetch_travel_time(
        &self,
        origin: &Postcode,
        destination: &Postcode,
    ) -> Result<u64, TravelCostError>;
}
