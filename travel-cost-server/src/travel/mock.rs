//! Fixed travel-time source for testing without API access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::Postcode;

use super::TravelTimeSource;
use super::error::{NetworkError, ResponseError, TravelCostError};

/// Canned answer for a route.
#[derive(Debug, Clone)]
pub enum FixedOutcome {
    /// Succeed with this many seconds
    Seconds(u64),
    /// Fail as if the provider returned this HTTP status
    HttpStatus(u16),
    /// Fail as if the provider body was unusable
    InvalidResponse(ResponseError),
}

impl FixedOutcome {
    fn to_result(&self) -> Result<u64, TravelCostError> {
        match self {
            FixedOutcome::Seconds(s) => Ok(*s),
            FixedOutcome::HttpStatus(status) => Err(NetworkError::Status {
                status: *status,
                body: String::new(),
            }
            .into()),
            FixedOutcome::InvalidResponse(e) => Err(e.clone().into()),
        }
    }
}

/// Travel-time source answering from an in-memory table.
///
/// Routes not in the table get the fallback outcome, which defaults to
/// `ZERO_RESULTS` as the real provider reports for unknown routes.
#[derive(Debug)]
pub struct FixedTravelTimes {
    routes: HashMap<(Postcode, Postcode), FixedOutcome>,
    fallback: FixedOutcome,
    calls: AtomicUsize,
}

impl Default for FixedTravelTimes {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedTravelTimes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: FixedOutcome::InvalidResponse(ResponseError::ElementStatus(
                "ZERO_RESULTS".to_string(),
            )),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer every route with the same outcome.
    pub fn always(outcome: FixedOutcome) -> Self {
        Self::new().with_fallback(outcome)
    }

    /// Add a route.
    pub fn with_route(mut self, origin: Postcode, destination: Postcode, seconds: u64) -> Self {
        self.routes
            .insert((origin, destination), FixedOutcome::Seconds(seconds));
        self
    }

    /// Set the outcome for routes not in the table.
    pub fn with_fallback(mut self, outcome: FixedOutcome) -> Self {
        self.fallback = outcome;
        self
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TravelTimeSource for FixedTravelTimes {
    async fn fetch_travel_time(
        &self,
        origin: &Postcode,
        destination: &Postcode,
    ) -> Result<u64, TravelCostError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.routes
            .get(&(origin.clone(), destination.clone()))
            .unwrap_or(&self.fallback)
            .to_result()
    }
}
