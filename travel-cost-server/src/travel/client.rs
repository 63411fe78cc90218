//! Distance Matrix HTTP client.
//!
//! Issues a single GET per lookup and reduces the response to a driving
//! time in seconds. No retries and no caching: every call is one request.

use std::fmt;

use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::domain::Postcode;

use super::TravelTimeSource;
use super::error::{NetworkError, TravelCostError};
use super::types::DistanceMatrixResponse;

/// Default distance-matrix endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Travel mode sent with every request.
const TRAVEL_MODE: &str = "driving";

const REDACTED: &str = "REDACTED";

/// Configuration for the travel cost service.
#[derive(Clone)]
pub struct TravelCostConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the production distance-matrix API)
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves the client default
    pub timeout_secs: Option<u64>,
}

impl TravelCostConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl fmt::Debug for TravelCostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelCostConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Looks up driving times between postcodes.
#[derive(Clone)]
pub struct TravelCostService {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TravelCostService {
    /// Create a new service with the given configuration.
    pub fn new(config: TravelCostConfig) -> Result<Self, TravelCostError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build().map_err(NetworkError::from)?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// Build the request URL, percent-encoding every query parameter.
    pub fn request_url(
        &self,
        origin: &Postcode,
        destination: &Postcode,
    ) -> Result<Url, TravelCostError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("origins", origin.as_str()),
                ("destinations", destination.as_str()),
                ("mode", TRAVEL_MODE),
                ("key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| TravelCostError::InvalidUrl(format!("{}: {e}", self.base_url)))
    }

    /// Fetch the driving time between two postcodes, in seconds.
    ///
    /// # Errors
    ///
    /// * `InvalidUrl` - the configured base URL cannot be parsed
    /// * `Network` - the request failed or the status was not 200
    /// * `InvalidResponse` - the body was malformed, or reported no usable route
    pub async fn fetch_travel_time(
        &self,
        origin: &Postcode,
        destination: &Postcode,
    ) -> Result<u64, TravelCostError> {
        let url = self.request_url(origin, destination)?;

        debug!(url = %redact_key(&url), "requesting driving time");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "distance matrix request failed");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.text().await.map_err(NetworkError::from)?;

        let matrix = DistanceMatrixResponse::from_json(&body)?;
        let seconds = matrix.travel_time_seconds().inspect_err(|e| {
            warn!(error = %e, "distance matrix returned no usable route");
        })?;

        debug!(%origin, %destination, seconds, "driving time received");
        Ok(seconds)
    }
}

/// Copy of `url` with the `key` query parameter masked, for logging.
fn redact_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { REDACTED.into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

impl fmt::Debug for TravelCostService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelCostService")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl TravelTimeSource for TravelCostService {
    async fn fetch_travel_time(
        &self,
        origin: &Postcode,
        destination: &Postcode,
    ) -> Result<u64, TravelCostError> {
        TravelCostService::fetch_travel_time(self, origin, destination).await
    }
}
