//! Distance Matrix API response DTOs.
//!
//! These map directly to the JSON returned by the distance-matrix endpoint.
//! Duration and distance are optional: elements with a non-`OK` status
//! omit them, and error responses omit `rows` entirely.

use serde::Deserialize;

use super::error::ResponseError;

/// Status value meaning success, at both top level and element level.
pub const STATUS_OK: &str = "OK";

/// Top-level distance-matrix response.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    /// Request status, `OK` on success.
    pub status: String,

    /// Human-readable detail accompanying a non-`OK` status.
    pub error_message: Option<String>,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// A row of the matrix: one element per destination.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    pub elements: Vec<Element>,
}

/// A single origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    /// Route status, `OK` when a route was found.
    pub status: String,
    pub duration: Option<TextValue>,
    pub distance: Option<TextValue>,
}

/// A measurement with its human-readable rendering.
///
/// `value` is seconds for durations and metres for distances.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: u64,
    pub text: String,
}

impl DistanceMatrixResponse {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(body).map_err(|e| ResponseError::Decode {
            message: e.to_string(),
            body: body.chars().take(500).collect(),
        })
    }

    /// Extract the driving time of the single requested route, in seconds.
    ///
    /// Only the first row and its first element are consulted, since a
    /// request always carries exactly one origin and one destination.
    pub fn travel_time_seconds(&self) -> Result<u64, ResponseError> {
        self.first_route()?
            .duration
            .as_ref()
            .map(|d| d.value)
            .ok_or(ResponseError::MissingDuration)
    }

    /// The first element, checked for `OK` statuses.
    pub fn first_route(&self) -> Result<&Element, ResponseError> {
        if self.status != STATUS_OK {
            return Err(ResponseError::Status {
                status: self.status.clone(),
                message: self.error_message.clone(),
            });
        }

        let element = self
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or(ResponseError::NoElements)?;

        if element.status != STATUS_OK {
            return Err(ResponseError::ElementStatus(element.status.clone()));
        }

        Ok(element)
    }
}
