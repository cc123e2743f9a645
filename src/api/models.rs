// API request/response models (DTOs)

use serde::{Deserialize, Serialize};

use crate::reviews::{PropertyAggregate, Review};

/// Query-string parameters of the review listing endpoint. All optional;
/// empty string means "no filter".
#[derive(Debug, Deserialize)]
pub struct ReviewListParams {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub sort: String,
    /// Minimum average rating, kept as a string; non-numeric values are
    /// ignored rather than rejected.
    #[serde(default)]
    pub rating: String,
}

/// Body of the approval toggle endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApproveRequest {
    #[serde(rename = "isApproved")]
    pub is_approved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PropertiesResponse {
    pub properties: Vec<PropertyAggregate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub reviews_loaded: usize,
    pub uptime_seconds: u64,
}
