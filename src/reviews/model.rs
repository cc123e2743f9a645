use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel tag stamped on every review normalized from Hostaway.
pub const CHANNEL_HOSTAWAY: &str = "hostaway";

/// The canonical, source-independent shape of a review.
///
/// Immutable after normalization except for `is_approved`, which managers
/// toggle through the API. `rating` is the average of `categories` computed
/// once at normalization time and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Process-unique id generated at normalization; unrelated to the source id.
    pub id: String,
    pub property_name: String,
    pub guest_name: String,
    pub review: String,
    pub rating: f64,
    pub categories: HashMap<String, i64>,
    pub date: DateTime<Utc>,
    pub channel: String,
    #[serde(rename = "type")]
    pub review_type: String,
    pub is_approved: bool,
}

/// Derived per-property summary, computed on demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAggregate {
    pub name: String,
    /// Count of every review for the property, approved or not.
    pub total_reviews: usize,
    pub average_rating: f64,
    /// Approved subset in store order.
    pub approved_reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_serializes_camel_case() {
        let review = Review {
            id: "abc".to_string(),
            property_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
            guest_name: "John Smith".to_string(),
            review: "Lovely stay".to_string(),
            rating: 9.0,
            categories: HashMap::from([("cleanliness".to_string(), 9)]),
            date: Utc::now(),
            channel: CHANNEL_HOSTAWAY.to_string(),
            review_type: "guest-to-host".to_string(),
            is_approved: false,
        };

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["propertyName"], "2B N1 A - 29 Shoreditch Heights");
        assert_eq!(json["guestName"], "John Smith");
        assert_eq!(json["type"], "guest-to-host");
        assert_eq!(json["isApproved"], false);
        assert_eq!(json["channel"], "hostaway");
    }

    #[test]
    fn aggregate_serializes_camel_case() {
        let agg = PropertyAggregate {
            name: "1B W2 B - 42 Camden Square".to_string(),
            total_reviews: 2,
            average_rating: 8.5,
            approved_reviews: Vec::new(),
        };

        let json = serde_json::to_value(&agg).unwrap();
        assert_eq!(json["totalReviews"], 2);
        assert_eq!(json["averageRating"], 8.5);
        assert!(json["approvedReviews"].as_array().unwrap().is_empty());
    }
}
