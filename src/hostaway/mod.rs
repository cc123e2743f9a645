// Hostaway review source: raw record types and the seed payload used in
// place of a live upstream connection.

use serde::{Deserialize, Serialize};

/// One per-category score attached to a raw review, on the 0-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRating {
    pub category: String,
    pub rating: i64,
}

/// A review exactly as the Hostaway API delivers it.
///
/// `rating` is the optional overall score; it is frequently null and the
/// normalizer ignores it in favor of the per-category average.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostawayReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub review_type: String,
    pub status: String,
    pub rating: Option<i64>,
    pub public_review: String,
    pub review_category: Vec<CategoryRating>,
    /// Timestamp string in `YYYY-MM-DD HH:MM:SS` form.
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
}

/// Envelope shape of the upstream `GET /reviews` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostawayResponse {
    pub status: String,
    pub result: Vec<HostawayReview>,
}

fn category(name: &str, rating: i64) -> CategoryRating {
    CategoryRating {
        category: name.to_string(),
        rating,
    }
}

/// Fixed seed data: five reviews across three listings. Loaded at startup so
/// the service is queryable without an upstream Hostaway account.
pub fn seed_reviews() -> Vec<HostawayReview> {
    vec![
        HostawayReview {
            id: 1,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating: None,
            public_review:
                "Amazing property! Super clean and great location. Would definitely stay again."
                    .to_string(),
            review_category: vec![
                category("cleanliness", 10),
                category("communication", 9),
                category("location", 10),
            ],
            submitted_at: "2024-01-15 14:30:00".to_string(),
            guest_name: "John Smith".to_string(),
            listing_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
        },
        HostawayReview {
            id: 2,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating: None,
            public_review: "Good place but could be cleaner. Host was responsive though."
                .to_string(),
            review_category: vec![
                category("cleanliness", 6),
                category("communication", 9),
                category("value", 8),
            ],
            submitted_at: "2024-01-20 09:15:00".to_string(),
            guest_name: "Sarah Johnson".to_string(),
            listing_name: "1B W2 B - 42 Camden Square".to_string(),
        },
        HostawayReview {
            id: 3,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating: None,
            public_review: "Perfect stay! Everything was as described. Highly recommend."
                .to_string(),
            review_category: vec![
                category("cleanliness", 10),
                category("communication", 10),
                category("accuracy", 10),
                category("location", 9),
            ],
            submitted_at: "2024-01-25 16:45:00".to_string(),
            guest_name: "Mike Wilson".to_string(),
            listing_name: "3B E1 C - 15 Canary Wharf".to_string(),
        },
        HostawayReview {
            id: 4,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating: None,
            public_review: "Decent place but noise from the street was an issue.".to_string(),
            review_category: vec![
                category("cleanliness", 8),
                category("communication", 8),
                category("location", 5),
            ],
            submitted_at: "2024-02-01 11:20:00".to_string(),
            guest_name: "Emma Davis".to_string(),
            listing_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
        },
        HostawayReview {
            id: 5,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating: None,
            public_review: "Excellent value for money. Clean and well-maintained.".to_string(),
            review_category: vec![
                category("cleanliness", 9),
                category("value", 10),
                category("communication", 9),
            ],
            submitted_at: "2024-02-05 13:30:00".to_string(),
            guest_name: "David Brown".to_string(),
            listing_name: "1B W2 B - 42 Camden Square".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_three_listings() {
        let seed = seed_reviews();
        assert_eq!(seed.len(), 5);

        let mut listings: Vec<&str> = seed.iter().map(|r| r.listing_name.as_str()).collect();
        listings.sort();
        listings.dedup();
        assert_eq!(listings.len(), 3);
    }

    #[test]
    fn raw_review_uses_hostaway_field_names() {
        let json = serde_json::to_value(&seed_reviews()[0]).unwrap();
        assert!(!json["publicReview"].as_str().unwrap().is_empty());
        assert_eq!(json["type"], "guest-to-host");
        assert_eq!(json["submittedAt"], "2024-01-15 14:30:00");
        assert_eq!(json["listingName"], "2B N1 A - 29 Shoreditch Heights");
        assert!(json["rating"].is_null());
        assert_eq!(json["reviewCategory"][0]["category"], "cleanliness");
    }
}
