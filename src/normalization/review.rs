use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::hostaway::HostawayReview;
use crate::reviews::model::{Review, CHANNEL_HOSTAWAY};

const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Translate a raw Hostaway record into the canonical review shape.
///
/// Pure and infallible: malformed timestamps collapse to the Unix epoch and a
/// review with no category scores gets a rating of 0.0 instead of a NaN from
/// the zero division (NaN would not survive JSON serialization anyway).
///
/// The overall rating is the arithmetic mean of the per-category scores; the
/// raw record's own `rating` field is ignored. Duplicate categories keep the
/// last value seen. Every canonical review starts unapproved regardless of
/// the upstream `status`.
pub fn normalize(raw: &HostawayReview) -> Review {
    let mut categories: HashMap<String, i64> = HashMap::new();
    let mut total = 0i64;

    for cat in &raw.review_category {
        categories.insert(cat.category.clone(), cat.rating);
        total += cat.rating;
    }

    let rating = if raw.review_category.is_empty() {
        0.0
    } else {
        total as f64 / raw.review_category.len() as f64
    };

    let date = parse_submitted_at(&raw.submitted_at);

    Review {
        id: Uuid::new_v4().to_string(),
        property_name: raw.listing_name.clone(),
        guest_name: raw.guest_name.clone(),
        review: raw.public_review.clone(),
        rating,
        categories,
        date,
        channel: CHANNEL_HOSTAWAY.to_string(),
        review_type: raw.review_type.clone(),
        is_approved: false,
    }
}

/// Parse the fixed `YYYY-MM-DD HH:MM:SS` layout; unparseable input becomes
/// the epoch and the error is discarded.
fn parse_submitted_at(raw: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(raw, SUBMITTED_AT_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_default()
}
