use std::cmp::Ordering;

use crate::reviews::model::Review;

/// Requested result ordering. Anything other than `rating` or `date` on the
/// wire means "leave store order alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    None,
    Rating,
    Date,
}

impl SortBy {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "rating" => SortBy::Rating,
            "date" => SortBy::Date,
            _ => SortBy::None,
        }
    }
}

/// Filter/sort parameters for a review listing, as loosely-typed as the
/// query string that carries them. Empty strings mean "not set".
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    /// Case-insensitive substring match against the property name.
    pub property: String,
    pub sort: SortBy,
    /// Minimum average rating; skipped entirely when it does not parse.
    pub min_rating: String,
}

/// Apply property filter, rating floor and sort, in that fixed order.
///
/// Malformed input never errors: an unparseable `min_rating` is ignored and
/// an unknown sort keeps store order. Both sorts are stable and descending,
/// so ties keep their original relative order. Always returns a Vec, empty
/// when nothing matches.
pub fn run(reviews: &[Review], query: &ReviewQuery) -> Vec<Review> {
    let mut filtered: Vec<Review> = reviews.to_vec();

    if !query.property.is_empty() {
        let needle = query.property.to_lowercase();
        filtered.retain(|r| r.property_name.to_lowercase().contains(&needle));
    }

    if !query.min_rating.is_empty() {
        if let Ok(min) = query.min_rating.parse::<f64>() {
            filtered.retain(|r| r.rating >= min);
        }
    }

    match query.sort {
        SortBy::Rating => filtered.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortBy::Date => filtered.sort_by(|a, b| b.date.cmp(&a.date)),
        SortBy::None => {}
    }

    filtered
}
