use tracing::warn;

use crate::hostaway::HostawayReview;
use crate::normalization;
use crate::reviews::model::Review;

/// Ordered in-memory collection of canonical reviews.
///
/// Reviews keep the order they were normalized in; that order is the default
/// iteration order for queries and the within-property order for aggregates.
/// Entries are never removed; the only mutation after load is the approval
/// flag.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and load a batch of raw records, preserving their order.
    pub fn from_raw(raw: &[HostawayReview]) -> Self {
        let mut store = Self::new();
        for record in raw {
            store.append(normalization::normalize(record));
        }
        store
    }

    /// Add a review at the end; used only during initial load.
    pub fn append(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    fn find_by_id(&self, id: &str) -> Option<usize> {
        self.reviews.iter().position(|r| r.id == id)
    }

    /// Set the approval flag on the matching review in place.
    ///
    /// Returns whether a review matched. A miss is logged but is not a hard
    /// failure; callers decide how to surface it.
    pub fn set_approval(&mut self, id: &str, approved: bool) -> bool {
        match self.find_by_id(id) {
            Some(idx) => {
                self.reviews[idx].is_approved = approved;
                true
            }
            None => {
                warn!(review_id = %id, "approval update for unknown review id");
                false
            }
        }
    }
}
