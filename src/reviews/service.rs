use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::hostaway;
use crate::reviews::aggregate;
use crate::reviews::model::{PropertyAggregate, Review};
use crate::reviews::query::{self, ReviewQuery};
use crate::reviews::store::ReviewStore;

/// Owns the review store and exposes the three operations the HTTP layer
/// calls into.
///
/// The store is the only mutable state in the process; a single mutex guards
/// every read and write so concurrent approve-and-query requests cannot
/// race. Each operation locks, runs to completion in memory and unlocks —
/// there is no async I/O behind the lock.
pub struct ReviewService {
    store: Mutex<ReviewStore>,
}

impl ReviewService {
    pub fn new(store: ReviewStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Build a service pre-loaded with the fixed Hostaway seed records.
    pub fn with_seed_data() -> Self {
        let raw = hostaway::seed_reviews();
        let store = ReviewStore::from_raw(&raw);
        info!(reviews = store.len(), "seeded review store");
        Self::new(store)
    }

    fn store(&self) -> MutexGuard<'_, ReviewStore> {
        // No code path panics while holding the lock, so poisoning cannot
        // happen in practice; recover rather than propagate if it ever does.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Filtered/sorted listing of canonical reviews.
    pub fn list_reviews(&self, query: &ReviewQuery) -> Vec<Review> {
        query::run(self.store().reviews(), query)
    }

    /// Toggle approval on a review. Returns whether the id matched; the
    /// reference API reports success either way.
    pub fn set_approval(&self, review_id: &str, approved: bool) -> bool {
        self.store().set_approval(review_id, approved)
    }

    /// On-demand per-property rollup of the current store contents.
    pub fn list_properties(&self) -> Vec<PropertyAggregate> {
        aggregate::by_property(self.store().reviews())
    }

    pub fn review_count(&self) -> usize {
        self.store().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::query::SortBy;

    #[test]
    fn seeded_service_serves_all_reviews() {
        let service = ReviewService::with_seed_data();
        assert_eq!(service.review_count(), 5);
        assert_eq!(service.list_reviews(&ReviewQuery::default()).len(), 5);
    }

    #[test]
    fn approval_flows_through_to_aggregates() {
        let service = ReviewService::with_seed_data();
        let target = service.list_reviews(&ReviewQuery::default())[0].clone();

        assert!(service.set_approval(&target.id, true));

        let properties = service.list_properties();
        let agg = properties
            .iter()
            .find(|p| p.name == target.property_name)
            .unwrap();
        assert_eq!(agg.approved_reviews.len(), 1);
        assert_eq!(agg.approved_reviews[0].id, target.id);

        // Unapprove drains the subset again.
        assert!(service.set_approval(&target.id, false));
        let properties = service.list_properties();
        let agg = properties
            .iter()
            .find(|p| p.name == target.property_name)
            .unwrap();
        assert!(agg.approved_reviews.is_empty());
    }

    #[test]
    fn unknown_id_approval_is_a_soft_miss() {
        let service = ReviewService::with_seed_data();
        assert!(!service.set_approval("missing", true));
        assert!(service
            .list_properties()
            .iter()
            .all(|p| p.approved_reviews.is_empty()));
    }

    #[test]
    fn list_reviews_applies_query() {
        let service = ReviewService::with_seed_data();
        let query = ReviewQuery {
            property: String::new(),
            sort: SortBy::Rating,
            min_rating: String::new(),
        };

        let results = service.list_reviews(&query);
        assert_eq!(results.len(), 5);
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }
}
