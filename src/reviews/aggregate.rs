use std::collections::HashMap;

use crate::reviews::model::{PropertyAggregate, Review};

/// Roll the store up into one aggregate per distinct property name.
///
/// Grouping is an exact, case-sensitive string match on the property name.
/// `total_reviews` counts every review regardless of approval;
/// `average_rating` is the mean over the same full set; `approved_reviews`
/// is the approved subset in store order. The order of the returned
/// aggregates themselves is unspecified.
pub fn by_property(reviews: &[Review]) -> Vec<PropertyAggregate> {
    let mut groups: HashMap<&str, Vec<&Review>> = HashMap::new();
    for review in reviews {
        groups
            .entry(review.property_name.as_str())
            .or_default()
            .push(review);
    }

    groups
        .into_iter()
        .map(|(name, members)| {
            let total: f64 = members.iter().map(|r| r.rating).sum();
            // Groups exist only for names seen at least once, so the
            // division is always well-defined.
            let average_rating = total / members.len() as f64;

            PropertyAggregate {
                name: name.to_string(),
                total_reviews: members.len(),
                average_rating,
                approved_reviews: members
                    .iter()
                    .filter(|r| r.is_approved)
                    .map(|r| (*r).clone())
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hostaway::seed_reviews;
    use crate::reviews::store::ReviewStore;

    fn find<'a>(aggs: &'a [PropertyAggregate], name: &str) -> &'a PropertyAggregate {
        aggs.iter()
            .find(|a| a.name == name)
            .unwrap_or_else(|| panic!("missing aggregate for {name}"))
    }

    #[test]
    fn one_aggregate_per_distinct_property() {
        let store = ReviewStore::from_raw(&seed_reviews());
        let aggs = by_property(store.reviews());

        assert_eq!(aggs.len(), 3);
        assert_eq!(find(&aggs, "2B N1 A - 29 Shoreditch Heights").total_reviews, 2);
        assert_eq!(find(&aggs, "1B W2 B - 42 Camden Square").total_reviews, 2);
        assert_eq!(find(&aggs, "3B E1 C - 15 Canary Wharf").total_reviews, 1);
    }

    #[test]
    fn average_covers_all_reviews_regardless_of_approval() {
        let mut store = ReviewStore::from_raw(&seed_reviews());
        let id = store.reviews()[0].id.clone();
        store.set_approval(&id, true);

        let aggs = by_property(store.reviews());
        let shoreditch = find(&aggs, "2B N1 A - 29 Shoreditch Heights");

        // Averages 29/3 and 21/3 over both reviews, approved or not.
        let want = (29.0 / 3.0 + 7.0) / 2.0;
        assert!((shoreditch.average_rating - want).abs() < 1e-9);
        assert_eq!(shoreditch.total_reviews, 2);
    }

    #[test]
    fn approved_subset_is_empty_before_any_approval() {
        let store = ReviewStore::from_raw(&seed_reviews());
        let aggs = by_property(store.reviews());
        assert!(aggs.iter().all(|a| a.approved_reviews.is_empty()));
    }

    #[test]
    fn approved_subset_keeps_store_order() {
        let mut store = ReviewStore::from_raw(&seed_reviews());
        // Approve both Camden reviews in reverse order; aggregation must
        // still list them in store order.
        let later = store.reviews()[4].id.clone();
        let earlier = store.reviews()[1].id.clone();
        store.set_approval(&later, true);
        store.set_approval(&earlier, true);

        let aggs = by_property(store.reviews());
        let camden = find(&aggs, "1B W2 B - 42 Camden Square");

        assert_eq!(camden.approved_reviews.len(), 2);
        assert_eq!(camden.approved_reviews[0].id, earlier);
        assert_eq!(camden.approved_reviews[1].id, later);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let mut store = ReviewStore::from_raw(&seed_reviews());
        let mut odd = store.reviews()[0].clone();
        odd.property_name = odd.property_name.to_uppercase();
        store.append(odd);

        let aggs = by_property(store.reviews());
        assert_eq!(aggs.len(), 4);
    }
}
