//! In-place orderings for trip records.
//!
//! Cost ordering uses quicksort and is not stable. Distance ordering uses
//! merge sort and keeps trips with equal distance in their input order.

use std::cmp::Ordering;

use tracing::debug;

use crate::algorithms::SortOrder;
use crate::models::{City, Trip};

/// Quicksort by cost, pivoting on the last element of each range.
///
/// Already sorted input (in the opposite direction) degrades to O(n²).
/// Only the smaller partition is recursed into, so stack depth stays
/// logarithmic.
pub fn sort_by_cost(trips: &mut [Trip], order: SortOrder) {
    debug!(trips = trips.len(), ?order, "quicksort by cost");
    quick_sort_by_cost(trips, order);
}

fn quick_sort_by_cost(trips: &mut [Trip], order: SortOrder) {
    let mut rest = trips;
    while rest.len() > 1 {
        let pivot = partition_by_cost(rest, order);
        let (left, right) = std::mem::take(&mut rest).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_by_cost(left, order);
            rest = right;
        } else {
            quick_sort_by_cost(right, order);
            rest = left;
        }
    }
}

/// Lomuto partition; returns the pivot's final index
fn partition_by_cost(trips: &mut [Trip], order: SortOrder) -> usize {
    let high = trips.len() - 1;
    let pivot = trips[high].cost;
    let mut store = 0;

    for j in 0..high {
        if order.in_order(trips[j].cost, pivot) {
            trips.swap(store, j);
            store += 1;
        }
    }
    trips.swap(store, high);
    store
}

/// Stable merge sort by distance
pub fn sort_by_distance(trips: &mut [Trip], order: SortOrder) {
    debug!(trips = trips.len(), ?order, "merge sort by distance");
    merge_sort_by_distance(trips, order);
}

fn merge_sort_by_distance(trips: &mut [Trip], order: SortOrder) {
    if trips.len() < 2 {
        return;
    }

    let mid = trips.len().div_ceil(2);
    {
        let (left, right) = trips.split_at_mut(mid);
        merge_sort_by_distance(left, order);
        merge_sort_by_distance(right, order);
    }
    merge_by_distance(trips, mid, order);
}

fn merge_by_distance(trips: &mut [Trip], mid: usize, order: SortOrder) {
    let mut left = trips[..mid].to_vec().into_iter().peekable();
    let mut right = trips[mid..].to_vec().into_iter().peekable();

    for slot in trips.iter_mut() {
        // Ties go to the left run
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => !order.in_order(l.distance, r.distance),
            (None, Some(_)) => true,
            _ => false,
        };
        let next = if take_right { right.next() } else { left.next() };
        if let Some(trip) = next {
            *slot = trip;
        }
    }
}

/// Most popular first; cities with equal popularity keep their order
pub fn sort_cities_by_popularity(cities: &mut [City]) {
    cities.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn trip(source: &str, distance: u64, cost: u64) -> Trip {
        Trip::new(source, "Dest", distance, cost, "2024-01-01")
    }

    fn costs(trips: &[Trip]) -> Vec<u64> {
        trips.iter().map(|t| t.cost).collect()
    }

    fn sources(trips: &[Trip]) -> Vec<&str> {
        trips.iter().map(|t| t.source.as_str()).collect()
    }

    #[test]
    fn test_sort_by_cost_ascending() {
        let mut trips = vec![trip("A", 0, 30), trip("B", 0, 10), trip("C", 0, 20)];
        sort_by_cost(&mut trips, SortOrder::Ascending);
        assert_eq!(costs(&trips), vec![10, 20, 30]);
    }

    #[test]
    fn test_sort_by_cost_descending() {
        let mut trips = vec![trip("A", 0, 30), trip("B", 0, 10), trip("C", 0, 20)];
        sort_by_cost(&mut trips, SortOrder::Descending);
        assert_eq!(costs(&trips), vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_by_cost_adversarial_input() {
        // Reverse-sorted input is the quadratic case; it must still finish
        let mut trips: Vec<Trip> = (0..2000).rev().map(|c| trip("X", 0, c)).collect();
        sort_by_cost(&mut trips, SortOrder::Ascending);
        assert_eq!(costs(&trips), (0..2000).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_by_distance_is_stable() {
        let mut trips = vec![trip("X", 5, 1), trip("Y", 5, 2)];
        sort_by_distance(&mut trips, SortOrder::Ascending);
        assert_eq!(sources(&trips), vec!["X", "Y"]);

        sort_by_distance(&mut trips, SortOrder::Descending);
        assert_eq!(sources(&trips), vec!["X", "Y"]);
    }

    #[test]
    fn test_sort_by_distance_mixed() {
        let mut trips = vec![
            trip("A", 9714, 800),
            trip("B", 344, 200),
            trip("C", 1435, 350),
            trip("D", 344, 100),
        ];
        sort_by_distance(&mut trips, SortOrder::Ascending);
        assert_eq!(sources(&trips), vec!["B", "D", "C", "A"]);

        sort_by_distance(&mut trips, SortOrder::Descending);
        assert_eq!(sources(&trips), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<Trip> = Vec::new();
        sort_by_cost(&mut empty, SortOrder::Ascending);
        sort_by_distance(&mut empty, SortOrder::Ascending);
        assert!(empty.is_empty());

        let mut single = vec![trip("A", 1, 1)];
        sort_by_cost(&mut single, SortOrder::Descending);
        sort_by_distance(&mut single, SortOrder::Descending);
        assert_eq!(sources(&single), vec!["A"]);
    }

    #[test]
    fn test_sort_cities_by_popularity() {
        let mut cities = vec![
            City::new("Rome", "Italy", 8.8),
            City::new("Paris", "France", 9.5),
            City::new("Tokyo", "Japan", 9.0),
            City::new("Kyoto", "Japan", 9.0),
        ];
        sort_cities_by_popularity(&mut cities);
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Paris", "Tokyo", "Kyoto", "Rome"]);
    }

    fn trips_strategy() -> impl Strategy<Value = Vec<Trip>> {
        prop::collection::vec((0u64..20, 0u64..20), 0..50).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (distance, cost))| trip(&format!("t{}", i), distance, cost))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn sort_by_cost_matches_std(trips in trips_strategy(), descending in any::<bool>()) {
            let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
            let mut sorted = trips.clone();
            sort_by_cost(&mut sorted, order);

            let mut expected = costs(&trips);
            expected.sort_unstable();
            if descending {
                expected.reverse();
            }
            prop_assert_eq!(costs(&sorted), expected);
        }

        #[test]
        fn sort_by_distance_matches_stable_std(trips in trips_strategy(), descending in any::<bool>()) {
            let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
            let mut sorted = trips.clone();
            sort_by_distance(&mut sorted, order);

            let mut expected = trips.clone();
            if descending {
                expected.sort_by(|a, b| b.distance.cmp(&a.distance));
            } else {
                expected.sort_by_key(|t| t.distance);
            }
            prop_assert_eq!(sorted, expected);
        }
    }
}
