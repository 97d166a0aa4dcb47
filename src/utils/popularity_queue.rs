use crate::models::City;

/// Binary max-heap of cities keyed on popularity.
///
/// Cities with equal popularity come out in heap order, which depends on
/// insertion history and is not stable.
#[derive(Debug, Clone, Default)]
pub struct PopularityQueue {
    heap: Vec<City>,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}

impl PopularityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city and restores heap order
    pub fn insert(&mut self, city: City) {
        self.heap.push(city);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the most popular city.
    ///
    /// An empty queue yields `City::default()` instead of failing; check
    /// [`City::is_placeholder`] or [`PopularityQueue::is_empty`].
    pub fn pop_max(&mut self) -> City {
        if self.heap.is_empty() {
            return City::default();
        }

        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// The `n` most popular cities, most popular first.
    ///
    /// Drains a copy of the heap; the live queue is not touched.
    pub fn top_n(&self, n: usize) -> Vec<City> {
        let mut scratch = self.clone();
        let mut result = Vec::with_capacity(n.min(scratch.len()));

        while result.len() < n && !scratch.is_empty() {
            result.push(scratch.pop_max());
        }

        result
    }

    /// Most popular city without removing it
    pub fn peek(&self) -> Option<&City> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.heap[up].popularity < self.heap[index].popularity {
                self.heap.swap(up, index);
                index = up;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let mut max_index = index;
            let left = left_child(index);
            let right = right_child(index);

            if left < len && self.heap[left].popularity > self.heap[max_index].popularity {
                max_index = left;
            }
            if right < len && self.heap[right].popularity > self.heap[max_index].popularity {
                max_index = right;
            }

            if max_index == index {
                break;
            }
            self.heap.swap(index, max_index);
            index = max_index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn city(name: &str, popularity: f64) -> City {
        City::new(name, "", popularity)
    }

    fn sample_queue() -> PopularityQueue {
        let mut queue = PopularityQueue::new();
        queue.insert(city("Paris", 9.5));
        queue.insert(city("London", 9.2));
        queue.insert(city("Rome", 8.8));
        queue.insert(city("Tokyo", 9.0));
        queue.insert(city("New York", 9.3));
        queue
    }

    #[test]
    fn test_pop_max_order() {
        let mut queue = sample_queue();
        let order: Vec<String> = (0..5).map(|_| queue.pop_max().name).collect();
        assert_eq!(order, vec!["Paris", "New York", "London", "Tokyo", "Rome"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_empty_returns_placeholder() {
        let mut queue = PopularityQueue::new();
        let city = queue.pop_max();
        assert_eq!(city, City::default());
        assert!(city.is_placeholder());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_top_n_does_not_mutate() {
        let queue = sample_queue();
        let first = queue.top_n(3);
        let second = queue.top_n(3);

        assert_eq!(first, second);
        assert_eq!(queue.len(), 5);
        assert_eq!(
            first.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Paris", "New York", "London"]
        );
        assert_eq!(queue.peek().map(|c| c.name.as_str()), Some("Paris"));
    }

    #[test]
    fn test_top_n_truncates() {
        let queue = sample_queue();
        assert_eq!(queue.top_n(10).len(), 5);
        assert!(queue.top_n(0).is_empty());
        assert!(PopularityQueue::new().top_n(3).is_empty());
    }

    #[test]
    fn test_equal_and_nan_popularity_terminates() {
        let mut queue = PopularityQueue::new();
        queue.insert(city("A", 1.0));
        queue.insert(city("B", f64::NAN));
        queue.insert(city("C", 1.0));
        queue.insert(city("D", 1.0));

        let mut popped = 0;
        while !queue.is_empty() {
            queue.pop_max();
            popped += 1;
        }
        assert_eq!(popped, 4);
    }

    proptest! {
        #[test]
        fn pop_max_is_never_below_remaining(
            ops in prop::collection::vec(prop::option::of(0.0f64..100.0), 0..60)
        ) {
            // Some(p) inserts, None pops
            let mut queue = PopularityQueue::new();
            for (i, op) in ops.iter().enumerate() {
                match op {
                    Some(popularity) => queue.insert(city(&format!("c{}", i), *popularity)),
                    None => {
                        if queue.is_empty() {
                            prop_assert!(queue.pop_max().is_placeholder());
                            continue;
                        }
                        let top = queue.pop_max();
                        for rest in queue.top_n(queue.len()) {
                            prop_assert!(top.popularity >= rest.popularity);
                        }
                    }
                }
            }

            let drained = queue.top_n(queue.len());
            for pair in drained.windows(2) {
                prop_assert!(pair[0].popularity >= pair[1].popularity);
            }
        }
    }
}
