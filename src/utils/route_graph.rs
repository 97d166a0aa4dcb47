use crate::error::RouteError;
use crate::models::{Distance, ShortestPath};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};
use tracing::{debug, warn};

/// Neighbour list of one city: (adjacent city, distance), in insertion order
pub type Neighbors = Vec<(String, Distance)>;

/// Undirected route network between named cities
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency_list: BTreeMap<String, Neighbors>, // City -> [(adjacent city, distance)]
}

/// Frontier entry for the Dijkstra algorithm
#[derive(Clone, Eq, PartialEq)]
struct DijkstraNode {
    distance: Distance,
    city: String,
}

// Smaller (distance, city) pops first
impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Note: This is reversed order, because we want a min-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RouteGraph {
    /// Create an empty route graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected route between two cities.
    ///
    /// Adding the same pair twice keeps both edges.
    pub fn add_route(&mut self, city_a: &str, city_b: &str, distance: i64) -> Result<(), RouteError> {
        let distance = match Distance::try_from(distance) {
            Ok(distance) => distance,
            Err(_) => {
                warn!(city_a, city_b, distance, "rejected route with negative distance");
                return Err(RouteError::NegativeDistance {
                    from: city_a.to_string(),
                    to: city_b.to_string(),
                    distance,
                });
            }
        };

        self.adjacency_list
            .entry(city_a.to_string())
            .or_default()
            .push((city_b.to_string(), distance));

        self.adjacency_list
            .entry(city_b.to_string())
            .or_default()
            .push((city_a.to_string(), distance));

        Ok(())
    }

    /// Whether the city appears in any route
    pub fn contains(&self, city: &str) -> bool {
        self.adjacency_list.contains_key(city)
    }

    /// Routes leaving a city, empty for unknown cities
    pub fn neighbors(&self, city: &str) -> &[(String, Distance)] {
        self.adjacency_list
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn city_count(&self) -> usize {
        self.adjacency_list.len()
    }

    /// Number of undirected routes, parallel duplicates included
    pub fn edge_count(&self) -> usize {
        self.adjacency_list.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Read-only dump of the whole topology
    pub fn all_edges(&self) -> &BTreeMap<String, Neighbors> {
        &self.adjacency_list
    }

    /// Calculate the shortest route between two cities using Dijkstra algorithm.
    ///
    /// Returns [`ShortestPath::not_found`] when the source has no routes or
    /// the destination cannot be reached.
    pub fn shortest_path(&self, source: &str, destination: &str) -> ShortestPath {
        if !self.contains(source) {
            debug!(source, destination, "source city has no routes");
            return ShortestPath::not_found();
        }

        let mut distances: HashMap<&str, Distance> = HashMap::new();
        let mut previous: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut priority_queue = BinaryHeap::new();

        distances.insert(source, 0);
        priority_queue.push(DijkstraNode {
            distance: 0,
            city: source.to_string(),
        });

        while let Some(DijkstraNode { distance, city }) = priority_queue.pop() {
            // Weights are non-negative, so the destination's distance is final once popped
            if city == destination {
                break;
            }

            // Borrow the graph's own key so the maps below can hold &str
            let Some((current, _)) = self.adjacency_list.get_key_value(city.as_str()) else {
                continue;
            };
            if !visited.insert(current.as_str()) {
                continue;
            }

            for (neighbor, edge_distance) in self.neighbors(current) {
                let new_distance = distance.saturating_add(*edge_distance);

                let is_shorter = match distances.get(neighbor.as_str()) {
                    Some(&known) => new_distance < known,
                    None => true,
                };

                if is_shorter {
                    distances.insert(neighbor.as_str(), new_distance);
                    previous.insert(neighbor.as_str(), current.as_str());
                    priority_queue.push(DijkstraNode {
                        distance: new_distance,
                        city: neighbor.clone(),
                    });
                }
            }
        }

        let Some(&total) = distances.get(destination) else {
            debug!(source, destination, "no route found");
            return ShortestPath::not_found();
        };

        // Walk predecessors back to the source, then reverse
        let mut path = vec![destination.to_string()];
        let mut current = destination;
        while current != source {
            match previous.get(current) {
                Some(&prev) => {
                    path.push(prev.to_string());
                    current = prev;
                }
                None => return ShortestPath::not_found(),
            }
        }
        path.reverse();

        debug!(source, destination, total, hops = path.len() - 1, "shortest path found");
        ShortestPath::new(total, path)
    }
}
