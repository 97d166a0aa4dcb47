use crate::models::City;
use std::cmp::Ordering;
use tracing::debug;

type Link = Option<Box<CityNode>>;

/// Tree node; each subtree is owned by its parent
#[derive(Debug)]
struct CityNode {
    city: City,
    left: Link,
    right: Link,
}

impl CityNode {
    fn new(city: City) -> Self {
        Self {
            city,
            left: None,
            right: None,
        }
    }
}

/// Ordered city lookup by name, backed by an unbalanced binary search tree.
///
/// Inserting names in sorted order produces a chain, making lookups O(n).
/// There is no removal.
#[derive(Debug, Default)]
pub struct CityIndex {
    root: Link,
    len: usize,
}

impl CityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a city keyed by its name.
    ///
    /// If the name is already present the index is left untouched; the first
    /// insert wins. Returns whether the city was added.
    pub fn insert(&mut self, city: City) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match city.name.cmp(&node.city.name) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    debug!(city = %city.name, "city already indexed, ignoring insert");
                    return false;
                }
            };
        }
        *link = Some(Box::new(CityNode::new(city)));
        self.len += 1;
        true
    }

    /// Looks up a city by exact name
    pub fn find(&self, name: &str) -> Option<&City> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match name.cmp(node.city.name.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.city),
            };
        }
        None
    }

    /// Mutable lookup, for appending hotels and attractions.
    /// Callers must not change the name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut City> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match name.cmp(node.city.name.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Some(&mut node.city),
            };
        }
        None
    }

    /// All cities in ascending name order (in-order traversal)
    pub fn all_sorted(&self) -> Vec<City> {
        let mut cities = Vec::with_capacity(self.len);
        let mut stack: Vec<&CityNode> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            cities.push(node.city.clone());
            current = node.right.as_deref();
        }

        cities
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&CityNode, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}

impl Drop for CityIndex {
    // Unlink iteratively so a long chain does not recurse through Box drops
    fn drop(&mut self) {
        let mut pending: Vec<Box<CityNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
