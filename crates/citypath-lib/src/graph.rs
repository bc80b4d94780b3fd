use std::collections::{HashMap, HashSet, VecDeque};

/// Adjacency entry within the road graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    pub distance: f64,
}

/// Undirected weighted graph keyed by location name.
///
/// Built once before any search and read-only afterwards; adjacency lists keep
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge; both endpoints receive an entry carrying the
    /// same distance.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Edge {
                target: to.to_string(),
                distance,
            });
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .push(Edge {
                target: from.to_string(),
                distance,
            });
        self.edge_count += 1;
    }

    /// Return the neighbours for a given location, empty when it has no edges.
    pub fn neighbours(&self, name: &str) -> &[Edge] {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the location appears in at least one edge.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Number of locations with at least one edge.
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges inserted.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Breadth-first check that `goal` can be reached from `start`.
    pub fn is_reachable(&self, start: &str, goal: &str) -> bool {
        if !self.contains(start) || !self.contains(goal) {
            return false;
        }
        if start == goal {
            return true;
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for edge in self.neighbours(current) {
                let next = edge.target.as_str();
                if next == goal {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        false
    }
}
