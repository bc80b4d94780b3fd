//! Common test utilities and fixture helpers.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::path::PathBuf;

use citypath_lib::{Graph, RoadNetwork};

/// Path to the fixtures directory shared by the workspace tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Network whose locations all sit on the same coordinate, so every
/// heuristic estimate is zero.
#[allow(dead_code)]
pub fn flat_network(edges: &[(&str, &str, f64)]) -> RoadNetwork {
    let mut network = RoadNetwork::new();
    for &(from, to, distance) in edges {
        network.add_location(from, 0.0, 0.0);
        network.add_location(to, 0.0, 0.0);
        network.add_edge(from, to, distance);
    }
    network
}

/// Sum of edge distances along `path`, using the cheapest parallel edge.
#[allow(dead_code)]
pub fn path_length(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours(&pair[0])
                .iter()
                .filter(|edge| edge.target == pair[1])
                .map(|edge| edge.distance)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

/// Independent shortest-distance oracle.
#[allow(dead_code)]
pub fn shortest_distance(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
    #[derive(PartialEq)]
    struct Entry<'a>(f64, &'a str);
    impl Eq for Entry<'_> {}
    impl Ord for Entry<'_> {
        fn cmp(&self, other: &Self) -> Ordering {
            other.0.total_cmp(&self.0)
        }
    }
    impl PartialOrd for Entry<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut queue = BinaryHeap::new();
    best.insert(start, 0.0);
    queue.push(Entry(0.0, start));

    while let Some(Entry(cost, node)) = queue.pop() {
        if node == goal {
            return Some(cost);
        }
        if cost > best[node] {
            continue;
        }
        for edge in graph.neighbours(node) {
            let next = cost + edge.distance;
            if next < *best.get(edge.target.as_str()).unwrap_or(&f64::INFINITY) {
                best.insert(edge.target.as_str(), next);
                queue.push(Entry(next, edge.target.as_str()));
            }
        }
    }
    None
}
