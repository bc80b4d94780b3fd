use crate::error::{Error, Result};
use crate::geo::GeoIndex;
use crate::graph::Graph;
use crate::heuristic::HeuristicEstimator;

/// Coordinates and road graph loaded together at startup.
///
/// Searches only borrow the network, so one instance can serve any number of
/// queries (or be shared behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub geo: GeoIndex,
    pub graph: Graph,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        self.geo.add_location(name, latitude, longitude);
    }

    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) {
        self.graph.add_edge(from, to, distance);
    }

    pub fn estimator(&self) -> HeuristicEstimator<'_> {
        HeuristicEstimator::new(&self.geo)
    }

    /// Resolve a name that must be navigable, suggesting close matches when it
    /// is not.
    pub fn require_location(&self, name: &str) -> Result<()> {
        if self.graph.contains(name) {
            return Ok(());
        }
        Err(Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.geo.suggestions(name, 3),
        })
    }
}
