//! Best-first route search between two named locations.
//!
//! This module provides:
//! - [`SearchMode`] - Supported priority functions (A*, greedy, uniform-cost)
//! - [`SearchOptions`] - Cycle guard and expansion bound
//! - [`SearchRequest`] - Source, destination and mode for one query
//! - [`SearchOutcome`] - Route (or the reason none was found) plus the expansion trace
//! - [`search`] - Main entry point
//!
//! # Strategy Pattern
//!
//! One search skeleton serves every mode. The priority of a candidate path is
//! delegated to a [`PriorityStrategy`], and only strategies that report
//! [`PriorityStrategy::prunes_dominated`] collapse frontier entries that share
//! a tip down to the cheapest ones.
//!
//! # Example
//!
//! ```ignore
//! use citypath_lib::{embedded_network, search, SearchRequest};
//!
//! let network = embedded_network()?;
//! let outcome = search(&network, &SearchRequest::astar("seattle", "miami"))?;
//! println!("{} stops", outcome.path().len());
//! ```

mod frontier;
mod strategy;

pub use strategy::{
    select_strategy, AStarStrategy, Extension, GoalEstimate, GreedyStrategy, PriorityStrategy,
    UniformStrategy,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::Result;
use crate::network::RoadNetwork;

use frontier::{Frontier, Trail};

/// Default upper bound on node expansions per search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Supported search modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Distance so far plus straight-line estimate.
    Astar,
    /// Straight-line estimate only.
    Greedy,
    /// Distance so far only.
    Uniform,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Astar, SearchMode::Greedy, SearchMode::Uniform];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Astar => "astar",
            SearchMode::Greedy => "greedy",
            SearchMode::Uniform => "uniform",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a mode string is not one of `astar`, `greedy` or `uniform`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised search mode '{value}'; expected astar, greedy or uniform")]
pub struct UnknownSearchMode {
    pub value: String,
}

impl FromStr for SearchMode {
    type Err = UnknownSearchMode;

    /// Case-sensitive exact match.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| UnknownSearchMode {
                value: value.to_string(),
            })
    }
}

/// Rule that keeps a candidate path from stepping back onto itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleGuard {
    /// Never step straight back to the location just left. Longer loops are
    /// still possible.
    #[default]
    Parent,
    /// Never revisit any location already on the path.
    FullPath,
}

/// Tunables for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub cycle_guard: CycleGuard,
    /// Expansions allowed before the search gives up.
    pub max_expansions: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            cycle_guard: CycleGuard::Parent,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// One route query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub source: String,
    pub destination: String,
    pub mode: SearchMode,
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(mode: SearchMode, source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            mode,
            options: SearchOptions::default(),
        }
    }

    /// Convenience constructor for A* searches.
    pub fn astar(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(SearchMode::Astar, source, destination)
    }

    /// Convenience constructor for greedy best-first searches.
    pub fn greedy(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(SearchMode::Greedy, source, destination)
    }

    /// Convenience constructor for uniform-cost searches.
    pub fn uniform(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(SearchMode::Uniform, source, destination)
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Route found by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Locations from source to destination.
    pub steps: Vec<String>,
    /// Sum of edge distances along `steps`.
    pub total_distance: f64,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Why a search produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// The source has no edges in the graph.
    UnknownSource,
    /// The destination has no edges in the graph.
    UnknownDestination,
    /// The destination lies in another component.
    Unreachable,
    /// The expansion bound was hit first.
    ExpansionLimit,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NotFoundReason::UnknownSource => "unknown source",
            NotFoundReason::UnknownDestination => "unknown destination",
            NotFoundReason::Unreachable => "destination unreachable",
            NotFoundReason::ExpansionLimit => "expansion limit reached",
        };
        f.write_str(value)
    }
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    Found(Route),
    NotFound(NotFoundReason),
}

/// Result record of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub mode: SearchMode,
    pub source: String,
    pub destination: String,
    pub status: SearchStatus,
    /// Tips of the expanded paths, in expansion order.
    pub expanded: Vec<String>,
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match &self.status {
            SearchStatus::Found(route) => Some(route),
            SearchStatus::NotFound(_) => None,
        }
    }

    pub fn not_found_reason(&self) -> Option<NotFoundReason> {
        match self.status {
            SearchStatus::Found(_) => None,
            SearchStatus::NotFound(reason) => Some(reason),
        }
    }

    pub fn is_found(&self) -> bool {
        self.route().is_some()
    }

    /// Route locations, or an empty slice when no route was found.
    pub fn path(&self) -> &[String] {
        self.route().map(|route| route.steps.as_slice()).unwrap_or(&[])
    }

    pub fn total_distance(&self) -> Option<f64> {
        self.route().map(|route| route.total_distance)
    }
}

/// Run the search described by `request` over `network`.
///
/// A missing source or destination, an unreachable destination and an
/// exhausted expansion bound all yield `Ok` with [`SearchStatus::NotFound`].
/// `Err` is reserved for a navigable location that has no coordinate.
pub fn search(network: &RoadNetwork, request: &SearchRequest) -> Result<SearchOutcome> {
    let strategy = select_strategy(request.mode);
    search_with_strategy(network, request, strategy.as_ref())
}

/// Shorthand for [`search`] with default options.
pub fn find_path(
    network: &RoadNetwork,
    mode: SearchMode,
    source: &str,
    destination: &str,
) -> Result<SearchOutcome> {
    search(network, &SearchRequest::new(mode, source, destination))
}

/// Run the shared search skeleton with an explicit priority strategy.
pub fn search_with_strategy(
    network: &RoadNetwork,
    request: &SearchRequest,
    strategy: &dyn PriorityStrategy,
) -> Result<SearchOutcome> {
    let graph = &network.graph;
    let source = request.source.as_str();
    let destination = request.destination.as_str();
    let outcome = |status: SearchStatus, expanded: Vec<&str>| SearchOutcome {
        mode: strategy.mode(),
        source: request.source.clone(),
        destination: request.destination.clone(),
        status,
        expanded: expanded.into_iter().map(str::to_string).collect(),
    };

    if !graph.contains(source) {
        debug!(%source, "source has no edges");
        return Ok(outcome(
            SearchStatus::NotFound(NotFoundReason::UnknownSource),
            Vec::new(),
        ));
    }
    if !graph.contains(destination) {
        debug!(%destination, "destination has no edges");
        return Ok(outcome(
            SearchStatus::NotFound(NotFoundReason::UnknownDestination),
            Vec::new(),
        ));
    }
    if !graph.is_reachable(source, destination) {
        debug!(%source, %destination, "destination is in another component");
        return Ok(outcome(
            SearchStatus::NotFound(NotFoundReason::Unreachable),
            Vec::new(),
        ));
    }

    let goal = GoalEstimate::new(network.estimator(), destination);
    let mut trail = Trail::default();
    let mut frontier = Frontier::default();
    let mut expanded: Vec<&str> = Vec::new();
    let mut pruned = 0usize;

    let root = trail.push(source, None);
    frontier.push(source, root, 0.0, strategy.initial_priority(&goal, source)?);

    while let Some(node) = frontier.pop() {
        if node.tip == destination {
            let route = Route {
                steps: trail.path(node.slot),
                total_distance: node.dist_from_source,
            };
            debug!(
                mode = %strategy.mode(),
                expansions = expanded.len(),
                candidates = trail.len(),
                pending = frontier.len(),
                pruned,
                distance = route.total_distance,
                "search reached destination"
            );
            return Ok(outcome(SearchStatus::Found(route), expanded));
        }

        if expanded.len() >= request.options.max_expansions {
            warn!(
                mode = %strategy.mode(),
                %source,
                %destination,
                limit = request.options.max_expansions,
                "search stopped at expansion limit"
            );
            return Ok(outcome(
                SearchStatus::NotFound(NotFoundReason::ExpansionLimit),
                expanded,
            ));
        }

        let predecessor = trail.predecessor(node.slot);
        for edge in graph.neighbours(node.tip) {
            let next = edge.target.as_str();
            let blocked = match request.options.cycle_guard {
                CycleGuard::Parent => predecessor == Some(next),
                CycleGuard::FullPath => trail.contains(node.slot, next),
            };
            if blocked {
                continue;
            }

            let priority = strategy.extended_priority(
                &goal,
                &Extension {
                    parent_distance: node.dist_from_source,
                    parent_priority: node.path_cost,
                    neighbour: next,
                    edge_distance: edge.distance,
                },
            )?;
            let slot = trail.push(next, Some(node.slot));
            frontier.push(next, slot, node.dist_from_source + edge.distance, priority);
        }

        expanded.push(node.tip);

        if strategy.prunes_dominated() {
            pruned += frontier.prune_dominated();
        }
    }

    debug!(
        mode = %strategy.mode(),
        expansions = expanded.len(),
        "frontier exhausted"
    );
    Ok(outcome(
        SearchStatus::NotFound(NotFoundReason::Unreachable),
        expanded,
    ))
}
