//! Priority strategies implementing the Strategy pattern.
//!
//! Each [`SearchMode`] maps to a [`PriorityStrategy`] that decides the frontier
//! priority of a candidate path. The search skeleton in the parent module is
//! shared by all of them.

use crate::error::Result;
use crate::heuristic::HeuristicEstimator;

use super::SearchMode;

/// Heuristic estimate bound to the destination of one search.
#[derive(Debug, Clone, Copy)]
pub struct GoalEstimate<'a> {
    estimator: HeuristicEstimator<'a>,
    destination: &'a str,
}

impl<'a> GoalEstimate<'a> {
    pub fn new(estimator: HeuristicEstimator<'a>, destination: &'a str) -> Self {
        Self {
            estimator,
            destination,
        }
    }

    /// Estimated remaining distance from `from` to the destination.
    pub fn remaining(&self, from: &str) -> Result<f64> {
        self.estimator.estimate(from, self.destination)
    }
}

/// A candidate path about to be extended by one edge.
#[derive(Debug, Clone, Copy)]
pub struct Extension<'a> {
    /// Cumulative edge distance of the path being extended.
    pub parent_distance: f64,
    /// Frontier priority of the path being extended.
    pub parent_priority: f64,
    /// Location appended to the path.
    pub neighbour: &'a str,
    /// Weight of the edge leading to `neighbour`.
    pub edge_distance: f64,
}

/// Trait for search priority strategies.
pub trait PriorityStrategy: Send + Sync {
    /// The mode this strategy implements.
    fn mode(&self) -> SearchMode;

    /// Priority of the single-node path holding only the source.
    fn initial_priority(&self, goal: &GoalEstimate<'_>, source: &str) -> Result<f64>;

    /// Priority of a path after appending `extension.neighbour`.
    fn extended_priority(&self, goal: &GoalEstimate<'_>, extension: &Extension<'_>)
        -> Result<f64>;

    /// Whether dominated entries sharing a tip are dropped after each expansion.
    fn prunes_dominated(&self) -> bool {
        true
    }
}

/// Distance so far plus estimated remaining distance.
#[derive(Debug, Clone, Default)]
pub struct AStarStrategy;

impl PriorityStrategy for AStarStrategy {
    fn mode(&self) -> SearchMode {
        SearchMode::Astar
    }

    fn initial_priority(&self, goal: &GoalEstimate<'_>, source: &str) -> Result<f64> {
        goal.remaining(source)
    }

    fn extended_priority(
        &self,
        goal: &GoalEstimate<'_>,
        extension: &Extension<'_>,
    ) -> Result<f64> {
        let distance = extension.parent_distance + extension.edge_distance;
        Ok(distance + goal.remaining(extension.neighbour)?)
    }
}

/// Estimated remaining distance only.
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy;

impl PriorityStrategy for GreedyStrategy {
    fn mode(&self) -> SearchMode {
        SearchMode::Greedy
    }

    fn initial_priority(&self, goal: &GoalEstimate<'_>, source: &str) -> Result<f64> {
        goal.remaining(source)
    }

    fn extended_priority(
        &self,
        goal: &GoalEstimate<'_>,
        extension: &Extension<'_>,
    ) -> Result<f64> {
        goal.remaining(extension.neighbour)
    }

    fn prunes_dominated(&self) -> bool {
        false
    }
}

/// Accumulated path cost only.
#[derive(Debug, Clone, Default)]
pub struct UniformStrategy;

impl PriorityStrategy for UniformStrategy {
    fn mode(&self) -> SearchMode {
        SearchMode::Uniform
    }

    fn initial_priority(&self, _goal: &GoalEstimate<'_>, _source: &str) -> Result<f64> {
        Ok(0.0)
    }

    fn extended_priority(
        &self,
        _goal: &GoalEstimate<'_>,
        extension: &Extension<'_>,
    ) -> Result<f64> {
        Ok(extension.parent_priority + extension.edge_distance)
    }
}

/// Select the strategy for a given mode.
pub fn select_strategy(mode: SearchMode) -> Box<dyn PriorityStrategy> {
    match mode {
        SearchMode::Astar => Box::new(AStarStrategy),
        SearchMode::Greedy => Box::new(GreedyStrategy),
        SearchMode::Uniform => Box::new(UniformStrategy),
    }
}
