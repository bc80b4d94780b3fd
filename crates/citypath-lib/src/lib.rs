//! citypath library entry points.
//!
//! This crate loads a fixed road network (coordinates plus undirected weighted
//! edges) and runs best-first route searches over it. Three priority functions
//! are supported: A*, greedy best-first and uniform-cost. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod heuristic;
pub mod network;
pub mod output;
pub mod search;

pub use dataset::{
    default_data_dir, embedded_network, load_network, network_from_readers, resolve_network,
    DatasetSource, DATA_DIR_ENV,
};
pub use error::{Error, Result};
pub use geo::{Coordinate, GeoIndex, Location};
pub use graph::{Edge, Graph};
pub use heuristic::{straight_line_distance, HeuristicEstimator, MILES_PER_DEGREE};
pub use network::RoadNetwork;
pub use output::{SearchSummary, SummaryStatus, NO_PATH_MESSAGE};
pub use search::{
    find_path, search, search_with_strategy, select_strategy, CycleGuard, NotFoundReason,
    PriorityStrategy, Route, SearchMode, SearchOptions, SearchOutcome, SearchRequest,
    SearchStatus, UnknownSearchMode, DEFAULT_MAX_EXPANSIONS,
};
