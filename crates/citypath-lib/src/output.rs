use std::fmt::Write;

use serde::Serialize;

use crate::search::{NotFoundReason, SearchMode, SearchOutcome, SearchStatus};

/// Line printed whenever a search yields no route.
pub const NO_PATH_MESSAGE: &str = "No path from source to destination";

/// Whether the search produced a route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Found,
    NotFound,
}

/// Structured representation of a search outcome that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchSummary {
    pub mode: SearchMode,
    pub source: String,
    pub destination: String,
    pub status: SummaryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NotFoundReason>,
    pub path: Vec<String>,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    pub expanded: Vec<String>,
    pub expanded_count: usize,
}

impl SearchSummary {
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        let (status, reason, hops, total_distance) = match &outcome.status {
            SearchStatus::Found(route) => (
                SummaryStatus::Found,
                None,
                route.hop_count(),
                Some(route.total_distance),
            ),
            SearchStatus::NotFound(reason) => (SummaryStatus::NotFound, Some(*reason), 0, None),
        };

        Self {
            mode: outcome.mode,
            source: outcome.source.clone(),
            destination: outcome.destination.clone(),
            status,
            reason,
            path: outcome.path().to_vec(),
            hops,
            total_distance,
            expanded: outcome.expanded.clone(),
            expanded_count: outcome.expanded.len(),
        }
    }

    /// Render the summary as console text.
    ///
    /// A found route prints the expansion trace and its count, then the path,
    /// its node count and the total distance. Anything else prints
    /// [`NO_PATH_MESSAGE`].
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let Some(distance) = self.total_distance else {
            let _ = writeln!(buffer, "{NO_PATH_MESSAGE}");
            return buffer;
        };

        let _ = writeln!(buffer, "Nodes expanded: {}", self.expanded.join(", "));
        let _ = writeln!(buffer, "Number of nodes expanded: {}", self.expanded_count);
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Path from source to destination: {}",
            self.path.join(", ")
        );
        let _ = writeln!(buffer, "Number of nodes in the path: {}", self.path.len());
        let _ = writeln!(buffer, "Total distance: {}", format_distance(distance));
        buffer
    }

    /// Render the summary as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.2}")
    }
}
