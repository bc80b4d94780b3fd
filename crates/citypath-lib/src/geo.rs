use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Geographic coordinate in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Named location with its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

/// Maps location names to coordinates.
#[derive(Debug, Clone, Default)]
pub struct GeoIndex {
    locations: HashMap<String, Coordinate>,
}

impl GeoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, replacing any coordinate previously stored under
    /// the same name.
    pub fn add_location(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        let name = name.into();
        if self
            .locations
            .insert(name.clone(), Coordinate::new(latitude, longitude))
            .is_some()
        {
            tracing::debug!(location = %name, "overwrote coordinate for existing location");
        }
    }

    /// Coordinate for `name`, or [`Error::UnknownLocation`] when absent.
    pub fn lookup(&self, name: &str) -> Result<Coordinate> {
        self.locations
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.suggestions(name, 3),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All registered names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every location as an owned record, sorted by name.
    pub fn locations(&self) -> Vec<Location> {
        self.names()
            .into_iter()
            .map(|name| Location {
                name: name.to_string(),
                coordinate: self.locations[name],
            })
            .collect()
    }

    /// Known names that closely resemble `name`, best match first.
    pub fn suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
