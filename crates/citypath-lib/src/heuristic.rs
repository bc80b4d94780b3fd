//! Straight-line distance estimate between two named locations.
//!
//! The estimate treats one degree of latitude as [`MILES_PER_DEGREE`] miles and
//! shrinks longitude by the cosine of the mean latitude. It is close to, but not
//! formally bounded by, the true road distance.

use std::f64::consts::PI;

use crate::error::Result;
use crate::geo::{Coordinate, GeoIndex};

/// Approximate miles spanned by one degree of latitude.
pub const MILES_PER_DEGREE: f64 = 69.5;

/// Estimates remaining cost using coordinates from a [`GeoIndex`].
#[derive(Debug, Clone, Copy)]
pub struct HeuristicEstimator<'a> {
    geo: &'a GeoIndex,
}

impl<'a> HeuristicEstimator<'a> {
    pub fn new(geo: &'a GeoIndex) -> Self {
        Self { geo }
    }

    /// Estimated distance between two named locations.
    ///
    /// Fails with [`crate::Error::UnknownLocation`] if either name lacks a
    /// coordinate.
    pub fn estimate(&self, from: &str, to: &str) -> Result<f64> {
        let a = self.geo.lookup(from)?;
        let b = self.geo.lookup(to)?;
        Ok(straight_line_distance(a, b))
    }
}

/// Distance between two coordinates on the flattened-globe approximation.
pub fn straight_line_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = MILES_PER_DEGREE * (a.latitude - b.latitude);
    let dy = MILES_PER_DEGREE
        * ((a.latitude + b.latitude) / 360.0 * PI).cos()
        * (a.longitude - b.longitude);
    (dx * dx + dy * dy).sqrt().abs()
}
