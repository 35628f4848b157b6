//! Geographic primitives and bounds math.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A point on the map, longitude first as the map surface expects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees east of the prime meridian.
    pub longitude: f64,
    /// Degrees north of the equator.
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from a longitude/latitude pair.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// An axis-aligned region given by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum longitude and latitude.
    pub southwest: Coordinate,
    /// Maximum longitude and latitude.
    pub northeast: Coordinate,
}

impl Bounds {
    /// Returns the midpoint of the region.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            f64::midpoint(self.southwest.longitude, self.northeast.longitude),
            f64::midpoint(self.southwest.latitude, self.northeast.latitude),
        )
    }

    /// Returns `true` if the region has zero area, i.e. it collapses to a
    /// line or a single point.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.southwest.longitude == self.northeast.longitude
            || self.southwest.latitude == self.northeast.latitude
    }

    fn extend(mut self, point: Coordinate) -> Self {
        self.southwest.longitude = self.southwest.longitude.min(point.longitude);
        self.southwest.latitude = self.southwest.latitude.min(point.latitude);
        self.northeast.longitude = self.northeast.longitude.max(point.longitude);
        self.northeast.latitude = self.northeast.latitude.max(point.latitude);
        self
    }
}

/// Computes the smallest bounds covering every point.
///
/// No antimeridian wrapping is attempted: longitudes are treated as a flat
/// axis, like the map surface's own bounds type.
///
/// # Errors
///
/// Returns `DomainError::InsufficientData` if `points` is empty.
pub fn compute_bounds(points: &[Coordinate]) -> Result<Bounds, DomainError> {
    let (first, rest) = points.split_first().ok_or(DomainError::InsufficientData)?;
    let seed = Bounds {
        southwest: *first,
        northeast: *first,
    };
    Ok(rest.iter().fold(seed, |bounds, point| bounds.extend(*point)))
}
