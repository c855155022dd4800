//! Package geo implements distance, centroid and bounding-box primitives on (lat, lon)

use serde::{Deserialize, Serialize};

use super::distance::bounding_box_radius;

/// GeoPoint represents a geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, positive north
    pub lat: f64,
    /// Longitude, positive east
    pub lon: f64,
}

/// Bounds is a geocode viewport given by its north-east and south-west corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checks that both coordinates are finite and inside their valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl Bounds {
    pub const fn new(northeast: GeoPoint, southwest: GeoPoint) -> Self {
        Self { northeast, southwest }
    }

    /// Center of the box (mean of the corners)
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.northeast.lat + self.southwest.lat) / 2.0,
            (self.northeast.lon + self.southwest.lon) / 2.0,
        )
    }

    /// Approximate area in square kilometers from the haversine extents
    pub fn area_km2(&self) -> f64 {
        let (_, ns_m, ew_m) = bounding_box_radius(self);
        (ns_m / 1000.0) * (ew_m / 1000.0)
    }
}

/// Arithmetic mean of latitudes and longitudes
///
/// This is a city-scale approximation, not a geodesic centroid.
/// Returns `None` for an empty slice.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let (lat, lon) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));

    Some(GeoPoint::new(lat / n, lon / n))
}

/// Calculates center and bounds of a set of points
///
/// Returns `(center, bounds)` where `bounds.southwest` holds the minimum
/// latitude/longitude and `bounds.northeast` the maximum, or `None` when
/// `points` is empty.
pub fn centroid_and_bounds(points: &[GeoPoint]) -> Option<(GeoPoint, Bounds)> {
    let center = centroid(points)?;

    let mut min = GeoPoint::new(90.0, 180.0);
    let mut max = GeoPoint::new(-90.0, -180.0);

    for p in points {
        min.lat = min.lat.min(p.lat);
        min.lon = min.lon.min(p.lon);
        max.lat = max.lat.max(p.lat);
        max.lon = max.lon.max(p.lon);
    }

    Some((center, Bounds::new(max, min)))
}
