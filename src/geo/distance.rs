use super::point::{Bounds, GeoPoint};

/// Earth radius in meters
pub const EARTH_R_M: f64 = 6_371_000.0;

/// Earth radius in kilometers
pub const EARTH_R_KM: f64 = EARTH_R_M / 1000.0;

/// Calculates great-circle (haversine) distance between two points
///
/// # Returns
///
/// Distance in meters
pub fn haversine_meters(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlat = (p2.lat - p1.lat).to_radians();
    let dlon = (p2.lon - p1.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push `a` marginally past 1 for antipodal points
    2.0 * EARTH_R_M * a.sqrt().min(1.0).asin()
}

/// Same as [`haversine_meters`], in kilometers
pub fn haversine_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    haversine_meters(p1, p2) / 1000.0
}

/// Calculates the base search radius implied by a geocode viewport
///
/// Extents are measured with haversine through the box center: north-south
/// along the center longitude, east-west along the center latitude.
///
/// # Returns
///
/// `(r0_m, north_south_m, east_west_m)` where `r0_m` is half the larger extent
pub fn bounding_box_radius(bounds: &Bounds) -> (f64, f64, f64) {
    let ne = bounds.northeast;
    let sw = bounds.southwest;
    let center = bounds.center();

    let ns_m = haversine_meters(&GeoPoint::new(ne.lat, center.lon), &GeoPoint::new(sw.lat, center.lon));
    let ew_m = haversine_meters(&GeoPoint::new(center.lat, ne.lon), &GeoPoint::new(center.lat, sw.lon));

    (0.5 * ns_m.max(ew_m), ns_m, ew_m)
}

/// Equirectangular projection of (lat, lon) onto a local plane in kilometers
///
/// The longitude scale is taken at the latitude closest to the equator among
/// the projected points, so projected distances never underestimate the
/// haversine distance between two of them (up to curvature, see
/// [`LocalProjection::SLACK`]). This makes the plane safe for pruning
/// neighbour searches; membership is still decided with haversine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    lon_scale: f64,
}

impl LocalProjection {
    /// Relative headroom added to search radii in projected space
    pub const SLACK: f64 = 0.01;

    /// Builds a projection suitable for every point in `points`
    pub fn fit(points: &[GeoPoint]) -> Self {
        let ref_lat = points
            .iter()
            .map(|p| p.lat.abs())
            .fold(f64::INFINITY, f64::min);
        let ref_lat = if ref_lat.is_finite() { ref_lat } else { 0.0 };

        Self {
            lon_scale: ref_lat.to_radians().cos(),
        }
    }

    /// Projects a point to `[x, y]` kilometers
    pub fn project(&self, p: &GeoPoint) -> [f64; 2] {
        [
            p.lon.to_radians() * self.lon_scale * EARTH_R_KM,
            p.lat.to_radians() * EARTH_R_KM,
        ]
    }

    /// Radius to use in projected space for a haversine radius of `km`
    pub fn search_radius(&self, km: f64) -> f64 {
        km * (1.0 + Self::SLACK)
    }
}
