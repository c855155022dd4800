//! Package geo implements distance, centroid and bounding-box primitives on (lat, lon)
//!
//! Accuracy target is city scale: no special handling of the poles or the antimeridian.
pub mod distance;
pub mod point;


pub use distance::{EARTH_R_KM, EARTH_R_M, LocalProjection, bounding_box_radius, haversine_km, haversine_meters};
pub use point::{Bounds, GeoPoint, centroid, centroid_and_bounds};
