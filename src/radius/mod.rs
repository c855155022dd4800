//! Package radius decides how large an area to search around a destination
pub mod classifier;
pub mod heuristic;
pub mod resolver;

#[cfg(test)]
mod heuristic_test;

pub use classifier::{ClassificationRequest, Classifier, DestinationCharacteristics, MAX_RADIUS_KM, MIN_RADIUS_KM};
pub use heuristic::{RadiusClamp, TravelMode, TripPace, bounds_radius_km, duration_bucket_km, f_days};
pub use resolver::{RadiusResolution, RadiusSource, ResolverConfig, SearchRadiusResolver};
