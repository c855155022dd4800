//! Anchor selection

use super::config::AnchorMethod;
use crate::geo::{GeoPoint, centroid, haversine_km};
use crate::poi::Poi;

/// Position of the anchor within `members`, `None` for an empty cluster
///
/// Ties go to the earliest member, so the choice is deterministic for a
/// given input order.
pub fn select_anchor(members: &[Poi], method: AnchorMethod) -> Option<usize> {
    match method {
        AnchorMethod::Centroid => nearest_to_centroid(members),
        AnchorMethod::HighestRated => first_max_by(members, |p| p.rating.filter(|r| r.is_finite()).unwrap_or(0.0)),
        AnchorMethod::MostPopular => first_max_by(members, |p| p.review_count.unwrap_or(0) as f64),
    }
}

fn nearest_to_centroid(members: &[Poi]) -> Option<usize> {
    let points: Vec<(usize, GeoPoint)> = members
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.coordinates().map(|c| (i, c)))
        .collect();
    let coords: Vec<GeoPoint> = points.iter().map(|(_, c)| *c).collect();
    let Some(center) = centroid(&coords) else {
        return if members.is_empty() { None } else { Some(0) };
    };

    let mut best: Option<(usize, f64)> = None;
    for (i, c) in points {
        let d = haversine_km(&center, &c);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

fn first_max_by(members: &[Poi], key: impl Fn(&Poi) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in members.iter().enumerate() {
        let k = key(p);
        if best.is_none_or(|(_, bk)| k > bk) {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}
