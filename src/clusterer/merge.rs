//! Optional merge step for runs that end with more clusters than requested
//!
//! The smallest cluster (lowest index on ties) is folded into the cluster
//! whose centroid is nearest to its own, until at most `target` remain.

use crate::geo::{GeoPoint, centroid, haversine_km};

fn centroid_of(points: &[GeoPoint], members: &[usize]) -> GeoPoint {
    let pts: Vec<GeoPoint> = members.iter().map(|&i| points[i]).collect();
    centroid(&pts).unwrap_or(points[members[0]])
}

/// Merges clusters down to `target`; returns how many merges happened
///
/// Empty clusters are discarded first. Members stay ascending and surviving
/// clusters keep their relative order.
pub fn merge_to_target(points: &[GeoPoint], clusters: &mut Vec<Vec<usize>>, target: usize) -> usize {
    let target = target.max(1);
    clusters.retain(|c| !c.is_empty());
    let mut centroids: Vec<GeoPoint> = clusters.iter().map(|c| centroid_of(points, c)).collect();

    let mut merges = 0;
    while clusters.len() > target {
        let Some(small) = (0..clusters.len()).min_by_key(|&k| (clusters[k].len(), k)) else {
            break;
        };

        let from = centroids[small];
        let into = centroids
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != small)
            .map(|(k, c)| (k, haversine_km(&from, c)))
            .fold(None, |best: Option<(usize, f64)>, (k, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((k, d)),
            });
        let Some((into, _)) = into else {
            break;
        };

        let moved = clusters.remove(small);
        centroids.remove(small);
        let into = if into > small { into - 1 } else { into };

        clusters[into].extend(moved);
        clusters[into].sort_unstable();
        centroids[into] = centroid_of(points, &clusters[into]);
        merges += 1;
    }
    merges
}
