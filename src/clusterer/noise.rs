//! Reassignment of DBSCAN noise
//!
//! Noise close to an existing cluster joins it. While there are fewer
//! clusters than requested, the remaining noise point farthest from every
//! cluster is promoted to a cluster of its own, and leftover noise near a
//! promoted seed joins that seed. Whatever is left is dropped.

use crate::geo::{GeoPoint, centroid, haversine_km};

/// Noise points within this multiple of eps from a centroid are attached
pub const ATTACH_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseOutcome {
    /// Member indices per cluster, ascending; promoted seeds come last
    pub clusters: Vec<Vec<usize>>,
    pub attached: usize,
    pub promoted: usize,
    /// Noise indices left out of every cluster, ascending
    pub dropped: Vec<usize>,
}

fn centroid_of(points: &[GeoPoint], members: &[usize]) -> Option<GeoPoint> {
    let pts: Vec<GeoPoint> = members.iter().map(|&i| points[i]).collect();
    centroid(&pts)
}

/// Index and distance of the nearest of `targets`, first one on ties
fn nearest(p: &GeoPoint, targets: &[GeoPoint]) -> Option<(usize, f64)> {
    targets
        .iter()
        .enumerate()
        .map(|(k, c)| (k, haversine_km(p, c)))
        .fold(None, |best, (k, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((k, d)),
        })
}

pub fn reassign_noise(
    points: &[GeoPoint],
    clusters: Vec<Vec<usize>>,
    noise: Vec<usize>,
    eps_km: f64,
    target: usize,
) -> NoiseOutcome {
    let attach_km = ATTACH_FACTOR * eps_km;
    let mut clusters: Vec<Vec<usize>> = clusters.into_iter().filter(|c| !c.is_empty()).collect();
    let mut centroids: Vec<GeoPoint> = clusters.iter().filter_map(|c| centroid_of(points, c)).collect();

    // Decide every attachment against the DBSCAN centroids, then apply
    let mut remaining = Vec::new();
    let mut attachments = Vec::new();
    for i in noise {
        match nearest(&points[i], &centroids) {
            Some((k, d)) if d <= attach_km => attachments.push((k, i)),
            _ => remaining.push(i),
        }
    }
    let attached = attachments.len();
    for (k, i) in attachments {
        clusters[k].push(i);
    }

    // Promote the most isolated points while short of the target
    let first_seed = clusters.len();
    let mut promoted = 0;
    while clusters.len() < target && !remaining.is_empty() {
        let pos = remaining
            .iter()
            .enumerate()
            .map(|(pos, &i)| (pos, nearest(&points[i], &centroids).map_or(f64::INFINITY, |(_, d)| d)))
            .fold(None, |best: Option<(usize, f64)>, (pos, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((pos, d)),
            })
            .map_or(0, |(pos, _)| pos);

        let seed = remaining.remove(pos);
        clusters.push(vec![seed]);
        centroids.push(points[seed]);
        promoted += 1;
    }

    // Leftovers near a promoted seed join it
    let seeds: Vec<GeoPoint> = clusters[first_seed..].iter().map(|c| points[c[0]]).collect();
    let mut dropped = Vec::new();
    let mut late = Vec::new();
    for i in remaining {
        match nearest(&points[i], &seeds) {
            Some((k, d)) if d <= attach_km => late.push((first_seed + k, i)),
            _ => dropped.push(i),
        }
    }
    let attached = attached + late.len();
    for (k, i) in late {
        clusters[k].push(i);
    }

    for c in &mut clusters {
        c.sort_unstable();
    }
    dropped.sort_unstable();

    NoiseOutcome {
        clusters,
        attached,
        promoted,
        dropped,
    }
}
