use super::kdtree::KDTree;
use crate::geo::{GeoPoint, LocalProjection, haversine_km};
use bitvec::prelude::*;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)

/// Result of a DBSCAN run
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanResult {
    /// Cluster label per input point, `None` for noise
    pub labels: Vec<Option<usize>>,
    /// Member indices per cluster, ascending
    pub clusters: Vec<Vec<usize>>,
    /// Indices of points that ended up in no cluster, ascending
    pub noise: Vec<usize>,
}

impl DbscanResult {
    /// Number of points that landed in some cluster
    pub fn clustered(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }
}

/// Haversine region queries backed by a 2-d tree over projected coordinates
pub struct SpatialIndex<'a> {
    points: &'a [GeoPoint],
    projection: LocalProjection,
    tree: KDTree,
}

impl<'a> SpatialIndex<'a> {
    pub fn new(points: &'a [GeoPoint]) -> Self {
        let projection = LocalProjection::fit(points);
        let tree = KDTree::new(points.iter().map(|p| projection.project(p)).collect());
        Self {
            points,
            projection,
            tree,
        }
    }

    /// Indices of all points within `eps_km` (haversine) of point `i`, including `i`
    ///
    /// `buf` is scratch space reused across calls.
    pub fn region_query(&self, i: usize, eps_km: f64, buf: &mut Vec<usize>) -> Vec<usize> {
        buf.clear();
        let center = &self.points[i];
        self.tree
            .in_range(self.projection.project(center), self.projection.search_radius(eps_km), buf);

        buf.iter()
            .copied()
            .filter(|&j| haversine_km(center, &self.points[j]) <= eps_km)
            .collect()
    }
}

/// Clusters incoming points using DBSCAN algorithm
///
/// # Arguments
///
/// * `points` - Points to cluster; all must be valid coordinates
/// * `eps_km` - Clustering radius in kilometers (haversine)
/// * `min_points` - Minimum number of points in eps-neighbourhood, the point itself included
pub fn dbscan(points: &[GeoPoint], eps_km: f64, min_points: usize) -> DbscanResult {
    let n = points.len();
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut visited = bitvec![0; n];
    let mut neighbor_unique = bitvec![0; n];
    let index = SpatialIndex::new(points);
    let mut buf = Vec::new();

    for i in 0..n {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let mut neighbor_pts = index.region_query(i, eps_km, &mut buf);
        if neighbor_pts.len() < min_points {
            // Stays unlabeled unless a later cluster reaches it as a border point
            continue;
        }

        let c = clusters.len();
        let mut cluster = vec![i];
        labels[i] = Some(c);

        neighbor_unique.fill(false);
        for &j in &neighbor_pts {
            neighbor_unique.set(j, true);
        }

        // neighbor_pts grows while it is being walked
        let mut j = 0;
        while j < neighbor_pts.len() {
            let k = neighbor_pts[j];
            if !visited[k] {
                visited.set(k, true);
                let more = index.region_query(k, eps_km, &mut buf);
                if more.len() >= min_points {
                    for p in more {
                        if !neighbor_unique[p] {
                            neighbor_unique.set(p, true);
                            neighbor_pts.push(p);
                        }
                    }
                }
            }

            if labels[k].is_none() {
                labels[k] = Some(c);
                cluster.push(k);
            }
            j += 1;
        }

        cluster.sort_unstable();
        clusters.push(cluster);
    }

    let noise = (0..n).filter(|&i| labels[i].is_none()).collect();

    DbscanResult {
        labels,
        clusters,
        noise,
    }
}
