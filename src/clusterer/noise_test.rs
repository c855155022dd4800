#[cfg(test)]
mod tests {
    use crate::clusterer::noise::reassign_noise;
    use crate::geo::GeoPoint;

    fn equator(lon: f64) -> GeoPoint {
        GeoPoint::new(0.0, lon)
    }

    fn core() -> Vec<GeoPoint> {
        vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001), GeoPoint::new(0.001, 0.0)]
    }

    #[test]
    fn test_near_noise_attached_far_noise_dropped() {
        let mut points = core();
        points.push(equator(0.02)); // ~2.2 km from the centroid
        points.push(equator(0.5)); // ~55 km

        let out = reassign_noise(&points, vec![vec![0, 1, 2]], vec![3, 4], 1.5, 1);

        assert_eq!(out.clusters, vec![vec![0, 1, 2, 3]]);
        assert_eq!(out.attached, 1);
        assert_eq!(out.promoted, 0);
        assert_eq!(out.dropped, vec![4]);
    }

    #[test]
    fn test_promotion_farthest_first() {
        let mut points = core();
        points.push(equator(0.1)); // 3: ~11 km
        points.push(equator(0.3)); // 4: ~33 km
        points.push(equator(0.31)); // 5: ~34 km
        points.push(equator(-0.2)); // 6: ~22 km

        let out = reassign_noise(&points, vec![vec![0, 1, 2]], vec![3, 4, 5, 6], 1.0, 3);

        // 5 is promoted first, then 6 (22 km from everything); 4 sits 1.1 km
        // from seed 5 and joins it, 3 is too far from both seeds
        assert_eq!(out.clusters, vec![vec![0, 1, 2], vec![4, 5], vec![6]]);
        assert_eq!(out.promoted, 2);
        assert_eq!(out.attached, 1);
        assert_eq!(out.dropped, vec![3]);
    }

    #[test]
    fn test_promotion_without_clusters() {
        let points = vec![equator(0.0), equator(0.1), equator(1.0)];

        let out = reassign_noise(&points, Vec::new(), vec![0, 1, 2], 1.0, 2);

        assert_eq!(out.clusters, vec![vec![0], vec![2]]);
        assert_eq!(out.promoted, 2);
        assert_eq!(out.dropped, vec![1]);
    }

    #[test]
    fn test_attachment_uses_original_centroids() {
        // Both noise points are within reach of the original centroid; the
        // first attachment must not pull the centroid away from the second
        let mut points = core();
        points.push(equator(0.025));
        points.push(equator(-0.025));

        let forward = reassign_noise(&points, vec![vec![0, 1, 2]], vec![3, 4], 1.5, 1);
        let backward = reassign_noise(&points, vec![vec![0, 1, 2]], vec![4, 3], 1.5, 1);

        assert_eq!(forward.clusters, vec![vec![0, 1, 2, 3, 4]]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_no_noise() {
        let out = reassign_noise(&core(), vec![vec![0, 1, 2]], Vec::new(), 1.0, 5);
        assert_eq!(out.clusters, vec![vec![0, 1, 2]]);
        assert_eq!(out.promoted, 0);
        assert!(out.dropped.is_empty());
    }
}
