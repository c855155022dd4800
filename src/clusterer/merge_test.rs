#[cfg(test)]
mod tests {
    use crate::clusterer::merge::merge_to_target;
    use crate::geo::GeoPoint;
    use quickcheck::quickcheck;

    fn equator(lon: f64) -> GeoPoint {
        GeoPoint::new(0.0, lon)
    }

    fn points() -> Vec<GeoPoint> {
        vec![
            equator(0.0),
            equator(0.001),
            equator(0.002),
            equator(0.1),
            equator(1.0),
            equator(1.001),
            equator(1.05),
        ]
    }

    #[test]
    fn test_smallest_joins_nearest() {
        let mut clusters = vec![vec![0, 1, 2], vec![3], vec![4, 5], vec![6]];

        let merges = merge_to_target(&points(), &mut clusters, 2);

        assert_eq!(merges, 2);
        assert_eq!(clusters, vec![vec![0, 1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_at_or_below_target_untouched() {
        let mut clusters = vec![vec![0, 1, 2], vec![3], vec![4, 5, 6]];

        assert_eq!(merge_to_target(&points(), &mut clusters, 3), 0);
        assert_eq!(merge_to_target(&points(), &mut clusters, 8), 0);
        assert_eq!(clusters, vec![vec![0, 1, 2], vec![3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_target_one_and_empty_clusters() {
        let mut clusters = vec![vec![4, 6], vec![], vec![0, 3], vec![1, 2, 5]];

        let merges = merge_to_target(&points(), &mut clusters, 0);

        assert_eq!(merges, 2);
        assert_eq!(clusters, vec![(0..7).collect::<Vec<_>>()]);
    }

    quickcheck! {
        fn prop_merge_keeps_members(assign: Vec<u8>, target: u8) -> bool {
            let points: Vec<GeoPoint> = (0..assign.len())
                .map(|i| GeoPoint::new((i % 7) as f64 * 0.01, (i % 11) as f64 * 0.01))
                .collect();
            let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); 10];
            for (i, &a) in assign.iter().enumerate() {
                clusters[a as usize % 10].push(i);
            }
            let non_empty = clusters.iter().filter(|c| !c.is_empty()).count();
            let target = 1 + target as usize % 6;

            let merges = merge_to_target(&points, &mut clusters, target);

            let mut all: Vec<usize> = clusters.iter().flatten().copied().collect();
            all.sort_unstable();
            all == (0..assign.len()).collect::<Vec<_>>()
                && clusters.len() == non_empty.min(target)
                && merges == non_empty - clusters.len()
                && clusters.iter().all(|c| !c.is_empty() && c.windows(2).all(|w| w[0] < w[1]))
        }
    }
}
