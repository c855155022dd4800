#[cfg(test)]
mod tests {
    use crate::cluster::KDTree;
    use quickcheck::quickcheck;

    fn brute_force(coords: &[[f64; 2]], pt: [f64; 2], r: f64) -> Vec<usize> {
        coords
            .iter()
            .enumerate()
            .filter(|(_, c)| (c[0] - pt[0]).powi(2) + (c[1] - pt[1]).powi(2) <= r * r)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_range_query_matches_brute_force() {
        let coords = vec![
            [0.0, 0.0],
            [0.5, 0.1],
            [1.0, 1.0],
            [1.0, 1.0],
            [3.0, -2.0],
            [-1.5, 0.2],
            [0.2, 0.4],
        ];
        let tree = KDTree::new(coords.clone());

        for pt in &coords {
            for r in [0.0, 0.3, 0.8, 2.0, 10.0] {
                let mut found = Vec::new();
                tree.in_range(*pt, r, &mut found);
                found.sort_unstable();
                assert_eq!(found, brute_force(&coords, *pt, r), "pt={:?} r={}", pt, r);
            }
        }
    }

    #[test]
    fn test_negative_radius_and_empty_tree() {
        let tree = KDTree::new(vec![[0.0, 0.0]]);
        let mut found = Vec::new();
        tree.in_range([0.0, 0.0], -1.0, &mut found);
        assert!(found.is_empty());

        let empty = KDTree::new(Vec::new());
        assert!(empty.is_empty());
        empty.in_range([0.0, 0.0], 5.0, &mut found);
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_coordinates() {
        let coords: Vec<[f64; 2]> = (0..1000).map(|i| [(i % 10) as f64, (i * 7 % 13) as f64]).collect();
        let tree = KDTree::new(coords.clone());
        assert_eq!(tree.len(), 1000);

        let mut found = Vec::new();
        tree.in_range([3.0, 5.0], 0.0, &mut found);
        let expected = coords.iter().filter(|c| **c == [3.0, 5.0]).count();
        assert!(expected > 0);
        assert_eq!(found.len(), expected);
    }

    quickcheck! {
        fn prop_range_query_matches_brute_force(raw: Vec<(i16, i16)>, probe: (i16, i16), r: u8) -> bool {
            let coords: Vec<[f64; 2]> = raw.iter().map(|&(x, y)| [x as f64 / 10.0, y as f64 / 10.0]).collect();
            let pt = [probe.0 as f64 / 10.0, probe.1 as f64 / 10.0];
            let r = r as f64 / 4.0;

            let tree = KDTree::new(coords.clone());
            let mut found = Vec::new();
            tree.in_range(pt, r, &mut found);
            found.sort_unstable();
            found == brute_force(&coords, pt, r)
        }
    }
}
