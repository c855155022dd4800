#[cfg(test)]
mod tests {
    use crate::poi::{Poi, QualityGate, quality_score};
    use quickcheck::quickcheck;

    #[test]
    fn test_quality_score_values() {
        assert_eq!(quality_score(None, Some(5000)), 0.0);
        assert_eq!(quality_score(Some(f64::NAN), Some(10)), 0.0);

        // Perfect rating, 1000+ reviews
        assert!((quality_score(Some(5.0), Some(1000)) - 1.0).abs() < 1e-12);
        assert!((quality_score(Some(5.0), Some(50_000)) - 1.0).abs() < 1e-12);

        // 4.0 stars, 100 reviews: 0.7 * 0.8 + 0.3 * 2/3
        assert!((quality_score(Some(4.0), Some(100)) - 0.76).abs() < 1e-12);

        // Missing or zero reviews count as one review
        assert!((quality_score(Some(4.5), None) - 0.63).abs() < 1e-12);
        assert_eq!(quality_score(Some(4.5), Some(0)), quality_score(Some(4.5), None));
    }

    #[test]
    fn test_gate() {
        let gate = QualityGate::default();

        assert!(gate.passes(&Poi::new("a", "A").with_rating(4.5, 120)));
        assert!(!gate.passes(&Poi::new("b", "Low").with_rating(3.2, 500)));
        assert!(!gate.passes(&Poi::new("c", "Few reviews").with_rating(4.8, 3)));
        assert!(!gate.passes(&Poi::new("d", "Unrated")));

        // rating 3.5 with 10 reviews scores 0.59 and misses min_score
        assert!(!gate.passes(&Poi::new("e", "Edge").with_rating(3.5, 10)));
    }

    quickcheck! {
        fn prop_score_in_unit_interval(rating: Option<u8>, reviews: Option<u32>) -> bool {
            let rating = rating.map(|r| (r % 51) as f64 / 10.0);
            let s = quality_score(rating, reviews);
            (0.0..=1.0).contains(&s)
        }
    }
}
