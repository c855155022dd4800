#[cfg(test)]
mod tests {
    use crate::radius::heuristic::*;
    use crate::geo::{Bounds, GeoPoint};

    fn tokyo_bounds() -> Bounds {
        Bounds::new(GeoPoint::new(35.8986, 139.9199), GeoPoint::new(35.5014, 139.5629))
    }

    #[test]
    fn test_f_days() {
        assert!((f_days(1) - 1.25).abs() < 1e-9);
        assert!((f_days(3) - 1.6).abs() < 1e-9);
        assert!((f_days(5) - 1.8047).abs() < 1e-3);
        // Capped from a week on
        assert_eq!(f_days(7), 1.9);
        assert_eq!(f_days(30), 1.9);
    }

    #[test]
    fn test_duration_buckets() {
        assert_eq!(duration_bucket_km(0), 15.0);
        assert_eq!(duration_bucket_km(2), 15.0);
        assert_eq!(duration_bucket_km(3), 25.0);
        assert_eq!(duration_bucket_km(5), 25.0);
        assert_eq!(duration_bucket_km(6), 35.0);
        assert_eq!(duration_bucket_km(10), 35.0);
        assert_eq!(duration_bucket_km(11), 45.0);
    }

    #[test]
    fn test_bounds_radius_soft_max() {
        // ~22 km half-extent times 1.8 exceeds the 30 km soft maximum
        let r = bounds_radius_km(&tokyo_bounds(), 5, TravelMode::Transit, TripPace::Standard, &RadiusClamp::default());
        assert_eq!(r, 30.0);
    }

    #[test]
    fn test_bounds_radius_scaled_by_mode() {
        let clamp = RadiusClamp {
            soft_min_km: 0.0,
            soft_max_km: 1000.0,
            hard_max_km: 1000.0,
        };
        let transit = bounds_radius_km(&tokyo_bounds(), 1, TravelMode::Transit, TripPace::Standard, &clamp);
        let walk = bounds_radius_km(&tokyo_bounds(), 1, TravelMode::Walk, TripPace::Relaxed, &clamp);

        assert!((transit - 27.6).abs() < 0.1, "transit radius {}", transit);
        assert!((walk - transit * 0.6 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_order() {
        let clamp = RadiusClamp::default();
        assert_eq!(clamp.apply(0.5), 2.0);
        assert_eq!(clamp.apply(12.0), 12.0);
        assert_eq!(clamp.apply(80.0), 30.0);

        // Hard maximum wins over a soft minimum set above it
        let odd = RadiusClamp {
            soft_min_km: 60.0,
            soft_max_km: 70.0,
            hard_max_km: 50.0,
        };
        assert_eq!(odd.apply(10.0), 50.0);
    }

    #[test]
    fn test_mode_and_pace_defaults() {
        assert_eq!(TravelMode::default(), TravelMode::Transit);
        assert_eq!(TripPace::default(), TripPace::Standard);
        assert_eq!(TravelMode::Car.factor(), 1.3);
        assert_eq!(TripPace::Aggressive.factor(), 1.2);
    }
}
