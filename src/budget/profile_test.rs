#[cfg(test)]
mod tests {
    use crate::budget::*;
    use crate::geo::{Bounds, GeoPoint};
    use std::sync::Arc;

    fn calculator() -> ResultBudgetCalculator {
        ResultBudgetCalculator::new(Arc::new(KeywordProfiler::new()), BudgetConfig::default())
    }

    fn tokyo_bounds() -> Bounds {
        Bounds::new(GeoPoint::new(35.8986, 139.9199), GeoPoint::new(35.5014, 139.5629))
    }

    #[test]
    fn test_profile_priority() {
        let p = KeywordProfiler::new();
        assert_eq!(p.profile("Tokyo, Japan"), DestinationKind::MajorCity);
        assert_eq!(p.profile("Quebec City"), DestinationKind::MajorCity);
        assert_eq!(p.profile("Kyoto Temples"), DestinationKind::MajorCity);
        assert_eq!(p.profile("Temple Bay"), DestinationKind::HistoricSite);
        assert_eq!(p.profile("Greater Manchester"), DestinationKind::MetropolitanArea);
        assert_eq!(p.profile("Downtown Springfield"), DestinationKind::TouristDestination);
        assert_eq!(p.profile("Grand Canyon"), DestinationKind::NaturalArea);
        assert_eq!(p.profile("Maui Island"), DestinationKind::IslandResort);
        assert_eq!(p.profile("Hallstatt Village"), DestinationKind::SmallTown);
    }

    #[test]
    fn test_profile_whole_words_only() {
        let p = KeywordProfiler::new();
        // "art" must not match inside "Martha"
        assert_eq!(p.profile("Martha's Vineyard"), DestinationKind::Default);
        assert_eq!(p.profile("Newark"), DestinationKind::Default);
        assert_eq!(p.profile(""), DestinationKind::Default);
        assert_eq!(p.profile("  ,, "), DestinationKind::Default);
    }

    #[test]
    fn test_search_categories() {
        let base = DestinationKind::Default.search_categories();
        assert_eq!(base, vec!["tourist_attraction", "restaurant", "cafe"]);

        let cultural = DestinationKind::CulturalCenter.search_categories();
        assert!(cultural.contains(&"museum"));
        assert!(cultural.contains(&"art_gallery"));

        let island = DestinationKind::IslandResort.search_categories();
        assert!(island.contains(&"beach"));
        assert_eq!(island.len(), 6);
    }

    #[test]
    fn test_budget_values() {
        let c = calculator();
        assert_eq!(c.max_results_per_category(5, "Tokyo, Japan", None), 75);
        assert_eq!(c.max_results_per_category(2, "Grand Canyon", None), 20);
        assert_eq!(c.max_results_per_category(3, "Maui Island", None), 24);
    }

    #[test]
    fn test_budget_area_factor() {
        let c = calculator();
        // ~1400 km2 viewport: 75 * 1.05 rounded up
        assert_eq!(c.max_results_per_category(5, "Tokyo, Japan", Some(&tokyo_bounds())), 79);

        let tiny = Bounds::new(GeoPoint::new(35.02, 135.80), GeoPoint::new(34.98, 135.74));
        assert_eq!(area_factor(Some(&tiny)), 0.9);
        assert_eq!(area_factor(None), 1.0);
    }

    #[test]
    fn test_budget_clamped() {
        let c = calculator();
        assert_eq!(c.max_results_per_category(0, "Tokyo", None), 10);
        assert_eq!(c.max_results_per_category(1, "Hallstatt Village", None), 10);
        assert_eq!(c.max_results_per_category(30, "Tokyo", None), 200);
    }

    #[test]
    fn test_budget_custom_profiler() {
        struct Always(DestinationKind);

        impl DestinationProfiler for Always {
            fn profile(&self, _destination: &str) -> DestinationKind {
                self.0
            }
        }

        let config = BudgetConfig {
            base_per_day: 20,
            min_results: 5,
            max_results: 500,
        };
        let c = ResultBudgetCalculator::new(Arc::new(Always(DestinationKind::CulturalCenter)), config);
        assert_eq!(c.max_results_per_category(4, "anywhere", None), 112);
    }
}
