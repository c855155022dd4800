#[cfg(test)]
mod tests {
    use crate::clusterer::{AnchorMethod, select_anchor};
    use crate::poi::Poi;

    fn poi(id: &str, lat: f64, lon: f64, rating: f64, reviews: u32) -> Poi {
        Poi::new(id, id).with_location(lat, lon).with_rating(rating, reviews)
    }

    #[test]
    fn test_centroid_anchor() {
        let members = vec![
            poi("west", 41.9000, 12.4800, 4.9, 10),
            poi("middle", 41.9000, 12.4900, 3.0, 20),
            poi("east", 41.9000, 12.5000, 4.0, 5000),
        ];
        assert_eq!(select_anchor(&members, AnchorMethod::Centroid), Some(1));
        assert_eq!(select_anchor(&members, AnchorMethod::HighestRated), Some(0));
        assert_eq!(select_anchor(&members, AnchorMethod::MostPopular), Some(2));
    }

    #[test]
    fn test_ties_go_to_first_member() {
        let members = vec![
            poi("a", 41.9000, 12.4800, 4.5, 100),
            poi("b", 41.9000, 12.5000, 4.5, 100),
        ];
        // Both are equally far from the midpoint
        assert_eq!(select_anchor(&members, AnchorMethod::Centroid), Some(0));
        assert_eq!(select_anchor(&members, AnchorMethod::HighestRated), Some(0));
        assert_eq!(select_anchor(&members, AnchorMethod::MostPopular), Some(0));
    }

    #[test]
    fn test_missing_ratings_rank_lowest() {
        let members = vec![
            Poi::new("unrated", "unrated").with_location(41.9, 12.49),
            poi("rated", 41.9, 12.5, 1.0, 1),
        ];
        assert_eq!(select_anchor(&members, AnchorMethod::HighestRated), Some(1));
        assert_eq!(select_anchor(&members, AnchorMethod::MostPopular), Some(1));
    }

    #[test]
    fn test_empty_cluster() {
        assert_eq!(select_anchor(&[], AnchorMethod::Centroid), None);
        assert_eq!(select_anchor(&[], AnchorMethod::MostPopular), None);
    }
}
