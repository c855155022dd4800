//! Quality scoring and the worth-visiting gate

use serde::{Deserialize, Serialize};

use super::Poi;

/// Visitability score in `[0, 1]`
///
/// `0.7 * rating/5 + 0.3 * min(1, log10(max(1, reviews)) / 3)`: the rating
/// dominates, review volume adds confidence with diminishing returns past 1000.
/// A missing rating scores 0.
pub fn quality_score(rating: Option<f64>, review_count: Option<u32>) -> f64 {
    let Some(rating) = rating.filter(|r| r.is_finite()) else {
        return 0.0;
    };

    let rating_score = rating / 5.0;
    let reviews = review_count.unwrap_or(0).max(1) as f64;
    let review_score = (reviews.log10() / 3.0).min(1.0);

    (0.7 * rating_score + 0.3 * review_score).clamp(0.0, 1.0)
}

/// Minimum quality a POI needs to survive the worth-visiting filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityGate {
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,

    #[serde(default = "default_min_review_count")]
    pub min_review_count: u32,

    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_min_rating() -> f64 {
    3.5
}

fn default_min_review_count() -> u32 {
    10
}

fn default_min_score() -> f64 {
    0.6
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            min_rating: default_min_rating(),
            min_review_count: default_min_review_count(),
            min_score: default_min_score(),
        }
    }
}

impl QualityGate {
    /// A POI passes when it has a rating and a review count, both meet their
    /// minimums, and its score meets `min_score`
    pub fn passes(&self, poi: &Poi) -> bool {
        let (Some(rating), Some(reviews)) = (poi.rating, poi.review_count) else {
            return false;
        };

        rating >= self.min_rating && reviews >= self.min_review_count && poi.quality_score() >= self.min_score
    }
}
