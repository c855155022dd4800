//! Package poi holds the point-of-interest value type shared by every stage
pub mod category;
pub mod quality;

#[cfg(test)]
mod quality_test;

pub use category::CategoryGroup;
pub use quality::{QualityGate, quality_score};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::GeoPoint;

/// One candidate place as delivered by a place-data provider
///
/// Identity is the provider-assigned `id`. Coordinates, rating and review
/// count are optional; provider-specific extras travel untouched in `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// 0 to 5 stars
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub source: Value,
}

impl Poi {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
            location: None,
            rating: None,
            review_count: None,
            source: Value::Null,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lon));
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(review_count);
        self
    }

    pub fn with_source(mut self, source: Value) -> Self {
        self.source = source;
        self
    }

    /// Coordinates usable for clustering, `None` when absent or out of range
    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.location.filter(GeoPoint::is_valid)
    }

    /// Whether any of the categories falls in `group`
    pub fn in_group(&self, group: CategoryGroup) -> bool {
        self.categories.iter().any(|c| CategoryGroup::of(c) == Some(group))
    }

    /// Restaurants, cafes, bars and other food & drink places
    pub fn is_restaurant(&self) -> bool {
        self.in_group(CategoryGroup::FoodDrink)
    }

    pub fn quality_score(&self) -> f64 {
        quality_score(self.rating, self.review_count)
    }
}
