//! Static category lookup
//!
//! Each group owns a flat table of provider type strings. Extending a group
//! means adding a string to its table; tables must stay disjoint.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Broad category a provider place type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    FoodDrink,
    Attraction,
    Lodging,
    Shopping,
}

/// Food and drink place types (Google place types plus Yelp top-level categories)
pub const FOOD_DRINK_TYPES: &[&str] = &[
    "restaurant",
    "restaurants",
    "food",
    "meal_takeaway",
    "meal_delivery",
    "cafe",
    "cafes",
    "coffee",
    "bar",
    "bars",
    "acai_shop",
    "afghani_restaurant",
    "african_restaurant",
    "american_restaurant",
    "asian_restaurant",
    "bagel_shop",
    "bakery",
    "bar_and_grill",
    "barbecue_restaurant",
    "brazilian_restaurant",
    "breakfast_restaurant",
    "brunch_restaurant",
    "buffet_restaurant",
    "cafeteria",
    "candy_store",
    "cat_cafe",
    "chinese_restaurant",
    "chocolate_factory",
    "chocolate_shop",
    "coffee_shop",
    "confectionery",
    "deli",
    "dessert_restaurant",
    "dessert_shop",
    "diner",
    "dog_cafe",
    "donut_shop",
    "fast_food_restaurant",
    "fine_dining_restaurant",
    "food_court",
    "french_restaurant",
    "greek_restaurant",
    "hamburger_restaurant",
    "ice_cream_shop",
    "indian_restaurant",
    "indonesian_restaurant",
    "italian_restaurant",
    "japanese_restaurant",
    "juice_shop",
    "korean_restaurant",
    "lebanese_restaurant",
    "mediterranean_restaurant",
    "mexican_restaurant",
    "middle_eastern_restaurant",
    "pizza_restaurant",
    "pub",
    "ramen_restaurant",
    "sandwich_shop",
    "seafood_restaurant",
    "spanish_restaurant",
    "steak_house",
    "sushi_restaurant",
    "tea_house",
    "thai_restaurant",
    "turkish_restaurant",
    "vegan_restaurant",
    "vegetarian_restaurant",
    "vietnamese_restaurant",
    "wine_bar",
];

/// Sights, culture and recreation
pub const ATTRACTION_TYPES: &[&str] = &[
    "tourist_attraction",
    "museum",
    "art_gallery",
    "park",
    "national_park",
    "natural_feature",
    "amusement_park",
    "aquarium",
    "zoo",
    "historical_landmark",
    "monument",
    "cultural_center",
    "performing_arts_theater",
    "theater",
    "church",
    "hindu_temple",
    "mosque",
    "synagogue",
    "place_of_worship",
    "shrine",
    "temple",
    "observation_deck",
    "garden",
    "beach",
    "library",
];

pub const LODGING_TYPES: &[&str] = &[
    "lodging",
    "hotel",
    "hostel",
    "motel",
    "resort",
    "resort_hotel",
    "bed_and_breakfast",
    "guest_house",
    "campground",
];

pub const SHOPPING_TYPES: &[&str] = &[
    "shopping_mall",
    "department_store",
    "market",
    "clothing_store",
    "book_store",
    "gift_shop",
    "jewelry_store",
    "store",
];

static LOOKUP: LazyLock<HashMap<&'static str, CategoryGroup>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for group in CategoryGroup::ALL {
        for &name in group.types() {
            map.insert(name, group);
        }
    }
    map
});

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 4] = [
        CategoryGroup::FoodDrink,
        CategoryGroup::Attraction,
        CategoryGroup::Lodging,
        CategoryGroup::Shopping,
    ];

    /// Looks up the group of a provider type string, case-insensitively
    pub fn of(category: &str) -> Option<Self> {
        let key = category.trim().to_ascii_lowercase();
        LOOKUP.get(key.as_str()).copied()
    }

    /// The type table backing this group
    pub fn types(self) -> &'static [&'static str] {
        match self {
            CategoryGroup::FoodDrink => FOOD_DRINK_TYPES,
            CategoryGroup::Attraction => ATTRACTION_TYPES,
            CategoryGroup::Lodging => LODGING_TYPES,
            CategoryGroup::Shopping => SHOPPING_TYPES,
        }
    }
}
