//! Keyword-based destination profiling

use serde::{Deserialize, Serialize};

/// Broad kind of destination, driving the result budget and search categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    MajorCity,
    TouristDestination,
    IslandResort,
    SmallTown,
    MetropolitanArea,
    CulturalCenter,
    BusinessCenter,
    NaturalArea,
    HistoricSite,
    #[default]
    Default,
}

impl DestinationKind {
    /// Multiplier applied to the per-category result budget
    pub fn diversity_factor(self) -> f64 {
        match self {
            DestinationKind::MajorCity => 1.5,
            DestinationKind::CulturalCenter => 1.4,
            DestinationKind::TouristDestination => 1.3,
            DestinationKind::HistoricSite => 1.3,
            DestinationKind::MetropolitanArea => 1.2,
            DestinationKind::BusinessCenter => 1.1,
            DestinationKind::NaturalArea => 1.0,
            DestinationKind::IslandResort => 0.8,
            DestinationKind::SmallTown => 0.7,
            DestinationKind::Default => 1.0,
        }
    }

    /// Provider place types worth querying for this kind of destination
    pub fn search_categories(self) -> Vec<&'static str> {
        let mut types = vec!["tourist_attraction", "restaurant", "cafe"];
        let extra: &[&str] = match self {
            DestinationKind::CulturalCenter => &["museum", "art_gallery", "theater"],
            DestinationKind::HistoricSite => &["museum"],
            DestinationKind::NaturalArea => &["park", "natural_feature"],
            DestinationKind::IslandResort => &["beach", "resort", "park"],
            DestinationKind::BusinessCenter => &["shopping_mall", "hotel"],
            _ => &[],
        };
        types.extend_from_slice(extra);
        types
    }
}

/// Decides what kind of place a destination is
pub trait DestinationProfiler: Send + Sync {
    fn profile(&self, destination: &str) -> DestinationKind;
}

const MAJOR_DESTINATIONS: &[&str] = &[
    // Global
    "tokyo", "london", "paris", "new york", "los angeles", "chicago", "moscow", "beijing", "shanghai",
    "mumbai", "delhi", "mexico city", "sao paulo", "buenos aires", "sydney", "melbourne", "toronto",
    "vancouver", "miami", "houston", "phoenix", "philadelphia", "san antonio", "san diego", "dallas",
    "san jose", "austin", "seattle", "denver", "washington", "boston", "nashville", "baltimore",
    "portland", "las vegas", "milwaukee", "atlanta", "long beach",
    // Europe
    "rome", "barcelona", "madrid", "berlin", "amsterdam", "vienna", "prague", "budapest", "copenhagen",
    "stockholm", "oslo", "helsinki", "zurich", "brussels", "munich", "frankfurt", "hamburg", "cologne",
    "milan", "florence", "venice", "naples", "lisbon", "porto", "athens", "thessaloniki", "warsaw",
    "krakow", "bucharest", "sofia",
    // Asia
    "dubai", "singapore", "hong kong", "bangkok", "kuala lumpur", "jakarta", "manila", "seoul", "taipei",
    "osaka", "kyoto", "ho chi minh city", "hanoi", "phnom penh", "vientiane", "yangon", "dhaka",
    "karachi", "lahore", "islamabad", "kathmandu", "thimphu",
    // Africa
    "cairo", "alexandria", "casablanca", "marrakech", "tunis", "algiers", "lagos", "abuja", "accra",
    "nairobi", "addis ababa", "cape town", "johannesburg", "durban", "pretoria",
    // South America
    "lima", "bogota", "caracas", "quito", "guayaquil", "la paz", "santiago", "valparaiso", "montevideo",
    "asuncion",
    // North America
    "montreal", "quebec city", "calgary", "edmonton", "winnipeg", "ottawa", "halifax", "st john s",
    "victoria", "windsor",
    // Oceania
    "perth", "adelaide", "brisbane", "gold coast", "newcastle", "wollongong", "hobart", "darwin",
    "canberra",
];

const CULTURAL_KEYWORDS: &[&str] = &[
    "cultural", "art", "music", "theater", "opera", "ballet", "dance", "literature", "poetry",
    "philosophy", "academic", "scholarly", "creative", "artistic", "bohemian", "avant garde",
    "experimental",
];

const HISTORIC_KEYWORDS: &[&str] = &[
    "historic", "historical", "ancient", "medieval", "renaissance", "colonial", "victorian", "gothic",
    "baroque", "romanesque", "archaeological", "ruins", "fortress", "castle", "citadel", "monastery",
    "abbey", "church", "cathedral", "basilica", "mosque", "synagogue", "temple", "pagoda", "stupa",
    "shrine",
];

const TOURIST_KEYWORDS: &[&str] = &[
    "capital", "city", "downtown", "center", "central", "tourist", "attraction", "museum", "gallery",
    "heritage", "monument", "palace", "festival", "carnival", "exhibition", "convention", "conference",
    "university", "college", "campus", "research", "institute",
];

const METROPOLITAN_KEYWORDS: &[&str] = &["metropolitan", "metro", "greater", "metropolis", "megacity"];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business", "financial", "commercial", "corporate", "headquarters", "office", "tower", "plaza",
    "district", "quarter", "industrial", "manufacturing", "technology", "innovation", "startup",
];

const NATURAL_KEYWORDS: &[&str] = &[
    "national park", "park", "forest", "mountain", "mountains", "lake", "river", "valley", "desert",
    "canyon", "cliff", "peak", "summit", "trail", "hiking", "camping", "wildlife", "nature",
    "conservation", "reserve", "sanctuary",
];

const ISLAND_RESORT_KEYWORDS: &[&str] = &[
    "island", "islands", "isle", "beach", "resort", "coast", "bay", "harbor", "peninsula",
    "archipelago", "atoll", "coral", "lagoon", "cove", "shore", "seaside", "waterfront", "marina",
    "port", "dock", "tropical", "paradise", "retreat", "spa", "wellness",
];

const SMALL_TOWN_KEYWORDS: &[&str] = &[
    "village", "hamlet", "town", "small", "little", "tiny", "rural", "countryside", "farm", "ranch",
    "settlement", "community", "neighborhood", "borough", "municipality", "county",
];

/// Kinds in priority order with the keyword table that selects each
const RULES: &[(DestinationKind, &[&str])] = &[
    (DestinationKind::MajorCity, MAJOR_DESTINATIONS),
    (DestinationKind::CulturalCenter, CULTURAL_KEYWORDS),
    (DestinationKind::HistoricSite, HISTORIC_KEYWORDS),
    (DestinationKind::MetropolitanArea, METROPOLITAN_KEYWORDS),
    (DestinationKind::TouristDestination, TOURIST_KEYWORDS),
    (DestinationKind::BusinessCenter, BUSINESS_KEYWORDS),
    (DestinationKind::NaturalArea, NATURAL_KEYWORDS),
    (DestinationKind::IslandResort, ISLAND_RESORT_KEYWORDS),
    (DestinationKind::SmallTown, SMALL_TOWN_KEYWORDS),
];

/// Profiles destinations by whole-word keyword matches against static tables
///
/// The first table in priority order with a match wins, so "Kyoto Temples"
/// is a major city and "Temple Bay" is a historic site.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordProfiler;

impl KeywordProfiler {
    pub fn new() -> Self {
        Self
    }
}

impl DestinationProfiler for KeywordProfiler {
    fn profile(&self, destination: &str) -> DestinationKind {
        let haystack = format!(" {} ", normalize_words(destination));
        if haystack.trim().is_empty() {
            return DestinationKind::Default;
        }

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(&format!(" {} ", kw))))
            .map(|(kind, _)| *kind)
            .unwrap_or_default()
    }
}

/// Lower-cases and collapses every run of non-alphanumerics to one space
pub(crate) fn normalize_words(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
