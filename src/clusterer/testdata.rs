//! Shared fixtures for clustering tests

use crate::poi::Poi;

/// (name, center lat, center lon, count, grid columns)
const TOKYO_GROUPS: &[(&str, f64, f64, usize, usize)] = &[
    ("shinjuku", 35.6900, 139.6990, 7, 3),
    ("asakusa", 35.7110, 139.7940, 7, 3),
    ("ginza", 35.6700, 139.7620, 6, 3),
    ("shibuya", 35.6560, 139.6950, 24, 6),
];

/// 45 POIs: restaurant grids in Shinjuku (7), Ginza (6) and Shibuya (24),
/// 3 restaurants and 4 attractions in Asakusa, and one lone attraction in
/// Kichijoji about 11 km west of Shinjuku
///
/// Ids are `<area>-<k>`. Every POI passes the default quality gate.
pub fn tokyo_pois() -> Vec<Poi> {
    let mut pois = Vec::new();
    for &(name, lat, lon, count, cols) in TOKYO_GROUPS {
        for k in 0..count {
            let category = if name == "asakusa" && k >= 3 {
                "tourist_attraction"
            } else {
                "restaurant"
            };
            let row = (k / cols) as f64;
            let col = (k % cols) as f64;
            pois.push(
                Poi::new(format!("{}-{}", name, k), format!("{} {}", name, k))
                    .with_category(category)
                    .with_location(lat + row * 0.002, lon + col * 0.0025),
            );
        }
    }
    pois.push(
        Poi::new("kichijoji", "Inokashira Park")
            .with_category("tourist_attraction")
            .with_location(35.7030, 139.5797),
    );

    for (i, poi) in pois.iter_mut().enumerate() {
        poi.rating = Some(3.5 + (i % 15) as f64 * 0.1);
        poi.review_count = Some(15 + (i * 37 % 500) as u32);
    }
    pois
}

/// `n` restaurants on a tight grid around (lat, lon), ids `<prefix>-<k>`
pub fn restaurant_grid(prefix: &str, lat: f64, lon: f64, n: usize) -> Vec<Poi> {
    (0..n)
        .map(|k| {
            Poi::new(format!("{}-{}", prefix, k), format!("{} {}", prefix, k))
                .with_category("restaurant")
                .with_location(lat + (k / 4) as f64 * 0.001, lon + (k % 4) as f64 * 0.001)
                .with_rating(4.5, 200)
        })
        .collect()
}
