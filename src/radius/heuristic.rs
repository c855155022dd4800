//! Geometry and duration based radius estimates, used when classification fails

use serde::{Deserialize, Serialize};

use crate::geo::{Bounds, bounding_box_radius};

/// How travellers get around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walk,
    #[default]
    Transit,
    Car,
}

/// How packed the days are
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripPace {
    Relaxed,
    #[default]
    Standard,
    Aggressive,
}

impl TravelMode {
    pub fn factor(self) -> f64 {
        match self {
            TravelMode::Walk => 0.6,
            TravelMode::Transit => 1.0,
            TravelMode::Car => 1.3,
        }
    }
}

impl TripPace {
    pub fn factor(self) -> f64 {
        match self {
            TripPace::Relaxed => 0.8,
            TripPace::Standard => 1.0,
            TripPace::Aggressive => 1.2,
        }
    }
}

/// Radius clamp applied to the bounding-box estimate, in km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusClamp {
    pub soft_min_km: f64,
    pub soft_max_km: f64,
    pub hard_max_km: f64,
}

impl Default for RadiusClamp {
    fn default() -> Self {
        Self {
            soft_min_km: 2.0,
            soft_max_km: 30.0,
            hard_max_km: 50.0,
        }
    }
}

impl RadiusClamp {
    pub fn apply(&self, km: f64) -> f64 {
        km.min(self.soft_max_km).max(self.soft_min_km).min(self.hard_max_km)
    }
}

/// Duration factor: grows with log2 of the trip length, capped at 1.9
pub fn f_days(days: u32) -> f64 {
    (0.9 + 0.35 * (days as f64 + 1.0).log2()).min(1.9)
}

/// Radius derived from the geocode viewport, scaled by duration, mode and pace
pub fn bounds_radius_km(bounds: &Bounds, days: u32, mode: TravelMode, pace: TripPace, clamp: &RadiusClamp) -> f64 {
    let (r0_m, _, _) = bounding_box_radius(bounds);
    let raw_km = r0_m * f_days(days) * mode.factor() * pace.factor() / 1000.0;
    clamp.apply(raw_km)
}

/// Last-resort radius from trip length alone
pub fn duration_bucket_km(days: u32) -> f64 {
    match days {
        0..=2 => 15.0,
        3..=5 => 25.0,
        6..=10 => 35.0,
        _ => 45.0,
    }
}
