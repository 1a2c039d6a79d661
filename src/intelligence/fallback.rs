// ABOUTME: Activity-specific, temperature-banded default clothing when history cannot decide
// ABOUTME: Bands keyed on comfort temperature; output always finishes through the safety pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Fallback defaults.
//!
//! Used when there is no history at all, when matching yields zero
//! qualifying records, and as the comparison baseline for the suggestion
//! generator. Each activity defines its own defaults per comfort band.

use crate::config::clothing::NONE_OPTION;
use crate::intelligence::comfort;
use crate::intelligence::thermal_constants::fallback_bands;
use crate::models::{
    ActivityLevel, ActivityType, ClothingCategory, ClothingItems, ThermalPreference,
    WeatherObservation,
};
use serde::Serialize;

use ClothingCategory::{
    Bottoms, Eyewear, Footwear, Gloves, Headwear, Light, MidLayer, OuterLayer, Tops,
};

/// Temperature band used for fallback defaults (edges ≈ 25/40/55/65/75 °F)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackBand {
    /// Below −3.9 °C comfort
    Frigid,
    /// −3.9 to 4.4 °C
    Cold,
    /// 4.4 to 12.8 °C
    Cool,
    /// 12.8 to 18.3 °C
    Mild,
    /// 18.3 to 23.9 °C
    Warm,
    /// 23.9 °C and above
    Hot,
}

impl FallbackBand {
    /// Band containing a comfort temperature
    #[must_use]
    pub fn for_temperature(comfort_temp_c: f64) -> Self {
        if comfort_temp_c < fallback_bands::COLD_FLOOR_C {
            Self::Frigid
        } else if comfort_temp_c < fallback_bands::COOL_FLOOR_C {
            Self::Cold
        } else if comfort_temp_c < fallback_bands::MILD_FLOOR_C {
            Self::Cool
        } else if comfort_temp_c < fallback_bands::WARM_FLOOR_C {
            Self::Mild
        } else if comfort_temp_c < fallback_bands::HOT_FLOOR_C {
            Self::Warm
        } else {
            Self::Hot
        }
    }
}

type Defaults = &'static [(ClothingCategory, &'static str)];

fn run_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Thermal Top"),
            (OuterLayer, "Insulated Jacket"),
            (Bottoms, "Lined Tights"),
            (Headwear, "Beanie"),
            (Gloves, "Mittens"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Thermal Top"),
            (OuterLayer, "Wind Jacket"),
            (Bottoms, "Tights"),
            (Headwear, "Beanie"),
            (Gloves, "Gloves"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Long Sleeve"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Tights"),
            (Headwear, "Headband"),
            (Gloves, "Light Gloves"),
        ],
        FallbackBand::Mild => &[
            (Tops, "T-Shirt"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
        ],
        FallbackBand::Warm => &[
            (Tops, "T-Shirt"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
        ],
        FallbackBand::Hot => &[
            (Tops, "Tank"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
        ],
    }
}

fn trail_run_footwear(band: FallbackBand) -> (ClothingCategory, &'static str) {
    match band {
        FallbackBand::Frigid | FallbackBand::Cold => (Footwear, "Waterproof Trail Shoes"),
        _ => (Footwear, "Trail Shoes"),
    }
}

fn hike_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Thermal Top"),
            (MidLayer, "Puffy"),
            (OuterLayer, "Insulated Jacket"),
            (Bottoms, "Insulated Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Mittens"),
            (Footwear, "Insulated Boots"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Long Sleeve"),
            (MidLayer, "Fleece"),
            (OuterLayer, "Wind Jacket"),
            (Bottoms, "Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Gloves"),
            (Footwear, "Hiking Boots"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Long Sleeve"),
            (MidLayer, "Vest"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Pants"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
            (Footwear, "Hiking Boots"),
        ],
        FallbackBand::Mild => &[
            (Tops, "T-Shirt"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Convertible Pants"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
            (Footwear, "Trail Runners"),
        ],
        FallbackBand::Warm => &[
            (Tops, "T-Shirt"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
            (Footwear, "Trail Runners"),
        ],
        FallbackBand::Hot => &[
            (Tops, "Tank"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
            (Footwear, "Trail Runners"),
        ],
    }
}

fn walk_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Thermal Top"),
            (MidLayer, "Puffy"),
            (OuterLayer, "Insulated Jacket"),
            (Bottoms, "Lined Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Mittens"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Long Sleeve"),
            (MidLayer, "Fleece"),
            (OuterLayer, "Wind Jacket"),
            (Bottoms, "Lined Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Gloves"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Long Sleeve"),
            (MidLayer, "Vest"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Pants"),
            (Headwear, NONE_OPTION),
            (Gloves, "Light Gloves"),
        ],
        FallbackBand::Mild => &[
            (Tops, "T-Shirt"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Pants"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
        ],
        FallbackBand::Warm => &[
            (Tops, "T-Shirt"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
        ],
        FallbackBand::Hot => &[
            (Tops, "Tank"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Shorts"),
            (Headwear, "Cap"),
            (Gloves, NONE_OPTION),
        ],
    }
}

fn ride_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Thermal Jersey"),
            (OuterLayer, "Thermal Jacket"),
            (Bottoms, "Thermal Bib Tights"),
            (Headwear, "Skull Cap"),
            (Gloves, "Winter Gloves"),
            (Footwear, "Shoe Covers"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Thermal Jersey"),
            (OuterLayer, "Wind Vest"),
            (Bottoms, "Bib Tights"),
            (Headwear, "Skull Cap"),
            (Gloves, "Full Finger Gloves"),
            (Footwear, "Shoe Covers"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Long Sleeve Jersey"),
            (OuterLayer, "Wind Vest"),
            (Bottoms, "Knee Warmers"),
            (Headwear, "Cycling Cap"),
            (Gloves, "Full Finger Gloves"),
            (Footwear, "Toe Covers"),
        ],
        FallbackBand::Mild => &[
            (Tops, "Short Sleeve Jersey"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Bib Shorts"),
            (Headwear, NONE_OPTION),
            (Gloves, "Fingerless Gloves"),
            (Footwear, NONE_OPTION),
        ],
        FallbackBand::Warm => &[
            (Tops, "Short Sleeve Jersey"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Bib Shorts"),
            (Headwear, NONE_OPTION),
            (Gloves, "Fingerless Gloves"),
            (Footwear, NONE_OPTION),
        ],
        FallbackBand::Hot => &[
            (Tops, "Sleeveless Jersey"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Bib Shorts"),
            (Headwear, NONE_OPTION),
            (Gloves, "Fingerless Gloves"),
            (Footwear, NONE_OPTION),
        ],
    }
}

fn snowshoe_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Heavy Base Layer"),
            (MidLayer, "Puffy"),
            (OuterLayer, "Insulated Jacket"),
            (Bottoms, "Insulated Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Mittens"),
            (Footwear, "Insulated Winter Boots"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Midweight Base Layer"),
            (MidLayer, "Fleece"),
            (OuterLayer, "Wind Jacket"),
            (Bottoms, "Softshell Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Gloves"),
            (Footwear, "Winter Boots"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Midweight Base Layer"),
            (MidLayer, "Vest"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Softshell Pants"),
            (Headwear, "Headband"),
            (Gloves, "Light Gloves"),
            (Footwear, "Winter Boots"),
        ],
        FallbackBand::Mild | FallbackBand::Warm | FallbackBand::Hot => &[
            (Tops, "Light Base Layer"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Hiking Pants"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
            (Footwear, "Winter Boots"),
        ],
    }
}

fn xc_ski_defaults(band: FallbackBand) -> Defaults {
    match band {
        FallbackBand::Frigid => &[
            (Tops, "Heavy Base Layer"),
            (MidLayer, "Fleece"),
            (OuterLayer, "Insulated Jacket"),
            (Bottoms, "Insulated Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Mittens"),
        ],
        FallbackBand::Cold => &[
            (Tops, "Midweight Base Layer"),
            (MidLayer, "Fleece"),
            (OuterLayer, "Wind Jacket"),
            (Bottoms, "Softshell Pants"),
            (Headwear, "Beanie"),
            (Gloves, "Gloves"),
        ],
        FallbackBand::Cool => &[
            (Tops, "Midweight Base Layer"),
            (MidLayer, "Vest"),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Tights"),
            (Headwear, "Headband"),
            (Gloves, "Light Gloves"),
        ],
        FallbackBand::Mild | FallbackBand::Warm | FallbackBand::Hot => &[
            (Tops, "Light Base Layer"),
            (MidLayer, NONE_OPTION),
            (OuterLayer, NONE_OPTION),
            (Bottoms, "Tights"),
            (Headwear, NONE_OPTION),
            (Gloves, NONE_OPTION),
        ],
    }
}

/// Banded default clothing for an activity, before the safety pass
///
/// The band is keyed on the comfort temperature so preference and
/// expert-mode level shift the defaults the same way they shift matching.
#[must_use]
pub fn fallback_items(
    weather: &WeatherObservation,
    activity: ActivityType,
    preference: ThermalPreference,
    level: Option<ActivityLevel>,
) -> ClothingItems {
    let estimate = comfort::compute_comfort_temperature(weather, activity, preference, level);
    let band = FallbackBand::for_temperature(estimate.comfort_temp_c);

    let mut pairs: Vec<(ClothingCategory, &'static str)> = match activity {
        ActivityType::Run => run_defaults(band).to_vec(),
        ActivityType::TrailRun => {
            let mut pairs = run_defaults(band).to_vec();
            pairs.push(trail_run_footwear(band));
            pairs
        }
        ActivityType::Hike => hike_defaults(band).to_vec(),
        ActivityType::Walk => walk_defaults(band).to_vec(),
        ActivityType::Ride => ride_defaults(band).to_vec(),
        ActivityType::Snowshoe => snowshoe_defaults(band).to_vec(),
        ActivityType::CrossCountrySki => xc_ski_defaults(band).to_vec(),
    };
    pairs.push((Eyewear, NONE_OPTION));
    pairs.push((Light, NONE_OPTION));

    // Every table value is drawn from the activity's configured options
    ClothingItems::for_activity(activity, pairs)
        .unwrap_or_else(|_| ClothingItems::empty(activity))
}
