// ABOUTME: Per-activity clothing configuration: categories, ordered options, warmth ranks
// ABOUTME: Owns capability flags (rain gear, light, eyewear) and the warm/cold vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Clothing configuration tables.
//!
//! Each activity defines its own clothing categories and an ordered option
//! list per category. Every configured option carries an ordinal warmth
//! rank so warmer/cooler comparisons are structural. User-edited custom
//! values fall back to the substring vocabulary in [`lexical_warmth`],
//! scanned warm-terms-first with first-match-wins precedence.

use crate::models::{ActivityType, ClothingCategory};
use std::cmp::Ordering;

/// Option value meaning "nothing worn" for a category
pub const NONE_OPTION: &str = "None";

/// One selectable clothing option with its ordinal warmth rank
#[derive(Debug, Clone, Copy)]
pub struct ClothingOption {
    /// Display value stored in clothing items
    pub name: &'static str,
    /// Ordinal warmth rank within the category (higher is warmer)
    pub warmth: i8,
}

const fn opt(name: &'static str, warmth: i8) -> ClothingOption {
    ClothingOption { name, warmth }
}

/// What part a category plays when the engine reasons about layering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// Base layer worn next to skin
    Primary,
    /// Insulating middle layer
    Insulation,
    /// Wind or rain shell
    Shell,
    /// Head or hand protection
    Extremity,
    /// Legwear length and weight
    Length,
    /// Eyewear, lights, and other non-thermal gear
    Accessory,
}

/// A clothing category as configured for one activity
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Category key
    pub category: ClothingCategory,
    /// Ordered options, coldest first
    pub options: &'static [ClothingOption],
    /// Layering role for suggestion targeting
    pub role: LayerRole,
}

const fn cat(
    category: ClothingCategory,
    options: &'static [ClothingOption],
    role: LayerRole,
) -> CategorySpec {
    CategorySpec {
        category,
        options,
        role,
    }
}

/// Full clothing configuration for one activity
#[derive(Debug, Clone, Copy)]
pub struct ActivityClothingConfig {
    /// Activity this configuration belongs to
    pub activity: ActivityType,
    /// Categories defined for the activity
    pub categories: &'static [CategorySpec],
    /// Rain/wind-gear category and the option forced when it rains
    pub rain_gear: Option<(ClothingCategory, &'static str)>,
    /// Whether the activity supports a headlamp accessory
    pub supports_light: bool,
    /// Whether the activity supports sunglasses
    pub supports_eyewear: bool,
    /// Whether warmth suggestions target the mid layer (true) or the top (false)
    pub layered: bool,
}

const TOPS: &[ClothingOption] = &[
    opt("Tank", 0),
    opt("T-Shirt", 1),
    opt("Long Sleeve", 2),
    opt("Thermal Top", 3),
];

const BASE_LAYERS: &[ClothingOption] = &[
    opt("Light Base Layer", 0),
    opt("Midweight Base Layer", 1),
    opt("Heavy Base Layer", 2),
];

const MID_LAYERS: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Vest", 1),
    opt("Fleece", 2),
    opt("Puffy", 3),
];

const OUTER_LAYERS: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Wind Jacket", 1),
    opt("Rain Jacket", 2),
    opt("Insulated Jacket", 3),
];

const RUN_BOTTOMS: &[ClothingOption] = &[
    opt("Shorts", 0),
    opt("Capris", 1),
    opt("Tights", 2),
    opt("Lined Tights", 3),
];

const HIKE_BOTTOMS: &[ClothingOption] = &[
    opt("Shorts", 0),
    opt("Convertible Pants", 1),
    opt("Pants", 2),
    opt("Insulated Pants", 3),
];

const WALK_BOTTOMS: &[ClothingOption] = &[
    opt("Shorts", 0),
    opt("Pants", 1),
    opt("Lined Pants", 2),
];

const WINTER_BOTTOMS: &[ClothingOption] = &[
    opt("Hiking Pants", 0),
    opt("Softshell Pants", 1),
    opt("Insulated Pants", 2),
];

const XC_BOTTOMS: &[ClothingOption] = &[
    opt("Tights", 0),
    opt("Softshell Pants", 1),
    opt("Insulated Pants", 2),
];

const HEADWEAR: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Cap", 1),
    opt("Headband", 2),
    opt("Beanie", 3),
    opt("Balaclava", 4),
];

const GLOVES: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Light Gloves", 1),
    opt("Gloves", 2),
    opt("Mittens", 3),
];

const EYEWEAR: &[ClothingOption] = &[opt(NONE_OPTION, 0), opt("Sunglasses", 0)];

const LIGHTS: &[ClothingOption] = &[opt(NONE_OPTION, 0), opt("Headlamp", 0)];

const TRAIL_FOOT: &[ClothingOption] = &[opt("Trail Shoes", 0), opt("Waterproof Trail Shoes", 1)];

const HIKE_FOOT: &[ClothingOption] = &[
    opt("Trail Runners", 0),
    opt("Hiking Boots", 1),
    opt("Insulated Boots", 2),
];

const WINTER_FOOT: &[ClothingOption] = &[opt("Winter Boots", 0), opt("Insulated Winter Boots", 1)];

const RIDE_TOPS: &[ClothingOption] = &[
    opt("Sleeveless Jersey", 0),
    opt("Short Sleeve Jersey", 1),
    opt("Long Sleeve Jersey", 2),
    opt("Thermal Jersey", 3),
];

const RIDE_OUTER: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Wind Vest", 1),
    opt("Rain Jacket", 2),
    opt("Thermal Jacket", 3),
];

const RIDE_BOTTOMS: &[ClothingOption] = &[
    opt("Bib Shorts", 0),
    opt("Knee Warmers", 1),
    opt("Bib Tights", 2),
    opt("Thermal Bib Tights", 3),
];

const RIDE_HEAD: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Cycling Cap", 1),
    opt("Headband", 2),
    opt("Skull Cap", 3),
];

const RIDE_GLOVES: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Fingerless Gloves", 1),
    opt("Full Finger Gloves", 2),
    opt("Winter Gloves", 3),
];

const RIDE_FOOT: &[ClothingOption] = &[
    opt(NONE_OPTION, 0),
    opt("Toe Covers", 1),
    opt("Shoe Covers", 2),
];

const RUN_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, TOPS, LayerRole::Primary),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, RUN_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const TRAIL_RUN_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, TOPS, LayerRole::Primary),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, RUN_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Footwear, TRAIL_FOOT, LayerRole::Accessory),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const HIKE_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, TOPS, LayerRole::Primary),
    cat(ClothingCategory::MidLayer, MID_LAYERS, LayerRole::Insulation),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, HIKE_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Footwear, HIKE_FOOT, LayerRole::Accessory),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const WALK_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, TOPS, LayerRole::Primary),
    cat(ClothingCategory::MidLayer, MID_LAYERS, LayerRole::Insulation),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, WALK_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const RIDE_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, RIDE_TOPS, LayerRole::Primary),
    cat(ClothingCategory::OuterLayer, RIDE_OUTER, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, RIDE_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, RIDE_HEAD, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, RIDE_GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Footwear, RIDE_FOOT, LayerRole::Accessory),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const SNOWSHOE_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, BASE_LAYERS, LayerRole::Primary),
    cat(ClothingCategory::MidLayer, MID_LAYERS, LayerRole::Insulation),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, WINTER_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Footwear, WINTER_FOOT, LayerRole::Accessory),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const XC_SKI_CATEGORIES: &[CategorySpec] = &[
    cat(ClothingCategory::Tops, BASE_LAYERS, LayerRole::Primary),
    cat(ClothingCategory::MidLayer, MID_LAYERS, LayerRole::Insulation),
    cat(ClothingCategory::OuterLayer, OUTER_LAYERS, LayerRole::Shell),
    cat(ClothingCategory::Bottoms, XC_BOTTOMS, LayerRole::Length),
    cat(ClothingCategory::Headwear, HEADWEAR, LayerRole::Extremity),
    cat(ClothingCategory::Gloves, GLOVES, LayerRole::Extremity),
    cat(ClothingCategory::Eyewear, EYEWEAR, LayerRole::Accessory),
    cat(ClothingCategory::Light, LIGHTS, LayerRole::Accessory),
];

const CONFIGS: &[ActivityClothingConfig] = &[
    ActivityClothingConfig {
        activity: ActivityType::Run,
        categories: RUN_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: false,
    },
    ActivityClothingConfig {
        activity: ActivityType::TrailRun,
        categories: TRAIL_RUN_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: false,
    },
    ActivityClothingConfig {
        activity: ActivityType::Hike,
        categories: HIKE_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: true,
    },
    ActivityClothingConfig {
        activity: ActivityType::Walk,
        categories: WALK_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: true,
    },
    ActivityClothingConfig {
        activity: ActivityType::Ride,
        categories: RIDE_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: false,
    },
    ActivityClothingConfig {
        activity: ActivityType::Snowshoe,
        categories: SNOWSHOE_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: true,
    },
    ActivityClothingConfig {
        activity: ActivityType::CrossCountrySki,
        categories: XC_SKI_CATEGORIES,
        rain_gear: Some((ClothingCategory::OuterLayer, "Rain Jacket")),
        supports_light: true,
        supports_eyewear: true,
        layered: true,
    },
];

/// Clothing configuration for an activity
#[must_use]
pub fn for_activity(activity: ActivityType) -> &'static ActivityClothingConfig {
    // CONFIGS covers every ActivityType variant; the fallback is unreachable
    CONFIGS
        .iter()
        .find(|c| c.activity == activity)
        .unwrap_or(&CONFIGS[0])
}

/// Category specification for an activity, if the activity defines it
#[must_use]
pub fn category_spec(
    activity: ActivityType,
    category: ClothingCategory,
) -> Option<&'static CategorySpec> {
    for_activity(activity)
        .categories
        .iter()
        .find(|spec| spec.category == category)
}

/// Warmth rank of a configured option value, if it is in the option list
#[must_use]
pub fn warmth_rank(activity: ActivityType, category: ClothingCategory, value: &str) -> Option<i8> {
    category_spec(activity, category)?
        .options
        .iter()
        .find(|o| o.name.eq_ignore_ascii_case(value))
        .map(|o| o.warmth)
}

/// Warmest configured option for a category
#[must_use]
pub fn warmest_option(spec: &CategorySpec) -> &'static str {
    spec.options
        .iter()
        .max_by_key(|o| o.warmth)
        .map_or(NONE_OPTION, |o| o.name)
}

/// Lightest configured option for a category
#[must_use]
pub fn lightest_option(spec: &CategorySpec) -> &'static str {
    spec.options
        .iter()
        .min_by_key(|o| o.warmth)
        .map_or(NONE_OPTION, |o| o.name)
}

/// Coarse warmth class assigned by the substring vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalWarmth {
    /// Value reads as a warm item
    Warm,
    /// Value reads as a cold-weather-light item
    Cold,
}

/// Substrings that mark a value as warm. Scanned before the cold list;
/// the first containing term wins.
const WARM_TERMS: &[&str] = &[
    "thermal",
    "fleece",
    "puffy",
    "insulated",
    "wool",
    "down",
    "winter",
    "lined",
    "heavy",
    "balaclava",
    "beanie",
    "mitten",
    "tights",
    "jacket",
    "pants",
];

/// Substrings that mark a value as light/cold-rated
const COLD_TERMS: &[&str] = &[
    "tank",
    "singlet",
    "sleeveless",
    "short sleeve",
    "t-shirt",
    "tee",
    "shorts",
    "mesh",
    "light",
    "visor",
    "cap",
];

/// Classify an arbitrary (possibly user-edited) value as warm or cold
///
/// Substring matching over a fixed vocabulary, warm terms first,
/// first-match-wins. Returns `None` when no term matches.
#[must_use]
pub fn lexical_warmth(value: &str) -> Option<LexicalWarmth> {
    let lower = value.to_lowercase();
    for term in WARM_TERMS {
        if lower.contains(term) {
            return Some(LexicalWarmth::Warm);
        }
    }
    for term in COLD_TERMS {
        if lower.contains(term) {
            return Some(LexicalWarmth::Cold);
        }
    }
    None
}

fn coarse_class(
    activity: ActivityType,
    category: ClothingCategory,
    value: &str,
) -> Option<LexicalWarmth> {
    warmth_rank(activity, category, value).map_or_else(
        || lexical_warmth(value),
        |rank| {
            if rank >= 2 {
                Some(LexicalWarmth::Warm)
            } else {
                Some(LexicalWarmth::Cold)
            }
        },
    )
}

/// Compare two option values for warmth within a category
///
/// Configured values compare by warmth rank. When either value is custom,
/// both fall back to coarse lexical classes; the comparison is `None` when
/// the classes tie or either value is unclassifiable.
#[must_use]
pub fn compare_warmth(
    activity: ActivityType,
    category: ClothingCategory,
    a: &str,
    b: &str,
) -> Option<Ordering> {
    if let (Some(ra), Some(rb)) = (
        warmth_rank(activity, category, a),
        warmth_rank(activity, category, b),
    ) {
        return Some(ra.cmp(&rb));
    }
    match (
        coarse_class(activity, category, a)?,
        coarse_class(activity, category, b)?,
    ) {
        (LexicalWarmth::Warm, LexicalWarmth::Cold) => Some(Ordering::Greater),
        (LexicalWarmth::Cold, LexicalWarmth::Warm) => Some(Ordering::Less),
        _ => None,
    }
}

/// Categories the suggestion generator may adjust for an activity
///
/// Layered activities adjust the mid layer first; single-layer activities
/// adjust the top. Extremity protection is only suggested when dressing
/// warmer; legwear is adjustable in both directions.
#[must_use]
pub fn suggestion_categories(activity: ActivityType, warmer: bool) -> Vec<ClothingCategory> {
    let config = for_activity(activity);
    let primary = if config.layered {
        ClothingCategory::MidLayer
    } else {
        ClothingCategory::Tops
    };
    let mut categories = vec![primary];
    if warmer {
        categories.push(ClothingCategory::Headwear);
        categories.push(ClothingCategory::Gloves);
    }
    categories.push(ClothingCategory::Bottoms);
    categories.retain(|c| category_spec(activity, *c).is_some());
    categories
}
