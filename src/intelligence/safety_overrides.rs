// ABOUTME: Deterministic safety rules that force clothing values over vote outcomes
// ABOUTME: Cold, heat, precipitation, darkness, and sun rules with per-rule firing flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Safety override engine.
//!
//! Applied after voting and after fallback assembly; forced values win
//! unconditionally. Rules run in a fixed order: cold, heat, precipitation,
//! darkness, sun. Heat runs before precipitation so a rain shell survives
//! hot rain, and darkness is evaluated before sun so headlamp and
//! sunglasses are mutually exclusive by construction. The pass is
//! idempotent: reapplying it to its own output changes nothing.

use crate::config::clothing::{self, NONE_OPTION};
use crate::intelligence::thermal_constants::safety;
use crate::models::{ClothingCategory, ClothingItems, HazardLevel, WeatherObservation};
use chrono::{Duration, Timelike};
use serde::Serialize;
use std::collections::BTreeSet;

/// Named safety rules, in evaluation order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRule {
    /// Comfort temperature at or below the extreme-cold threshold
    ExtremeCold,
    /// Comfort temperature above the extreme-heat threshold
    ExtremeHeat,
    /// Any precipitation falling
    Precipitation,
    /// Dark outside (sunrise/sunset with buffers, or hour-of-day fallback)
    Darkness,
    /// Sunny daytime
    SunProtection,
}

/// Whether a named rule fired, for diagnostics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverrideFlag {
    /// The rule evaluated
    pub rule: OverrideRule,
    /// Whether its condition held
    pub fired: bool,
}

/// Result of the safety pass
#[derive(Debug, Clone, Serialize)]
pub struct SafetyOutcome {
    /// Items after forced values were applied
    pub items: ClothingItems,
    /// Every rule with its firing state, in evaluation order
    pub flags: Vec<OverrideFlag>,
    /// Hazard classification surfaced to the caller, when one applies
    pub hazard: Option<HazardLevel>,
    /// Categories a fired rule owns; suggestions must not contradict these
    pub forced_categories: BTreeSet<ClothingCategory>,
}

/// Whether it is dark outside for this observation
///
/// Uses actual sunrise/sunset with buffers when available; otherwise a
/// conservative hour-of-day heuristic on the observation's clock hour.
#[must_use]
pub fn is_dark_outside(weather: &WeatherObservation) -> bool {
    match (weather.sunrise, weather.sunset) {
        (Some(sunrise), Some(sunset)) => {
            let buffer = Duration::minutes(safety::DARKNESS_BUFFER_MIN);
            weather.observed_at < sunrise + buffer || weather.observed_at > sunset - buffer
        }
        _ => {
            let hour = weather.observed_at.hour();
            hour < safety::DARK_BEFORE_HOUR || hour >= safety::DARK_FROM_HOUR
        }
    }
}

/// Whether conditions call for sun protection
///
/// Always false when it is dark; darkness is checked first so sunglasses
/// and headlamp can never both be forced.
#[must_use]
pub fn is_sunny_daytime(weather: &WeatherObservation) -> bool {
    if is_dark_outside(weather) {
        return false;
    }
    weather.cloud_cover_pct < safety::SUN_CLEAR_CLOUD_PCT
        || (weather.cloud_cover_pct < safety::SUN_MODERATE_CLOUD_PCT
            && weather.uv_index >= safety::SUN_MIN_UV)
}

fn force(
    items: &mut ClothingItems,
    forced: &mut BTreeSet<ClothingCategory>,
    category: ClothingCategory,
    value: &str,
) {
    if clothing::category_spec(items.activity(), category).is_none() {
        return;
    }
    forced.insert(category);
    if items.get(category) != Some(value) && items.set(category, value.to_owned()).is_err() {
        forced.remove(&category);
    }
}

/// Keep a category's current value when it already satisfies the rule,
/// otherwise force the category to its warmest configured option.
fn force_warm_coverage(
    items: &mut ClothingItems,
    forced: &mut BTreeSet<ClothingCategory>,
    category: ClothingCategory,
) {
    let activity = items.activity();
    let Some(spec) = clothing::category_spec(activity, category) else {
        return;
    };
    let lightest_rank = spec
        .options
        .iter()
        .map(|o| o.warmth)
        .min()
        .unwrap_or_default();
    let too_light = items.get(category).is_none_or(|value| {
        value == NONE_OPTION
            || clothing::warmth_rank(activity, category, value) == Some(lightest_rank)
    });
    if too_light {
        force(items, forced, category, clothing::warmest_option(spec));
    } else {
        forced.insert(category);
    }
}

/// Apply every safety rule to an assembled item set
#[must_use]
pub fn apply(
    weather: &WeatherObservation,
    comfort_temp_c: f64,
    items: &ClothingItems,
) -> SafetyOutcome {
    let activity = items.activity();
    let config = clothing::for_activity(activity);
    let mut items = items.clone();
    let mut forced = BTreeSet::new();
    let mut hazard = None;

    let extreme_cold = comfort_temp_c <= safety::EXTREME_COLD_C;
    if extreme_cold {
        force_warm_coverage(&mut items, &mut forced, ClothingCategory::Bottoms);
        force_warm_coverage(&mut items, &mut forced, ClothingCategory::Headwear);
        force_warm_coverage(&mut items, &mut forced, ClothingCategory::Gloves);
        hazard = Some(if comfort_temp_c < safety::DANGEROUS_COLD_C {
            HazardLevel::DangerousCold
        } else {
            HazardLevel::ExtremeCold
        });
    }

    let extreme_heat = comfort_temp_c > safety::EXTREME_HEAT_C;
    if extreme_heat {
        for category in [ClothingCategory::Tops, ClothingCategory::Bottoms] {
            if let Some(spec) = clothing::category_spec(activity, category) {
                force(&mut items, &mut forced, category, clothing::lightest_option(spec));
            }
        }
        for category in [ClothingCategory::MidLayer, ClothingCategory::OuterLayer] {
            force(&mut items, &mut forced, category, NONE_OPTION);
        }
        hazard = Some(HazardLevel::ExtremeHeat);
    }

    let raining = weather.is_precipitating();
    if raining {
        if let Some((category, option)) = config.rain_gear {
            // Keep a heavier shell the user already chose; never leave "None"
            if items.get(category).is_none_or(|v| v == NONE_OPTION) {
                force(&mut items, &mut forced, category, option);
            } else {
                forced.insert(category);
            }
        }
    }

    let dark = is_dark_outside(weather);
    if dark {
        if config.supports_light {
            force(&mut items, &mut forced, ClothingCategory::Light, "Headlamp");
        }
        if config.supports_eyewear {
            force(&mut items, &mut forced, ClothingCategory::Eyewear, NONE_OPTION);
        }
    }

    let sunny = is_sunny_daytime(weather);
    if sunny && config.supports_eyewear {
        force(&mut items, &mut forced, ClothingCategory::Eyewear, "Sunglasses");
    }

    let flags = vec![
        OverrideFlag {
            rule: OverrideRule::ExtremeCold,
            fired: extreme_cold,
        },
        OverrideFlag {
            rule: OverrideRule::ExtremeHeat,
            fired: extreme_heat,
        },
        OverrideFlag {
            rule: OverrideRule::Precipitation,
            fired: raining,
        },
        OverrideFlag {
            rule: OverrideRule::Darkness,
            fired: dark,
        },
        OverrideFlag {
            rule: OverrideRule::SunProtection,
            fired: sunny,
        },
    ];

    SafetyOutcome {
        items,
        flags,
        hazard,
        forced_categories: forced,
    }
}
