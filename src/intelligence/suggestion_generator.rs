// ABOUTME: Generates low-confidence per-category clothing suggestions with graded wording
// ABOUTME: Compares current choices against historical comfort norms or fallback defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Suggestion generation.
//!
//! High-confidence recommendations are never second-guessed: the generator
//! returns `None` at or above the high-confidence threshold. Below it, the
//! current clothing is compared against the mean comfort temperature of
//! similar sessions (or absolute thresholds when no history is available)
//! and per-category add/remove/upgrade nudges are produced. Wording is
//! directive at low confidence or large comfort differences, tentative
//! otherwise. Suggestions never contradict a fired safety override.

use crate::config::clothing::{self, LexicalWarmth, NONE_OPTION};
use crate::config::EngineConfig;
use crate::intelligence::thermal_constants::suggestions as tunables;
use crate::intelligence::{comfort, fallback, safety_overrides};
use crate::models::{
    ActivityLevel, ActivityType, ClothingCategory, ClothingItems, HistoricalRecord, Suggestion,
    SuggestionContext, TemperatureUnit, ThermalPreference, WeatherObservation,
};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// Which way the clothing should move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Warmer,
    Cooler,
}

/// How strongly to word a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strength {
    Directive,
    Tentative,
}

/// Generate suggestions for a low- or medium-confidence recommendation
///
/// Returns `None` when confidence is at or above the high threshold.
/// Otherwise the context always carries an explanation; the suggestion list
/// may be empty when current choices already fit the evidence.
#[must_use]
#[allow(clippy::too_many_arguments)] // Mirrors the caller-facing contract
pub fn generate(
    config: &EngineConfig,
    items: &ClothingItems,
    weather: &WeatherObservation,
    activity: ActivityType,
    preference: ThermalPreference,
    level: Option<ActivityLevel>,
    confidence: u8,
    matching_runs: usize,
    similar: &[HistoricalRecord],
    unit: TemperatureUnit,
) -> Option<SuggestionContext> {
    if confidence >= config.confidence.high_threshold {
        return None;
    }

    let current = comfort::compute_comfort_temperature(weather, activity, preference, level);
    let safety = safety_overrides::apply(weather, current.comfort_temp_c, items);
    let defaults = fallback::fallback_items(weather, activity, preference, level);

    let (suggestions, explanation) = if similar.is_empty() {
        absolute_path(
            config,
            items,
            &defaults,
            &safety.forced_categories,
            activity,
            current.comfort_temp_c,
            confidence,
        )
    } else {
        comfort_path(
            config,
            items,
            &defaults,
            &safety.forced_categories,
            activity,
            preference,
            current.comfort_temp_c,
            similar,
            confidence,
            matching_runs,
            unit,
        )
    };

    debug!(
        confidence,
        matching_runs,
        count = suggestions.len(),
        "generated clothing suggestions"
    );

    Some(SuggestionContext {
        suggestions,
        explanation,
        confidence,
        matching_runs,
    })
}

/// Compare against the mean comfort temperature of similar sessions
#[allow(clippy::too_many_arguments)]
fn comfort_path(
    config: &EngineConfig,
    items: &ClothingItems,
    defaults: &ClothingItems,
    forced: &BTreeSet<ClothingCategory>,
    activity: ActivityType,
    preference: ThermalPreference,
    current_comfort_c: f64,
    similar: &[HistoricalRecord],
    confidence: u8,
    matching_runs: usize,
    unit: TemperatureUnit,
) -> (Vec<Suggestion>, String) {
    let mean_c = similar
        .iter()
        .map(|r| {
            comfort::compute_comfort_temperature(&r.weather, activity, preference, r.activity_level)
                .comfort_temp_c
        })
        .sum::<f64>()
        / similar.len() as f64;
    let diff_c = current_comfort_c - mean_c;
    let display_magnitude = unit.delta_from_celsius(diff_c).abs();

    let tier_text = if confidence < config.confidence.low_threshold {
        "Low confidence"
    } else {
        "Moderate confidence"
    };

    if diff_c.abs() < config.suggestions.comfort_delta_threshold_c {
        let explanation = format!(
            "{tier_text} ({confidence}%) from {matching_runs} similar sessions; \
             conditions closely match those sessions."
        );
        return (Vec::new(), explanation);
    }

    let direction = if diff_c < 0.0 {
        Direction::Warmer
    } else {
        Direction::Cooler
    };
    let strength = if confidence < config.confidence.low_threshold
        || display_magnitude >= config.suggestions.directive_delta_display
    {
        Strength::Directive
    } else {
        Strength::Tentative
    };

    let comparison = direction_word(direction);
    let detail = format!(
        "conditions feel about {:.0}{} {comparison} than your similar sessions",
        display_magnitude.round(),
        unit.suffix()
    );

    let suggestions = build_suggestions(
        config, items, defaults, forced, activity, direction, strength, &detail,
    );

    let explanation = format!(
        "{tier_text} ({confidence}%) from {matching_runs} similar sessions; \
         conditions feel about {:.0}{} {comparison} than those sessions.",
        display_magnitude.round(),
        unit.suffix()
    );

    (suggestions, explanation)
}

/// Absolute-threshold reasoning when no similar sessions exist
fn absolute_path(
    config: &EngineConfig,
    items: &ClothingItems,
    defaults: &ClothingItems,
    forced: &BTreeSet<ClothingCategory>,
    activity: ActivityType,
    current_comfort_c: f64,
    confidence: u8,
) -> (Vec<Suggestion>, String) {
    if current_comfort_c < tunables::VERY_COLD_CONDITIONS_C {
        let suggestions = build_suggestions(
            config,
            items,
            defaults,
            forced,
            activity,
            Direction::Warmer,
            Strength::Directive,
            "it will be very cold out there",
        );
        let explanation =
            "No comparable sessions recorded; defaults reflect very cold conditions.".to_owned();
        (suggestions, explanation)
    } else if current_comfort_c < tunables::COLD_CONDITIONS_C {
        let strength = if confidence < config.confidence.low_threshold {
            Strength::Directive
        } else {
            Strength::Tentative
        };
        let suggestions = build_suggestions(
            config,
            items,
            defaults,
            forced,
            activity,
            Direction::Warmer,
            strength,
            "it will be cold out there",
        );
        let explanation =
            "No comparable sessions recorded; defaults reflect cold conditions.".to_owned();
        (suggestions, explanation)
    } else {
        (
            Vec::new(),
            "Not enough history to assess this recommendation yet.".to_owned(),
        )
    }
}

const fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Warmer => "colder",
        Direction::Cooler => "warmer",
    }
}

#[allow(clippy::too_many_arguments)]
fn build_suggestions(
    config: &EngineConfig,
    items: &ClothingItems,
    defaults: &ClothingItems,
    forced: &BTreeSet<ClothingCategory>,
    activity: ActivityType,
    direction: Direction,
    strength: Strength,
    detail: &str,
) -> Vec<Suggestion> {
    let warmer = direction == Direction::Warmer;
    let mut suggestions = Vec::new();

    for category in clothing::suggestion_categories(activity, warmer) {
        if suggestions.len() >= config.suggestions.max_suggestions {
            break;
        }
        if forced.contains(&category) {
            continue;
        }
        if let Some(suggestion) =
            suggest_for_category(items, defaults, activity, category, direction, strength, detail)
        {
            suggestions.push(suggestion);
        }
    }

    suggestions
}

fn suggest_for_category(
    items: &ClothingItems,
    defaults: &ClothingItems,
    activity: ActivityType,
    category: ClothingCategory,
    direction: Direction,
    strength: Strength,
    detail: &str,
) -> Option<Suggestion> {
    let current = items.get(category).unwrap_or(NONE_OPTION);
    let suggested = pick_target(defaults, activity, category, current, direction)?;
    if suggested == current {
        return None;
    }

    let reason = phrase(strength, current, &suggested, detail);

    Some(Suggestion {
        category,
        category_label: category.label().to_owned(),
        current: items.get(category).map(str::to_owned),
        suggested,
        reason,
    })
}

/// Choose the value to suggest for a category
///
/// The fallback default wins when it is unambiguously warmer/cooler than
/// the current value; otherwise the nearest qualifying option in the
/// activity's ordered list is used. Custom values anchor to the list edge
/// matching their lexical class; unclassifiable values yield nothing.
fn pick_target(
    defaults: &ClothingItems,
    activity: ActivityType,
    category: ClothingCategory,
    current: &str,
    direction: Direction,
) -> Option<String> {
    let wanted = match direction {
        Direction::Warmer => Ordering::Greater,
        Direction::Cooler => Ordering::Less,
    };

    if let Some(default_value) = defaults.get(category) {
        if clothing::compare_warmth(activity, category, default_value, current) == Some(wanted) {
            return Some(default_value.to_owned());
        }
    }

    let spec = clothing::category_spec(activity, category)?;
    let current_rank = clothing::warmth_rank(activity, category, current).or_else(|| {
        match clothing::lexical_warmth(current)? {
            LexicalWarmth::Cold => spec.options.iter().map(|o| o.warmth).min(),
            LexicalWarmth::Warm => spec.options.iter().map(|o| o.warmth).max(),
        }
    })?;

    match direction {
        Direction::Warmer => spec
            .options
            .iter()
            .filter(|o| o.warmth > current_rank)
            .min_by_key(|o| o.warmth),
        Direction::Cooler => spec
            .options
            .iter()
            .filter(|o| o.warmth < current_rank)
            .max_by_key(|o| o.warmth),
    }
    .map(|o| o.name.to_owned())
}

fn phrase(strength: Strength, current: &str, suggested: &str, detail: &str) -> String {
    match strength {
        Strength::Directive => {
            if current == NONE_OPTION {
                format!("Add {suggested}: {detail}.")
            } else if suggested == NONE_OPTION {
                format!("Remove your {current}: {detail}.")
            } else {
                format!("Use {suggested} instead of {current}: {detail}.")
            }
        }
        Strength::Tentative => {
            if current == NONE_OPTION {
                format!("Consider adding {suggested}: {detail}.")
            } else if suggested == NONE_OPTION {
                format!("Consider removing your {current}: {detail}.")
            } else {
                format!("Consider switching to {suggested}: {detail}.")
            }
        }
    }
}
