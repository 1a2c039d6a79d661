// ABOUTME: Integration tests for suggestion generation and wording strength
// ABOUTME: High-confidence suppression, comfort-delta gating, directive vs tentative phrasing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Suggestion generation tests through the public engine API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calm_weather, items, session};
use trailwear::intelligence::ClothingRecommendationEngine;
use trailwear::models::{
    ActivityType, ClothingCategory, TemperatureUnit, ThermalPreference,
};

#[test]
fn high_confidence_suppresses_suggestions() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);
    let worn = items(ActivityType::Run, &[(ClothingCategory::Tops, "T-Shirt")]);

    let context = engine.suggest(
        &worn,
        &weather,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
        70,
        12,
        &[],
        TemperatureUnit::Celsius,
    );
    assert!(context.is_none());

    let context = engine.suggest(
        &worn,
        &weather,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
        69,
        12,
        &[],
        TemperatureUnit::Celsius,
    );
    assert!(context.is_some());
}

#[test]
fn close_historical_match_yields_no_nudges() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);
    let worn = items(ActivityType::Run, &[(ClothingCategory::Tops, "T-Shirt")]);

    // Similar sessions within a degree of current conditions.
    let history = vec![
        session(ActivityType::Run, 7, calm_weather(9.5), &[]),
        session(ActivityType::Run, 14, calm_weather(10.5), &[]),
    ];

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            50,
            2,
            &history,
            TemperatureUnit::Celsius,
        )
        .unwrap();

    assert!(context.suggestions.is_empty());
    assert!(context.explanation.contains("closely match"));
}

#[test]
fn low_confidence_large_gap_is_directive() {
    let engine = ClothingRecommendationEngine::default();
    // Current comfort sits about 10°C below the historical sessions.
    let weather = calm_weather(0.0);
    let worn = items(
        ActivityType::Run,
        &[
            (ClothingCategory::Tops, "T-Shirt"),
            (ClothingCategory::Bottoms, "Shorts"),
        ],
    );
    let history = vec![
        session(ActivityType::Run, 7, calm_weather(10.0), &[]),
        session(ActivityType::Run, 21, calm_weather(10.0), &[]),
    ];

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            35,
            2,
            &history,
            TemperatureUnit::Celsius,
        )
        .unwrap();

    assert!(!context.suggestions.is_empty());
    assert!(context.suggestions.len() <= 3);
    for suggestion in &context.suggestions {
        assert!(
            suggestion.reason.starts_with("Add")
                || suggestion.reason.starts_with("Use")
                || suggestion.reason.starts_with("Remove"),
            "expected directive wording, got: {}",
            suggestion.reason
        );
        assert!(!suggestion.reason.contains("Consider"));
    }
    assert!(context.explanation.starts_with("Low confidence"));
    assert!(context.explanation.contains("colder"));
}

#[test]
fn medium_confidence_large_gap_is_still_directive() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(0.0);
    let worn = items(ActivityType::Run, &[(ClothingCategory::Tops, "T-Shirt")]);
    let history = vec![session(ActivityType::Run, 7, calm_weather(10.0), &[])];

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            55,
            1,
            &history,
            TemperatureUnit::Celsius,
        )
        .unwrap();

    for suggestion in &context.suggestions {
        assert!(!suggestion.reason.contains("Consider"));
    }
    assert!(context.explanation.starts_with("Moderate confidence"));
}

#[test]
fn medium_confidence_small_gap_is_tentative() {
    let engine = ClothingRecommendationEngine::default();
    // About 3°C warmer than the historical sessions: above the 2°C gate,
    // below the 5-unit directive threshold in Celsius.
    let weather = calm_weather(10.0);
    let worn = items(
        ActivityType::Run,
        &[(ClothingCategory::Tops, "Thermal Top")],
    );
    let history = vec![session(ActivityType::Run, 7, calm_weather(7.0), &[])];

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            55,
            1,
            &history,
            TemperatureUnit::Celsius,
        )
        .unwrap();

    assert!(!context.suggestions.is_empty());
    for suggestion in &context.suggestions {
        assert!(
            suggestion.reason.starts_with("Consider"),
            "expected tentative wording, got: {}",
            suggestion.reason
        );
    }
}

#[test]
fn fahrenheit_display_units_gate_the_directive_threshold() {
    let engine = ClothingRecommendationEngine::default();
    // The same 3°C gap reads 5.4°F, crossing the directive threshold.
    let weather = calm_weather(10.0);
    let worn = items(
        ActivityType::Run,
        &[(ClothingCategory::Tops, "Thermal Top")],
    );
    let history = vec![session(ActivityType::Run, 7, calm_weather(7.0), &[])];

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            55,
            1,
            &history,
            TemperatureUnit::Fahrenheit,
        )
        .unwrap();

    for suggestion in &context.suggestions {
        assert!(!suggestion.reason.contains("Consider"));
        assert!(suggestion.reason.contains("°F"));
    }
}

#[test]
fn no_history_mild_conditions_explains_itself() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);
    let worn = items(ActivityType::Run, &[(ClothingCategory::Tops, "T-Shirt")]);

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
            0,
            0,
            &[],
            TemperatureUnit::Celsius,
        )
        .unwrap();

    assert!(context.suggestions.is_empty());
    assert!(context.explanation.contains("Not enough history"));
}

#[test]
fn no_history_very_cold_conditions_is_directive() {
    let engine = ClothingRecommendationEngine::default();
    // Walk at -10°C: comfort -7.2, below the very-cold threshold.
    let weather = calm_weather(-10.0);
    let worn = items(ActivityType::Walk, &[(ClothingCategory::Tops, "T-Shirt")]);

    let context = engine
        .suggest(
            &worn,
            &weather,
            ActivityType::Walk,
            ThermalPreference::Average,
            None,
            0,
            0,
            &[],
            TemperatureUnit::Celsius,
        )
        .unwrap();

    assert!(!context.suggestions.is_empty());
    for suggestion in &context.suggestions {
        assert!(!suggestion.reason.contains("Consider"));
        assert!(suggestion.reason.contains("very cold"));
    }
}
