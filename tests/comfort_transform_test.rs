// ABOUTME: Integration tests for the comfort-temperature transform
// ABOUTME: Exact numeric agreement for every activity, preference, and level input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Comfort-transform tests against hand-computed expected values.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calm_weather, feels_like_weather};
use trailwear::intelligence::{ClothingRecommendationEngine, ComfortBand};
use trailwear::models::{
    ActivityLevel, ActivityType, Intensity, SessionDuration, ThermalPreference,
};

const TOLERANCE: f64 = 1e-9;

#[test]
fn every_activity_applies_its_constants() {
    // 10°C actual, 6°C feels-like: delta -4, inside the clamp.
    // Expected = 10 + B + w * (-4)
    let cases = [
        (ActivityType::Run, 10.0 + 8.3 + 0.60 * -4.0),
        (ActivityType::TrailRun, 10.0 + 7.2 + 0.60 * -4.0),
        (ActivityType::Hike, 10.0 + 4.4 + 0.70 * -4.0),
        (ActivityType::Walk, 10.0 + 2.8 + 0.80 * -4.0),
        (ActivityType::Ride, 10.0 + 3.3 + 0.90 * -4.0),
        (ActivityType::Snowshoe, 10.0 + 6.1 + 0.70 * -4.0),
        (ActivityType::CrossCountrySki, 10.0 + 7.8 + 0.70 * -4.0),
    ];

    let engine = ClothingRecommendationEngine::default();
    let weather = feels_like_weather(10.0, 6.0);
    for (activity, expected) in cases {
        let estimate = engine.compute_comfort_temperature(
            &weather,
            activity,
            ThermalPreference::Average,
            None,
        );
        assert!(
            (estimate.comfort_temp_c - expected).abs() < TOLERANCE,
            "{activity}: got {}, expected {expected}",
            estimate.comfort_temp_c
        );
    }
}

#[test]
fn preference_shifts_by_fixed_offset() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(5.0);

    let average = engine
        .compute_comfort_temperature(&weather, ActivityType::Run, ThermalPreference::Average, None)
        .comfort_temp_c;
    let cold = engine
        .compute_comfort_temperature(&weather, ActivityType::Run, ThermalPreference::Cold, None)
        .comfort_temp_c;
    let warm = engine
        .compute_comfort_temperature(&weather, ActivityType::Run, ThermalPreference::Warm, None)
        .comfort_temp_c;

    assert!((cold - average - 4.4).abs() < TOLERANCE);
    assert!((warm - average + 4.4).abs() < TOLERANCE);
}

#[test]
fn level_adjustments_compose() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(5.0);
    let baseline = engine
        .compute_comfort_temperature(&weather, ActivityType::Hike, ThermalPreference::Average, None)
        .comfort_temp_c;

    let low_long = ActivityLevel {
        intensity: Intensity::Low,
        duration: SessionDuration::Long,
    };
    let adjusted = engine
        .compute_comfort_temperature(
            &weather,
            ActivityType::Hike,
            ThermalPreference::Average,
            Some(low_long),
        )
        .comfort_temp_c;
    assert!((adjusted - baseline - (-1.7 + 1.1)).abs() < TOLERANCE);

    let high_short = ActivityLevel {
        intensity: Intensity::High,
        duration: SessionDuration::Short,
    };
    let adjusted = engine
        .compute_comfort_temperature(
            &weather,
            ActivityType::Hike,
            ThermalPreference::Average,
            Some(high_short),
        )
        .comfort_temp_c;
    assert!((adjusted - baseline - 2.8).abs() < TOLERANCE);
}

#[test]
fn feels_like_delta_clamps_at_both_ends() {
    let engine = ClothingRecommendationEngine::default();

    // Raw delta -20 clamps to -15
    let weather = feels_like_weather(0.0, -20.0);
    let estimate = engine.compute_comfort_temperature(
        &weather,
        ActivityType::Walk,
        ThermalPreference::Average,
        None,
    );
    assert!((estimate.comfort_temp_c - (0.0 + 2.8 + 0.80 * -15.0)).abs() < TOLERANCE);

    // Raw delta +12 clamps to +8
    let weather = feels_like_weather(20.0, 32.0);
    let estimate = engine.compute_comfort_temperature(
        &weather,
        ActivityType::Walk,
        ThermalPreference::Average,
        None,
    );
    assert!((estimate.comfort_temp_c - (20.0 + 2.8 + 0.80 * 8.0)).abs() < TOLERANCE);
}

#[test]
fn missing_feels_like_contributes_nothing() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(-5.0);
    let estimate = engine.compute_comfort_temperature(
        &weather,
        ActivityType::Ride,
        ThermalPreference::Average,
        None,
    );
    assert!((estimate.comfort_temp_c - (-5.0 + 3.3)).abs() < TOLERANCE);
}

#[test]
fn band_tracks_the_comfort_temperature() {
    let engine = ClothingRecommendationEngine::default();

    // Run at 11°C: comfort 19.3, warm
    let estimate = engine.compute_comfort_temperature(
        &calm_weather(11.0),
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );
    assert_eq!(estimate.band, ComfortBand::Warm);

    // Walk at -15°C: comfort -12.2, bitter
    let estimate = engine.compute_comfort_temperature(
        &calm_weather(-15.0),
        ActivityType::Walk,
        ThermalPreference::Average,
        None,
    );
    assert_eq!(estimate.band, ComfortBand::Bitter);
}
