// ABOUTME: Integration tests for the end-to-end recommendation pipeline
// ABOUTME: Fallback routing, voting, exact-match short circuit, and debug capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! End-to-end recommendation tests through the public engine API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calm_weather, session};
use trailwear::intelligence::{safety_overrides, ClothingRecommendationEngine};
use trailwear::models::{
    ActivityType, ClothingCategory, RecommendationSource, ThermalPreference,
};

#[test]
fn empty_history_falls_back_to_defaults() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);

    let rec = engine.recommend(
        &weather,
        &[],
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(rec.source, RecommendationSource::FallbackDefaults);
    assert_eq!(rec.confidence, 0);
    assert_eq!(rec.matching_runs, 0);
    assert_eq!(rec.total_runs, 0);
    assert!(rec.similar_conditions.is_empty());
    assert!(rec.hazard.is_none());

    let fallback = engine.fallback(&weather, ActivityType::Run, ThermalPreference::Average, None);
    assert_eq!(rec.items, fallback);
}

#[test]
fn votes_prefer_the_newer_of_equally_similar_sessions() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);

    let history = vec![
        session(
            ActivityType::Run,
            30,
            calm_weather(10.0),
            &[(ClothingCategory::Tops, "Long Sleeve")],
        ),
        session(
            ActivityType::Run,
            5,
            calm_weather(10.0),
            &[(ClothingCategory::Tops, "Tank")],
        ),
    ];

    let (rec, debug) = engine.recommend_with_debug(
        &weather,
        &history,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(rec.source, RecommendationSource::SimilarSessions);
    assert_eq!(rec.matching_runs, 2);
    assert_eq!(rec.total_runs, 2);
    // Identical conditions tie on similarity; the newer session ranks first
    // and carries the heavier recency-weighted vote.
    assert_eq!(rec.items.get(ClothingCategory::Tops), Some("Tank"));
    assert!(debug.matches[0].vote_weight > debug.matches[1].vote_weight);
}

#[test]
fn dissimilar_sessions_are_filtered_out() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(25.0);

    // A hard-winter session: comfort delta far beyond the temperature span.
    let history = vec![session(
        ActivityType::Run,
        40,
        calm_weather(-12.0),
        &[(ClothingCategory::Tops, "Thermal Top")],
    )];

    let rec = engine.recommend(
        &weather,
        &history,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(rec.source, RecommendationSource::FallbackDefaults);
    assert_eq!(rec.matching_runs, 0);
    assert_eq!(rec.total_runs, 1);
}

#[test]
fn same_day_session_pins_confidence_and_wins_outright() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);

    let history = vec![session(
        ActivityType::Run,
        0,
        calm_weather(10.0),
        &[
            (ClothingCategory::Tops, "Long Sleeve"),
            (ClothingCategory::Bottoms, "Tights"),
        ],
    )];

    let rec = engine.recommend(
        &weather,
        &history,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(rec.source, RecommendationSource::RecentMatch);
    assert_eq!(rec.confidence, 95);
    assert_eq!(rec.items.get(ClothingCategory::Tops), Some("Long Sleeve"));
    assert_eq!(rec.items.get(ClothingCategory::Bottoms), Some("Tights"));
    // Categories the record never covered are filled from defaults.
    assert!(rec.items.get(ClothingCategory::Headwear).is_some());
}

#[test]
fn rain_forces_the_shell_over_voted_items() {
    let engine = ClothingRecommendationEngine::default();
    let mut weather = calm_weather(10.0);
    weather.precipitation_mm = 1.2;

    let rec = engine.recommend(
        &weather,
        &[],
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(
        rec.items.get(ClothingCategory::OuterLayer),
        Some("Rain Jacket")
    );
}

#[test]
fn debug_info_mirrors_the_recommendation() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(4.0);

    let history = vec![
        session(
            ActivityType::Hike,
            10,
            calm_weather(5.0),
            &[(ClothingCategory::MidLayer, "Fleece")],
        ),
        session(
            ActivityType::Hike,
            20,
            calm_weather(3.0),
            &[(ClothingCategory::MidLayer, "Fleece")],
        ),
    ];

    let (rec, debug) = engine.recommend_with_debug(
        &weather,
        &history,
        ActivityType::Hike,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(debug.source, rec.source);
    assert_eq!(debug.matches.len(), rec.matching_runs);
    assert_eq!(debug.overrides.len(), 5);
    assert!(debug
        .votes
        .get(&ClothingCategory::MidLayer)
        .is_some_and(|tallies| tallies.iter().any(|t| t.value == "Fleece")));
    // Matches are ordered most similar first.
    for pair in debug.matches.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn similar_conditions_are_capped() {
    let engine = ClothingRecommendationEngine::default();
    let weather = calm_weather(10.0);

    let history: Vec<_> = (1..=15)
        .map(|d| {
            session(
                ActivityType::Run,
                d,
                calm_weather(10.0),
                &[(ClothingCategory::Tops, "T-Shirt")],
            )
        })
        .collect();

    let rec = engine.recommend(
        &weather,
        &history,
        ActivityType::Run,
        ThermalPreference::Average,
        None,
    );

    assert_eq!(rec.matching_runs, 15);
    assert_eq!(rec.similar_conditions.len(), 10);
}

#[test]
fn safety_pass_is_idempotent_through_fallback() {
    let engine = ClothingRecommendationEngine::default();
    let mut weather = calm_weather(-20.0);
    weather.precipitation_mm = 0.4;

    let once = engine.fallback(&weather, ActivityType::Hike, ThermalPreference::Average, None);
    let comfort = engine
        .compute_comfort_temperature(&weather, ActivityType::Hike, ThermalPreference::Average, None)
        .comfort_temp_c;

    // Reapplying the safety pass to its own output changes nothing.
    let again = safety_overrides::apply(&weather, comfort, &once);
    assert_eq!(once, again.items);
}
