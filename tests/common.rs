// ABOUTME: Shared builders for integration tests
// ABOUTME: Weather observations, clothing items, and historical session records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test builders for `trailwear` integration tests.
//!
//! All fixtures pin the clock to a fixed mid-October noon so darkness and
//! recency behavior is deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use trailwear::models::{
    ActivityType, ClothingCategory, ClothingItems, HistoricalRecord, RecordSource,
    WeatherObservation,
};
use uuid::Uuid;

/// Fixed reference instant: 2024-10-15 12:00 UTC
pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap()
}

/// Calm, overcast daytime weather at the given temperature
///
/// Cloud cover and UV are chosen so neither the sun nor the darkness rule
/// fires, and there is no precipitation.
pub fn calm_weather(temperature_c: f64) -> WeatherObservation {
    WeatherObservation {
        temperature_c,
        feels_like_c: None,
        humidity_pct: 50.0,
        wind_speed_kmh: 8.0,
        precipitation_mm: 0.0,
        cloud_cover_pct: 50.0,
        uv_index: 2.0,
        sunrise: Some(noon() - Duration::hours(5)),
        sunset: Some(noon() + Duration::hours(6)),
        observed_at: noon(),
        forecast: Vec::new(),
    }
}

/// Calm weather with an explicit feels-like temperature
pub fn feels_like_weather(temperature_c: f64, feels_like_c: f64) -> WeatherObservation {
    WeatherObservation {
        feels_like_c: Some(feels_like_c),
        ..calm_weather(temperature_c)
    }
}

/// Validated clothing items from category/value pairs
pub fn items(activity: ActivityType, pairs: &[(ClothingCategory, &str)]) -> ClothingItems {
    ClothingItems::for_activity(activity, pairs.iter().map(|&(c, v)| (c, v))).unwrap()
}

/// A recorded session `days_ago` days before [`noon`]
///
/// The record's weather observation time is aligned with its recorded-at
/// time so recency and exact-match behavior stay coherent.
pub fn session(
    activity: ActivityType,
    days_ago: i64,
    weather: WeatherObservation,
    pairs: &[(ClothingCategory, &str)],
) -> HistoricalRecord {
    let recorded_at = noon() - Duration::days(days_ago);
    HistoricalRecord {
        id: Uuid::new_v4(),
        source: RecordSource::Recorded,
        recorded_at,
        weather: WeatherObservation {
            observed_at: recorded_at,
            ..weather
        },
        items: items(activity, pairs),
        outcome: None,
        notes: None,
        activity_level: None,
    }
}
