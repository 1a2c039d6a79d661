// ABOUTME: Scores historical records against current conditions and ranks by similarity
// ABOUTME: Recency-weighted voting weights, similarity floor, same-day exact-match short circuit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Historical similarity matching.
//!
//! Every record's own comfort temperature is recomputed with the same
//! transform applied to current conditions, so comparisons stay on a single
//! axis. Scoring runs in parallel; ranking is deterministic with ties
//! broken by recency (newer wins).

use crate::config::engine::MatchingConfig;
use crate::intelligence::comfort;
use crate::models::{
    ActivityType, ComfortOutcome, HistoricalRecord, ThermalPreference, WeatherObservation,
};
use crate::intelligence::thermal_constants::similarity;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One historical record scored against current conditions
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch {
    /// The matched record
    pub record: HistoricalRecord,
    /// Similarity to current conditions, 0-1
    pub similarity: f64,
    /// Voting weight: similarity scaled by recency and comfort outcome
    pub vote_weight: f64,
    /// The record's own comfort temperature (°C)
    pub comfort_temp_c: f64,
}

/// Result of matching current conditions against the historical set
#[derive(Debug, Clone, Serialize, Default)]
pub struct MatchOutcome {
    /// Qualifying matches, most similar first
    pub matches: Vec<ScoredMatch>,
    /// Same-calendar-day record for the activity, newest when several exist
    pub exact_match: Option<HistoricalRecord>,
}

fn recency_multiplier(age_days: f64, half_life_days: f64) -> f64 {
    0.5 + 0.5 * (-age_days / half_life_days).exp2()
}

fn outcome_factor(outcome: Option<ComfortOutcome>) -> f64 {
    match outcome {
        Some(ComfortOutcome::JustRight | ComfortOutcome::Satisfied) => {
            similarity::COMFORTABLE_OUTCOME_FACTOR
        }
        Some(ComfortOutcome::TooCold | ComfortOutcome::TooHot) => {
            similarity::UNCOMFORTABLE_OUTCOME_FACTOR
        }
        Some(ComfortOutcome::Adjusted) | None => 1.0,
    }
}

fn age_days(now: DateTime<Utc>, recorded_at: DateTime<Utc>) -> f64 {
    let seconds = (now - recorded_at).num_seconds();
    (seconds.max(0) as f64) / 86_400.0
}

fn score_record(
    config: &MatchingConfig,
    current_comfort_c: f64,
    weather: &WeatherObservation,
    record: &HistoricalRecord,
    activity: ActivityType,
    preference: ThermalPreference,
) -> ScoredMatch {
    let record_comfort = comfort::compute_comfort_temperature(
        &record.weather,
        activity,
        preference,
        record.activity_level,
    );

    let temp_delta = (current_comfort_c - record_comfort.comfort_temp_c).abs();
    let temp_component = (1.0 - temp_delta / config.temperature_span_c).max(0.0);

    let precip_component =
        if weather.is_precipitating() == record.weather.is_precipitating() {
            1.0
        } else {
            0.0
        };

    let wind_delta = (weather.wind_speed_kmh - record.weather.wind_speed_kmh).abs();
    let wind_component = 1.0 - (wind_delta / config.wind_span_kmh).min(1.0);

    let score = similarity::TEMPERATURE_WEIGHT * temp_component
        + similarity::PRECIPITATION_WEIGHT * precip_component
        + similarity::WIND_WEIGHT * wind_component;

    let recency = recency_multiplier(
        age_days(weather.observed_at, record.recorded_at),
        config.recency_half_life_days,
    );

    ScoredMatch {
        record: record.clone(),
        similarity: score,
        vote_weight: score * recency * outcome_factor(record.outcome),
        comfort_temp_c: record_comfort.comfort_temp_c,
    }
}

/// Rank the historical set against current conditions
///
/// Returns qualifying matches above the similarity floor, most similar
/// first with recency breaking ties, plus the newest same-calendar-day
/// record when one exists. An empty history yields an empty outcome; the
/// caller falls through to fallback defaults.
#[must_use]
pub fn rank_matches(
    config: &MatchingConfig,
    weather: &WeatherObservation,
    current_comfort_c: f64,
    history: &[HistoricalRecord],
    activity: ActivityType,
    preference: ThermalPreference,
) -> MatchOutcome {
    if history.is_empty() {
        return MatchOutcome::default();
    }

    let today = weather.observed_at.date_naive();
    let exact_match = history
        .iter()
        .filter(|r| r.recorded_at.date_naive() == today)
        .max_by_key(|r| r.recorded_at)
        .cloned();

    let mut matches: Vec<ScoredMatch> = history
        .par_iter()
        .map(|record| score_record(config, current_comfort_c, weather, record, activity, preference))
        .filter(|scored| scored.similarity >= config.similarity_floor)
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| b.record.recorded_at.cmp(&a.record.recorded_at))
    });

    debug!(
        total = history.len(),
        qualifying = matches.len(),
        exact = exact_match.is_some(),
        comfort_temp_c = current_comfort_c,
        "ranked historical matches"
    );

    MatchOutcome {
        matches,
        exact_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recency_multiplier_halves_with_half_life() {
        let fresh = recency_multiplier(0.0, 90.0);
        let aged = recency_multiplier(90.0, 90.0);
        assert!((fresh - 1.0).abs() < 1e-9);
        assert!((aged - 0.75).abs() < 1e-9);
    }

    #[test]
    fn comfortable_outcomes_boost_votes() {
        assert!(outcome_factor(Some(ComfortOutcome::JustRight)) > 1.0);
        assert!(outcome_factor(Some(ComfortOutcome::TooHot)) < 1.0);
        assert!((outcome_factor(None) - 1.0).abs() < f64::EPSILON);
    }
}
