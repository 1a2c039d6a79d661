// ABOUTME: Orchestrates the recommendation pipeline from weather and history to clothing
// ABOUTME: Routes between recent-match, voted, and fallback paths; assembles DebugInfo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Clothing recommendation engine.
//!
//! A pure, synchronous pipeline: comfort transform, historical matching,
//! per-category voting, confidence scoring, safety overrides, fallback
//! defaults, and suggestion generation. The engine holds no cache or
//! session state; callers may re-invoke with fresh inputs at any time.

use crate::config::EngineConfig;
use crate::intelligence::clothing_voter::{self, VoteTally};
use crate::intelligence::comfort::{self, ComfortBreakdown, ComfortEstimate};
use crate::intelligence::history_matcher;
use crate::intelligence::safety_overrides::{self, OverrideFlag};
use crate::intelligence::{confidence, fallback, suggestion_generator};
use crate::models::{
    ActivityLevel, ActivityType, ClothingCategory, ClothingItems, HistoricalRecord,
    Recommendation, RecommendationSource, SuggestionContext, TemperatureUnit, ThermalPreference,
    WeatherObservation,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Scored-match summary captured in [`DebugInfo`]
#[derive(Debug, Clone, Serialize)]
pub struct MatchDebug {
    /// Record identity
    pub record_id: Uuid,
    /// Similarity to current conditions
    pub similarity: f64,
    /// Vote weight (similarity scaled by recency and outcome)
    pub vote_weight: f64,
    /// The record's own comfort temperature (°C)
    pub comfort_temp_c: f64,
}

/// Every intermediate value behind a recommendation
///
/// Always derived from the same computation that produced the
/// [`Recommendation`]; it never recomputes independently.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    /// Input weather snapshot
    pub weather: WeatherObservation,
    /// Comfort-transform breakdown
    pub comfort: ComfortBreakdown,
    /// Scored matches, most similar first
    pub matches: Vec<MatchDebug>,
    /// Per-category vote tallies
    pub votes: BTreeMap<ClothingCategory, Vec<VoteTally>>,
    /// Safety rule firing states, in evaluation order
    pub overrides: Vec<OverrideFlag>,
    /// Which path produced the clothing choices
    pub source: RecommendationSource,
}

/// The recommendation engine
///
/// Holds tuning configuration only; every method is a pure function of its
/// arguments and that configuration.
#[derive(Debug, Clone)]
pub struct ClothingRecommendationEngine {
    config: EngineConfig,
}

impl Default for ClothingRecommendationEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::global().clone(),
        }
    }
}

impl ClothingRecommendationEngine {
    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Comfort temperature and band for current conditions
    #[must_use]
    pub fn compute_comfort_temperature(
        &self,
        weather: &WeatherObservation,
        activity: ActivityType,
        preference: ThermalPreference,
        level: Option<ActivityLevel>,
    ) -> ComfortEstimate {
        comfort::compute_comfort_temperature(weather, activity, preference, level)
    }

    /// Recommend clothing for current conditions
    #[must_use]
    pub fn recommend(
        &self,
        weather: &WeatherObservation,
        history: &[HistoricalRecord],
        activity: ActivityType,
        preference: ThermalPreference,
        level: Option<ActivityLevel>,
    ) -> Recommendation {
        self.recommend_with_debug(weather, history, activity, preference, level)
            .0
    }

    /// Recommend clothing and capture every intermediate value
    #[must_use]
    pub fn recommend_with_debug(
        &self,
        weather: &WeatherObservation,
        history: &[HistoricalRecord],
        activity: ActivityType,
        preference: ThermalPreference,
        level: Option<ActivityLevel>,
    ) -> (Recommendation, DebugInfo) {
        let breakdown = comfort::compute_comfort_breakdown(weather, activity, preference, level);

        let outcome = history_matcher::rank_matches(
            &self.config.matching,
            weather,
            breakdown.comfort_temp_c,
            history,
            activity,
            preference,
        );

        let votes = clothing_voter::tally_votes(activity, &outcome.matches);
        let defaults = fallback::fallback_items(weather, activity, preference, level);

        let (assembled, scored_confidence, source) = match &outcome.exact_match {
            Some(exact) => (
                merge(exact.items.iter(), &defaults),
                self.config.confidence.recent_match_confidence,
                RecommendationSource::RecentMatch,
            ),
            None if outcome.matches.is_empty() => {
                (defaults.clone(), 0, RecommendationSource::FallbackDefaults)
            }
            None => (
                merge(votes.winners.iter().map(|(c, v)| (*c, v.as_str())), &defaults),
                confidence::score(&self.config.confidence, &outcome.matches),
                RecommendationSource::SimilarSessions,
            ),
        };

        let safety = safety_overrides::apply(weather, breakdown.comfort_temp_c, &assembled);

        let similar_conditions: Vec<HistoricalRecord> = outcome
            .matches
            .iter()
            .take(self.config.matching.max_similar_sessions)
            .map(|m| m.record.clone())
            .collect();

        debug!(
            activity = %activity,
            comfort_temp_c = breakdown.comfort_temp_c,
            confidence = scored_confidence,
            source = ?source,
            hazard = ?safety.hazard,
            "assembled recommendation"
        );

        let recommendation = Recommendation {
            items: safety.items,
            confidence: scored_confidence,
            matching_runs: outcome.matches.len(),
            total_runs: history.len(),
            similar_conditions,
            source,
            hazard: safety.hazard,
        };

        let debug_info = DebugInfo {
            weather: weather.clone(),
            comfort: breakdown,
            matches: outcome
                .matches
                .iter()
                .map(|m| MatchDebug {
                    record_id: m.record.id,
                    similarity: m.similarity,
                    vote_weight: m.vote_weight,
                    comfort_temp_c: m.comfort_temp_c,
                })
                .collect(),
            votes: votes.tallies,
            overrides: safety.flags,
            source,
        };

        (recommendation, debug_info)
    }

    /// Banded default clothing, finished through the safety pass
    #[must_use]
    pub fn fallback(
        &self,
        weather: &WeatherObservation,
        activity: ActivityType,
        preference: ThermalPreference,
        level: Option<ActivityLevel>,
    ) -> ClothingItems {
        let estimate = comfort::compute_comfort_temperature(weather, activity, preference, level);
        let items = fallback::fallback_items(weather, activity, preference, level);
        safety_overrides::apply(weather, estimate.comfort_temp_c, &items).items
    }

    /// Suggestions for a low- or medium-confidence recommendation
    ///
    /// Returns `None` when confidence is at or above the high threshold.
    #[must_use]
    #[allow(clippy::too_many_arguments)] // Mirrors the caller-facing contract
    pub fn suggest(
        &self,
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
        suggestion_generator::generate(
            &self.config,
            items,
            weather,
            activity,
            preference,
            level,
            confidence,
            matching_runs,
            similar,
            unit,
        )
    }
}

/// Overlay chosen values onto the fallback defaults
///
/// Categories the chosen set does not cover keep their default, so a
/// recent match or vote outcome that never saw a category still produces
/// a complete recommendation.
fn merge<'a, I>(chosen: I, defaults: &ClothingItems) -> ClothingItems
where
    I: Iterator<Item = (ClothingCategory, &'a str)>,
{
    let mut items = defaults.clone();
    for (category, value) in chosen {
        // Chosen values come from records and votes already validated
        // against this activity's categories
        if items.set(category, value.to_owned()).is_err() {
            debug!(category = %category, "skipping value for unconfigured category");
        }
    }
    items
}
