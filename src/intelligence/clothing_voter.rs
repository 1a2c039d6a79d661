// ABOUTME: Tallies weighted per-category clothing votes across historical matches
// ABOUTME: Winner is the highest weighted value; ties break to the most recent wear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Per-category clothing voting.
//!
//! Each match contributes its worn value per category, weighted by the
//! match's vote weight (similarity scaled by recency and outcome). The full
//! tallies are retained for diagnostics; categories no match voted on fall
//! through to fallback defaults downstream.

use crate::config::clothing;
use crate::intelligence::history_matcher::ScoredMatch;
use crate::models::{ActivityType, ClothingCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulated votes for one value within a category
#[derive(Debug, Clone, Serialize)]
pub struct VoteTally {
    /// The option value voted for
    pub value: String,
    /// Total vote weight across matches
    pub weight: f64,
    /// Number of matches that wore the value
    pub count: usize,
    /// Most recent time the value was worn
    pub last_worn: DateTime<Utc>,
}

/// Per-category winners and the full vote breakdown
#[derive(Debug, Clone, Serialize, Default)]
pub struct VoteOutcome {
    /// Winning value per category, for categories that received votes
    pub winners: BTreeMap<ClothingCategory, String>,
    /// Full tallies per category, sorted by descending weight
    pub tallies: BTreeMap<ClothingCategory, Vec<VoteTally>>,
}

/// Tally weighted votes across the ranked matches
#[must_use]
pub fn tally_votes(activity: ActivityType, matches: &[ScoredMatch]) -> VoteOutcome {
    let mut tallies: BTreeMap<ClothingCategory, Vec<VoteTally>> = BTreeMap::new();

    for scored in matches {
        for (category, value) in scored.record.items.iter() {
            if clothing::category_spec(activity, category).is_none() {
                continue;
            }
            let entries = tallies.entry(category).or_default();
            if let Some(tally) = entries.iter_mut().find(|t| t.value == value) {
                tally.weight += scored.vote_weight;
                tally.count += 1;
                tally.last_worn = tally.last_worn.max(scored.record.recorded_at);
            } else {
                entries.push(VoteTally {
                    value: value.to_owned(),
                    weight: scored.vote_weight,
                    count: 1,
                    last_worn: scored.record.recorded_at,
                });
            }
        }
    }

    let mut winners = BTreeMap::new();
    for (category, entries) in &mut tallies {
        entries.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| b.last_worn.cmp(&a.last_worn))
        });
        if let Some(top) = entries.first() {
            winners.insert(*category, top.value.clone());
        }
    }

    VoteOutcome { winners, tallies }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::{ClothingItems, HistoricalRecord, RecordSource, WeatherObservation};
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn scored(days_ago: i64, tops: &str, vote_weight: f64) -> ScoredMatch {
        let recorded_at = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap()
            - Duration::days(days_ago);
        let record = HistoricalRecord {
            id: Uuid::new_v4(),
            source: RecordSource::Recorded,
            recorded_at,
            weather: WeatherObservation {
                temperature_c: 10.0,
                feels_like_c: None,
                humidity_pct: 50.0,
                wind_speed_kmh: 8.0,
                precipitation_mm: 0.0,
                cloud_cover_pct: 50.0,
                uv_index: 2.0,
                sunrise: None,
                sunset: None,
                observed_at: recorded_at,
                forecast: Vec::new(),
            },
            items: ClothingItems::for_activity(
                ActivityType::Run,
                [(ClothingCategory::Tops, tops)],
            )
            .unwrap(),
            outcome: None,
            notes: None,
            activity_level: None,
        };
        ScoredMatch {
            record,
            similarity: 0.9,
            vote_weight,
            comfort_temp_c: 18.3,
        }
    }

    #[test]
    fn heavier_weight_wins_the_category() {
        let matches = vec![scored(5, "Tank", 0.6), scored(30, "Long Sleeve", 0.9)];
        let outcome = tally_votes(ActivityType::Run, &matches);
        assert_eq!(
            outcome.winners.get(&ClothingCategory::Tops).map(String::as_str),
            Some("Long Sleeve")
        );
    }

    #[test]
    fn repeat_wears_accumulate_weight() {
        let matches = vec![
            scored(5, "Tank", 0.5),
            scored(12, "T-Shirt", 0.4),
            scored(20, "T-Shirt", 0.4),
        ];
        let outcome = tally_votes(ActivityType::Run, &matches);
        assert_eq!(
            outcome.winners.get(&ClothingCategory::Tops).map(String::as_str),
            Some("T-Shirt")
        );
        let tallies = outcome.tallies.get(&ClothingCategory::Tops).unwrap();
        assert_eq!(tallies[0].count, 2);
    }

    #[test]
    fn equal_weights_break_to_the_most_recent_wear() {
        // Uniform vote weights, as when every session reported the same
        // comfort outcome; recency alone decides.
        let matches = vec![scored(30, "Long Sleeve", 0.7), scored(5, "Tank", 0.7)];
        let outcome = tally_votes(ActivityType::Run, &matches);
        assert_eq!(
            outcome.winners.get(&ClothingCategory::Tops).map(String::as_str),
            Some("Tank")
        );
    }
}
