// ABOUTME: Maps match count and quality onto a 0-100 confidence score
// ABOUTME: Zero matches score zero; saturation near 100 requires many tight matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Confidence scoring.
//!
//! `confidence = 100 · n/(n + midpoint) · mean_similarity` over the top
//! matches. A single match lands in the low tier; the score approaches 100
//! only as both the count factor and the mean similarity approach one.

use crate::config::engine::ConfidenceConfig;
use crate::intelligence::history_matcher::ScoredMatch;

/// Confidence tier used by downstream consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// Below the low threshold: directive suggestion wording
    Low,
    /// Between the thresholds: tentative suggestion wording
    Medium,
    /// At or above the high threshold: suggestions suppressed
    High,
}

/// Tier for a 0-100 confidence score
#[must_use]
pub const fn tier(config: &ConfidenceConfig, confidence: u8) -> ConfidenceTier {
    if confidence >= config.high_threshold {
        ConfidenceTier::High
    } else if confidence >= config.low_threshold {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

/// Score confidence from the ranked match list
///
/// Considers at most the top ten matches for mean quality so a long tail of
/// marginal matches cannot dilute a tight cluster.
#[must_use]
pub fn score(config: &ConfidenceConfig, matches: &[ScoredMatch]) -> u8 {
    if matches.is_empty() {
        return 0;
    }

    let top = &matches[..matches.len().min(10)];
    let mean_similarity: f64 = top.iter().map(|m| m.similarity).sum::<f64>() / top.len() as f64;

    let n = matches.len() as f64;
    let count_factor = n / (n + config.count_midpoint);

    let raw = 100.0 * count_factor * mean_similarity;
    raw.round().clamp(0.0, 100.0) as u8
}
