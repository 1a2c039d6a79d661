// ABOUTME: Intelligence module tree for the recommendation pipeline
// ABOUTME: Re-exports the engine and the per-stage building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Recommendation pipeline stages.
//!
//! Each stage is a standalone module with a small pure API; the
//! [`recommendation_engine`] module composes them.

pub mod clothing_voter;
pub mod comfort;
pub mod confidence;
pub mod fallback;
pub mod history_matcher;
pub mod recommendation_engine;
pub mod safety_overrides;
pub mod suggestion_generator;
pub mod thermal_constants;

pub use comfort::{ComfortBand, ComfortBreakdown, ComfortEstimate};
pub use confidence::ConfidenceTier;
pub use history_matcher::{MatchOutcome, ScoredMatch};
pub use recommendation_engine::{ClothingRecommendationEngine, DebugInfo, MatchDebug};
pub use safety_overrides::{OverrideFlag, OverrideRule, SafetyOutcome};
