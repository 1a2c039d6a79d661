// ABOUTME: Engine tuning configuration with defaults, env overrides, and a process-wide global
// ABOUTME: Covers matching, confidence, and suggestion tunables for the recommendation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Engine Configuration
//!
//! Tunable parameters for the recommendation pipeline. Defaults come from
//! the constants tree in [`crate::intelligence::thermal_constants`];
//! deployments may override individual values through `TRAILWEAR_*`
//! environment variables.

use crate::errors::{EngineError, EngineResult};
use crate::intelligence::thermal_constants::{confidence, similarity, suggestions};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Historical matching tunables
    pub matching: MatchingConfig,
    /// Confidence scoring tunables
    pub confidence: ConfidenceConfig,
    /// Suggestion generation tunables
    pub suggestions: SuggestionConfig,
}

/// Tunables for historical similarity matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum similarity for a record to qualify as a match (0.0-1.0)
    pub similarity_floor: f64,
    /// Half-life in days for the recency vote multiplier
    pub recency_half_life_days: f64,
    /// Maximum similar sessions surfaced on a recommendation
    pub max_similar_sessions: usize,
    /// Comfort-temperature span (°C) over which similarity decays to zero
    pub temperature_span_c: f64,
    /// Wind-speed span (km/h) over which the wind component decays to zero
    pub wind_span_kmh: f64,
}

/// Tunables for confidence scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Match count at which the count factor reaches one half
    pub count_midpoint: f64,
    /// Confidence at or above which suggestions are suppressed
    pub high_threshold: u8,
    /// Confidence below which wording turns directive
    pub low_threshold: u8,
    /// Confidence pinned for a same-day exact match
    pub recent_match_confidence: u8,
}

/// Tunables for suggestion generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Minimum |comfort difference| in °C before suggestions are generated
    pub comfort_delta_threshold_c: f64,
    /// |difference| in display units at which wording turns directive
    pub directive_delta_display: f64,
    /// Maximum suggestions returned per invocation
    pub max_suggestions: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_floor: similarity::SIMILARITY_FLOOR,
            recency_half_life_days: similarity::RECENCY_HALF_LIFE_DAYS,
            max_similar_sessions: similarity::MAX_SIMILAR_SESSIONS,
            temperature_span_c: similarity::TEMPERATURE_SPAN_C,
            wind_span_kmh: similarity::WIND_SPAN_KMH,
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            count_midpoint: confidence::COUNT_MIDPOINT,
            high_threshold: confidence::HIGH_CONFIDENCE_THRESHOLD,
            low_threshold: confidence::LOW_CONFIDENCE_THRESHOLD,
            recent_match_confidence: confidence::RECENT_MATCH_CONFIDENCE,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            comfort_delta_threshold_c: suggestions::COMFORT_DELTA_THRESHOLD_C,
            directive_delta_display: suggestions::DIRECTIVE_DELTA_DISPLAY,
            max_suggestions: suggestions::MAX_SUGGESTIONS,
        }
    }
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loads from the environment on first access, falling back to defaults
    /// when loading fails.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::from_environment().unwrap_or_else(|e| {
                tracing::warn!("failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from `TRAILWEAR_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value or
    /// the resulting configuration fails validation.
    pub fn from_environment() -> EngineResult<Self> {
        let mut config = Self::default();
        if let Some(floor) = env_f64("TRAILWEAR_SIMILARITY_FLOOR")? {
            config.matching.similarity_floor = floor;
        }
        if let Some(half_life) = env_f64("TRAILWEAR_RECENCY_HALF_LIFE_DAYS")? {
            config.matching.recency_half_life_days = half_life;
        }
        if let Some(max) = env_usize("TRAILWEAR_MAX_SIMILAR_SESSIONS")? {
            config.matching.max_similar_sessions = max;
        }
        if let Some(delta) = env_f64("TRAILWEAR_SUGGESTION_DELTA_C")? {
            config.suggestions.comfort_delta_threshold_c = delta;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field invariants
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigValidation`] when a tunable is outside
    /// its valid range.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.matching.similarity_floor) {
            return Err(EngineError::ConfigValidation(format!(
                "similarity_floor must be in [0, 1], got {}",
                self.matching.similarity_floor
            )));
        }
        if self.matching.recency_half_life_days <= 0.0 {
            return Err(EngineError::ConfigValidation(
                "recency_half_life_days must be positive".into(),
            ));
        }
        if self.matching.temperature_span_c <= 0.0 || self.matching.wind_span_kmh <= 0.0 {
            return Err(EngineError::ConfigValidation(
                "similarity spans must be positive".into(),
            ));
        }
        if self.confidence.low_threshold >= self.confidence.high_threshold {
            return Err(EngineError::ConfigValidation(
                "low confidence threshold must be below the high threshold".into(),
            ));
        }
        if self.suggestions.comfort_delta_threshold_c <= 0.0 {
            return Err(EngineError::ConfigValidation(
                "comfort_delta_threshold_c must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn env_f64(name: &str) -> EngineResult<Option<f64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| EngineError::InvalidConfigValue {
                name: name.into(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

fn env_usize(name: &str) -> EngineResult<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| EngineError::InvalidConfigValue {
                name: name.into(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn environment_overrides_are_applied() {
        std::env::set_var("TRAILWEAR_SIMILARITY_FLOOR", "0.5");
        let config = EngineConfig::from_environment().expect("valid override");
        std::env::remove_var("TRAILWEAR_SIMILARITY_FLOOR");

        assert!((config.matching.similarity_floor - 0.5).abs() < f64::EPSILON);
        // Untouched fields keep their defaults.
        assert_eq!(
            config.matching.max_similar_sessions,
            MatchingConfig::default().max_similar_sessions
        );
    }

    #[test]
    fn unparseable_environment_value_is_an_error() {
        std::env::set_var("TRAILWEAR_RECENCY_HALF_LIFE_DAYS", "ninety");
        let result = EngineConfig::from_environment();
        std::env::remove_var("TRAILWEAR_RECENCY_HALF_LIFE_DAYS");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_similarity_floor() {
        let mut config = EngineConfig::default();
        config.matching.similarity_floor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_confidence_thresholds() {
        let mut config = EngineConfig::default();
        config.confidence.low_threshold = 80;
        assert!(config.validate().is_err());
    }
}
