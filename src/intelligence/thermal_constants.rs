// ABOUTME: Thermal and tuning constants for the clothing recommendation engine
// ABOUTME: Comfort transform parameters, safety thresholds, similarity and confidence tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Thermal constants grounded in exercise physiology and cold-weather
//! guidance.
//!
//! The activity heat constants follow the common coaching rule of dressing
//! for noticeably warmer conditions than the thermometer reads, scaled by
//! how much metabolic heat each activity generates. Safety thresholds track
//! NWS wind-chill and heat-advisory guidance.

/// Per-activity heat generation constants (°C added to the air temperature)
///
/// Higher-output activities warm the body more, so their effective comfort
/// temperature sits further above the actual temperature.
pub mod activity_heat {
    /// Road running: high steady output ("dress 15°F warmer")
    pub const RUN_BASE_C: f64 = 8.3;
    /// Trail running: high output, slightly tempered by terrain breaks
    pub const TRAIL_RUN_BASE_C: f64 = 7.2;
    /// Hiking: moderate output with frequent pauses
    pub const HIKE_BASE_C: f64 = 4.4;
    /// Walking: light output
    pub const WALK_BASE_C: f64 = 2.8;
    /// Cycling: moderate output offset by self-generated wind
    pub const RIDE_BASE_C: f64 = 3.3;
    /// Snowshoeing: hard work in deep snow
    pub const SNOWSHOE_BASE_C: f64 = 6.1;
    /// Cross-country skiing: sustained full-body output
    pub const XC_SKI_BASE_C: f64 = 7.8;
}

/// Per-activity feels-like sensitivity weights (0-1)
///
/// How strongly the apparent-temperature delta (wind chill, humidity)
/// affects the comfort temperature. Wind-exposed activities weigh the
/// delta more heavily.
pub mod feels_like_weight {
    /// Road running
    pub const RUN: f64 = 0.60;
    /// Trail running (tree cover blunts wind)
    pub const TRAIL_RUN: f64 = 0.60;
    /// Hiking
    pub const HIKE: f64 = 0.70;
    /// Walking
    pub const WALK: f64 = 0.80;
    /// Cycling: self-generated wind dominates
    pub const RIDE: f64 = 0.90;
    /// Snowshoeing
    pub const SNOWSHOE: f64 = 0.70;
    /// Cross-country skiing
    pub const XC_SKI: f64 = 0.70;
}

/// Bounds on the feels-like delta before it enters the transform
pub mod feels_like_delta {
    /// Lower clamp on (feels-like − actual) in °C
    pub const MIN_C: f64 = -15.0;
    /// Upper clamp on (feels-like − actual) in °C
    pub const MAX_C: f64 = 8.0;
}

/// Fixed thermal preference offsets (°C)
pub mod preference_offsets {
    /// Self-reported "runs cold"
    pub const RUNS_COLD_C: f64 = 4.4;
    /// No reported tendency
    pub const AVERAGE_C: f64 = 0.0;
    /// Self-reported "runs warm"
    pub const RUNS_WARM_C: f64 = -4.4;
}

/// Expert-mode activity level adjustments (°C)
pub mod level_adjustments {
    /// Low intensity generates less heat
    pub const LOW_INTENSITY_C: f64 = -1.7;
    /// Moderate intensity is the calibration baseline
    pub const MODERATE_INTENSITY_C: f64 = 0.0;
    /// High intensity generates more heat
    pub const HIGH_INTENSITY_C: f64 = 2.8;
    /// Sessions of an hour or more accumulate warmth
    pub const LONG_DURATION_C: f64 = 1.1;
}

/// Comfort band edges (°C, lower-inclusive)
pub mod comfort_bands {
    /// Below this: bitter
    pub const FREEZING_FLOOR_C: f64 = -9.4;
    /// Freezing/cold boundary
    pub const COLD_FLOOR_C: f64 = 0.0;
    /// Cold/cool boundary
    pub const COOL_FLOOR_C: f64 = 7.2;
    /// Cool/mild boundary
    pub const MILD_FLOOR_C: f64 = 12.8;
    /// Mild/warm boundary
    pub const WARM_FLOOR_C: f64 = 18.3;
    /// Warm/hot boundary
    pub const HOT_FLOOR_C: f64 = 23.9;
}

/// Safety override thresholds
///
/// Cold thresholds track NWS wind-chill advisory bands; the heat threshold
/// tracks heat-advisory guidance (≈85°F).
pub mod safety {
    /// Extreme cold: force full coverage below this comfort temperature (≈15°F)
    pub const EXTREME_COLD_C: f64 = -9.4;
    /// Dangerous cold classification below this comfort temperature (5°F)
    pub const DANGEROUS_COLD_C: f64 = -15.0;
    /// Extreme heat: force ventilated choices above this comfort temperature (≈85°F)
    pub const EXTREME_HEAT_C: f64 = 29.4;
    /// Cloud cover below which daytime counts as sunny (%)
    pub const SUN_CLEAR_CLOUD_PCT: f64 = 30.0;
    /// Cloud cover below which daytime counts as sunny given adequate UV (%)
    pub const SUN_MODERATE_CLOUD_PCT: f64 = 60.0;
    /// Minimum UV index for the moderate-cloud sunny case
    pub const SUN_MIN_UV: f64 = 3.0;
    /// Buffer inside sunrise/sunset treated as dark (minutes)
    pub const DARKNESS_BUFFER_MIN: i64 = 30;
    /// Hour-of-day fallback: dark before this hour
    pub const DARK_BEFORE_HOUR: u32 = 7;
    /// Hour-of-day fallback: dark from this hour
    pub const DARK_FROM_HOUR: u32 = 19;
}

/// Fallback temperature band edges (°C ≈ 25/40/55/65/75 °F)
pub mod fallback_bands {
    /// Frigid/cold boundary (≈25°F)
    pub const COLD_FLOOR_C: f64 = -3.9;
    /// Cold/cool boundary (≈40°F)
    pub const COOL_FLOOR_C: f64 = 4.4;
    /// Cool/mild boundary (≈55°F)
    pub const MILD_FLOOR_C: f64 = 12.8;
    /// Mild/warm boundary (≈65°F)
    pub const WARM_FLOOR_C: f64 = 18.3;
    /// Warm/hot boundary (≈75°F)
    pub const HOT_FLOOR_C: f64 = 23.9;
}

/// Similarity matching tunables
pub mod similarity {
    /// Weight of the comfort-temperature component
    pub const TEMPERATURE_WEIGHT: f64 = 0.7;
    /// Weight of the precipitation-state component
    pub const PRECIPITATION_WEIGHT: f64 = 0.2;
    /// Weight of the wind-closeness component
    pub const WIND_WEIGHT: f64 = 0.1;
    /// Comfort-temperature span over which similarity decays to zero (°C)
    pub const TEMPERATURE_SPAN_C: f64 = 10.0;
    /// Wind span over which the wind component decays to zero (km/h)
    pub const WIND_SPAN_KMH: f64 = 30.0;
    /// Minimum similarity for a record to qualify as a match
    pub const SIMILARITY_FLOOR: f64 = 0.35;
    /// Recency half-life for vote weighting (days)
    pub const RECENCY_HALF_LIFE_DAYS: f64 = 90.0;
    /// Maximum similar sessions surfaced to callers
    pub const MAX_SIMILAR_SESSIONS: usize = 10;
    /// Vote boost for sessions reported comfortable
    pub const COMFORTABLE_OUTCOME_FACTOR: f64 = 1.15;
    /// Vote penalty for sessions reported too hot or too cold
    pub const UNCOMFORTABLE_OUTCOME_FACTOR: f64 = 0.85;
}

/// Confidence scoring tunables
pub mod confidence {
    /// Match count at which the count factor reaches one half
    pub const COUNT_MIDPOINT: f64 = 3.0;
    /// At or above: high confidence, suggestions suppressed
    pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 70;
    /// Below: low confidence, directive suggestion wording
    pub const LOW_CONFIDENCE_THRESHOLD: u8 = 40;
    /// Confidence pinned for a same-day exact match
    pub const RECENT_MATCH_CONFIDENCE: u8 = 95;
}

/// Suggestion generation tunables
pub mod suggestions {
    /// Minimum |comfort difference| before comfort-based suggestions (°C)
    pub const COMFORT_DELTA_THRESHOLD_C: f64 = 2.0;
    /// |difference| in display units at which wording turns directive
    pub const DIRECTIVE_DELTA_DISPLAY: f64 = 5.0;
    /// Maximum suggestions per invocation
    pub const MAX_SUGGESTIONS: usize = 3;
    /// Absolute threshold for "cold conditions" reasoning (°C ≈ 40°F)
    pub const COLD_CONDITIONS_C: f64 = 4.4;
    /// Absolute threshold for "very cold conditions" reasoning (°C ≈ 25°F)
    pub const VERY_COLD_CONDITIONS_C: f64 = -3.9;
}
