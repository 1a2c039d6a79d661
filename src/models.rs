// ABOUTME: Core data models for weather, activities, clothing, and recommendations
// ABOUTME: Defines the plain data structures exchanged with storage, weather, and UI collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Core data models for the recommendation engine.
//!
//! Everything here is a plain, serializable snapshot. The engine never
//! mutates its inputs: weather observations and historical records arrive
//! fully resolved from the excluded weather-client and persistence layers.

use crate::config::clothing;
use crate::errors::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Enumeration of supported outdoor activity types
///
/// Each activity carries its own thermal parameters, clothing categories,
/// and fallback defaults. Unlike a provider-facing sport catalog there is
/// no `Other` variant: the engine only recommends for activities it has
/// configuration tables for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Road running
    Run,
    /// Trail running
    TrailRun,
    /// Hiking
    Hike,
    /// Walking
    Walk,
    /// Road or gravel cycling
    Ride,
    /// Snowshoeing
    Snowshoe,
    /// Cross-country skiing
    CrossCountrySki,
}

impl ActivityType {
    /// All supported activities, in display order
    pub const ALL: [Self; 7] = [
        Self::Run,
        Self::TrailRun,
        Self::Hike,
        Self::Walk,
        Self::Ride,
        Self::Snowshoe,
        Self::CrossCountrySki,
    ];

    /// Human-readable activity name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Run => "Running",
            Self::TrailRun => "Trail Running",
            Self::Hike => "Hiking",
            Self::Walk => "Walking",
            Self::Ride => "Cycling",
            Self::Snowshoe => "Snowshoeing",
            Self::CrossCountrySki => "Cross-Country Skiing",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "run" | "running" => Ok(Self::Run),
            "trail_run" | "trail_running" => Ok(Self::TrailRun),
            "hike" | "hiking" => Ok(Self::Hike),
            "walk" | "walking" => Ok(Self::Walk),
            "ride" | "cycling" | "bike" => Ok(Self::Ride),
            "snowshoe" | "snowshoeing" => Ok(Self::Snowshoe),
            "cross_country_ski" | "cross_country_skiing" | "xc_ski" => Ok(Self::CrossCountrySki),
            other => Err(format!("unknown activity type: {other}")),
        }
    }
}

/// Self-reported tendency to run cold or hot
///
/// Maps to a fixed additive offset applied to the comfort temperature.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThermalPreference {
    /// Tends to run cold
    Cold,
    /// No particular tendency
    #[default]
    Average,
    /// Tends to run warm
    Warm,
}

/// Session intensity for expert-mode adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy effort
    Low,
    /// Steady effort
    Moderate,
    /// Hard effort
    High,
}

/// Planned session duration for expert-mode adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionDuration {
    /// Under an hour
    Short,
    /// An hour or more
    Long,
}

/// Expert-mode activity level: intensity and planned duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityLevel {
    /// Effort level for the session
    pub intensity: Intensity,
    /// Planned session duration
    pub duration: SessionDuration,
}

/// How a recorded session felt, or whether an imported kit was adjusted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComfortOutcome {
    /// Underdressed for the conditions
    TooCold,
    /// Dressed correctly
    JustRight,
    /// Overdressed for the conditions
    TooHot,
    /// Imported kit was worn as-is
    Satisfied,
    /// Imported kit was changed before or during the session
    Adjusted,
}

/// Where a historical record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Bulk-imported session record
    Imported,
    /// Feedback recorded in-app after a session
    Recorded,
}

/// A single point of short-range forecast carried on an observation
///
/// The engine never reads the forecast; it is part of the observation
/// snapshot so callers can pass weather data through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// Valid time of the forecast point
    pub time: DateTime<Utc>,
    /// Forecast air temperature in Celsius
    pub temperature_c: f64,
    /// Forecast precipitation rate in mm/h
    pub precipitation_mm: f64,
}

/// Immutable snapshot of current weather, produced by the weather collaborator
///
/// Timestamps are the caller's local clock expressed as UTC; the darkness
/// hour-of-day fallback reads the clock hour directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Apparent temperature in Celsius, when the provider supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_c: Option<f64>,
    /// Relative humidity, 0-100
    pub humidity_pct: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Precipitation rate in mm/h
    pub precipitation_mm: f64,
    /// Cloud cover, 0-100
    pub cloud_cover_pct: f64,
    /// UV index
    pub uv_index: f64,
    /// Sunrise time, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset time, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<DateTime<Utc>>,
    /// When the observation was taken
    pub observed_at: DateTime<Utc>,
    /// Optional short-range forecast snapshot (pass-through)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forecast: Vec<ForecastPoint>,
}

impl WeatherObservation {
    /// Apparent temperature, falling back to the actual temperature
    #[must_use]
    pub fn feels_like_or_actual(&self) -> f64 {
        self.feels_like_c.unwrap_or(self.temperature_c)
    }

    /// Whether any precipitation is falling
    #[must_use]
    pub fn is_precipitating(&self) -> bool {
        self.precipitation_mm > 0.0
    }
}

/// Closed set of clothing category keys
///
/// Which categories apply, and the ordered option list for each, is
/// activity-specific and owned by [`crate::config::clothing`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    /// Base top layer
    Tops,
    /// Insulating middle layer
    MidLayer,
    /// Shell or outer layer
    OuterLayer,
    /// Legwear
    Bottoms,
    /// Hat, headband, or balaclava
    Headwear,
    /// Gloves or mittens
    Gloves,
    /// Footwear or footwear covers
    Footwear,
    /// Sunglasses
    Eyewear,
    /// Headlamp or other light
    Light,
}

impl ClothingCategory {
    /// Human-readable category label used in suggestions
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tops => "Top",
            Self::MidLayer => "Mid Layer",
            Self::OuterLayer => "Outer Layer",
            Self::Bottoms => "Bottoms",
            Self::Headwear => "Headwear",
            Self::Gloves => "Gloves",
            Self::Footwear => "Footwear",
            Self::Eyewear => "Eyewear",
            Self::Light => "Light",
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialized form of [`ClothingItems`], validated on deserialization
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClothingItemsRepr {
    activity: ActivityType,
    entries: BTreeMap<ClothingCategory, String>,
}

/// A validated set of clothing choices for one activity
///
/// Construction rejects categories the activity does not define. Option
/// values outside the configured list are accepted as custom entries; they
/// participate in the lexical warmth heuristic instead of the ordinal
/// warmth ranks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(into = "ClothingItemsRepr")]
pub struct ClothingItems {
    activity: ActivityType,
    entries: BTreeMap<ClothingCategory, String>,
}

impl From<ClothingItems> for ClothingItemsRepr {
    fn from(items: ClothingItems) -> Self {
        Self {
            activity: items.activity,
            entries: items.entries,
        }
    }
}

impl TryFrom<ClothingItemsRepr> for ClothingItems {
    type Error = EngineError;

    fn try_from(repr: ClothingItemsRepr) -> Result<Self, Self::Error> {
        Self::for_activity(repr.activity, repr.entries)
    }
}

impl<'de> Deserialize<'de> for ClothingItems {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = ClothingItemsRepr::deserialize(deserializer)?;
        Self::try_from(repr).map_err(serde::de::Error::custom)
    }
}

impl ClothingItems {
    /// Create an empty item set for an activity
    #[must_use]
    pub const fn empty(activity: ActivityType) -> Self {
        Self {
            activity,
            entries: BTreeMap::new(),
        }
    }

    /// Create a validated item set from category/value pairs
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownCategory`] when a pair names a category
    /// the activity's clothing configuration does not define.
    pub fn for_activity<I, S>(activity: ActivityType, pairs: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (ClothingCategory, S)>,
        S: Into<String>,
    {
        let mut items = Self::empty(activity);
        for (category, value) in pairs {
            items.set(category, value.into())?;
        }
        Ok(items)
    }

    /// The activity these items were validated against
    #[must_use]
    pub const fn activity(&self) -> ActivityType {
        self.activity
    }

    /// Set a category to a value, validating the category against the activity
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownCategory`] when the activity does not
    /// define the category.
    pub fn set(&mut self, category: ClothingCategory, value: String) -> EngineResult<()> {
        if clothing::category_spec(self.activity, category).is_none() {
            return Err(EngineError::UnknownCategory {
                activity: self.activity,
                category,
            });
        }
        self.entries.insert(category, value);
        Ok(())
    }

    /// Value chosen for a category, if any
    #[must_use]
    pub fn get(&self, category: ClothingCategory) -> Option<&str> {
        self.entries.get(&category).map(String::as_str)
    }

    /// Iterate over chosen (category, value) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (ClothingCategory, &str)> {
        self.entries.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Number of categories with a chosen value
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category has a chosen value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One historical session: imported record or recorded feedback
///
/// Created once when a session ends or a file is imported; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalRecord {
    /// Stable record identity
    pub id: Uuid,
    /// Whether the record was imported or recorded in-app
    pub source: RecordSource,
    /// When the session took place
    pub recorded_at: DateTime<Utc>,
    /// Weather at the time of the session
    pub weather: WeatherObservation,
    /// Clothing actually worn
    pub items: ClothingItems,
    /// How the session felt, when the user said
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ComfortOutcome>,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Expert-mode activity level recorded with the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

/// Which path produced the final recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Same-day record for the same activity was reused directly
    RecentMatch,
    /// Voted from similar historical sessions
    SimilarSessions,
    /// No qualifying history; banded defaults were used
    FallbackDefaults,
}

/// Hazard classification surfaced alongside a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HazardLevel {
    /// Comfort temperature below the extreme-cold threshold
    ExtremeCold,
    /// Comfort temperature below the dangerous-cold threshold
    DangerousCold,
    /// Comfort temperature above the extreme-heat threshold
    ExtremeHeat,
}

/// Output bundle of the recommendation pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Recommended clothing, after safety overrides
    pub items: ClothingItems,
    /// Confidence score, 0-100
    pub confidence: u8,
    /// Number of historical sessions that qualified as matches
    pub matching_runs: usize,
    /// Total historical sessions considered
    pub total_runs: usize,
    /// Qualifying sessions, most similar first
    pub similar_conditions: Vec<HistoricalRecord>,
    /// Which path produced the clothing choices
    pub source: RecommendationSource,
    /// Hazard classification, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard: Option<HazardLevel>,
}

/// One per-category nudge produced by the suggestion generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// Category the suggestion applies to
    pub category: ClothingCategory,
    /// Human-readable category label
    pub category_label: String,
    /// Currently chosen value, if any
    pub current: Option<String>,
    /// Proposed value
    pub suggested: String,
    /// Graded explanation for the change
    pub reason: String,
}

/// Suggestions plus an overall explanation, for low-confidence situations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionContext {
    /// Per-category suggestions; may be empty when only the explanation applies
    pub suggestions: Vec<Suggestion>,
    /// Summary of confidence tier, match count, and comfort difference
    pub explanation: String,
    /// Confidence the suggestions were generated against
    pub confidence: u8,
    /// Match count the suggestions were generated against
    pub matching_runs: usize,
}

/// Temperature unit for message formatting
///
/// The engine computes in Celsius and converts once when rendering text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert an absolute Celsius temperature into this unit
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius.mul_add(1.8, 32.0),
        }
    }

    /// Convert a Celsius temperature *difference* into this unit
    #[must_use]
    pub fn delta_from_celsius(self, delta_c: f64) -> f64 {
        match self {
            Self::Celsius => delta_c,
            Self::Fahrenheit => delta_c * 1.8,
        }
    }

    /// Display suffix for this unit
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}
