// ABOUTME: Comfort-temperature transform combining weather, activity heat, and preference
// ABOUTME: Pure, deterministic, never fails; missing feels-like degrades to a zero delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Comfort-temperature transform.
//!
//! Converts a raw weather observation plus activity, thermal preference,
//! and optional expert-mode level into a single scalar comfort temperature,
//! the similarity axis every other pipeline stage works in.

use crate::intelligence::thermal_constants::{
    activity_heat, comfort_bands, feels_like_delta, feels_like_weight, level_adjustments,
    preference_offsets,
};
use crate::models::{
    ActivityLevel, ActivityType, Intensity, SessionDuration, ThermalPreference, WeatherObservation,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Displayable comfort band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComfortBand {
    /// Below −9.4 °C
    Bitter,
    /// −9.4 to 0 °C
    Freezing,
    /// 0 to 7.2 °C
    Cold,
    /// 7.2 to 12.8 °C
    Cool,
    /// 12.8 to 18.3 °C
    Mild,
    /// 18.3 to 23.9 °C
    Warm,
    /// 23.9 °C and above
    Hot,
}

impl ComfortBand {
    /// Band containing a comfort temperature
    #[must_use]
    pub fn for_temperature(comfort_temp_c: f64) -> Self {
        if comfort_temp_c < comfort_bands::FREEZING_FLOOR_C {
            Self::Bitter
        } else if comfort_temp_c < comfort_bands::COLD_FLOOR_C {
            Self::Freezing
        } else if comfort_temp_c < comfort_bands::COOL_FLOOR_C {
            Self::Cold
        } else if comfort_temp_c < comfort_bands::MILD_FLOOR_C {
            Self::Cool
        } else if comfort_temp_c < comfort_bands::WARM_FLOOR_C {
            Self::Mild
        } else if comfort_temp_c < comfort_bands::HOT_FLOOR_C {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Display name for the band
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bitter => "bitter",
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Cool => "cool",
            Self::Mild => "mild",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }
}

impl fmt::Display for ComfortBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Comfort temperature plus its displayable band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComfortEstimate {
    /// Comfort temperature in Celsius
    pub comfort_temp_c: f64,
    /// Displayable band containing the comfort temperature
    pub band: ComfortBand,
}

/// Every intermediate term of the comfort transform, for diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComfortBreakdown {
    /// Actual air temperature (°C)
    pub actual_c: f64,
    /// Activity heat-generation constant B (°C)
    pub activity_constant_c: f64,
    /// Clamped feels-like delta (°C)
    pub feels_like_delta_c: f64,
    /// Weighted feels-like term added to the total (°C)
    pub delta_term_c: f64,
    /// Thermal preference offset (°C)
    pub preference_offset_c: f64,
    /// Expert-mode intensity/duration adjustment (°C)
    pub level_adjustment_c: f64,
    /// Final comfort temperature (°C)
    pub comfort_temp_c: f64,
    /// Band containing the comfort temperature
    pub band: ComfortBand,
}

/// Published per-activity heat-generation constant B (°C)
#[must_use]
pub const fn base_heat_c(activity: ActivityType) -> f64 {
    match activity {
        ActivityType::Run => activity_heat::RUN_BASE_C,
        ActivityType::TrailRun => activity_heat::TRAIL_RUN_BASE_C,
        ActivityType::Hike => activity_heat::HIKE_BASE_C,
        ActivityType::Walk => activity_heat::WALK_BASE_C,
        ActivityType::Ride => activity_heat::RIDE_BASE_C,
        ActivityType::Snowshoe => activity_heat::SNOWSHOE_BASE_C,
        ActivityType::CrossCountrySki => activity_heat::XC_SKI_BASE_C,
    }
}

/// Published per-activity feels-like sensitivity weight (0-1)
#[must_use]
pub const fn delta_weight(activity: ActivityType) -> f64 {
    match activity {
        ActivityType::Run => feels_like_weight::RUN,
        ActivityType::TrailRun => feels_like_weight::TRAIL_RUN,
        ActivityType::Hike => feels_like_weight::HIKE,
        ActivityType::Walk => feels_like_weight::WALK,
        ActivityType::Ride => feels_like_weight::RIDE,
        ActivityType::Snowshoe => feels_like_weight::SNOWSHOE,
        ActivityType::CrossCountrySki => feels_like_weight::XC_SKI,
    }
}

/// Additive offset for a thermal preference (°C)
#[must_use]
pub const fn preference_offset_c(preference: ThermalPreference) -> f64 {
    match preference {
        ThermalPreference::Cold => preference_offsets::RUNS_COLD_C,
        ThermalPreference::Average => preference_offsets::AVERAGE_C,
        ThermalPreference::Warm => preference_offsets::RUNS_WARM_C,
    }
}

fn level_adjustment_c(level: Option<ActivityLevel>) -> f64 {
    level.map_or(0.0, |l| {
        let intensity = match l.intensity {
            Intensity::Low => level_adjustments::LOW_INTENSITY_C,
            Intensity::Moderate => level_adjustments::MODERATE_INTENSITY_C,
            Intensity::High => level_adjustments::HIGH_INTENSITY_C,
        };
        let duration = match l.duration {
            SessionDuration::Short => 0.0,
            SessionDuration::Long => level_adjustments::LONG_DURATION_C,
        };
        intensity + duration
    })
}

/// Compute the full comfort-transform breakdown
///
/// Pure and deterministic; a missing feels-like temperature degrades to a
/// zero delta rather than failing.
#[must_use]
pub fn compute_comfort_breakdown(
    weather: &WeatherObservation,
    activity: ActivityType,
    preference: ThermalPreference,
    level: Option<ActivityLevel>,
) -> ComfortBreakdown {
    let actual_c = weather.temperature_c;
    let raw_delta = weather.feels_like_or_actual() - actual_c;
    let feels_like_delta_c = raw_delta.clamp(feels_like_delta::MIN_C, feels_like_delta::MAX_C);
    let activity_constant_c = base_heat_c(activity);
    let delta_term_c = delta_weight(activity) * feels_like_delta_c;
    let preference_offset_c = preference_offset_c(preference);
    let level_adjustment_c = level_adjustment_c(level);
    let comfort_temp_c =
        actual_c + activity_constant_c + delta_term_c + preference_offset_c + level_adjustment_c;

    ComfortBreakdown {
        actual_c,
        activity_constant_c,
        feels_like_delta_c,
        delta_term_c,
        preference_offset_c,
        level_adjustment_c,
        comfort_temp_c,
        band: ComfortBand::for_temperature(comfort_temp_c),
    }
}

/// Compute the comfort temperature and its band
#[must_use]
pub fn compute_comfort_temperature(
    weather: &WeatherObservation,
    activity: ActivityType,
    preference: ThermalPreference,
    level: Option<ActivityLevel>,
) -> ComfortEstimate {
    let breakdown = compute_comfort_breakdown(weather, activity, preference, level);
    ComfortEstimate {
        comfort_temp_c: breakdown.comfort_temp_c,
        band: breakdown.band,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn observation(actual_c: f64, feels_like_c: Option<f64>) -> WeatherObservation {
        WeatherObservation {
            temperature_c: actual_c,
            feels_like_c,
            humidity_pct: 50.0,
            wind_speed_kmh: 5.0,
            precipitation_mm: 0.0,
            cloud_cover_pct: 50.0,
            uv_index: 2.0,
            sunrise: None,
            sunset: None,
            observed_at: Utc::now(),
            forecast: Vec::new(),
        }
    }

    #[test]
    fn missing_feels_like_means_zero_delta() {
        let weather = observation(10.0, None);
        let breakdown = compute_comfort_breakdown(
            &weather,
            ActivityType::Run,
            ThermalPreference::Average,
            None,
        );
        assert!((breakdown.feels_like_delta_c).abs() < f64::EPSILON);
        assert!((breakdown.comfort_temp_c - (10.0 + 8.3)).abs() < 1e-9);
    }

    #[test]
    fn feels_like_delta_is_clamped() {
        let weather = observation(0.0, Some(-25.0));
        let breakdown = compute_comfort_breakdown(
            &weather,
            ActivityType::Ride,
            ThermalPreference::Average,
            None,
        );
        assert!((breakdown.feels_like_delta_c - (-15.0)).abs() < f64::EPSILON);

        let weather = observation(20.0, Some(35.0));
        let breakdown = compute_comfort_breakdown(
            &weather,
            ActivityType::Ride,
            ThermalPreference::Average,
            None,
        );
        assert!((breakdown.feels_like_delta_c - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn band_boundaries_are_lower_inclusive() {
        assert_eq!(ComfortBand::for_temperature(0.0), ComfortBand::Cold);
        assert_eq!(ComfortBand::for_temperature(-0.01), ComfortBand::Freezing);
        assert_eq!(ComfortBand::for_temperature(23.9), ComfortBand::Hot);
    }
}
