// ABOUTME: Clothing recommendation engine for outdoor endurance activities
// ABOUTME: Pure synchronous pipeline from weather and session history to dressed layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

#![deny(unsafe_code)]

//! # Trailwear
//!
//! A clothing recommendation engine for outdoor endurance activities. Given a
//! weather observation, an activity, and the athlete's past sessions, the
//! engine predicts a perceived comfort temperature, finds similar past
//! sessions, votes each clothing category from what was actually worn, scores
//! its own confidence, applies deterministic safety overrides, and falls back
//! to temperature-banded defaults when history is thin.
//!
//! The engine is pure and synchronous: no I/O, no clocks, no caches. Callers
//! own persistence and weather retrieval and hand the engine plain values.
//!
//! ## Modules
//!
//! - **models**: Activities, weather observations, clothing items, records
//! - **config**: Per-activity clothing catalogs and engine tuning knobs
//! - **intelligence**: The pipeline stages and the orchestrating engine
//! - **errors**: The crate-wide error type
//!
//! ## Example
//!
//! ```no_run
//! use trailwear::intelligence::ClothingRecommendationEngine;
//! use trailwear::models::{ActivityType, ThermalPreference, WeatherObservation};
//!
//! fn dress(weather: &WeatherObservation) {
//!     let engine = ClothingRecommendationEngine::default();
//!     let rec = engine.recommend(
//!         weather,
//!         &[],
//!         ActivityType::Run,
//!         ThermalPreference::Average,
//!         None,
//!     );
//!     for (category, value) in rec.items.iter() {
//!         println!("{category}: {value}");
//!     }
//! }
//! ```

/// Crate-wide error type and result alias
pub mod errors;

/// Per-activity clothing catalogs and engine tuning configuration
pub mod config;

/// Recommendation pipeline stages and the orchestrating engine
pub mod intelligence;

/// Activities, weather observations, clothing items, and session records
pub mod models;

pub use errors::{EngineError, EngineResult};
pub use intelligence::ClothingRecommendationEngine;
