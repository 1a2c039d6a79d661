// ABOUTME: Error types for the trailwear recommendation engine
// ABOUTME: Covers validated clothing construction and configuration loading failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! # Engine Errors
//!
//! The recommendation pipeline itself has no fatal paths: missing optional
//! inputs degrade to conservative defaults and empty results are ordinary
//! return values. Errors exist only at the edges, when a caller constructs
//! a [`crate::models::ClothingItems`] with a category the activity does not
//! define, or when configuration loading encounters an invalid value.

use crate::models::{ActivityType, ClothingCategory};
use thiserror::Error;

/// Result alias used throughout the crate
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by validated construction and configuration loading
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A clothing category was supplied that the activity does not define
    #[error("activity {activity} has no clothing category {category}")]
    UnknownCategory {
        /// Activity whose configuration was consulted
        activity: ActivityType,
        /// Category that is not part of the activity's configuration
        category: ClothingCategory,
    },

    /// A configuration value failed to parse or validate
    #[error("invalid configuration value for {name}: {value}")]
    InvalidConfigValue {
        /// Name of the offending setting (environment variable or field)
        name: String,
        /// The rejected value
        value: String,
    },

    /// Configuration failed cross-field validation
    #[error("configuration validation failed: {0}")]
    ConfigValidation(String),
}
