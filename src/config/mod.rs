// ABOUTME: Configuration module for the trailwear engine
// ABOUTME: Re-exports clothing tables and engine tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

/// Per-activity clothing categories, option lists, and warmth vocabulary
pub mod clothing;

/// Engine tunables with defaults, env overrides, and a process-wide global
pub mod engine;

pub use engine::EngineConfig;
