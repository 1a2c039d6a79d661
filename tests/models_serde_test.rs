// ABOUTME: Serialization tests for validated clothing items and session records
// ABOUTME: Deserialization enforces the same category rules as in-memory construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailwear Project

//! Serde behavior for the persisted model types.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calm_weather, session};
use trailwear::models::{ActivityType, ClothingCategory, ClothingItems, HistoricalRecord};

#[test]
fn clothing_items_reject_unknown_categories_on_deserialize() {
    // Runs have no mid layer; a stored record claiming one must not load.
    let json = r#"{
        "activity": "run",
        "entries": { "mid_layer": "Fleece" }
    }"#;
    let result: Result<ClothingItems, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn clothing_items_accept_custom_values() {
    let json = r#"{
        "activity": "run",
        "entries": { "tops": "Race Singlet" }
    }"#;
    let items: ClothingItems = serde_json::from_str(json).unwrap();
    assert_eq!(items.activity(), ActivityType::Run);
    assert_eq!(items.get(ClothingCategory::Tops), Some("Race Singlet"));
}

#[test]
fn historical_record_survives_a_round_trip() {
    let record = session(
        ActivityType::Hike,
        12,
        calm_weather(6.0),
        &[
            (ClothingCategory::Tops, "Long Sleeve"),
            (ClothingCategory::MidLayer, "Fleece"),
        ],
    );

    let json = serde_json::to_string(&record).unwrap();
    let loaded: HistoricalRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn optional_record_fields_are_omitted_when_absent() {
    let record = session(ActivityType::Run, 3, calm_weather(10.0), &[]);
    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains("outcome"));
    assert!(!json.contains("notes"));
    assert!(!json.contains("activity_level"));
}
