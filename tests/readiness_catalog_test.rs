// ABOUTME: Integration tests for the readiness catalog collaborator
// ABOUTME: Tests JSON/YAML loading, validation errors, and diet scoping
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use pantry_recipes::errors::ErrorCode;
use pantry_recipes::intelligence::recipes::{
    CatalogReadinessSource, FixedIndexPicker, ReadinessSource, RecipeSelector,
};
use pantry_recipes::models::{Diet, RequestedDiet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const JSON_CATALOG: &str = r#"{
    "vegan": {
        "Vegan Salad": 0.85,
        "Vegan Soup": 0.95,
        "Vegan Cake": 0.75
    },
    "vegetarian": {
        "Cheese Omelette": 0.6
    }
}"#;

const YAML_CATALOG: &str = "
vegan:
  Vegan Burger: 0.8
  Vegan Smoothie: 0.9
  Vegan Taco: 0.7
pescatarian:
  Grilled Salmon: 0.45
";

fn write_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_json_catalog_parses_all_diets() {
    let catalog = CatalogReadinessSource::from_json_str(JSON_CATALOG).unwrap();

    assert_eq!(catalog.len(), 4);
    let vegan = catalog.readiness_for_diet(Diet::Vegan);
    assert_eq!(vegan.get("Vegan Soup"), Some(&0.95));
    assert_eq!(
        catalog.readiness_for_diet(Diet::Vegetarian).len(),
        1,
        "vegetarian catalog should hold one recipe"
    );
    assert!(catalog.readiness_for_diet(Diet::Omnivore).is_empty());
}

#[test]
fn test_yaml_catalog_parses_all_diets() {
    let catalog = CatalogReadinessSource::from_yaml_str(YAML_CATALOG).unwrap();

    let mut diets: Vec<Diet> = catalog.diets().collect();
    diets.sort();
    assert_eq!(diets, vec![Diet::Vegan, Diet::Pescatarian]);
    assert_eq!(
        catalog
            .readiness_for_diet(Diet::Pescatarian)
            .get("Grilled Salmon"),
        Some(&0.45)
    );
}

#[test]
fn test_diet_keys_accept_aliases() {
    let catalog = CatalogReadinessSource::from_json_str(r#"{"Veggie": {"Bean Chili": 0.5}}"#)
        .unwrap();

    assert_eq!(catalog.readiness_for_diet(Diet::Vegetarian).len(), 1);
}

#[test]
fn test_unknown_diet_key_is_rejected() {
    let err = CatalogReadinessSource::from_json_str(r#"{"carnivore": {"Steak": 0.9}}"#)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("carnivore"));
}

#[test]
fn test_duplicate_diet_after_normalization_is_rejected() {
    let err = CatalogReadinessSource::from_json_str(
        r#"{"vegan": {"Vegan Soup": 0.9}, "VEGAN": {"Vegan Cake": 0.4}}"#,
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_non_finite_score_is_rejected() {
    let err = CatalogReadinessSource::from_yaml_str("vegan:\n  Vegan Soup: .nan\n").unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.details["recipe"], "Vegan Soup");
}

#[test]
fn test_out_of_range_score_is_kept() {
    let catalog =
        CatalogReadinessSource::from_json_str(r#"{"vegan": {"Vegan Soup": 1.5}}"#).unwrap();

    assert_eq!(
        catalog.readiness_for_diet(Diet::Vegan).get("Vegan Soup"),
        Some(&1.5)
    );
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = CatalogReadinessSource::from_json_str("{ not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    let err = CatalogReadinessSource::from_json_str(r#"{"vegan": {"Vegan Soup": "high"}}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_from_path_dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let json_path = write_catalog(&dir, "readiness.json", JSON_CATALOG);
    let yaml_path = write_catalog(&dir, "readiness.YML", YAML_CATALOG);

    let from_json = CatalogReadinessSource::from_path(&json_path).unwrap();
    assert_eq!(from_json, CatalogReadinessSource::from_json_str(JSON_CATALOG).unwrap());

    let from_yaml = CatalogReadinessSource::from_path(&yaml_path).unwrap();
    assert_eq!(from_yaml, CatalogReadinessSource::from_yaml_str(YAML_CATALOG).unwrap());
}

#[test]
fn test_missing_file_is_not_found() {
    let err = CatalogReadinessSource::from_path(Path::new("/nonexistent/readiness.json"))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_loaded_catalog_drives_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "readiness.yaml", YAML_CATALOG);
    let catalog = CatalogReadinessSource::from_path(&path).unwrap();
    let selector = RecipeSelector::new(catalog, FixedIndexPicker::new(0));

    assert_eq!(
        selector.select(&RequestedDiet::parse("vegan"), true).as_deref(),
        Some("Vegan Smoothie")
    );
    assert_eq!(
        selector.select(&RequestedDiet::parse("vegan"), false).as_deref(),
        Some("Vegan Burger")
    );
    assert_eq!(selector.select(&RequestedDiet::parse("keto"), false), None);
}

// ============================================================================
// Collaborator Contract Tests
// ============================================================================

#[test]
fn test_unrecognized_diet_yields_empty_map() {
    let catalog = CatalogReadinessSource::from_json_str(JSON_CATALOG).unwrap();

    assert!(catalog
        .readiness(&RequestedDiet::parse("invalid_diet"))
        .is_empty());
    assert_eq!(
        catalog.readiness(&RequestedDiet::Known(Diet::Vegan)).len(),
        3
    );
}

#[test]
fn test_insert_overwrites_existing_score() {
    let mut catalog = CatalogReadinessSource::new().with_recipe(Diet::Vegan, "Vegan Soup", 0.2);
    catalog.insert(Diet::Vegan, "Vegan Soup", 0.7);

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.readiness_for_diet(Diet::Vegan).get("Vegan Soup"),
        Some(&0.7)
    );
    assert!(!catalog.is_empty());
}
