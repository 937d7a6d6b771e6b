// ABOUTME: Tests for environment-driven selection configuration
// ABOUTME: Validates defaults, env overrides, and rejection of malformed values
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use pantry_recipes::config::SelectionConfig;
use pantry_recipes::constants::env_config;
use pantry_recipes::errors::{AppError, ConfigError, ErrorCode};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(env_config::CATALOG_PATH);
    env::remove_var(env_config::TAKE_BEST);
    env::remove_var(env_config::SEED);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = SelectionConfig::load().unwrap();
    assert_eq!(config, SelectionConfig::default());
    assert!(config.take_best);
    assert!(config.catalog_path.is_none());
    assert!(config.seed.is_none());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::CATALOG_PATH, "/srv/pantry/readiness.yaml");
    env::set_var(env_config::TAKE_BEST, "false");
    env::set_var(env_config::SEED, " 42 ");

    let config = SelectionConfig::load().unwrap();
    clear_env();

    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/srv/pantry/readiness.yaml"))
    );
    assert!(!config.take_best);
    assert_eq!(config.seed, Some(42));
}

#[test]
#[serial]
fn test_malformed_seed_is_rejected() {
    clear_env();
    env::set_var(env_config::SEED, "forty-two");

    let result = SelectionConfig::load();
    clear_env();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains(env_config::SEED)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_empty_catalog_path_fails_validation() {
    clear_env();
    env::set_var(env_config::CATALOG_PATH, "");

    let error = SelectionConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}
