// ABOUTME: Selection configuration for the recipe recommender
// ABOUTME: Catalog path, default selection mode, and random seed with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

//! Selection Configuration Module
//!
//! Settings that surround recipe selection. The readiness threshold is part
//! of the selection policy and intentionally absent here.
//!
//! All values can be overridden via environment variables with the
//! `RECIPE_` prefix.

use crate::constants::{env_config, selection};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Selection configuration container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Readiness catalog file (JSON or YAML)
    pub catalog_path: Option<PathBuf>,
    /// Default selection mode: best-scoring when true, random when false
    pub take_best: bool,
    /// Seed for reproducible random selection
    pub seed: Option<u64>,
}

impl SelectionConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "catalog_path must not be empty",
            ));
        }

        Ok(())
    }

    /// Read an environment variable, treating "not set" as `None`
    fn read_env_var(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Parse an optional environment variable into `T`
    fn parse_env_var<T: FromStr>(env_var_name: &str) -> Result<Option<T>, ConfigError> {
        Self::read_env_var(env_var_name)?
            .map(|val| {
                val.trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))
            })
            .transpose()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = Self::read_env_var(env_config::CATALOG_PATH)? {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(take_best) = Self::parse_env_var(env_config::TAKE_BEST)? {
            self.take_best = take_best;
        }

        if let Some(seed) = Self::parse_env_var(env_config::SEED)? {
            self.seed = Some(seed);
        }

        Ok(self)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            take_best: selection::DEFAULT_TAKE_BEST,
            seed: None,
        }
    }
}
