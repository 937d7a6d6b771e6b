// ABOUTME: Configuration error types for selection settings validation
// ABOUTME: Defines error variants for environment access, parse failures, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value outside the valid range for a parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
