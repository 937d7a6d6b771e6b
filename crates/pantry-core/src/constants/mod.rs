// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Selection policy values, environment variable names, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Recipe selection policy
pub mod selection {
    /// Minimum readiness a recipe must strictly exceed to be recommended.
    ///
    /// Part of the selection policy itself, so it is not exposed through
    /// configuration.
    pub const MIN_READINESS_THRESHOLD: f64 = 0.1;

    /// Lower bound of the meaningful readiness range
    pub const READINESS_MIN: f64 = 0.0;

    /// Upper bound of the meaningful readiness range
    pub const READINESS_MAX: f64 = 1.0;

    /// Default selection mode when neither flag nor environment decides
    pub const DEFAULT_TAKE_BEST: bool = true;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path to the readiness catalog file (JSON or YAML)
    pub const CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Default selection mode (`true` = best, `false` = random)
    pub const TAKE_BEST: &str = "RECIPE_SELECTION_TAKE_BEST";
    /// Seed for reproducible random selection
    pub const SEED: &str = "RECIPE_SELECTION_SEED";
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported by the command-line tool
    pub const PANTRY_CLI: &str = "pantry-cli";
}
