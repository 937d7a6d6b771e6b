// ABOUTME: Main library entry point for the pantry recipe recommender
// ABOUTME: Selects a recipe for a diet from per-recipe readiness scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

#![deny(unsafe_code)]

//! # Pantry Recipes
//!
//! Recommends a recipe for a diet category based on how "ready" each candidate
//! recipe is, where readiness is a score in `[0, 1]` computed elsewhere (for
//! example from pantry inventory).
//!
//! ## Architecture
//!
//! - **Intelligence**: `RecipeSelector` and its two collaborators, a
//!   `ReadinessSource` and an `IndexPicker`
//! - **Config**: Environment-driven selection settings
//! - **Logging**: Structured `tracing` setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_recipes::intelligence::recipes::{
//!     CatalogReadinessSource, FixedIndexPicker, RecipeSelector,
//! };
//! use pantry_recipes::models::{Diet, RequestedDiet};
//!
//! let catalog = CatalogReadinessSource::new()
//!     .with_recipe(Diet::Vegan, "Vegan Soup", 0.95)
//!     .with_recipe(Diet::Vegan, "Vegan Salad", 0.85);
//! let selector = RecipeSelector::new(catalog, FixedIndexPicker::new(0));
//!
//! let recipe = selector.select(&RequestedDiet::Known(Diet::Vegan), true);
//! assert_eq!(recipe.as_deref(), Some("Vegan Soup"));
//! ```

/// Selection configuration loaded from the environment
pub mod config;

/// Recipe selection logic and its collaborators
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Error types re-exported from the core crate
pub mod errors {
    pub use pantry_core::errors::{AppError, AppResult, ConfigError, ErrorCode};
}

/// Diet models re-exported from the core crate
pub mod models {
    pub use pantry_core::models::{Diet, RequestedDiet};
}

/// Constants re-exported from the core crate
pub mod constants {
    pub use pantry_core::constants::{env_config, selection, service_names};
}
