// ABOUTME: Recipe selection module driven by per-recipe readiness scores
// ABOUTME: Exposes RecipeSelector plus the readiness source and index picker seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

//! # Recipes Module
//!
//! Chooses one recipe for a diet category. Readiness scores come from a
//! [`ReadinessSource`]; recipes at or below the minimum readiness are never
//! recommended. The selector either takes the best-scoring recipe or asks an
//! [`IndexPicker`] for a uniformly random eligible one.
//!
//! ## Example Usage
//!
//! ```text
//! let selector = RecipeSelector::new(catalog, ThreadRngPicker);
//! let recipe = selector.select(&RequestedDiet::parse("vegan"), true);
//! ```

/// In-memory and file-backed readiness catalog
pub mod catalog;
/// Random index selection strategies
pub mod picker;
/// Readiness collaborator contract
pub mod readiness;
/// Selection algorithm and its outcome types
pub mod selector;

// Re-export main types for convenience
pub use catalog::CatalogReadinessSource;
pub use picker::{FixedIndexPicker, IndexPicker, SeededPicker, ThreadRngPicker};
pub use readiness::{ReadinessMap, ReadinessSource};
pub use selector::{RecipeSelector, SelectionMode, SelectionOutcome};
