// ABOUTME: Configuration module for the recipe recommender
// ABOUTME: Re-exports environment-driven selection settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

/// Selection settings (catalog location, default mode, random seed)
pub mod selection;

pub use selection::SelectionConfig;
