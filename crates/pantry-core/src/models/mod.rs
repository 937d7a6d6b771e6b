// ABOUTME: Core data models for the recipe recommender
// ABOUTME: Re-exports the Diet enumeration and its boundary form RequestedDiet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

mod diet;

pub use diet::{Diet, RequestedDiet};
