// ABOUTME: Recommendation intelligence for the pantry recipe recommender
// ABOUTME: Hosts recipe selection and the readiness/randomness collaborators it depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

/// Readiness-based recipe selection
pub mod recipes;
