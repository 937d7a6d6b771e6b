// ABOUTME: Core types and constants for the pantry recipe recommender
// ABOUTME: Foundation crate with error handling, diet categories, and selection constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for the pantry recipe
//! recommender. This crate changes infrequently so the selection logic and the
//! command-line surface can build on a stable set of types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Selection policy constants and environment variable names
//! - **models**: Diet categories and their boundary representation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Diet, `RequestedDiet`)
pub mod models;
