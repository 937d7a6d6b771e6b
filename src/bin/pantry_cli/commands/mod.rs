// ABOUTME: Re-exports command modules for pantry-cli
// ABOUTME: Provides recipe selection and diet listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

pub mod diets;
pub mod select;
