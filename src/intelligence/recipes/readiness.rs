// ABOUTME: Readiness collaborator contract consumed by recipe selection
// ABOUTME: Maps a diet to recipe readiness scores, empty for unrecognized diets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use crate::models::{Diet, RequestedDiet};
use std::collections::BTreeMap;

/// Recipe name to readiness score, ordered by recipe name
///
/// Scores are nominally in `[0.0, 1.0]`, higher meaning more ready. The
/// ordering makes iteration (and therefore tie-breaking and random index
/// lookup) deterministic.
pub type ReadinessMap = BTreeMap<String, f64>;

/// Source of per-recipe readiness scores for a diet
///
/// How readiness is computed (inventory matching, ingredient availability)
/// is up to the implementor. Implementations must not fail: a diet with no
/// known recipes yields an empty map.
pub trait ReadinessSource: Send + Sync {
    /// Readiness of every recipe in the catalog of a supported diet
    fn readiness_for_diet(&self, diet: Diet) -> ReadinessMap;

    /// Readiness for a diet as received from the caller
    ///
    /// Unrecognized diets have no catalog and always produce an empty map.
    fn readiness(&self, diet: &RequestedDiet) -> ReadinessMap {
        match diet {
            RequestedDiet::Known(diet) => self.readiness_for_diet(*diet),
            RequestedDiet::Unrecognized(_) => ReadinessMap::new(),
        }
    }
}

impl<F> ReadinessSource for F
where
    F: Fn(Diet) -> ReadinessMap + Send + Sync,
{
    fn readiness_for_diet(&self, diet: Diet) -> ReadinessMap {
        self(diet)
    }
}
