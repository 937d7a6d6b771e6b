// ABOUTME: Readiness-based recipe selection with thresholding and randomized fallback
// ABOUTME: Returns the best eligible recipe or a uniformly random one, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

//! Recipe selection
//!
//! A recipe is eligible when its readiness is strictly greater than
//! [`MIN_READINESS_THRESHOLD`]. Among eligible recipes the selector either
//! takes the highest score or lets an [`IndexPicker`] choose uniformly.
//!
//! Candidates are visited in recipe-name order, so when several recipes
//! share the highest score the lexicographically smallest name wins, and a
//! fixed random index always maps to the same recipe.

use super::picker::{IndexPicker, ThreadRngPicker};
use super::readiness::ReadinessSource;
use crate::constants::selection::MIN_READINESS_THRESHOLD;
use crate::models::RequestedDiet;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// How a recipe is chosen among the eligible candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Highest readiness wins
    Best,
    /// Uniformly random among eligible recipes
    Random,
}

impl SelectionMode {
    /// Map the `take_best` flag onto a mode
    #[must_use]
    pub const fn from_take_best(take_best: bool) -> Self {
        if take_best {
            Self::Best
        } else {
            Self::Random
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => f.write_str("best"),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Result of a selection, including why nothing was chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// A recipe was chosen
    Selected {
        /// Recipe name
        recipe: String,
        /// Readiness score of the chosen recipe
        readiness: f64,
        /// Mode that chose it
        mode: SelectionMode,
    },
    /// The diet was recognized but no recipe exceeded the threshold
    NoEligibleRecipe {
        /// Number of recipes the readiness source returned
        candidates: usize,
        /// How many of them were at or below the threshold
        below_threshold: usize,
    },
    /// The diet did not name a supported category
    UnrecognizedDiet {
        /// Raw input as received
        input: String,
    },
}

impl SelectionOutcome {
    /// Collapse to the recipe name, discarding the reason for absence
    #[must_use]
    pub fn into_recipe(self) -> Option<String> {
        match self {
            Self::Selected { recipe, .. } => Some(recipe),
            Self::NoEligibleRecipe { .. } | Self::UnrecognizedDiet { .. } => None,
        }
    }

    /// Borrow the chosen recipe name, if any
    #[must_use]
    pub fn recipe(&self) -> Option<&str> {
        match self {
            Self::Selected { recipe, .. } => Some(recipe),
            Self::NoEligibleRecipe { .. } | Self::UnrecognizedDiet { .. } => None,
        }
    }
}

/// Chooses one recipe per call from the readiness of a diet's recipes
///
/// Holds no state between calls beyond its two collaborators, so repeated
/// calls with the same inputs and a deterministic picker return the same
/// recipe.
#[derive(Debug, Clone)]
pub struct RecipeSelector<R, P = ThreadRngPicker> {
    readiness: R,
    picker: P,
}

impl<R: ReadinessSource> RecipeSelector<R> {
    /// Create a selector that draws random picks from the thread RNG
    #[must_use]
    pub const fn with_thread_rng(readiness: R) -> Self {
        Self::new(readiness, ThreadRngPicker)
    }
}

impl<R: ReadinessSource, P: IndexPicker> RecipeSelector<R, P> {
    /// Create a selector from its readiness source and index picker
    #[must_use]
    pub const fn new(readiness: R, picker: P) -> Self {
        Self { readiness, picker }
    }

    /// Select a recipe for `diet`
    ///
    /// With `take_best` the highest-readiness eligible recipe is returned,
    /// otherwise a uniformly random eligible one. Returns `None` when the
    /// diet is unrecognized or no recipe is above the threshold.
    pub fn select(&self, diet: &RequestedDiet, take_best: bool) -> Option<String> {
        self.select_outcome(diet, take_best).into_recipe()
    }

    /// Select a recipe for `diet`, reporting why nothing was chosen
    ///
    /// Returns the same recipe as [`Self::select`] for the same inputs.
    pub fn select_outcome(&self, diet: &RequestedDiet, take_best: bool) -> SelectionOutcome {
        let mode = SelectionMode::from_take_best(take_best);
        let readiness_map = self.readiness.readiness(diet);
        let candidates = readiness_map.len();

        // NaN never compares greater, so it is filtered out with the rest
        let eligible: Vec<(&str, f64)> = readiness_map
            .iter()
            .filter(|(_, score)| **score > MIN_READINESS_THRESHOLD)
            .map(|(name, &score)| (name.as_str(), score))
            .collect();

        debug!(
            diet = %diet,
            mode = %mode,
            candidates,
            eligible = eligible.len(),
            "Evaluated recipe readiness"
        );

        let chosen = match mode {
            SelectionMode::Best => Self::best_of(&eligible),
            SelectionMode::Random => self.random_of(&eligible),
        };

        match (chosen, diet) {
            (Some((recipe, readiness)), _) => {
                debug!(recipe, readiness, mode = %mode, "Selected recipe");
                SelectionOutcome::Selected {
                    recipe: recipe.to_owned(),
                    readiness,
                    mode,
                }
            }
            (None, RequestedDiet::Unrecognized(input)) => {
                warn!(input = %input, "Unrecognized diet, no recipe selected");
                SelectionOutcome::UnrecognizedDiet {
                    input: input.clone(),
                }
            }
            (None, RequestedDiet::Known(_)) => {
                let below_threshold = candidates - eligible.len();
                debug!(
                    diet = %diet,
                    candidates,
                    below_threshold,
                    "No recipe above readiness threshold"
                );
                SelectionOutcome::NoEligibleRecipe {
                    candidates,
                    below_threshold,
                }
            }
        }
    }

    /// Highest score, keeping the first candidate on ties
    fn best_of<'a>(eligible: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
        eligible
            .iter()
            .copied()
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
    }

    fn random_of<'a>(&self, eligible: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
        if eligible.is_empty() {
            return None;
        }
        let index = self.picker.pick_index(eligible.len()) % eligible.len();
        eligible.get(index).copied()
    }
}
