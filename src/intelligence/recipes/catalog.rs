// ABOUTME: In-memory readiness catalog keyed by diet, loadable from JSON or YAML files
// ABOUTME: Validates diet keys and scores once at load time so lookups never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

//! Readiness catalog
//!
//! A precomputed readiness snapshot per diet. File shape:
//!
//! ```json
//! { "vegan": { "Vegan Soup": 0.95, "Vegan Salad": 0.85 } }
//! ```
//!
//! Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.

use super::readiness::{ReadinessMap, ReadinessSource};
use crate::constants::selection::{READINESS_MAX, READINESS_MIN};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::Diet;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Raw file contents before diet names are validated
type RawCatalog = BTreeMap<String, BTreeMap<String, f64>>;

/// Readiness scores per diet held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogReadinessSource {
    diets: HashMap<Diet, ReadinessMap>,
}

impl CatalogReadinessSource {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the readiness map of `diet`
    #[must_use]
    pub fn with_diet(mut self, diet: Diet, readiness: ReadinessMap) -> Self {
        self.diets.insert(diet, readiness);
        self
    }

    /// Add or overwrite a single recipe score
    #[must_use]
    pub fn with_recipe(mut self, diet: Diet, recipe: impl Into<String>, readiness: f64) -> Self {
        self.insert(diet, recipe, readiness);
        self
    }

    /// Add or overwrite a single recipe score in place
    pub fn insert(&mut self, diet: Diet, recipe: impl Into<String>, readiness: f64) {
        self.diets
            .entry(diet)
            .or_default()
            .insert(recipe.into(), readiness);
    }

    /// Diets that have at least one recipe
    pub fn diets(&self) -> impl Iterator<Item = Diet> + '_ {
        self.diets
            .iter()
            .filter(|(_, readiness)| !readiness.is_empty())
            .map(|(diet, _)| *diet)
    }

    /// Total number of recipe entries across all diets
    #[must_use]
    pub fn len(&self) -> usize {
        self.diets.values().map(BTreeMap::len).sum()
    }

    /// Whether the catalog holds no recipes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a catalog from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, names an unknown diet,
    /// or contains a non-finite score
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let raw: RawCatalog = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Parse a catalog from a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, names an unknown diet,
    /// or contains a non-finite score
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let raw: RawCatalog = serde_yaml::from_str(content).map_err(|e| {
            AppError::serialization(format!("YAML error: {e}")).with_source(e)
        })?;
        Self::from_raw(raw)
    }

    /// Load a catalog file, choosing the format from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let error = if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Readiness catalog {}", path.display()))
            } else {
                AppError::storage(format!(
                    "Failed to read readiness catalog {}: {e}",
                    path.display()
                ))
            };
            error.with_source(e)
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let catalog = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(
            path = %path.display(),
            recipes = catalog.len(),
            "Loaded readiness catalog"
        );
        Ok(catalog)
    }

    fn from_raw(raw: RawCatalog) -> AppResult<Self> {
        let mut diets = HashMap::with_capacity(raw.len());

        for (diet_name, recipes) in raw {
            let diet: Diet = diet_name.parse()?;

            for (recipe, &score) in &recipes {
                if !score.is_finite() {
                    return Err(AppError::new(
                        ErrorCode::InvalidFormat,
                        format!("Readiness for '{recipe}' ({diet}) must be a finite number"),
                    )
                    .with_details(json!({ "diet": diet, "recipe": recipe })));
                }
                if !(READINESS_MIN..=READINESS_MAX).contains(&score) {
                    warn!(
                        diet = %diet,
                        recipe = %recipe,
                        score,
                        "Readiness outside [0, 1], keeping as-is"
                    );
                }
            }

            if diets.insert(diet, recipes).is_some() {
                return Err(AppError::invalid_input(format!(
                    "Diet '{diet}' appears more than once in the readiness catalog"
                )));
            }
        }

        Ok(Self { diets })
    }
}

impl ReadinessSource for CatalogReadinessSource {
    fn readiness_for_diet(&self, diet: Diet) -> ReadinessMap {
        self.diets.get(&diet).cloned().unwrap_or_default()
    }
}
