// ABOUTME: Recipe selection command for pantry-cli
// ABOUTME: Loads the readiness catalog, builds a selector, and prints the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use clap::Args;
use pantry_recipes::config::SelectionConfig;
use pantry_recipes::constants::env_config;
use pantry_recipes::errors::{AppError, AppResult};
use pantry_recipes::intelligence::recipes::{
    CatalogReadinessSource, IndexPicker, RecipeSelector, SeededPicker, SelectionOutcome,
    ThreadRngPicker,
};
use pantry_recipes::models::RequestedDiet;
use std::path::PathBuf;
use tracing::info;

/// Flags of the `select` subcommand
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    /// Diet category (vegan, vegetarian, pescatarian, omnivore)
    #[arg(long)]
    pub diet: String,

    /// Pick a random eligible recipe instead of the best one
    #[arg(long, conflicts_with = "best")]
    pub random: bool,

    /// Pick the best-scoring recipe (default unless configured otherwise)
    #[arg(long)]
    pub best: bool,

    /// Readiness catalog file (JSON or YAML), overrides `RECIPE_CATALOG_PATH`
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible random picks, overrides `RECIPE_SELECTION_SEED`
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full selection outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resolved options for one selection
#[derive(Debug, PartialEq, Eq)]
pub struct SelectOptions {
    pub diet: String,
    pub take_best: bool,
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
    pub json: bool,
}

impl SelectOptions {
    /// Apply command-line flags on top of the loaded configuration
    ///
    /// `--random` wins over `--best`, which wins over the configured mode.
    /// `--catalog` and `--seed` fall back to their configured values.
    pub fn resolve(args: SelectArgs, config: &SelectionConfig) -> Self {
        let take_best = if args.random {
            false
        } else {
            args.best || config.take_best
        };

        Self {
            diet: args.diet,
            take_best,
            catalog: args.catalog.or_else(|| config.catalog_path.clone()),
            seed: args.seed.or(config.seed),
            json: args.json,
        }
    }
}

/// Run a selection and print the result
pub fn run(options: &SelectOptions) -> AppResult<()> {
    let catalog_path = options.catalog.as_deref().ok_or_else(|| {
        AppError::config(format!(
            "No readiness catalog configured; pass --catalog or set {}",
            env_config::CATALOG_PATH
        ))
    })?;
    let catalog = CatalogReadinessSource::from_path(catalog_path)?;

    let picker: Box<dyn IndexPicker> = match options.seed {
        Some(seed) => {
            info!(seed, "Using seeded random picker");
            Box::new(SeededPicker::new(seed))
        }
        None => Box::new(ThreadRngPicker),
    };

    let selector = RecipeSelector::new(catalog, picker);
    let diet = RequestedDiet::parse(&options.diet);
    let outcome = selector.select_outcome(&diet, options.take_best);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SelectionOutcome) {
    match outcome {
        SelectionOutcome::Selected {
            recipe,
            readiness,
            mode,
        } => println!("{recipe}\t(readiness {readiness:.2}, {mode})"),
        SelectionOutcome::NoEligibleRecipe {
            candidates,
            below_threshold,
        } => {
            println!(
                "No recipe is ready enough ({below_threshold} of {candidates} candidates at or below the threshold)"
            );
        }
        SelectionOutcome::UnrecognizedDiet { input } => {
            println!("No recipe: '{input}' is not a supported diet (see `pantry-cli diets`)");
        }
    }
}
