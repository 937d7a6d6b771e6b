// ABOUTME: Pantry CLI - command-line front end for readiness-based recipe selection
// ABOUTME: Parses diet input at the boundary and prints the selected recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes
//!
//! Usage:
//! ```bash
//! # Best-scoring vegan recipe from a catalog file
//! pantry-cli select --diet vegan --catalog readiness.json
//!
//! # Random eligible recipe, reproducible with a seed
//! pantry-cli select --diet vegetarian --random --seed 42
//!
//! # Machine-readable outcome
//! pantry-cli select --diet vegan --json
//!
//! # List supported diets
//! pantry-cli diets
//! ```

mod commands;

use clap::{Parser, Subcommand};
use pantry_recipes::config::SelectionConfig;
use pantry_recipes::errors::AppResult;
use pantry_recipes::logging::LoggingConfig;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Pantry recipe recommender",
    long_about = "Recommends a recipe for a diet category from per-recipe readiness scores."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Select a recipe for a diet
    Select(commands::select::SelectArgs),

    /// List supported diet categories
    Diets,
}

fn run(cli: Cli) -> AppResult<()> {
    let config = SelectionConfig::load()?;

    match cli.command {
        Command::Select(args) => {
            let options = commands::select::SelectOptions::resolve(args, &config);
            commands::select::run(&options)
        }
        Command::Diets => {
            commands::diets::list();
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}
