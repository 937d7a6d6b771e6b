// ABOUTME: Diet category enumeration used to scope recipe candidates
// ABOUTME: RequestedDiet converts raw caller input without ever failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported diet categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No meat, fish allowed
    Pescatarian,
    /// No restrictions
    Omnivore,
}

impl Diet {
    /// Every supported category, in declaration order
    pub const ALL: [Self; 4] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Pescatarian,
        Self::Omnivore,
    ];

    /// Canonical lowercase name, as accepted by `FromStr` and used in catalog files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Pescatarian => "pescatarian",
            Self::Omnivore => "omnivore",
        }
    }

    /// Get human-readable description of this diet
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Vegan => "Plant-based only, no animal products",
            Self::Vegetarian => "No meat or fish, dairy and eggs allowed",
            Self::Pescatarian => "No meat, fish and seafood allowed",
            Self::Omnivore => "No dietary restrictions",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(Self::Vegan),
            "vegetarian" | "veggie" => Ok(Self::Vegetarian),
            "pescatarian" | "pescetarian" => Ok(Self::Pescatarian),
            "omnivore" | "omnivorous" => Ok(Self::Omnivore),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet: '{other}'. Valid options: vegan, vegetarian, pescatarian, omnivore"
            ))),
        }
    }
}

/// A diet as received at the system boundary
///
/// Raw input that does not name a supported category is kept as
/// `Unrecognized` instead of being rejected, so selection can degrade to
/// "no recipe" rather than failing the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestedDiet {
    /// A supported diet category
    Known(Diet),
    /// Input that could not be converted, kept verbatim for diagnostics
    Unrecognized(String),
}

impl RequestedDiet {
    /// Convert raw input into a requested diet. Never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input
            .parse::<Diet>()
            .map_or_else(|_| Self::Unrecognized(input.to_owned()), Self::Known)
    }
}

impl From<Diet> for RequestedDiet {
    fn from(diet: Diet) -> Self {
        Self::Known(diet)
    }
}

impl fmt::Display for RequestedDiet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(diet) => fmt::Display::fmt(diet, f),
            Self::Unrecognized(input) => write!(f, "unrecognized({input})"),
        }
    }
}
