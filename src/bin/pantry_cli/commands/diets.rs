// ABOUTME: Diet listing command for pantry-cli
// ABOUTME: Prints every supported diet category with its description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use pantry_recipes::models::Diet;

/// Print the supported diet categories
pub fn list() {
    for diet in Diet::ALL {
        println!("{:<12} {}", diet.as_str(), diet.description());
    }
}
