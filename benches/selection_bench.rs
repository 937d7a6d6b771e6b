// ABOUTME: Criterion benchmarks for readiness-based recipe selection
// ABOUTME: Measures best and random selection across catalog sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pantry_recipes::intelligence::recipes::{
    CatalogReadinessSource, RecipeSelector, SeededPicker,
};
use pantry_recipes::models::{Diet, RequestedDiet};

/// Build a vegan catalog whose scores cycle through [0, 1)
fn generate_catalog(count: usize) -> CatalogReadinessSource {
    (0..count).fold(CatalogReadinessSource::new(), |catalog, index| {
        let score = (index % 100) as f64 / 100.0;
        catalog.with_recipe(Diet::Vegan, format!("Recipe {index:05}"), score)
    })
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_selection");
    let diet = RequestedDiet::Known(Diet::Vegan);

    for count in [10_usize, 100, 1_000] {
        let selector = RecipeSelector::new(generate_catalog(count), SeededPicker::new(7));
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("take_best", count), &count, |b, _| {
            b.iter(|| selector.select(black_box(&diet), true));
        });
        group.bench_with_input(BenchmarkId::new("random", count), &count, |b, _| {
            b.iter(|| selector.select(black_box(&diet), false));
        });
    }

    group.finish();
}

fn bench_unrecognized_diet(c: &mut Criterion) {
    let selector = RecipeSelector::new(generate_catalog(100), SeededPicker::new(7));
    let diet = RequestedDiet::parse("invalid_diet");

    c.bench_function("unrecognized_diet", |b| {
        b.iter(|| selector.select(black_box(&diet), false));
    });
}

criterion_group!(benches, bench_selection, bench_unrecognized_diet);
criterion_main!(benches);
