// ABOUTME: Random index selection strategies for non-greedy recipe picks
// ABOUTME: Thread RNG for production, seeded ChaCha for reproducibility, fixed index for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipes

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, PoisonError};

/// Picks one index uniformly from `n` candidates
///
/// Implementations should return a value in `[0, n)`; the selector reduces
/// anything larger modulo `n`.
///
/// `[0, 0)` is empty, so `n == 0` has no valid answer. [`RecipeSelector`]
/// never asks with zero candidates. The pickers in this module return `0`
/// in that case instead of panicking, and other implementations may return
/// any value.
///
/// [`RecipeSelector`]: super::RecipeSelector
pub trait IndexPicker: Send + Sync {
    /// Pick an index in `[0, n)` for `n > 0`
    fn pick_index(&self, n: usize) -> usize;
}

impl<T: IndexPicker + ?Sized> IndexPicker for Box<T> {
    fn pick_index(&self, n: usize) -> usize {
        (**self).pick_index(n)
    }
}

impl<T: IndexPicker + ?Sized> IndexPicker for &T {
    fn pick_index(&self, n: usize) -> usize {
        (**self).pick_index(n)
    }
}

/// Uniform picks from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick_index(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..n)
    }
}

/// Reproducible uniform picks from a seeded `ChaCha8` generator
///
/// Two pickers built from the same seed yield the same sequence of picks.
/// The generator is shared behind a mutex so one picker can serve
/// concurrent selections.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededPicker {
    /// Create a picker from a fixed seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick_index(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // A panic elsewhere cannot leave the generator in a broken state
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..n)
    }
}

/// Always picks the same index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndexPicker {
    index: usize,
}

impl FixedIndexPicker {
    /// Create a picker that always answers `index`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl IndexPicker for FixedIndexPicker {
    fn pick_index(&self, _n: usize) -> usize {
        self.index
    }
}
