// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Every input value, half of them negative.
pub const INPUT_RANGE: Range<i32> = -10..10;

/// How many times each value of [`INPUT_RANGE`] appears.
pub const INPUT_REPEATS: usize = 10;

/// Every value of [`INPUT_RANGE`] repeated [`INPUT_REPEATS`] times, shuffled with `rng`.
///
/// Half the inputs take the error path, in an order the branch predictor
/// cannot learn.
pub fn shuffled_inputs<R: Rng + ?Sized>(rng: &mut R) -> Vec<i32> {
    let mut numbers: Vec<i32> = INPUT_RANGE
        .flat_map(|i| core::iter::repeat_n(i, INPUT_REPEATS))
        .collect();

    numbers.shuffle(rng);
    numbers
}

/// [`shuffled_inputs`] with a fixed seed, for reproducible tests.
pub fn seeded_shuffled_inputs(seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_inputs(&mut rng)
}
