// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

/// Largest `i64` that packs as a success: `2^62 - 1`.
pub const SIGNED_MAX_SAFE: i64 = i64::MAX >> 1;

/// Smallest `i64` that packs as a success: `-2^62`.
pub const SIGNED_MIN_SAFE: i64 = i64::MIN >> 1;

/// Largest `u64` that packs as a success: `2^63 - 1`.
pub const UNSIGNED_MAX_SAFE: u64 = u64::MAX >> 1;

/// `i64` values that pack as successes.
pub fn signed_safe_samples() -> Vec<i64> {
    let mut set = alloc::vec![
        0,
        1,
        -1,
        42,
        -1_234_567,
        SIGNED_MAX_SAFE,
        SIGNED_MIN_SAFE,
        i64::MAX >> 2,
        1 << 61,
        i64::MIN / 4,
        i32::MAX as i64,
        i32::MIN as i64,
    ];
    set.extend(equidistant(SIGNED_MIN_SAFE as i128, SIGNED_MAX_SAFE as i128, 64).map(|x| x as i64));
    set
}

/// `i64` values whose bits read as errors.
pub fn signed_colliding_samples() -> Vec<i64> {
    alloc::vec![
        i64::MAX,
        i64::MIN,
        SIGNED_MAX_SAFE + 1,
        SIGNED_MIN_SAFE - 1,
        (1 << 62) + 42,
    ]
}

/// `u64` values that pack as successes.
pub fn unsigned_safe_samples() -> Vec<u64> {
    let mut set = alloc::vec![0, 1, 42, u32::MAX as u64, UNSIGNED_MAX_SAFE, 1 << 62];
    set.extend(equidistant(0, UNSIGNED_MAX_SAFE as i128, 64).map(|x| x as u64));
    set
}

/// `u64` values whose bits read as errors.
pub fn unsigned_colliding_samples() -> Vec<u64> {
    alloc::vec![u64::MAX, UNSIGNED_MAX_SAFE + 1, 1 << 63 | 42]
}

/// Non-NaN `f64` values, all of which pack as successes.
pub fn float_safe_samples() -> Vec<f64> {
    alloc::vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.1,
        -2.718_281_828_4,
        core::f64::consts::PI,
        core::f64::consts::E,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::from_bits(1),
        -f64::from_bits(1),
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::EPSILON,
        8.988_465_674_311_579e307,
    ]
}

/// NaN bit patterns of both signs, quiet and signaling.
pub fn float_nan_patterns() -> Vec<u64> {
    alloc::vec![
        f64::NAN.to_bits(),
        (-f64::NAN).to_bits(),
        0x7FF0_0000_0000_0001,
        0x7FF4_0000_0000_0000,
        0xFFF0_0000_0000_0001,
        0x7FFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ]
}

/// `count` evenly spaced values across `[min, max]`, both ends included.
fn equidistant(min: i128, max: i128, count: usize) -> impl Iterator<Item = i128> {
    let steps = count.max(2) as i128 - 1;
    let step = (max - min) / steps;

    (0..=steps).map(move |i| if i == steps { max } else { min + step * i })
}
