// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference workloads used to compare result representations.
//!
//! Each workload exists in four flavors that agree on every input:
//!
//! - `_raw`: returns a sentinel on failure
//! - `_option`: `Option<T>`
//! - `_result`: `Result<T, WorkloadError>`
//! - `_packed`: `PackedResult<T, WorkloadError>`

use packed_result::{ErrorCode, PackedResult, Payload64};

/// Largest input factorial accepts.
pub const FACTORIAL_MAX_INPUT: i32 = 50;

/// Why a workload refused its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ErrorCode)]
pub enum WorkloadError {
    /// Input below zero.
    Negative,
    /// Input above [`FACTORIAL_MAX_INPUT`].
    TooLarge,
}

/// Payload types the workloads compute in.
pub trait Numeric: Payload64 + PartialOrd + core::fmt::Debug {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Failure value of the `_raw` factorial: `-1` converted to `Self`.
    const SENTINEL: Self;

    /// Converts a workload input.
    fn from_i32(n: i32) -> Self;

    /// Addition that wraps on integer overflow.
    fn add(self, rhs: Self) -> Self;

    /// Multiplication that wraps on integer overflow.
    fn mul(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const SENTINEL: Self = -1i64 as $ty;

                #[inline(always)]
                fn from_i32(n: i32) -> Self {
                    n as $ty
                }

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

impl_numeric_for_integers!(i64, u64);

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const SENTINEL: Self = -1.0;

    #[inline(always)]
    fn from_i32(n: i32) -> Self {
        n as f64
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

fn check_factorial_input(n: i32) -> Result<(), WorkloadError> {
    if n < 0 {
        return Err(WorkloadError::Negative);
    }
    if n > FACTORIAL_MAX_INPUT {
        return Err(WorkloadError::TooLarge);
    }
    Ok(())
}

#[inline(always)]
fn factorial<T: Numeric>(n: i32) -> T {
    let mut result = T::ONE;
    for i in 1..=n {
        result = result.mul(T::from_i32(i));
    }
    result
}

/// `n!`, or [`Numeric::SENTINEL`] for inputs outside `0..=50`.
pub fn factorial_raw<T: Numeric>(n: i32) -> T {
    match check_factorial_input(n) {
        Ok(()) => factorial(n),
        Err(_) => T::SENTINEL,
    }
}

/// `n!`, or `None` for inputs outside `0..=50`.
pub fn factorial_option<T: Numeric>(n: i32) -> Option<T> {
    check_factorial_input(n).ok().map(|()| factorial(n))
}

/// `n!`, or the reason the input was refused.
pub fn factorial_result<T: Numeric>(n: i32) -> Result<T, WorkloadError> {
    check_factorial_input(n).map(|()| factorial(n))
}

/// `n!` packed with its error.
pub fn factorial_packed<T: Numeric>(n: i32) -> PackedResult<T, WorkloadError> {
    match check_factorial_input(n) {
        Ok(()) => PackedResult::ok(factorial(n)),
        Err(e) => PackedResult::err(e),
    }
}

#[inline(always)]
fn cube<T: Numeric>(n: i32) -> T {
    let v = T::from_i32(n);
    v.mul(v).mul(v)
}

/// `n³`, or zero for negative inputs.
pub fn cube_raw<T: Numeric>(n: i32) -> T {
    if n < 0 { T::ZERO } else { cube(n) }
}

/// `n³`, or `None` for negative inputs.
pub fn cube_option<T: Numeric>(n: i32) -> Option<T> {
    if n < 0 { None } else { Some(cube(n)) }
}

/// `n³`, or [`WorkloadError::Negative`].
pub fn cube_result<T: Numeric>(n: i32) -> Result<T, WorkloadError> {
    if n < 0 {
        Err(WorkloadError::Negative)
    } else {
        Ok(cube(n))
    }
}

/// `n³` packed with its error.
pub fn cube_packed<T: Numeric>(n: i32) -> PackedResult<T, WorkloadError> {
    if n < 0 {
        PackedResult::err(WorkloadError::Negative)
    } else {
        PackedResult::ok(cube(n))
    }
}
