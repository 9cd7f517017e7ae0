// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `f64` payloads: NaN-boxing.
//!
//! Every NaN is an error. Errors are written as the canonical quiet NaN with
//! the code in the low 51 mantissa bits:
//!
//! ```text
//!   63  62       52  51  50                                             0
//!  |---|-----------|---|-------------------------------------------------|
//!  | 0 | 11111111111 | 1 |                     code                      |
//!  |---|-----------|---|-------------------------------------------------|
//! ```
//!
//! The quiet bit keeps the mantissa non-zero, so code `0` is still a NaN.
//! Infinities, zeros and subnormals are ordinary successes.

use crate::consts::{FLOAT_CANONICAL_NAN, FLOAT_EXPONENT_MASK, FLOAT_MANTISSA_MASK, FLOAT_NAN_MASK};
use crate::kind::PayloadKind;
use crate::traits::{Payload64, sealed::Sealed};

/// Bits available for an error code.
pub const CODE_BITS: u32 = 51;

/// Returns `true` if `bits` is any NaN, quiet or signaling, of either sign.
#[inline(always)]
pub const fn is_error(bits: u64) -> bool {
    bits & FLOAT_EXPONENT_MASK == FLOAT_EXPONENT_MASK && bits & FLOAT_MANTISSA_MASK != 0
}

/// Puts `code` into the low mantissa bits of the canonical quiet NaN.
#[inline(always)]
pub const fn encode(code: u64) -> u64 {
    (FLOAT_CANONICAL_NAN & FLOAT_NAN_MASK) | code
}

/// Clears sign, exponent and quiet bit.
#[inline(always)]
pub const fn decode(bits: u64) -> u64 {
    bits & !FLOAT_NAN_MASK
}

impl Sealed for f64 {}

impl Payload64 for f64 {
    const KIND: PayloadKind = PayloadKind::Float;
    const CODE_BITS: u32 = CODE_BITS;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn is_error_bits(bits: u64) -> bool {
        is_error(bits)
    }

    #[inline(always)]
    fn encode_code(code: u64) -> u64 {
        encode(code)
    }

    #[inline(always)]
    fn decode_code(bits: u64) -> u64 {
        decode(bits)
    }
}
