// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `i64` payloads: bit 62 is the error flag, read relative to the sign bit.
//!
//! ```text
//!   63  62  61                                                          0
//!  |---|---|-------------------------------------------------------------|
//!  | S | F |                       value / code                          |
//!  |---|---|-------------------------------------------------------------|
//! ```
//!
//! - `S = 0`: `F = 1` is an error. Values in `[2^62, 2^63)` are unrepresentable.
//! - `S = 1`: `F = 0` is an error. Values in `[-2^63, -2^62)` are unrepresentable.
//!
//! Errors written by [`encode`] are always non-negative patterns, so codes
//! occupy bits 0..62.

use crate::consts::{POINTER_ERROR_FLAG, SIGN_BIT, SIGNED_ERROR_FLAG};
use crate::kind::PayloadKind;
use crate::traits::{Payload64, sealed::Sealed};

/// Bits available for an error code.
pub const CODE_BITS: u32 = 62;

/// Returns `true` if the sign bit and bit 62 disagree in the error direction.
#[inline(always)]
pub const fn is_error(bits: u64) -> bool {
    let is_negative = bits & SIGN_BIT != 0;
    let is_flag_set = bits & SIGNED_ERROR_FLAG != 0;

    is_negative != is_flag_set
}

/// Stores `code` in bits 0..62 and sets bit 62 on a non-negative pattern.
#[inline(always)]
pub const fn encode(code: u64) -> u64 {
    code | SIGNED_ERROR_FLAG
}

/// Extracts the code, choosing the mask from the sign bit.
///
/// Non-negative patterns clear bit 62. Negative patterns only clear bit 0;
/// they never come out of [`encode`], so the code read from them is not
/// meaningful.
#[inline(always)]
pub const fn decode(bits: u64) -> u64 {
    if bits & SIGN_BIT == 0 {
        bits & !SIGNED_ERROR_FLAG
    } else {
        // TODO: negative error patterns keep bit 62 and the sign bit; decide
        // whether they should decode like positive ones before changing this.
        bits & !POINTER_ERROR_FLAG
    }
}

impl Sealed for i64 {}

impl Payload64 for i64 {
    const KIND: PayloadKind = PayloadKind::SignedInt;
    const CODE_BITS: u32 = CODE_BITS;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        bits as i64
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
