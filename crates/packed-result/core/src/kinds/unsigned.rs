// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `u64` payloads: bit 63 is the error flag.
//!
//! Values at or above `2^63` cannot be stored as successes.

use crate::consts::UNSIGNED_ERROR_FLAG;
use crate::kind::PayloadKind;
use crate::traits::{Payload64, sealed::Sealed};

/// Bits available for an error code.
pub const CODE_BITS: u32 = 63;

/// Returns `true` if bit 63 is set.
#[inline(always)]
pub const fn is_error(bits: u64) -> bool {
    bits & UNSIGNED_ERROR_FLAG != 0
}

/// Stores `code` in bits 0..63 and sets bit 63.
#[inline(always)]
pub const fn encode(code: u64) -> u64 {
    code | UNSIGNED_ERROR_FLAG
}

/// Clears bit 63.
#[inline(always)]
pub const fn decode(bits: u64) -> u64 {
    bits & !UNSIGNED_ERROR_FLAG
}

impl Sealed for u64 {}

impl Payload64 for u64 {
    const KIND: PayloadKind = PayloadKind::UnsignedInt;
    const CODE_BITS: u32 = CODE_BITS;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        self
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        bits
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
