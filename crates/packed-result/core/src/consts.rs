// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bit masks used by the payload encodings.

/// Bit 63: the two's-complement sign bit.
pub const SIGN_BIT: u64 = 1 << 63;

/// Bit 62: error flag for `i64` payloads.
///
/// Set means error for non-negative patterns, clear means error for negative ones.
pub const SIGNED_ERROR_FLAG: u64 = 1 << 62;

/// Bit 63: error flag for `u64` payloads.
pub const UNSIGNED_ERROR_FLAG: u64 = 1 << 63;

/// Bit 0: error flag for pointer payloads.
pub const POINTER_ERROR_FLAG: u64 = 1;

/// IEEE-754 binary64 exponent field (bits 52..=62).
pub const FLOAT_EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// IEEE-754 binary64 mantissa field (bits 0..=51).
pub const FLOAT_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Sign, exponent and quiet bit: everything above the error code region.
pub const FLOAT_NAN_MASK: u64 = 0xFFF8_0000_0000_0000;

/// Canonical quiet NaN (`f64::NAN.to_bits()`), the base of every float error.
pub const FLOAT_CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;
