// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Traits connecting payload and error-code types to the packed encoding.

use crate::kind::PayloadKind;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A 64-bit payload with a bit-stealing strategy.
///
/// Sealed: implemented only for `i64`, `u64`, `f64`, and (on 64-bit targets)
/// `*const T` / `*mut T`. The methods operate on raw bits and never inspect
/// memory behind a pointer.
pub trait Payload64: Copy + sealed::Sealed {
    /// Which strategy this payload uses.
    const KIND: PayloadKind;

    /// Number of bits left free for an error code.
    const CODE_BITS: u32;

    /// Reinterprets the payload as raw bits.
    fn to_bits(self) -> u64;

    /// Reinterprets raw bits as a payload.
    fn from_bits(bits: u64) -> Self;

    /// Returns `true` if `bits` read as an error under this strategy.
    fn is_error_bits(bits: u64) -> bool;

    /// Builds the error bit pattern for `code`.
    ///
    /// `code` must already be masked to [`CODE_BITS`](Payload64::CODE_BITS).
    fn encode_code(code: u64) -> u64;

    /// Extracts the code from an error bit pattern.
    ///
    /// The result is meaningless when `bits` is not an error pattern.
    fn decode_code(bits: u64) -> u64;
}

/// An error code that can be packed next to a [`Payload64`].
///
/// `BITS` is the width of the code; `into_code` must return a value below
/// `1 << BITS`. A packed result refuses to compile when `BITS` exceeds the
/// payload's [`Payload64::CODE_BITS`].
///
/// Fieldless enums can derive this trait with `#[derive(ErrorCode)]` from the
/// `packed-result` crate.
///
/// # Example
///
/// ```rust
/// use packed_result_core::{ErrorCode, PackedResult};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ParseError {
///     Empty,
///     Invalid,
/// }
///
/// impl ErrorCode for ParseError {
///     const BITS: u32 = 1;
///
///     fn into_code(self) -> u64 {
///         match self {
///             ParseError::Empty => 0,
///             ParseError::Invalid => 1,
///         }
///     }
///
///     fn from_code(code: u64) -> Self {
///         match code {
///             0 => ParseError::Empty,
///             _ => ParseError::Invalid,
///         }
///     }
/// }
///
/// let result = PackedResult::<u64, ParseError>::err(ParseError::Invalid);
/// assert_eq!(result.error(), ParseError::Invalid);
/// ```
pub trait ErrorCode: Copy {
    /// Width of the code in bits. Must be below 64.
    const BITS: u32;

    /// Converts the error into its raw code.
    fn into_code(self) -> u64;

    /// Converts a raw code back into the error.
    ///
    /// Must accept any value below `1 << BITS` without panicking.
    fn from_code(code: u64) -> Self;
}

/// Mask covering the low `bits` bits.
#[inline(always)]
pub const fn code_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
