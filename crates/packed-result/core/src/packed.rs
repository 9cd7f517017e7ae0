// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The packed value-or-error type.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::size_of;

use crate::error::EncodingError;
use crate::kind::PayloadKind;
use crate::traits::{ErrorCode, Payload64, code_mask};

/// Either a payload `V` or an error code `E`, stored in a single `u64`.
///
/// - `#[repr(transparent)]` over `u64`: 8 bytes, no tag, no padding
/// - `Copy`, no drop glue, `Send + Sync` for every payload kind
/// - Success or error is derived from the bits by `V`'s [`Payload64`] strategy
///
/// Construct with [`ok`](Self::ok) or [`err`](Self::err), test with
/// [`has_error`](Self::has_error), then read [`value`](Self::value) or
/// [`error`](Self::error).
///
/// # Example
///
/// ```rust
/// use packed_result_core::PackedResult;
///
/// let mut result = PackedResult::<f64, u16>::ok(2.5);
/// assert!(result.is_ok());
/// assert_eq!(result.value(), 2.5);
///
/// // Overwriting with an error destroys the payload.
/// result.set_error(404);
/// assert!(result.has_error());
/// assert_eq!(result.error(), 404);
/// assert!(result.value().is_nan());
/// ```
#[repr(transparent)]
pub struct PackedResult<V, E> {
    bits: u64,
    _marker: PhantomData<fn() -> (V, E)>,
}

const _: () = assert!(size_of::<PackedResult<u64, u8>>() == size_of::<u64>());

impl<V: Payload64, E: ErrorCode> PackedResult<V, E> {
    /// Payload kind of this instantiation.
    pub const KIND: PayloadKind = V::KIND;

    // Evaluated once per instantiation; rejects invalid V/E pairings at compile time.
    const LAYOUT_CHECK: () = {
        assert!(size_of::<V>() == 8, "payload must be exactly 64 bits wide");
        assert!(E::BITS < 64, "error code must be narrower than 64 bits");
        assert!(
            E::BITS <= V::CODE_BITS,
            "error code does not fit in the payload's spare bits"
        );
    };

    #[inline(always)]
    const fn from_raw(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// Packs a successful payload, bits unmodified.
    ///
    /// No validation: a payload whose bits fall in the error region reads
    /// back as an error. Use [`try_ok`](Self::try_ok) to reject those.
    #[inline(always)]
    pub fn ok(value: V) -> Self {
        let () = Self::LAYOUT_CHECK;
        Self::from_raw(value.to_bits())
    }

    /// Packs an error code.
    ///
    /// The code is truncated to `E::BITS` before the kind-specific error
    /// pattern is applied.
    #[inline(always)]
    pub fn err(code: E) -> Self {
        let () = Self::LAYOUT_CHECK;
        let code = code.into_code() & code_mask(E::BITS);
        Self::from_raw(V::encode_code(code))
    }

    /// Packs a successful payload, rejecting bit patterns that read as errors.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::PayloadCollision`] if `value` lies in the
    /// region its kind reserves for errors (e.g. `i64::MAX`, `u64::MAX`,
    /// any NaN, odd pointers).
    #[inline]
    pub fn try_ok(value: V) -> Result<Self, EncodingError> {
        let packed = Self::ok(value);

        if packed.has_error() {
            return Err(EncodingError::PayloadCollision {
                kind: V::KIND,
                bits: packed.bits,
            });
        }

        Ok(packed)
    }

    /// Packs an error code, rejecting codes wider than `E::BITS`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::CodeOutOfRange`] if `code.into_code()` has
    /// bits set above `E::BITS`.
    #[inline]
    pub fn try_err(code: E) -> Result<Self, EncodingError> {
        let raw = code.into_code();

        if raw & !code_mask(E::BITS) != 0 {
            return Err(EncodingError::CodeOutOfRange {
                code: raw,
                bits: E::BITS,
            });
        }

        Ok(Self::err(code))
    }

    /// Overwrites the value with an error. The previous payload is lost.
    #[inline(always)]
    pub fn set_error(&mut self, code: E) {
        *self = Self::err(code);
    }

    /// Returns `true` if the stored bits read as an error.
    #[inline(always)]
    pub fn has_error(&self) -> bool {
        V::is_error_bits(self.bits)
    }

    /// Returns `true` if the stored bits read as a payload.
    #[inline(always)]
    pub fn is_ok(&self) -> bool {
        !self.has_error()
    }

    /// Reinterprets the stored bits as the payload.
    ///
    /// Unchecked: on an error value this returns the error pattern viewed as
    /// `V` (a NaN, a flagged integer, an odd address).
    #[inline(always)]
    pub fn value(&self) -> V {
        V::from_bits(self.bits)
    }

    /// Extracts the error code.
    ///
    /// Unchecked: on a success value the result is meaningless.
    #[inline(always)]
    pub fn error(&self) -> E {
        E::from_code(V::decode_code(self.bits) & code_mask(E::BITS))
    }

    /// Returns the payload if there is no error.
    #[inline]
    pub fn ok_value(&self) -> Option<V> {
        if self.has_error() {
            None
        } else {
            Some(self.value())
        }
    }

    /// Returns the error code if there is an error.
    #[inline]
    pub fn err_code(&self) -> Option<E> {
        if self.has_error() {
            Some(self.error())
        } else {
            None
        }
    }

    /// Returns the payload, or `default` if there is an error.
    #[inline]
    pub fn value_or(&self, default: V) -> V {
        if self.has_error() {
            default
        } else {
            self.value()
        }
    }

    /// Unpacks into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        if self.has_error() {
            Err(self.error())
        } else {
            Ok(self.value())
        }
    }

    /// Payload kind of this value.
    #[inline(always)]
    pub const fn kind(&self) -> PayloadKind {
        V::KIND
    }

    /// Raw stored bits.
    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        self.bits
    }

    /// Rebuilds a value from raw bits, e.g. after crossing an FFI boundary.
    ///
    /// Both sides must agree on `V` and `E`.
    #[inline(always)]
    pub fn from_bits(bits: u64) -> Self {
        let () = Self::LAYOUT_CHECK;
        Self::from_raw(bits)
    }

    /// Raw stored bits in native byte order.
    #[inline(always)]
    pub const fn to_ne_bytes(self) -> [u8; 8] {
        self.bits.to_ne_bytes()
    }

    /// Rebuilds a value from native-endian bytes.
    #[inline(always)]
    pub fn from_ne_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(u64::from_ne_bytes(bytes))
    }
}

impl<V, E> Clone for PackedResult<V, E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for PackedResult<V, E> {}

impl<V, E> PartialEq for PackedResult<V, E> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<V, E> Eq for PackedResult<V, E> {}

impl<V, E> Hash for PackedResult<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<V, E> fmt::Debug for PackedResult<V, E>
where
    V: Payload64 + fmt::Debug,
    E: ErrorCode + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_error() {
            f.debug_tuple("Err").field(&self.error()).finish()
        } else {
            f.debug_tuple("Ok").field(&self.value()).finish()
        }
    }
}

impl<V, E> Default for PackedResult<V, E>
where
    V: Payload64 + Default,
    E: ErrorCode,
{
    fn default() -> Self {
        Self::ok(V::default())
    }
}

impl<V: Payload64, E: ErrorCode> From<Result<V, E>> for PackedResult<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(code) => Self::err(code),
        }
    }
}

impl<V: Payload64, E: ErrorCode> From<PackedResult<V, E>> for Result<V, E> {
    #[inline]
    fn from(packed: PackedResult<V, E>) -> Self {
        packed.into_result()
    }
}
