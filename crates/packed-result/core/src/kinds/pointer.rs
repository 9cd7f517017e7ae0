// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer payloads: bit 0 is the error flag.
//!
//! Pointers to data aligned to 2 bytes or more always have bit 0 clear.
//! Pointers to 1-byte aligned data, or pointers offset by an odd number of
//! bytes, read back as errors. That is a limitation of the encoding, not a bug.
//!
//! Codes are stored in bits 1..64 so that odd codes survive masking out the
//! flag.
//!
//! Addresses go through the exposed-provenance API: [`Payload64::from_bits`]
//! returns a pointer that may be dereferenced (under the usual `unsafe`
//! rules) only if it came from [`Payload64::to_bits`] on a live pointer.
//!
//! Only available on 64-bit targets.

use crate::consts::POINTER_ERROR_FLAG;

/// Bits available for an error code.
pub const CODE_BITS: u32 = 63;

/// Returns `true` if bit 0 is set.
#[inline(always)]
pub const fn is_error(bits: u64) -> bool {
    bits & POINTER_ERROR_FLAG != 0
}

/// Shifts `code` into bits 1..64 and sets bit 0.
#[inline(always)]
pub const fn encode(code: u64) -> u64 {
    (code << 1) | POINTER_ERROR_FLAG
}

/// Drops bit 0.
#[inline(always)]
pub const fn decode(bits: u64) -> u64 {
    bits >> 1
}

#[cfg(target_pointer_width = "64")]
mod impls {
    use super::{CODE_BITS, decode, encode, is_error};

    use crate::kind::PayloadKind;
    use crate::traits::{Payload64, sealed::Sealed};

    impl<T> Sealed for *const T {}
    impl<T> Sealed for *mut T {}

    impl<T> Payload64 for *const T {
        const KIND: PayloadKind = PayloadKind::Pointer;
        const CODE_BITS: u32 = CODE_BITS;

        #[inline(always)]
        fn to_bits(self) -> u64 {
            self.expose_provenance() as u64
        }

        #[inline(always)]
        fn from_bits(bits: u64) -> Self {
            core::ptr::with_exposed_provenance(bits as usize)
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

    impl<T> Payload64 for *mut T {
        const KIND: PayloadKind = PayloadKind::Pointer;
        const CODE_BITS: u32 = CODE_BITS;

        #[inline(always)]
        fn to_bits(self) -> u64 {
            self.expose_provenance() as u64
        }

        #[inline(always)]
        fn from_bits(bits: u64) -> Self {
            core::ptr::with_exposed_provenance_mut(bits as usize)
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
}
