// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! [`ErrorCode`] for primitive types narrower than 64 bits.

use crate::traits::ErrorCode;

macro_rules! impl_error_code_for_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ErrorCode for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn into_code(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_code(code: u64) -> Self {
                    code as $ty
                }
            }
        )*
    };
}

// Signed codes are stored as their two's-complement bits at their own width,
// so -1i8 packs as 0xFF rather than sign-extending into the flag bits.
macro_rules! impl_error_code_for_signed {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl ErrorCode for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn into_code(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline(always)]
                fn from_code(code: u64) -> Self {
                    code as $unsigned as $ty
                }
            }
        )*
    };
}

impl_error_code_for_unsigned!(u8, u16, u32);
impl_error_code_for_signed!(i8 => u8, i16 => u16, i32 => u32);

impl ErrorCode for () {
    const BITS: u32 = 0;

    #[inline(always)]
    fn into_code(self) -> u64 {
        0
    }

    #[inline(always)]
    fn from_code(_code: u64) -> Self {}
}

impl ErrorCode for bool {
    const BITS: u32 = 1;

    #[inline(always)]
    fn into_code(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_code(code: u64) -> Self {
        code & 1 != 0
    }
}
