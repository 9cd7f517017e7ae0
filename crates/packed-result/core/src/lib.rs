// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # packed_result_core
//!
//! A "value or error" union that fits in exactly 64 bits.
//!
//! [`PackedResult<V, E>`] stores either a payload `V` or an error code `E` in a
//! single `u64`. There is no tag byte: whether the bits hold an error is
//! computed from the bits themselves, by repurposing a bit that the payload
//! kind rarely or never needs.
//!
//! ## Payload kinds
//!
//! | Payload | Error signal | Spare code bits |
//! |---|---|---|
//! | `i64` | bit 62 (meaning depends on the sign bit) | 62 |
//! | `u64` | bit 63 | 63 |
//! | `f64` | any NaN; codes live in the quiet-NaN mantissa | 51 |
//! | `*const T` / `*mut T` | bit 0 | 63 |
//!
//! Each kind gives up part of its value domain. Payloads inside that part
//! read back as errors; [`PackedResult::try_ok`] detects them.
//!
//! ## Example
//!
//! ```rust
//! use packed_result_core::PackedResult;
//!
//! fn checked_div(a: i64, b: i64) -> PackedResult<i64, u8> {
//!     if b == 0 {
//!         return PackedResult::err(1);
//!     }
//!     PackedResult::ok(a / b)
//! }
//!
//! let ok = checked_div(84, 2);
//! assert!(!ok.has_error());
//! assert_eq!(ok.value(), 42);
//!
//! let err = checked_div(1, 0);
//! assert!(err.has_error());
//! assert_eq!(err.error(), 1);
//!
//! assert_eq!(core::mem::size_of::<PackedResult<i64, u8>>(), 8);
//! ```
//!
//! ## Caller contract
//!
//! [`PackedResult::value`] and [`PackedResult::error`] never check the state.
//! Reading the wrong side yields a meaningless value, never undefined
//! behavior. Use [`PackedResult::ok_value`], [`PackedResult::err_code`] or
//! [`PackedResult::into_result`] for checked access.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(any(test, feature = "test-utils"))]
extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod error_code;
mod kind;
mod packed;
mod traits;

pub mod kinds;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use consts::{
    FLOAT_CANONICAL_NAN, FLOAT_EXPONENT_MASK, FLOAT_MANTISSA_MASK, FLOAT_NAN_MASK,
    POINTER_ERROR_FLAG, SIGN_BIT, SIGNED_ERROR_FLAG, UNSIGNED_ERROR_FLAG,
};
pub use error::EncodingError;
pub use kind::PayloadKind;
pub use packed::PackedResult;
pub use traits::{ErrorCode, Payload64, code_mask};
