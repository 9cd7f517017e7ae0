// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # packed-result
//!
//! A "value or error" union in exactly 64 bits, with no tag byte.
//!
//! This is a re-export crate that combines [`packed-result-core`] and
//! [`packed-result-derive`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use packed_result::{ErrorCode, PackedResult};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, ErrorCode)]
//! enum MathError {
//!     DivisionByZero,
//!     Overflow,
//! }
//!
//! fn checked_div(a: u64, b: u64) -> PackedResult<u64, MathError> {
//!     if b == 0 {
//!         return PackedResult::err(MathError::DivisionByZero);
//!     }
//!     PackedResult::ok(a / b)
//! }
//!
//! let result = checked_div(10, 0);
//! assert!(result.has_error());
//! assert_eq!(result.error(), MathError::DivisionByZero);
//! assert_eq!(checked_div(10, 5).value(), 2);
//! ```
//!
//! ## What's Included
//!
//! - **Core type**: [`PackedResult`]
//! - **Traits**: [`Payload64`] (sealed; `i64`, `u64`, `f64`, raw pointers), [`ErrorCode`]
//! - **Derive macro**: `#[derive(ErrorCode)]` for fieldless enums (`derive` feature, on by default)
//! - **Strategies**: [`kinds`] exposes each payload kind's bit helpers
//! - **Errors**: [`EncodingError`] from the checked constructors
//!
//! [`packed-result-core`]: https://docs.rs/packed-result-core
//! [`packed-result-derive`]: https://docs.rs/packed-result-derive

#![cfg_attr(not(test), no_std)]

pub use packed_result_core::*;

#[cfg(feature = "derive")]
pub use packed_result_derive::*;
