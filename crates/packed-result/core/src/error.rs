// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::kind::PayloadKind;

/// Errors reported by the checked constructors of [`PackedResult`](crate::PackedResult).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// The payload's bit pattern lies in the region its kind reserves for errors.
    #[error("{kind} payload {bits:#018x} collides with the error encoding")]
    PayloadCollision {
        /// Kind of the rejected payload.
        kind: PayloadKind,
        /// Raw bits of the rejected payload.
        bits: u64,
    },

    /// `ErrorCode::into_code` returned a value wider than the code's declared width.
    #[error("error code {code:#x} does not fit in {bits} bits")]
    CodeOutOfRange {
        /// Raw code as returned by `into_code`.
        code: u64,
        /// Declared width (`ErrorCode::BITS`).
        bits: u32,
    },
}
