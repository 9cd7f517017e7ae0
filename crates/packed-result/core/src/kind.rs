// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// The closed set of payload kinds a [`PackedResult`](crate::PackedResult) can carry.
///
/// Each kind selects its own bit-stealing strategy; see [`crate::kinds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// `i64`: bit 62, interpreted relative to the sign bit.
    SignedInt,
    /// `u64`: bit 63.
    UnsignedInt,
    /// `f64`: the NaN space.
    Float,
    /// `*const T` / `*mut T`: bit 0.
    Pointer,
}

impl PayloadKind {
    /// Human-readable name, also used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            PayloadKind::SignedInt => "signed integer",
            PayloadKind::UnsignedInt => "unsigned integer",
            PayloadKind::Float => "float",
            PayloadKind::Pointer => "pointer",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
