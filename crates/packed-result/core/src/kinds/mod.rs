// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-kind bit-stealing strategies.
//!
//! Each submodule exposes its encoding as `const fn`s over raw bits and
//! implements [`Payload64`](crate::Payload64) for its payload type by
//! delegating to them.

pub mod float;
pub mod pointer;
pub mod signed;
pub mod unsigned;
