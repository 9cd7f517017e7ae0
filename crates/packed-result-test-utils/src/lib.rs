// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for packed-result crates.
//!
//! - [`shuffled_inputs`]: the benchmark input set, shuffled
//! - [`workloads`]: factorial and cube in raw, `Option`, `Result` and packed flavors
//! - [`samples`]: representable and colliding payloads per kind
//!
//! ## License
//!
//! GPL-3.0-only

mod inputs;

pub mod workloads;

/// Sample payload sets from `packed-result`'s `test-utils` feature.
pub use packed_result::support::test_utils as samples;

pub use inputs::{INPUT_RANGE, INPUT_REPEATS, seeded_shuffled_inputs, shuffled_inputs};
pub use workloads::{Numeric, WorkloadError};
