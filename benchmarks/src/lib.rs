// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared criterion configuration for the packed-result benchmarks.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::WallTime;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench factorial
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Applies measurement time and sample size, shortened in fast mode.
pub fn configure_group(group: &mut BenchmarkGroup<'_, WallTime>) {
    if is_fast_mode() {
        group.measurement_time(Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(Duration::from_secs(3));
        group.sample_size(50);
    }
}
