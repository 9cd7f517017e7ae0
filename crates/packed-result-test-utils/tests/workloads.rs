// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod workloads_tests {
    use packed_result_test_utils::workloads::{
        cube_option, cube_packed, cube_raw, cube_result, factorial_option, factorial_packed,
        factorial_raw, factorial_result,
    };
    use packed_result_test_utils::{Numeric, WorkloadError, seeded_shuffled_inputs};

    fn assert_factorial_flavors_agree<T: Numeric>() {
        for n in seeded_shuffled_inputs(3) {
            let raw = factorial_raw::<T>(n);
            let option = factorial_option::<T>(n);
            let result = factorial_result::<T>(n);
            let packed = factorial_packed::<T>(n);

            if n < 0 {
                assert_eq!(raw, T::SENTINEL);
                assert_eq!(option, None);
                assert_eq!(result, Err(WorkloadError::Negative));
                assert!(packed.has_error());
                assert_eq!(packed.error(), WorkloadError::Negative);
            } else {
                assert_eq!(option, Some(raw));
                assert_eq!(result, Ok(raw));
                assert!(!packed.has_error(), "{n}! should not read as error");
                assert_eq!(packed.value(), raw);
            }
        }
    }

    fn assert_cube_flavors_agree<T: Numeric>() {
        for n in seeded_shuffled_inputs(5) {
            let raw = cube_raw::<T>(n);
            let option = cube_option::<T>(n);
            let result = cube_result::<T>(n);
            let packed = cube_packed::<T>(n);

            if n < 0 {
                assert_eq!(raw, T::ZERO);
                assert_eq!(option, None);
                assert_eq!(result, Err(WorkloadError::Negative));
                assert_eq!(packed.err_code(), Some(WorkloadError::Negative));
            } else {
                assert_eq!(option, Some(raw));
                assert_eq!(result, Ok(raw));
                assert_eq!(packed.ok_value(), Some(raw));
            }
        }
    }

    #[test]
    fn test_factorial_flavors_agree() {
        assert_factorial_flavors_agree::<i64>();
        assert_factorial_flavors_agree::<u64>();
        assert_factorial_flavors_agree::<f64>();
    }

    #[test]
    fn test_cube_flavors_agree() {
        assert_cube_flavors_agree::<i64>();
        assert_cube_flavors_agree::<u64>();
        assert_cube_flavors_agree::<f64>();
    }

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial_raw::<i64>(0), 1);
        assert_eq!(factorial_raw::<u64>(5), 120);
        assert_eq!(factorial_raw::<f64>(10), 3_628_800.0);
        assert_eq!(factorial_raw::<u64>(-5), u64::MAX);
    }

    #[test]
    fn test_factorial_rejects_large_inputs() {
        assert_eq!(factorial_result::<f64>(51), Err(WorkloadError::TooLarge));
        assert_eq!(factorial_raw::<i64>(51), -1);

        let packed = factorial_packed::<f64>(51);
        assert!(packed.has_error());
        assert_eq!(packed.error(), WorkloadError::TooLarge);
    }

    #[test]
    fn test_cube_values() {
        assert_eq!(cube_raw::<i64>(9), 729);
        assert_eq!(cube_raw::<f64>(-3), 0.0);
    }
}
