// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::kinds::signed;
use crate::packed::PackedResult;
use crate::support::test_utils::{
    SIGNED_MAX_SAFE, SIGNED_MIN_SAFE, signed_colliding_samples, signed_safe_samples,
};

use super::fixtures::CalcError;

type Packed = PackedResult<i64, CalcError>;

fn perform_calculation(succeed: bool) -> Packed {
    if succeed {
        Packed::ok(12345)
    } else {
        Packed::err(CalcError::Calculation)
    }
}

fn narrow(value: u64) -> Packed {
    if value > i64::MAX as u64 {
        return Packed::err(CalcError::Calculation);
    }

    Packed::ok(value as i64)
}

#[test]
fn test_perform_calculation_succeeds() {
    let result = perform_calculation(true);
    assert!(!result.has_error());
    assert_eq!(result.value(), 12345);
}

#[test]
fn test_perform_calculation_fails() {
    let result = perform_calculation(false);
    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Calculation);
}

//  i64::MAX = 2^63 - 1
//   63                                                                  0
//  |---------------------------------------------------------------------|
//  | 0 | 1 | 11111111111111111111111111111111111111111111111111111111111 |
//  |---------------------------------------------------------------------|

#[test]
fn test_max_i64_is_error() {
    assert!(Packed::ok(i64::MAX).has_error());
}

//  i64::MIN = -(2^63)
//   63                                                                  0
//  |---------------------------------------------------------------------|
//  | 1 | 0 | 00000000000000000000000000000000000000000000000000000000000 |
//  |---------------------------------------------------------------------|

#[test]
fn test_min_i64_is_error() {
    assert!(Packed::ok(i64::MIN).has_error());
}

#[test]
fn test_quarter_max_i64_roundtrips() {
    let result = Packed::ok(i64::MAX >> 2);
    assert!(!result.has_error());
    assert_eq!(result.value(), i64::MAX >> 2);
}

//  i64::MIN / 4 = -(2^61)
//   63                                                                  0
//  |---------------------------------------------------------------------|
//  | 1 | 1 | 10000000000000000000000000000000000000000000000000000000000 |
//  |---------------------------------------------------------------------|

#[test]
fn test_quarter_min_i64_roundtrips() {
    let result = Packed::ok(i64::MIN / 4);
    assert!(!result.has_error());
    assert_eq!(result.value(), i64::MIN / 4);
}

#[test]
fn test_safe_range_edges() {
    assert!(Packed::ok(SIGNED_MAX_SAFE).is_ok());
    assert!(Packed::ok(SIGNED_MIN_SAFE).is_ok());
    assert!(Packed::ok(SIGNED_MAX_SAFE + 1).has_error());
    assert!(Packed::ok(SIGNED_MIN_SAFE - 1).has_error());
}

#[test]
fn test_largest_safe_constant_matches_bit_62() {
    assert_eq!(SIGNED_MAX_SAFE, (1 << 62) - 1);
    assert_eq!(SIGNED_MIN_SAFE, -(1 << 62));
}

#[test]
fn test_bit_62_boundary() {
    let result = Packed::ok((1 << 62) - 1);
    assert!(result.is_ok());
    assert_eq!(result.value(), (1 << 62) - 1);

    let result = Packed::ok(1 << 61);
    assert!(result.is_ok());
    assert_eq!(result.value(), 1 << 61);

    assert!(Packed::ok(1 << 62).has_error());
}

#[test]
fn test_negative_with_bit_62_set_roundtrips() {
    let result = Packed::ok(-1_234_567);
    assert!(!result.has_error());
    assert_eq!(result.value(), -1_234_567);
}

#[test]
fn test_set_error_on_negative_value() {
    let mut result = Packed::ok(-1_234_567);
    result.set_error(CalcError::Misc);

    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Misc);
    assert!(result.value() >= 0);
}

#[test]
fn test_set_error_on_positive_value() {
    let mut result = Packed::ok(i64::MAX >> 2);
    result.set_error(CalcError::Misc);

    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Misc);
}

#[test]
fn test_construct_error() {
    let result = Packed::err(CalcError::Calculation);
    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Calculation);
    assert_eq!(result.to_bits(), (1 << 62) | 1);
}

#[test]
fn test_zero_roundtrips() {
    let result = Packed::ok(0);
    assert!(!result.has_error());
    assert_eq!(result.value(), 0);
}

#[test]
fn test_narrowing_overflow_is_error() {
    let result = narrow(i64::MAX as u64 + 1);
    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Calculation);

    let result = narrow(77);
    assert!(result.is_ok());
    assert_eq!(result.value(), 77);
}

#[test]
fn test_safe_samples_roundtrip() {
    for v in signed_safe_samples() {
        let result = Packed::ok(v);
        assert!(!result.has_error(), "{v} should not read as error");
        assert_eq!(result.value(), v);
    }
}

#[test]
fn test_colliding_samples_read_as_errors() {
    for v in signed_colliding_samples() {
        assert!(Packed::ok(v).has_error(), "{v} should read as error");
    }
}

#[test]
fn test_negative_error_pattern_decodes_with_low_bit_mask() {
    // i64::MIN | 0b11: negative, bit 62 clear. Only bit 0 is masked out.
    let bits = (1u64 << 63) | 0b11;
    assert!(signed::is_error(bits));
    assert_eq!(signed::decode(bits), (1u64 << 63) | 0b10);

    let result = PackedResult::<i64, u8>::from_bits(bits);
    assert!(result.has_error());
    assert_eq!(result.error(), 0b10);
}
