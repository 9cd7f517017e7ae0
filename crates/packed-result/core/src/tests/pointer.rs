// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::kinds::pointer;
use crate::packed::PackedResult;

use super::fixtures::CalcError;

#[repr(align(16))]
struct Aligned16(#[allow(dead_code)] u64);

fn some_fn() {}

//  Aligned pointer
//   63                                                                  0
//  |---------------------------------------------------------------------|
//  |   X | X | X | X | X | X | X | X | X | X | X | X | X | X | X | X | 0 |
//  |---------------------------------------------------------------------|

#[test]
fn test_aligned_pointer_roundtrips() {
    let value: u32 = 7;
    let ptr: *const u32 = &value;

    let result = PackedResult::<*const u32, CalcError>::ok(ptr);
    assert!(!result.has_error());
    assert_eq!(result.value(), ptr);
}

//  Pointer offset by one byte
//   63                                                                  0
//  |---------------------------------------------------------------------|
//  |   X | X | X | X | X | X | X | X | X | X | X | X | X | X | X | X | 1 |
//  |---------------------------------------------------------------------|

#[test]
fn test_odd_pointer_reads_as_error() {
    let value: u32 = 7;
    let ptr: *const u32 = &value;
    let odd = ptr.cast::<u8>().wrapping_add(1).cast::<u32>();

    let result = PackedResult::<*const u32, CalcError>::ok(odd);
    assert!(result.has_error());
}

#[test]
fn test_null_pointer_roundtrips() {
    let result = PackedResult::<*const u32, CalcError>::ok(core::ptr::null());
    assert!(!result.has_error());
    assert!(result.value().is_null());
}

#[test]
fn test_error_on_aligned_pointer() {
    let value: u64 = 7;
    let mut result = PackedResult::<*const u64, CalcError>::ok(&value);
    result.set_error(CalcError::Misc);

    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Misc);
}

#[test]
fn test_odd_codes_roundtrip() {
    let result = PackedResult::<*const u64, CalcError>::err(CalcError::Calculation);
    assert!(result.has_error());
    assert_eq!(result.error(), CalcError::Calculation);
    assert_eq!(result.to_bits(), 0b11);
}

#[test]
fn test_over_aligned_pointer_roundtrips() {
    let value = Aligned16(1);
    let ptr: *const Aligned16 = &value;

    let result = PackedResult::<*const Aligned16, CalcError>::ok(ptr);
    assert!(!result.has_error());
    assert_eq!(result.value(), ptr);
}

#[test]
fn test_function_pointer_address_roundtrips() {
    let ptr = some_fn as fn() as *const ();
    let result = PackedResult::<*const (), CalcError>::ok(ptr);

    // Code addresses are at least 2-byte aligned on every 64-bit target rustc supports.
    assert_eq!(ptr.addr() & 1, 0);
    assert!(!result.has_error());
    assert_eq!(result.value(), ptr);
}

#[test]
fn test_array_element_pointer_roundtrips() {
    let array = [0i32; 10];
    let ptr = array.as_ptr().wrapping_add(1);

    let result = PackedResult::<*const i32, CalcError>::ok(ptr);
    assert!(!result.has_error());
    assert_eq!(result.value(), ptr);
}

#[test]
fn test_mut_pointer_is_usable_after_roundtrip() {
    let mut value: u64 = 1;
    let result = PackedResult::<*mut u64, CalcError>::ok(&mut value);
    assert!(!result.has_error());

    let ptr = result.value();
    unsafe { *ptr = 99 };
    assert_eq!(value, 99);
}

#[test]
fn test_bit_helpers() {
    assert!(!pointer::is_error(0x1000));
    assert!(pointer::is_error(0x1001));
    assert_eq!(pointer::encode(3), 0b111);
    assert_eq!(pointer::decode(pointer::encode(3)), 3);
}
