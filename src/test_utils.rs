//! Shared proptest strategies and value helpers for unit tests.

use std::ops::Range;

use num_bigint::BigUint;
use proptest::prelude::*;

/// Converts small literals into the values the extractor produces.
pub(crate) fn big(values: &[u64]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

/// Vectors of non-negative integers, mixing small values with full-range ones.
pub(crate) fn arb_numbers(len: Range<usize>) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(prop_oneof![3 => 0u64..1000, 1 => any::<u64>()], len)
}

/// Non-empty separators that contain no ASCII digit.
pub(crate) fn arb_separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just(", ".to_string()),
        Just("\n".to_string()),
        Just(" | ".to_string()),
        Just("-".to_string()),
        Just(".".to_string()),
        prop::string::string_regex("[^0-9]{1,5}").unwrap(),
    ]
}
