// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for strategy equivalence.
//!
//! Matrix, two-row and single-row must return the same number for any pair of
//! byte strings. The naive strategy joins in when both inputs are short enough
//! to finish.

#![no_main]

use arbitrary::Arbitrary;
use lev::distance::{matrix, naive, single_row, two_row};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to avoid timeouts
    let a = &input.a[..input.a.len().min(256)];
    let b = &input.b[..input.b.len().min(256)];

    let expected = matrix::distance(a, b);
    assert_eq!(two_row::distance(a, b), expected, "two_row a={:?} b={:?}", a, b);
    assert_eq!(single_row::distance(a, b), expected, "single_row a={:?} b={:?}", a, b);

    if a.len() <= 6 && b.len() <= 6 {
        assert_eq!(naive::distance(a, b), expected, "naive a={:?} b={:?}", a, b);
    }

    // INVARIANT: transpositions only ever lower the count
    assert!(matrix::damerau_distance(a, b) <= expected);
});
