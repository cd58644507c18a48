// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for metric laws on the public string API.

#![no_main]

use arbitrary::Arbitrary;
use lev::{damerau_levenshtein_distance, levenshtein_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TripleInput {
    a: String,
    b: String,
    c: String,
}

fuzz_target!(|input: TripleInput| {
    let cap = |s: &str| -> String { s.chars().take(64).collect() };
    let (a, b, c) = (cap(&input.a), cap(&input.b), cap(&input.c));

    let ab = levenshtein_distance(&a, &b);

    // INVARIANT 1: symmetry
    assert_eq!(ab, levenshtein_distance(&b, &a));
    assert_eq!(
        damerau_levenshtein_distance(&a, &b),
        damerau_levenshtein_distance(&b, &a)
    );

    // INVARIANT 2: identity
    assert_eq!(levenshtein_distance(&a, &a), 0);

    // INVARIANT 3: triangle inequality
    assert!(ab <= levenshtein_distance(&a, &c) + levenshtein_distance(&c, &b));

    // INVARIANT 4: length difference is a lower bound, longer length an upper bound
    assert!(ab >= a.len().abs_diff(b.len()));
    assert!(ab <= a.len().max(b.len()));
});
