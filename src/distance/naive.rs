// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Direct expansion of the recurrence. No memoization, no table.
//!
//! Exponential: each mismatch branches three ways and the depth reaches `n + m`.
//! It exists because it is obviously correct, which makes it the oracle the
//! other strategies are tested against. Never route untrusted or long input
//! here; the ranking layer refuses inputs longer than [`MAX_NAIVE_LEN`].

use super::min3;

/// Longest input the ranking layer will hand to the naive strategy.
///
/// Two fully mismatched 10-unit words already take ~8 million calls.
pub const MAX_NAIVE_LEN: usize = 10;

/// Levenshtein distance by plain recursion.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if b.is_empty() {
        return a.len();
    }
    if a.is_empty() {
        return b.len();
    }

    if a[0] == b[0] {
        return distance(&a[1..], &b[1..]);
    }

    // delete, insert, substitute
    1 + min3(
        distance(&a[1..], b),
        distance(a, &b[1..]),
        distance(&a[1..], &b[1..]),
    )
}
