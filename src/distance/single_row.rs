// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One row, overwritten in place, plus a scalar carry.
//!
//! When cell `x + 1` is about to be overwritten, `row[x + 1]` still holds the
//! value from the previous outer step ("up") and `row[x]` already holds this
//! step's value ("left"). The only missing neighbour is the diagonal, which
//! `row[x]` held before it was overwritten. `diag` carries it forward.
//!
//! The inner loop is inherently sequential: every step consumes the previous
//! step's carry.

use super::min3;

/// Levenshtein distance with a single buffer of `n + 1` and one carry.
///
/// This backs [`crate::levenshtein_distance`].
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut row: Vec<usize> = (0..=n).collect();

    for (y, bu) in b.iter().enumerate() {
        let mut diag = row[0];
        row[0] = y + 1;

        for (x, au) in a.iter().enumerate() {
            let up = row[x + 1];
            row[x + 1] = if au == bu {
                diag
            } else {
                1 + min3(diag, row[x], up)
            };
            diag = up;
        }
    }

    row[n]
}
