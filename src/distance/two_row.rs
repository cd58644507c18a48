// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two alternating rows instead of the full table.
//!
//! Row `y` of the table only reads row `y - 1`, so two buffers of `n + 1` are
//! enough. Each outer step swaps the owned buffers: the row just filled becomes
//! `prev`, the stale one is overwritten as `curr`.

use super::min3;

/// Levenshtein distance with O(n) memory.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = (0..=n).collect();

    for (y, bu) in b.iter().enumerate() {
        std::mem::swap(&mut prev, &mut curr);
        curr[0] = y + 1;

        for (x, au) in a.iter().enumerate() {
            curr[x + 1] = if au == bu {
                prev[x]
            } else {
                1 + min3(
                    prev[x + 1], // delete
                    prev[x],     // substitute
                    curr[x],     // insert
                )
            };
        }
    }

    curr[n]
}
