// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wagner-Fischer: the full (m+1)×(n+1) table.
//!
//! `table[x][y]` holds the distance between `b[..x]` and `a[..y]`. Row 0 and
//! column 0 are the distances against an empty prefix, so they are seeded with
//! `0..=n` and `0..=m`. Every other cell reads only its left, upper and diagonal
//! neighbours, all of which are filled before it.
//!
//! The Damerau variant adds one relaxation per mismatched cell: if the last two
//! units of each prefix are a mirrored pair, the cell may come from two rows and
//! two columns back plus one swap.

use super::{min2, min3};

/// Seeded table with `m + 1` rows of `n + 1` columns.
fn seeded_table(n: usize, m: usize) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; n + 1]; m + 1];
    for (x, row) in table.iter_mut().enumerate() {
        row[0] = x;
    }
    for (y, cell) in table[0].iter_mut().enumerate() {
        *cell = y;
    }
    table
}

/// Levenshtein distance via the full table.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut table = seeded_table(n, m);

    for y in 1..=n {
        for x in 1..=m {
            table[x][y] = if a[y - 1] == b[x - 1] {
                table[x - 1][y - 1]
            } else {
                1 + min3(
                    table[x - 1][y],     // delete
                    table[x][y - 1],     // insert
                    table[x - 1][y - 1], // substitute
                )
            };
        }
    }

    table[m][n]
}

/// Damerau-Levenshtein (optimal string alignment) distance via the full table.
pub fn damerau_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut table = seeded_table(n, m);

    for y in 1..=n {
        for x in 1..=m {
            if a[y - 1] == b[x - 1] {
                table[x][y] = table[x - 1][y - 1];
                continue;
            }

            let mut cell = 1 + min3(table[x - 1][y], table[x][y - 1], table[x - 1][y - 1]);

            if x > 1 && y > 1 && a[y - 1] == b[x - 2] && a[y - 2] == b[x - 1] {
                // transposition
                cell = min2(cell, table[x - 2][y - 2] + 1);
            }

            table[x][y] = cell;
        }
    }

    table[m][n]
}
