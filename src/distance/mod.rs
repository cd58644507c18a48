// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: four strategies for one recurrence, plus the transposition variant.
//!
//! Every strategy answers the same question. Given prefixes `a[..y]` and `b[..x]`,
//! the cell `d(y, x)` is the fewest single-unit edits turning one into the other:
//!
//! ```text
//! d(y, 0) = y
//! d(0, x) = x
//! d(y, x) = d(y-1, x-1)                                   if a[y-1] == b[x-1]
//!         = 1 + min(d(y, x-1), d(y-1, x), d(y-1, x-1))    otherwise
//! ```
//!
//! | Strategy     | Time      | Extra memory | Use                         |
//! |--------------|-----------|--------------|-----------------------------|
//! | `naive`      | O(3^(n+m))| O(n+m) stack | correctness oracle only     |
//! | `matrix`     | O(nm)     | O(nm)        | reference, Damerau variant  |
//! | `two_row`    | O(nm)     | 2·(n+1)      | space-optimized             |
//! | `single_row` | O(nm)     | (n+1) + 1    | production default          |
//!
//! All strategies are generic over code units (`T: PartialEq`). The `&str` entry
//! points compare UTF-8 bytes, not chars or graphemes: `"café"` vs `"cafe"` is 2.
//! Callers wanting char-level distance collect into `Vec<char>` and use the
//! `*_units` functions.
//!
//! Nothing here allocates beyond the working buffer of a single call, and no
//! state outlives a call, so every function is safe to call from many threads.

pub mod matrix;
pub mod naive;
pub mod single_row;
pub mod two_row;

use std::fmt;
use std::str::FromStr;

/// Levenshtein distance between two strings, compared byte by byte.
///
/// This is the production entry point (single-row strategy).
///
/// ```
/// assert_eq!(lev::levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(lev::levenshtein_distance("ab", "ba"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    single_row::distance(a.as_bytes(), b.as_bytes())
}

/// Damerau-Levenshtein distance between two strings, compared byte by byte.
///
/// An adjacent swap costs one edit instead of two. This is the restricted form
/// (optimal string alignment): a transposed pair is never edited again.
///
/// ```
/// assert_eq!(lev::damerau_levenshtein_distance("ab", "ba"), 1);
/// assert_eq!(lev::damerau_levenshtein_distance("abcd", "badc"), 2);
/// ```
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    matrix::damerau_distance(a.as_bytes(), b.as_bytes())
}

/// Levenshtein distance over arbitrary code units.
pub fn levenshtein_units<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    single_row::distance(a, b)
}

/// Damerau-Levenshtein distance over arbitrary code units.
pub fn damerau_levenshtein_units<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    matrix::damerau_distance(a, b)
}

/// Smaller of two values.
#[inline]
pub fn min2(a: usize, b: usize) -> usize {
    if a < b {
        a
    } else {
        b
    }
}

/// Smallest of three values.
#[inline]
pub fn min3(a: usize, b: usize, c: usize) -> usize {
    min2(min2(a, b), c)
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGY SELECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Which implementation computes a distance.
///
/// `Naive`, `Matrix`, `TwoRow` and `SingleRow` all return identical Levenshtein
/// distances and differ only in cost. `Damerau` also counts adjacent swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Exponential recursion. Only for short inputs.
    Naive,
    /// Full (m+1)×(n+1) table.
    Matrix,
    /// Two alternating rows.
    TwoRow,
    /// One row plus a diagonal carry.
    #[default]
    SingleRow,
    /// Full table with the transposition relaxation.
    Damerau,
}

impl Algorithm {
    /// Every strategy, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::Matrix,
        Algorithm::TwoRow,
        Algorithm::SingleRow,
        Algorithm::Damerau,
    ];

    /// Compute the distance between `a` and `b` with this strategy.
    pub fn distance(self, a: &str, b: &str) -> usize {
        self.distance_units(a.as_bytes(), b.as_bytes())
    }

    /// Same as [`Algorithm::distance`] over arbitrary code units.
    pub fn distance_units<T: PartialEq>(self, a: &[T], b: &[T]) -> usize {
        match self {
            Algorithm::Naive => naive::distance(a, b),
            Algorithm::Matrix => matrix::distance(a, b),
            Algorithm::TwoRow => two_row::distance(a, b),
            Algorithm::SingleRow => single_row::distance(a, b),
            Algorithm::Damerau => matrix::damerau_distance(a, b),
        }
    }

    /// Does this strategy count a transposition as one edit?
    pub fn counts_transpositions(self) -> bool {
        matches!(self, Algorithm::Damerau)
    }

    /// Kebab-case name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Matrix => "matrix",
            Algorithm::TwoRow => "two-row",
            Algorithm::SingleRow => "single-row",
            Algorithm::Damerau => "damerau",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected one of: naive, matrix, two-row, single-row, damerau)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
