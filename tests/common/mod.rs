//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lev::distance::{matrix, naive, single_row, two_row};

// ============================================================================
// KNOWN DISTANCES
// ============================================================================

/// A pair with its expected Levenshtein and Damerau-Levenshtein distances.
pub struct Case {
    pub a: &'static str,
    pub b: &'static str,
    pub lev: usize,
    pub damerau: usize,
}

const fn case(a: &'static str, b: &'static str, lev: usize, damerau: usize) -> Case {
    Case { a, b, lev, damerau }
}

pub const CASES: &[Case] = &[
    case("foo", "", 3, 3),       // three deletions
    case("", "asdf", 4, 4),      // four insertions
    case("foo", "bar", 3, 3),    // three substitutions
    case("foo", "foobar", 3, 3), // append "bar"
    case("foobar", "bar", 3, 3), // drop "foo"
    case("foo", "foo", 0, 0),
    case("fast", "past", 1, 1),
    case("boot", "tube", 4, 4),
    case("cabbages", "rabbit", 5, 5),
    case("foot", "poof", 2, 2),
    case("fire", "tires", 2, 2),
    case("kitten", "sitting", 3, 3),
    case("alphabet", "fgsdgszxc", 9, 9),
    case("aaaaaaaaaa", "bbbbbbbbbb", 10, 10),
    case("ab", "ba", 2, 1),
    case("abab", "baba", 2, 2),
    case("abcd", "badc", 3, 2),
    case("blah", "flha", 3, 2),
];

// ============================================================================
// STRATEGY TABLE
// ============================================================================

pub type DistanceFn = fn(&[u8], &[u8]) -> usize;

/// Every Levenshtein strategy, by name.
pub fn levenshtein_strategies() -> [(&'static str, DistanceFn); 4] {
    [
        ("naive", naive::distance::<u8>),
        ("matrix", matrix::distance::<u8>),
        ("two_row", two_row::distance::<u8>),
        ("single_row", single_row::distance::<u8>),
    ]
}

pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
