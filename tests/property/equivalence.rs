//! All Levenshtein strategies agree on every input.

use super::common::levenshtein_strategies;
use lev::distance::{matrix, naive, single_row, two_row};
use proptest::prelude::*;

/// Short words over a small alphabet, so matches and swaps are common and the
/// naive oracle stays fast.
fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,7}").unwrap()
}

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,24}").unwrap()
}

proptest! {
    #[test]
    fn prop_naive_is_the_oracle(a in short_word(), b in short_word()) {
        let expected = naive::distance(a.as_bytes(), b.as_bytes());
        for (name, f) in levenshtein_strategies() {
            prop_assert_eq!(f(a.as_bytes(), b.as_bytes()), expected, "{}", name);
        }
    }

    #[test]
    fn prop_optimized_strategies_agree(a in word(), b in word()) {
        let expected = matrix::distance(a.as_bytes(), b.as_bytes());
        prop_assert_eq!(two_row::distance(a.as_bytes(), b.as_bytes()), expected);
        prop_assert_eq!(single_row::distance(a.as_bytes(), b.as_bytes()), expected);
    }

    #[test]
    fn prop_agree_on_arbitrary_bytes(
        a in prop::collection::vec(any::<u8>(), 0..20),
        b in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let expected = matrix::distance(&a, &b);
        prop_assert_eq!(two_row::distance(&a, &b), expected);
        prop_assert_eq!(single_row::distance(&a, &b), expected);
    }

    #[test]
    fn prop_agree_on_chars(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        prop_assert_eq!(single_row::distance(&a, &b), matrix::distance(&a, &b));
    }
}
