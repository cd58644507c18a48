//! Ranking invariants over random word lists.

use lev::{rank, rank_sequential, top, Algorithm};
use proptest::prelude::*;

fn dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-d]{1,8}").unwrap(), 1..60)
}

proptest! {
    #[test]
    fn prop_rank_is_sorted_and_complete(query in "[a-d]{0,8}", dict in dictionary()) {
        let ranked = rank(&query, &dict, Algorithm::SingleRow).unwrap();
        prop_assert_eq!(ranked.len(), dict.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
        for s in &ranked {
            prop_assert_eq!(s.score, lev::levenshtein_distance(&query, &s.word));
        }
    }

    #[test]
    fn prop_ties_keep_encounter_order(query in "[a-d]{0,8}", dict in dictionary()) {
        let ranked = rank(&query, &dict, Algorithm::SingleRow).unwrap();
        // Within each score, words appear in the same order as a filtered scan
        let mut expected: Vec<(usize, &str)> = dict
            .iter()
            .map(|w| (lev::levenshtein_distance(&query, w), w.as_str()))
            .collect();
        expected.sort_by_key(|(score, _)| *score);
        let actual: Vec<(usize, &str)> = ranked.iter().map(|s| (s.score, s.word.as_str())).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_parallel_matches_sequential(query in "[a-d]{0,8}", dict in dictionary()) {
        for alg in [Algorithm::SingleRow, Algorithm::Damerau] {
            prop_assert_eq!(
                rank(&query, &dict, alg).unwrap(),
                rank_sequential(&query, &dict, alg).unwrap()
            );
        }
    }

    #[test]
    fn prop_top_respects_limit(query in "[a-d]{0,8}", dict in dictionary(), limit in 0usize..80) {
        let best = top(&query, &dict, Algorithm::SingleRow, limit).unwrap();
        prop_assert_eq!(best.len(), limit.min(dict.len()));
    }
}
