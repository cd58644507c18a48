//! Ranking against small word lists.

use super::common::words;
use lev::{rank, top, Algorithm, Dictionary, Suggestion};

#[test]
fn test_top_ten_from_small_list() {
    let dict = words(&[
        "fire", "tires", "fir", "firm", "hire", "wire", "fibre", "tire", "dire", "five", "fine",
        "banana",
    ]);
    let best = top("fire", &dict, Algorithm::SingleRow, 10).unwrap();

    assert_eq!(best.len(), 10);
    assert_eq!(best[0], Suggestion { word: "fire".into(), score: 0 });
    assert!(best.windows(2).all(|w| w[0].score <= w[1].score));
    assert!(best.iter().all(|s| s.word != "banana"));
}

#[test]
fn test_ties_follow_dictionary_order() {
    let dict = words(&["hire", "wire", "dire", "tire"]);
    let ranked = rank("fire", &dict, Algorithm::SingleRow).unwrap();
    let order: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(order, vec!["hire", "wire", "dire", "tire"]);
}

#[test]
fn test_embedded_dictionary_ranks_its_own_word_first() {
    let dict = Dictionary::embedded().unwrap();
    let probe = &dict.words()[dict.len() / 2];
    let best = top(probe, dict.words(), Algorithm::default(), 10).unwrap();

    assert_eq!(best.len(), 10.min(dict.len()));
    assert_eq!(best[0].score, 0);
    assert_eq!(&best[0].word, probe);
}

#[test]
fn test_every_levenshtein_strategy_ranks_identically() {
    let dict = words(&["kitten", "sitting", "mitten", "bitten", "knit", "kit", "sit"]);
    let reference = rank("kitten", &dict, Algorithm::SingleRow).unwrap();
    for alg in [Algorithm::Naive, Algorithm::Matrix, Algorithm::TwoRow] {
        assert_eq!(rank("kitten", &dict, alg).unwrap(), reference, "{}", alg);
    }
}
