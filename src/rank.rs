// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: score every candidate, sort ascending.
//!
//! This is a brute-force linear scan. Each word is scored independently, so with
//! the `parallel` feature the scan runs on rayon. The indexed `collect` keeps
//! results in dictionary order, and sorting only starts once every score is in,
//! so both paths produce the same list.
//!
//! Sort order:
//! 1. **Score** - fewer edits first
//! 2. **Dictionary order** - `sort_by_key` is stable, ties keep encounter order

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::distance::naive::MAX_NAIVE_LEN;
use crate::distance::Algorithm;

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub score: usize,
}

/// Error type for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The query is too long for the exponential strategy.
    QueryTooLong { len: usize, max: usize },
    /// A dictionary word is too long for the exponential strategy.
    WordTooLong { word: String, len: usize, max: usize },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::QueryTooLong { len, max } => write!(
                f,
                "query is {} bytes; the naive algorithm accepts at most {}",
                len, max
            ),
            RankError::WordTooLong { word, len, max } => write!(
                f,
                "dictionary word {:?} is {} bytes; the naive algorithm accepts at most {}",
                word, len, max
            ),
        }
    }
}

impl std::error::Error for RankError {}

/// Refuse inputs that would make the naive strategy blow up.
fn check_naive_bounds<'a, I>(query: &str, words: I) -> Result<(), RankError>
where
    I: IntoIterator<Item = &'a String>,
{
    if query.len() > MAX_NAIVE_LEN {
        return Err(RankError::QueryTooLong {
            len: query.len(),
            max: MAX_NAIVE_LEN,
        });
    }
    if let Some(word) = words.into_iter().find(|w| w.len() > MAX_NAIVE_LEN) {
        return Err(RankError::WordTooLong {
            word: word.clone(),
            len: word.len(),
            max: MAX_NAIVE_LEN,
        });
    }
    Ok(())
}

/// Score each word against `query`, preserving input order.
#[cfg(feature = "parallel")]
fn score_all(query: &str, words: &[String], algorithm: Algorithm) -> Vec<Suggestion> {
    words
        .par_iter()
        .map(|word| Suggestion {
            word: word.clone(),
            score: algorithm.distance(query, word),
        })
        .collect()
}

/// Score each word against `query`, preserving input order.
#[cfg(not(feature = "parallel"))]
fn score_all(query: &str, words: &[String], algorithm: Algorithm) -> Vec<Suggestion> {
    score_all_sequential(query, words, algorithm)
}

fn score_all_sequential(query: &str, words: &[String], algorithm: Algorithm) -> Vec<Suggestion> {
    words
        .iter()
        .map(|word| Suggestion {
            word: word.clone(),
            score: algorithm.distance(query, word),
        })
        .collect()
}

/// Rank every word by distance to `query`, closest first.
///
/// Equal scores keep the order of `words`.
pub fn rank(
    query: &str,
    words: &[String],
    algorithm: Algorithm,
) -> Result<Vec<Suggestion>, RankError> {
    if algorithm == Algorithm::Naive {
        check_naive_bounds(query, words)?;
    }

    let mut results = score_all(query, words, algorithm);
    results.sort_by_key(|s| s.score);

    log::debug!(
        "ranked {} words against {:?} with {}",
        results.len(),
        query,
        algorithm
    );
    Ok(results)
}

/// Same as [`rank`], always on the calling thread.
pub fn rank_sequential(
    query: &str,
    words: &[String],
    algorithm: Algorithm,
) -> Result<Vec<Suggestion>, RankError> {
    if algorithm == Algorithm::Naive {
        check_naive_bounds(query, words)?;
    }

    let mut results = score_all_sequential(query, words, algorithm);
    results.sort_by_key(|s| s.score);
    Ok(results)
}

/// The `limit` closest words, fewer if `words` is shorter.
pub fn top(
    query: &str,
    words: &[String],
    algorithm: Algorithm,
    limit: usize,
) -> Result<Vec<Suggestion>, RankError> {
    let mut results = rank(query, words, algorithm)?;
    results.truncate(limit);
    Ok(results)
}
