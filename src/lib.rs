//! Edit distance and dictionary-backed spelling suggestions.
//!
//! This crate computes Levenshtein distance (insert, delete, substitute) and
//! Damerau-Levenshtein distance (plus adjacent transposition) between two
//! strings, and ranks a word list against a query by that distance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ dictionary.rs│────▶│   rank.rs    │────▶│  bin: lev    │
//! │ (embedded    │     │ (score, sort,│     │ (cli/, print │
//! │  word list)  │     │  top N)      │     │  top N)      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     distance/                        │
//! │  naive  →  matrix (+ damerau)  →  two_row  →  single_row │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The four Levenshtein strategies solve the same recurrence and return the
//! same numbers. Only `single_row` is on the production path; the others exist
//! to be compared against it.
//!
//! # Usage
//!
//! ```
//! use lev::{damerau_levenshtein_distance, levenshtein_distance};
//!
//! assert_eq!(levenshtein_distance("fire", "tires"), 2);
//! assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
//! ```
//!
//! Ranking a word list:
//!
//! ```
//! use lev::{top, Algorithm, Dictionary};
//!
//! let dict = Dictionary::from_words(["tires", "fire", "banana"]).unwrap();
//! let best = top("fire", dict.words(), Algorithm::default(), 2).unwrap();
//! assert_eq!(best[0].word, "fire");
//! assert_eq!(best[1].score, 2);
//! ```

pub mod dictionary;
pub mod distance;
pub mod rank;

// Re-exports for public API
pub use dictionary::{Dictionary, DictionaryError};
pub use distance::{
    damerau_levenshtein_distance, damerau_levenshtein_units, levenshtein_distance,
    levenshtein_units, min2, min3, Algorithm, UnknownAlgorithm,
};
pub use rank::{rank, rank_sequential, top, RankError, Suggestion};
