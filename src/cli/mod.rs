// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lev command-line interface.
//!
//! One job: given a word, print the closest entries of a word list. The word
//! list defaults to the embedded one; `--dict` swaps in a plain-text file.

pub mod display;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use lev::Algorithm;

/// Printed instead of results when the argument count is wrong.
pub const USAGE: &str =
    "lev: Print suggestions for the given word, along with Levenshtein distance score";

#[derive(Parser, Debug)]
#[command(
    name = "lev",
    about = "Print spelling suggestions ranked by edit distance",
    version
)]
pub struct Cli {
    /// The word to find suggestions for (exactly one)
    #[arg(num_args = 0.., value_name = "WORD")]
    pub words: Vec<String>,

    /// Number of suggestions to print
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Distance algorithm used for scoring
    #[arg(short, long, value_enum, default_value_t = Algorithm::SingleRow)]
    pub algorithm: Algorithm,

    /// Count adjacent transpositions as one edit (same as --algorithm damerau)
    #[arg(short, long, conflicts_with = "algorithm")]
    pub damerau: bool,

    /// Plain-text word list (one word per line) instead of the embedded one
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Print suggestions as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The single query word, or `None` if zero or several were given.
    pub fn query(&self) -> Option<&str> {
        match self.words.as_slice() {
            [word] => Some(word.as_str()),
            _ => None,
        }
    }

    /// Algorithm after applying `--damerau`.
    pub fn effective_algorithm(&self) -> Algorithm {
        if self.damerau {
            Algorithm::Damerau
        } else {
            self.algorithm
        }
    }

    /// Default log filter implied by `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
