// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word lists to rank against.
//!
//! The default list ships inside the binary as a brotli blob built by
//! `build.rs`. It is decompressed on first use into a process-wide `OnceLock`
//! and checked against the CRC32 recorded at build time. After that it is
//! read-only for the life of the process.
//!
//! User-supplied lists are plain text, one word per line.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

include!(concat!(env!("LEV_OUT_DIR"), "/words_meta.rs"));

/// Brotli-compressed `data/words.txt`.
static WORDS_BR: &[u8] = include_bytes!(concat!(env!("LEV_OUT_DIR"), "/words.txt.br"));

/// Decompressed embedded dictionary, shared by every caller.
static EMBEDDED: OnceLock<Result<Dictionary, DictionaryError>> = OnceLock::new();

/// Error type for dictionary loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Reading a word list failed.
    Io { path: String, message: String },
    /// The compressed blob could not be decompressed.
    Decompress(String),
    /// Decompressed bytes don't match the build-time checksum.
    ChecksumMismatch { expected: u32, actual: u32 },
    /// The list contains no words.
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io { path, message } => {
                write!(f, "failed to read word list {}: {}", path, message)
            }
            DictionaryError::Decompress(message) => {
                write!(f, "failed to decompress word list: {}", message)
            }
            DictionaryError::ChecksumMismatch { expected, actual } => write!(
                f,
                "word list checksum mismatch: expected {:#010x}, got {:#010x}",
                expected, actual
            ),
            DictionaryError::Empty => write!(f, "word list is empty"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// An ordered list of candidate words.
///
/// Order is the order of the source, which is what ranking ties fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// The embedded word list, decompressed once per process.
    pub fn embedded() -> Result<&'static Dictionary, DictionaryError> {
        EMBEDDED
            .get_or_init(|| {
                let started = Instant::now();
                let dict = Self::from_compressed(WORDS_BR, WORDS_CRC32)?;
                log::debug!(
                    "decompressed embedded dictionary: {} words, {} -> {} bytes in {:?}",
                    dict.len(),
                    WORDS_BR.len(),
                    WORDS_LEN,
                    started.elapsed()
                );
                Ok(dict)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Decompress a brotli blob and verify it against `expected_crc`.
    pub fn from_compressed(blob: &[u8], expected_crc: u32) -> Result<Self, DictionaryError> {
        let mut raw = Vec::new();
        brotli::Decompressor::new(blob, 4096)
            .read_to_end(&mut raw)
            .map_err(|e| DictionaryError::Decompress(e.to_string()))?;

        let actual = crc32fast::hash(&raw);
        if actual != expected_crc {
            return Err(DictionaryError::ChecksumMismatch {
                expected: expected_crc,
                actual,
            });
        }

        Self::from_reader(raw.as_slice()).map_err(|e| match e {
            DictionaryError::Io { message, .. } => DictionaryError::Decompress(message),
            other => other,
        })
    }

    /// Read a plain-text list, one word per line.
    ///
    /// Trailing whitespace (including `\r`) is stripped and blank lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| DictionaryError::Io {
                path: "<reader>".to_string(),
                message: e.to_string(),
            })?;
            let word = line.trim_end();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Self::from_words(words)
    }

    /// Read a plain-text list from a file.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let io_err = |e: std::io::Error| DictionaryError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let started = Instant::now();
        let file = File::open(path).map_err(io_err)?;
        let dict = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            DictionaryError::Io { message, .. } => DictionaryError::Io {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        log::debug!(
            "loaded {} words from {} in {:?}",
            dict.len(),
            path.display(),
            started.elapsed()
        );
        Ok(dict)
    }

    /// Build from words already in memory.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
