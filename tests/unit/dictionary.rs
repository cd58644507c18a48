//! Loading user-supplied word lists.

use lev::{Dictionary, DictionaryError};
use std::io::Write;

#[test]
fn test_from_path_reads_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "zebra\nalpha\r\n\nmiddle").unwrap();

    let dict = Dictionary::from_path(file.path()).unwrap();
    assert_eq!(dict.words(), ["zebra", "alpha", "middle"]);
}

#[test]
fn test_from_path_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(Dictionary::from_path(file.path()), Err(DictionaryError::Empty));
}

#[test]
fn test_from_path_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Dictionary::from_path(dir.path()),
        Err(DictionaryError::Io { .. })
    ));
}
