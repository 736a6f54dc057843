//! Line-level parsing of the on-disk cache format.
//!
//! The format is deliberately lax: only lines matching the data-line shape
//! are read back; comments, blanks, and corrupted lines are skipped without
//! complaint so hand-edited cache files still validate.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CacheError;

/// Splits a cache-file line into `(key, value)` if it is a data line.
///
/// A data line's first space must sit at byte index 2 or later and be
/// immediately preceded by a colon. The key is everything before that colon,
/// the value everything after the space. Any other line yields `None`.
pub fn parse_data_line(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(' ')?;
    if idx < 2 || line.as_bytes()[idx - 1] != b':' {
        return None;
    }
    Some((&line[..idx - 1], &line[idx + 1..]))
}

/// Reads every data line of a cache file into an unordered key → value map.
///
/// On duplicate keys the last occurrence wins, mirroring the write side
/// where each key occurs exactly once.
pub fn read_entries(target: &Path) -> Result<HashMap<String, String>, CacheError> {
    let content = std::fs::read_to_string(target).map_err(|e| CacheError::Io {
        path: target.to_path_buf(),
        source: e,
    })?;

    let mut entries = HashMap::new();
    for line in content.lines() {
        if let Some((key, value)) = parse_data_line(line) {
            entries.insert(key.to_string(), value.to_string());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_data_line() {
        assert_eq!(parse_data_line("key: value"), Some(("key", "value")));
    }

    #[test]
    fn single_char_key() {
        assert_eq!(parse_data_line("a: 1"), Some(("a", "1")));
    }

    #[test]
    fn value_keeps_trailing_spaces() {
        assert_eq!(
            parse_data_line("key: value with  spaces "),
            Some(("key", "value with  spaces "))
        );
    }

    #[test]
    fn extra_space_lands_in_value() {
        assert_eq!(parse_data_line("key:  padded"), Some(("key", " padded")));
    }

    #[test]
    fn no_space_is_not_data() {
        assert_eq!(parse_data_line("key:value"), None);
        assert_eq!(parse_data_line(""), None);
    }

    #[test]
    fn empty_key_is_not_data() {
        assert_eq!(parse_data_line(": value"), None);
        assert_eq!(parse_data_line(" : value"), None);
    }

    #[test]
    fn first_space_decides() {
        // The first space is not preceded by a colon, so the later ": " does
        // not rescue the line.
        assert_eq!(parse_data_line("ab c: d"), None);
        assert_eq!(parse_data_line("x : y"), None);
    }

    #[test]
    fn prose_comment_is_not_data() {
        assert_eq!(parse_data_line("Generated cache, do not edit"), None);
    }

    #[test]
    fn key_may_contain_colons() {
        assert_eq!(parse_data_line("a:b: v"), Some(("a:b", "v")));
    }

    #[test]
    fn read_entries_skips_non_data_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        std::fs::write(
            &path,
            "Generated cache\n\nfirst: 1\nnot a data line\nsecond: 2\n",
        )
        .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["first"], "1");
        assert_eq!(entries["second"], "2");
    }

    #[test]
    fn read_entries_last_duplicate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        std::fs::write(&path, "k: old\nk: new\n").unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["k"], "new");
    }

    #[test]
    fn read_entries_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(read_entries(&missing).is_err());
    }

    #[test]
    fn read_entries_invalid_utf8_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        std::fs::write(&path, [0x66u8, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(read_entries(&path).is_err());
    }
}
