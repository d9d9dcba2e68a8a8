//! # Word and Wheel Sources
//!
//! Loading the external inputs a [`Lock`](crate::lock::Lock) is built from:
//! a word list of `(word, frequency)` pairs and a wheel configuration. The
//! core types never touch files themselves; these helpers produce the plain
//! data they consume.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Result, ResultExt, SearchError};

/// Loads a word list: whitespace-separated `word frequency` pairs, any
/// number per line.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a frequency fails to
/// parse, or a trailing word has no frequency. A missing word list is fatal
/// to lock construction, so there is no partial result.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<(String, u64)>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .context(format!("failed to read word list {}", path.display()))?;

    let mut pairs = Vec::new();
    let mut tokens = contents.split_whitespace();
    while let Some(word) = tokens.next() {
        let frequency = tokens.next().ok_or_else(|| {
            SearchError::WordSource(format!(
                "word list {}: word {:?} has no frequency",
                path.display(),
                word
            ))
        })?;
        let frequency: u64 = frequency.parse().map_err(|_| {
            SearchError::WordSource(format!(
                "word list {}: invalid frequency {:?} for word {:?}",
                path.display(),
                frequency,
                word
            ))
        })?;
        pairs.push((word.to_string(), frequency));
    }
    Ok(pairs)
}

/// Parses a wheel configuration: the first line holds the wheel count, each
/// following line one wheel's symbols in order.
///
/// # Errors
///
/// Returns an error on I/O failure, an unparseable count, or fewer wheel
/// lines than announced.
pub fn parse_wheels<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = reader.lines();
    let count_line = lines
        .next()
        .ok_or_else(|| SearchError::WordSource("wheel configuration is empty".to_string()))??;
    let count: usize = count_line.trim().parse().map_err(|_| {
        SearchError::WordSource(format!("invalid wheel count {:?}", count_line.trim()))
    })?;

    let mut wheels = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines.next().ok_or_else(|| {
            SearchError::WordSource(format!("expected {} wheels, found {}", count, i))
        })??;
        wheels.push(line.trim().to_string());
    }
    Ok(wheels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wheels() {
        let input = "2\nab\ncd\n";
        let wheels = parse_wheels(input.as_bytes()).unwrap();
        assert_eq!(wheels, vec!["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn test_parse_wheels_rejects_short_input() {
        let input = "3\nab\n";
        assert!(parse_wheels(input.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_wheels_rejects_bad_count() {
        assert!(parse_wheels("two\nab\ncd\n".as_bytes()).is_err());
    }
}
