//! Word list ingestion.
//!
//! Streams a line-oriented source, one word per line, without buffering the
//! whole file. Line terminators (`\n`, `\r\n`) are stripped; nothing else is
//! normalised, so callers are expected to supply clean tokens.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::{info, trace};

use crate::error::ingest::IngestError;

/// Options for reading a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Skip empty lines instead of yielding the empty word
    pub skip_blank_lines: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

/// Lazy iterator over the words of a line-oriented source.
#[derive(Debug)]
pub struct WordLines<R> {
    lines: Lines<R>,
    line: usize,
    options: IngestOptions,
}

impl<R: BufRead> Iterator for WordLines<R> {
    type Item = Result<String, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            match line {
                Ok(word) if word.is_empty() && self.options.skip_blank_lines => {
                    trace!(line = self.line, "Skipping blank line");
                }
                Ok(word) => return Some(Ok(word)),
                Err(source) => {
                    return Some(Err(IngestError::Read {
                        line: self.line,
                        source,
                    }))
                }
            }
        }
    }
}

/// Reads words from any buffered reader.
pub fn load_words<R: BufRead>(reader: R, options: IngestOptions) -> WordLines<R> {
    WordLines {
        lines: reader.lines(),
        line: 0,
        options,
    }
}

/// Opens a word list file.
///
/// # Returns
///
/// * `Ok(WordLines)` - A lazy iterator over the file's words
/// * `Err(IngestError)` - If the file could not be opened
pub fn read_words<P: AsRef<Path>>(
    path: P,
    options: IngestOptions,
) -> Result<WordLines<BufReader<File>>, IngestError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Reading list of words");
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_words(BufReader::new(file), options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(input: &str, options: IngestOptions) -> Vec<String> {
        load_words(Cursor::new(input), options)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_strips_line_endings_only() {
        let input = "foo\r\nbar\n baz \nqux";
        assert_eq!(
            words(input, IngestOptions::default()),
            vec!["foo", "bar", " baz ", "qux"]
        );
    }

    #[test]
    fn test_blank_lines() {
        let input = "a\n\nb\n";
        assert_eq!(words(input, IngestOptions::default()), vec!["a", "b"]);

        let keep = IngestOptions {
            skip_blank_lines: false,
        };
        assert_eq!(words(input, keep), vec!["a", "", "b"]);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let input: &[u8] = b"ok\n\xff\xfe\nnever";
        let mut lines = load_words(input, IngestOptions::default());

        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        match lines.next() {
            Some(Err(IngestError::Read { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_words("/definitely/not/here.txt", IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
        assert!(err.to_string().contains("here.txt"));
    }
}
