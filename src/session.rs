//! Interactive query session.
//!
//! Reads whitespace-separated query tokens until end of input and, for each
//! one, prints every page of matching words.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::dictionary::{Dictionary, Page};
use crate::error::DictResult;

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Query tokens read
    pub queries: usize,
    /// Pages printed
    pub pages: usize,
    /// Words printed
    pub words: usize,
}

/// A query loop over a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    page_size: usize,
}

impl<'d> Session<'d> {
    /// Creates a session printing `page_size` words per page.
    pub fn new(dictionary: &'d Dictionary, page_size: usize) -> Self {
        Self {
            dictionary,
            page_size,
        }
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionSummary)` - Counters for the whole session
    /// * `Err(DictError::Io)` - If reading input or writing output failed
    /// * `Err(DictError::Lookup)` - If a query was rejected
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> DictResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        for line in input.lines() {
            let line = line?;
            for query in line.split_whitespace() {
                self.answer(query, &mut output, &mut summary)?;
            }
        }
        output.flush()?;
        debug!(?summary, "Session finished");
        Ok(summary)
    }

    fn answer<W: Write>(
        &self,
        query: &str,
        output: &mut W,
        summary: &mut SessionSummary,
    ) -> DictResult<()> {
        summary.queries += 1;
        for page in self.dictionary.pages(query, self.page_size) {
            let page = page?;
            write_page(output, &page)?;
            summary.pages += 1;
            summary.words += page.words.len();
        }
        output.flush()?;
        Ok(())
    }
}

/// Writes a page in the session's text format.
pub fn write_page<W: Write>(output: &mut W, page: &Page) -> DictResult<()> {
    writeln!(output, "Dictionary returned matching words (page {})", page.number)?;
    for word in &page.words {
        writeln!(output, "\t- {word}")?;
    }
    Ok(())
}

/// Writes a single lookup result, one word per line or as a JSON object.
pub fn write_lookup<W: Write>(output: &mut W, page: &Page, json: bool) -> DictResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *output, page)?;
        writeln!(output)?;
    } else {
        for word in &page.words {
            writeln!(output, "{word}")?;
        }
    }
    Ok(())
}
