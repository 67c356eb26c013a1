//! Pagination driver.

use serde::Serialize;

use crate::data_structures::prefix_search::{LookupRequest, LookupResult, PrefixSearch};

/// One page of lookup results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Words on this page, in ascending order
    pub words: Vec<String>,
}

impl Page {
    /// The cursor that resumes after this page.
    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

/// Iterator over the pages for one prefix.
///
/// Each page is requested with the last word of the previous page as its
/// cursor. Iteration ends at the first empty page, after a page shorter than
/// the page size (the next one would be empty), or after yielding an error.
#[derive(Debug, Clone)]
pub struct Pages<'d> {
    search: PrefixSearch<'d>,
    prefix: String,
    page_size: usize,
    /// `None` once iteration is over
    cursor: Option<String>,
    number: usize,
}

impl<'d> Pages<'d> {
    pub(crate) fn new(search: PrefixSearch<'d>, prefix: String, page_size: usize) -> Self {
        Self {
            search,
            prefix,
            page_size,
            cursor: Some(String::new()),
            number: 0,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = LookupResult<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        let request = LookupRequest::after(self.prefix.as_str(), cursor, self.page_size);
        let words = match self.search.lookup(&request) {
            Ok(words) => words,
            Err(err) => return Some(Err(err)),
        };
        if words.is_empty() {
            return None;
        }

        if words.len() == self.page_size {
            self.cursor = words.last().cloned();
        }
        self.number += 1;
        Some(Ok(Page {
            number: self.number,
            words,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::Dictionary;
    use crate::data_structures::prefix_search::{InvalidRequestReason, LookupError};

    #[test]
    fn test_pages_walk_every_word_once() {
        let dict = Dictionary::build(["tablet", "tablets", "tableting", "tabletting", "cat"]);
        let pages: Vec<_> = dict.pages("t", 3).collect::<Result<_, _>>().unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].words, vec!["tablet", "tableting", "tablets"]);
        assert_eq!(pages[0].last_word(), Some("tablets"));
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].words, vec!["tabletting"]);
    }

    #[test]
    fn test_exact_multiple_ends_on_empty_page() {
        let dict = Dictionary::build(["xaa", "xbb", "xcc", "xdd"]);
        let pages: Vec<_> = dict.pages("x", 2).collect::<Result<_, _>>().unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].words, vec!["xcc", "xdd"]);
    }

    #[test]
    fn test_no_pages_for_unknown_prefix_or_zero_size() {
        let dict = Dictionary::build(["foo"]);
        assert_eq!(dict.pages("bar", 3).count(), 0);
        assert_eq!(dict.pages("foo", 0).count(), 0);
    }

    #[test]
    fn test_invalid_request_is_yielded_once() {
        let dict = Dictionary::build(["foo"]);
        let mut pages = dict.pages("", 3);

        assert_eq!(
            pages.next(),
            Some(Err(LookupError::from(InvalidRequestReason::EmptyPrefix)))
        );
        assert_eq!(pages.next(), None);
    }
}
