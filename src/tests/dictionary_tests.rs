//! Tests for the dictionary facade.
//!
//! Covers the documented lookup scenarios, building from files and lazy
//! sources, and shared read-only access from several threads.

use std::sync::{Arc, Barrier};
use std::thread;

use test_case::test_case;

use super::TestFixture;
use crate::data_structures::prefix_search::{InvalidRequestReason, LookupError};
use crate::data_structures::LookupRequest;
use crate::dictionary::Dictionary;
use crate::error::ingest::IngestError;
use crate::ingest::IngestOptions;

const TABLETS: [&str; 4] = ["tablet", "tablets", "tableting", "tabletting"];
const PIGGY: [&str; 5] = ["piggy", "piggyback", "piggybacked", "piggybacking", "piggybacks"];
const XS: [&str; 4] = ["xbb", "xcc", "xdd", "xaa"];
const ANIMALS: [&str; 4] = ["cat", "mat", "pat", "fat"];

fn lookup(words: &[&str], prefix: &str, cursor: &str, limit: usize) -> Vec<String> {
    Dictionary::build(words)
        .lookup(&LookupRequest::after(prefix, cursor, limit))
        .unwrap()
}

#[test_case(&["foo"], "foo", "", 10, &["foo"] ; "single word by itself")]
#[test_case(&["foo"], "f", "", 10, &["foo"] ; "single word by first letter")]
#[test_case(&TABLETS, "t", "", 10, &["tablet", "tableting", "tablets", "tabletting"] ; "shared prefix sorted")]
#[test_case(&TABLETS, "t", "", 1, &["tablet"] ; "first page of one")]
#[test_case(&TABLETS, "t", "tablet", 1, &["tableting"] ; "second page of one")]
#[test_case(&TABLETS, "t", "tableting", 1, &["tablets"] ; "third page of one")]
#[test_case(&TABLETS, "t", "tablets", 1, &["tabletting"] ; "fourth page of one")]
#[test_case(&TABLETS, "t", "tabletting", 1, &[] ; "exhausted")]
#[test_case(&XS, "x", "xaa", 2, &["xbb", "xcc"] ; "resume after first word")]
#[test_case(&PIGGY, "piggy", "piggybacks", 2, &[] ; "cursor past remaining matches")]
#[test_case(&ANIMALS, "cat", "", 10, &["cat"] ; "no sibling contamination")]
fn test_lookup_scenarios(words: &[&str], prefix: &str, cursor: &str, limit: usize, expected: &[&str]) {
    assert_eq!(lookup(words, prefix, cursor, limit), expected);
}

#[test]
fn test_empty_prefix_is_invalid_request() {
    let dict = Dictionary::build(["foo"]);
    let err = dict.lookup(&LookupRequest::first_page("", 10)).unwrap_err();
    assert_eq!(
        err,
        LookupError::InvalidRequest {
            reason: InvalidRequestReason::EmptyPrefix
        }
    );
}

#[test]
fn test_insertion_order_does_not_matter() {
    let mut reversed = TABLETS;
    reversed.reverse();

    let forward = Dictionary::build(TABLETS);
    let backward = Dictionary::build(reversed);
    let request = LookupRequest::first_page("tab", 10);

    assert_eq!(forward.lookup(&request).unwrap(), backward.lookup(&request).unwrap());
    assert_eq!(forward.trie().node_count(), backward.trie().node_count());
}

#[test]
fn test_build_consumes_lazy_source() {
    let source = "alpha beta gamma".split(' ').map(str::to_uppercase);
    let dict: Dictionary = source.collect();

    assert_eq!(dict.len(), 3);
    assert!(dict.contains("BETA"));
    assert!(!dict.contains("beta"));
}

#[test]
fn test_try_build_stops_at_first_error() {
    let source = vec![Ok("a"), Err("broken"), Ok("b")];
    assert_eq!(Dictionary::try_build(source).unwrap_err(), "broken");
}

#[test]
fn test_from_path() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_word_list(&PIGGY).unwrap();

    let dict = Dictionary::from_path(&path, IngestOptions::default()).unwrap();
    assert_eq!(dict.len(), PIGGY.len());
    assert!(!dict.contains(""));

    let pages: Vec<Vec<String>> = dict
        .pages("piggyb", 2)
        .map(|page| page.unwrap().words)
        .collect();
    assert_eq!(
        pages,
        vec![
            vec!["piggyback", "piggybacked"],
            vec!["piggybacking", "piggybacks"]
        ]
    );
}

#[test]
fn test_from_path_keeping_blank_lines_stores_empty_word() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("blank.txt", "one\n\ntwo\r\n").unwrap();

    let keep = IngestOptions {
        skip_blank_lines: false,
    };
    let dict = Dictionary::from_path(&path, keep).unwrap();
    assert!(dict.contains(""));
    assert!(dict.contains("two"));
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_from_path_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("missing.txt");

    let err = Dictionary::from_path(&path, IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::Open { .. }));
}

/// Many threads page through the same dictionary at once and must all see
/// the same complete, ordered result.
#[test]
fn test_shared_read_only_access() {
    const THREAD_COUNT: usize = 8;

    let words: Vec<String> = (0..500).map(|i| format!("key_{i:03}")).collect();
    let dict = Arc::new(Dictionary::build(&words));
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let mut expected = words.clone();
    expected.sort();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let dict = Arc::clone(&dict);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let seen: Vec<String> = dict
                    .pages("key_", thread_id + 1)
                    .flat_map(|page| page.unwrap().words)
                    .collect();
                seen
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(seen) => assert_eq!(seen, expected, "thread {i} saw a different enumeration"),
            Err(e) => panic!("Thread {i} panicked: {e:?}"),
        }
    }
}
