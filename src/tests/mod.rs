//! Crate-level test modules.
//!
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary scenarios, ingestion and shared read access
//! - Property-based checks of the lookup contract using proptest
//! - Shared fixtures and strategies

pub mod dictionary_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    char_prefixes, expected_page, paginate, unicode_word_strategy,
    vocabulary_strategy, word_strategy, TestFixture,
};
