// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for prefix lookups.
//!
//! An unknown prefix or an exhausted cursor is not an error: both produce an
//! empty page. Only malformed requests are rejected.

/// Errors that can occur while serving a lookup.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request was malformed and no traversal took place.
    #[error("Invalid lookup request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request.
        reason: InvalidRequestReason,
    },
}

/// The validation rule a [`LookupRequest`](super::LookupRequest) broke.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestReason {
    /// The prefix was the empty string.
    #[error("prefix must contain at least one character")]
    EmptyPrefix,

    /// No cursor was supplied at all.
    #[error("cursor must not be absent, use an empty string to start from the beginning")]
    MissingCursor,

    /// The page size was below zero.
    #[error("limit must not be negative, was: {0}")]
    NegativeLimit(i64),
}

impl From<InvalidRequestReason> for LookupError {
    fn from(reason: InvalidRequestReason) -> Self {
        LookupError::InvalidRequest { reason }
    }
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::from(InvalidRequestReason::EmptyPrefix);
        assert_eq!(
            err.to_string(),
            "Invalid lookup request: prefix must contain at least one character"
        );

        let err = LookupError::from(InvalidRequestReason::NegativeLimit(-10));
        assert_eq!(
            err.to_string(),
            "Invalid lookup request: limit must not be negative, was: -10"
        );

        let err = LookupError::from(InvalidRequestReason::MissingCursor);
        assert!(err.to_string().contains("use an empty string"));
    }
}
