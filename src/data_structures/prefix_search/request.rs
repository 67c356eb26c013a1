// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lookup request shape and validation.

use serde::{Deserialize, Serialize};

use super::error::{InvalidRequestReason, LookupResult};

/// A single page request: every word starting with `prefix` that sorts
/// strictly after `cursor`, at most `limit` of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// The string every returned word must start with. Must not be empty.
    pub prefix: String,

    /// Last word of the previous page. `Some("")` starts from the beginning,
    /// `None` is rejected.
    pub cursor: Option<String>,

    /// Maximum number of words to return. Must not be negative.
    pub limit: i64,
}

impl LookupRequest {
    /// Creates a request from raw parts, without validating them.
    pub fn new<P: Into<String>>(prefix: P, cursor: Option<String>, limit: i64) -> Self {
        Self {
            prefix: prefix.into(),
            cursor,
            limit,
        }
    }

    /// Request for the first page of results.
    pub fn first_page<P: Into<String>>(prefix: P, limit: usize) -> Self {
        Self::after(prefix, String::new(), limit)
    }

    /// Request for the page following `cursor`.
    pub fn after<P, C>(prefix: P, cursor: C, limit: usize) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        Self::new(
            prefix,
            Some(cursor.into()),
            i64::try_from(limit).unwrap_or(i64::MAX),
        )
    }

    /// Checks the request and borrows its fields in validated form.
    pub fn validate(&self) -> LookupResult<ValidatedRequest<'_>> {
        if self.prefix.is_empty() {
            return Err(InvalidRequestReason::EmptyPrefix.into());
        }
        let cursor = self
            .cursor
            .as_deref()
            .ok_or(InvalidRequestReason::MissingCursor)?;
        if self.limit < 0 {
            return Err(InvalidRequestReason::NegativeLimit(self.limit).into());
        }

        Ok(ValidatedRequest {
            prefix: &self.prefix,
            cursor,
            limit: usize::try_from(self.limit).unwrap_or(usize::MAX),
        })
    }
}

/// A [`LookupRequest`] that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'r> {
    /// Non-empty prefix
    pub prefix: &'r str,
    /// Cursor, empty for the first page
    pub cursor: &'r str,
    /// Page size
    pub limit: usize,
}
