//! Lookup and paging configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Default number of words per page in interactive sessions.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Default upper bound accepted for `page_size`.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Paging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    /// Words per page
    pub page_size: usize,

    /// Largest page size accepted from configuration or flags
    pub max_page_size: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if self.page_size > self.max_page_size {
            return Err(ConfigError::ValueOutOfRange {
                key: "lookup.page_size".to_string(),
                message: format!(
                    "{} exceeds max_page_size {}",
                    self.page_size, self.max_page_size
                ),
            });
        }
        Ok(())
    }
}
