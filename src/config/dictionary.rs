//! Word list configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::ingest::IngestOptions;

/// Where the vocabulary comes from and how its lines are read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path to a word list with one word per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Skip empty lines instead of storing the empty word
    pub skip_blank_lines: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            skip_blank_lines: true,
        }
    }
}

impl DictionaryConfig {
    /// Options to hand to the ingestion layer.
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }

    /// Returns the configured word list path.
    pub fn require_path(&self) -> ConfigResult<&PathBuf> {
        self.path
            .as_ref()
            .ok_or_else(|| ConfigError::MissingValue("dictionary.path".to_string()))
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
