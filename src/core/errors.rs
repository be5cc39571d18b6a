//! Shared error types for the library

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main error type for toolcompare operations
#[derive(Debug, Error)]
pub enum Error {
    /// A raw record could not become a canonical record.
    ///
    /// The normalizer never returns this for a batch; it is collected
    /// per record into the drop report.
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord {
        index: usize,
        reason: MalformedReason,
    },

    /// Caller supplied contradictory or out-of-range query parameters
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog document has neither a record array nor a `tools` array
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// Lookup of a tool id that is not in the snapshot
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria(message.into())
    }

    pub fn malformed(index: usize, reason: MalformedReason) -> Self {
        Self::MalformedRecord { index, reason }
    }

    /// True for errors the caller caused and can fix by changing input.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCriteria(_)
                | Self::Configuration(_)
                | Self::Catalog(_)
                | Self::UnknownTool(_)
        )
    }
}

/// Why the normalizer rejected a raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum MalformedReason {
    /// Neither a name nor an id could be resolved.
    MissingIdentity,
    /// Another record earlier in the batch already uses this id.
    DuplicateId(String),
    /// A monthly or yearly price was below zero.
    NegativePrice,
    /// The element did not decode as a tool record at all.
    Undecodable(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentity => write!(f, "no resolvable name or id"),
            Self::DuplicateId(id) => write!(f, "duplicate id '{}'", id),
            Self::NegativePrice => write!(f, "negative price"),
            Self::Undecodable(msg) => write!(f, "undecodable record: {}", msg),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
