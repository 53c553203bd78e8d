//! Errors raised when parsing user-supplied domain values.

use thiserror::Error;

/// A string or number could not be turned into a domain value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Complexity level out of range (expected 1-5): {0}")]
    LevelOutOfRange(i64),

    #[error("Invalid complexity level: {0}")]
    InvalidLevel(String),

    #[error("Unknown content status: {0}")]
    UnknownStatus(String),

    #[error("Unknown clinical relevance: {0}")]
    UnknownRelevance(String),

    #[error("Unknown match mode: {0}")]
    UnknownMatchMode(String),
}
