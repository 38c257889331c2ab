//! Error types for the bloom-data crate.
//!
//! Generation, filtering and URL decoding are total, so the only fallible
//! surface is turning a free-form label back into one of the closed
//! vocabularies.

use thiserror::Error;

/// Errors raised when parsing a vocabulary label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The label is not a member of the named vocabulary.
    #[error("'{value}' is not a known {vocabulary} label")]
    UnknownLabel {
        /// Human-readable name of the vocabulary, for example `category`.
        vocabulary: &'static str,
        /// The label that failed to parse.
        value: String,
    },
}
