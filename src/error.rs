//! Error types for tagging operations.

use thiserror::Error;

/// Framing violations detected while re-deriving token offsets.
///
/// Both variants mean the input was not split the way the tagger assumes
/// (tokens separated by exactly one space); the call is aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("characters lost during tokenization: reconstructed {actual} chars, input has {expected}")]
    Tokenization { expected: usize, actual: usize },

    #[error("number of tags ({tags}) does not match number of tokens ({tokens})")]
    TagCount { tokens: usize, tags: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
