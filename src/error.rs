//! Error and diagnostic types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors from [`crate::lexicon::Lexicon::load`].
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon file {path} contained no usable entries")]
    Empty { path: PathBuf },
}

/// Marks a span in pre-tokenizer output where offset reconciliation lost
/// sync with the tokenizer's own token stream. The conservative recovery
/// (the remainder of the string as one span) is still produced; this value
/// lets a caller detect and react to the degradation instead of silently
/// receiving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desync {
    /// The token text that could not be matched against the normalized string.
    pub token: String,
    /// The byte offset into the normalized string where the mismatch occurred.
    pub offset: usize,
}
