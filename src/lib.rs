#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Romanian text normalization and rule-based tokenization for preparing
//! corpora for WordPiece vocabulary training, and for driving the same
//! pipeline at inference time.
//!
//! The pipeline has two independent halves that are typically chained:
//!
//! - [`normalizer`] rewrites raw text into the orthography the rest of the
//!   pipeline assumes (diacritics, â/î distribution, "a fi" verb forms).
//! - [`tokenizer`] segments normalized text into Romanian words, foreign
//!   words, numbers, abbreviations, multi-word expressions, punctuation,
//!   and symbols, via [`lexicon::Lexicon`]-driven rules.
//!
//! [`pretokenizer`] and [`decoder`] are the boundary adapters a WordPiece
//! trainer/encoder would sit behind.

pub mod alphabets;
pub mod classify;
pub mod dash;
pub mod decoder;
pub mod error;
pub mod glue;
pub mod lexicon;
pub mod normalizer;
pub mod phrasal;
pub mod pretokenizer;
pub mod segment;
pub mod token;
pub mod tokenizer;

pub use classify::Classifier;
pub use decoder::decode;
pub use error::{Desync, LexiconError};
pub use lexicon::{Lexicon, LexiconPaths};
pub use normalizer::{normalize, normalize_str};
pub use pretokenizer::{InferencePreTokenizer, OffsetToken, PreTokenizeResult, TrainingPreTokenizer};
pub use token::{Token, TokenClass};
pub use tokenizer::Tokenizer;

#[cfg(test)]
mod tests {
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
