//! The public tokenizer facade: wires segmentation, dash-splitting, phrasal
//! recognition, and gluing into the single `tokenize` entry point.

use tracing::debug;

use crate::classify::Classifier;
use crate::dash::split_dashed_words;
use crate::glue::{drop_whitespace, glue};
use crate::lexicon::Lexicon;
use crate::phrasal::{recognize, PhrasalKind};
use crate::segment::segment;
use crate::token::Token;

/// A rule-based Romanian tokenizer bound to one [`Lexicon`]. Cheap to
/// construct (it only borrows the lexicon); safe to share across threads.
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Tokenizer { lexicon }
    }

    /// Splits `input` (already normalized — see [`crate::normalizer`]) into
    /// its final token strings, in left-to-right order, with whitespace
    /// tokens dropped. This is the text-only counterpart of
    /// [`Tokenizer::tokenize_tagged`], matching the original library's
    /// `tokenize` contract.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        self.tokenize_tagged(input)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    /// Runs the full pipeline and keeps the class labels, useful for callers
    /// (like the pre-tokenizer adapter) that need to reason about token
    /// kinds rather than just their text.
    pub fn tokenize_tagged(&self, input: &str) -> Vec<Token> {
        let classifier = Classifier::new(self.lexicon);

        let tokens = segment(input, &classifier);
        debug!(count = tokens.len(), "segmented into character-class runs");

        let tokens = split_dashed_words(self.lexicon, tokens);
        let tokens = recognize(self.lexicon, tokens, PhrasalKind::Abbr);
        let tokens = recognize(self.lexicon, tokens, PhrasalKind::Mwe);
        let tokens = glue(tokens, true);

        drop_whitespace(tokens)
    }

    pub fn max_word_len(&self) -> usize {
        self.lexicon.max_word_len()
    }
}
