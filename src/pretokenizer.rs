//! Offset-preserving adapters that turn tokenizer output into `(text, span)`
//! pairs over a normalized string, for inference and for training-corpus
//! pre-tokenization respectively.

use tracing::warn;

use crate::error::Desync;
use crate::tokenizer::Tokenizer;

/// A single `(text, byte_range)` pair over the normalized input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Result of [`InferencePreTokenizer::pre_tokenize_str`]: the offset tokens,
/// plus a [`Desync`] diagnostic if offset reconciliation lost sync partway
/// through (the conservative single-span recovery is still included in
/// `tokens`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreTokenizeResult {
    pub tokens: Vec<OffsetToken>,
    pub desync: Option<Desync>,
}

/// Walks a normalized string alongside the tokenizer's own token stream,
/// reconciling each token against a byte offset range. A phrasal token's `_`
/// matches a literal space in the string (phrasal gluing replaces internal
/// spaces with `_`); at most one inter-token space is consumed between
/// tokens.
pub struct InferencePreTokenizer<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> InferencePreTokenizer<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        InferencePreTokenizer { tokenizer }
    }

    pub fn pre_tokenize_str(&self, normalized: &str) -> PreTokenizeResult {
        if normalized.is_empty() {
            return PreTokenizeResult {
                tokens: vec![OffsetToken {
                    text: String::new(),
                    start: 0,
                    end: 0,
                }],
                desync: None,
            };
        }

        let chars: Vec<char> = normalized.chars().collect();
        let byte_offsets = char_byte_offsets(normalized);
        let mut ro_tokens = self.tokenizer.tokenize(normalized).into_iter();

        let mut result = Vec::new();
        let mut loff = 0usize; // char index
        let mut roff = 0usize; // char index
        let mut desync = None;

        let Some(mut crt_token) = ro_tokens.next() else {
            return PreTokenizeResult {
                tokens: vec![OffsetToken {
                    text: normalized.to_string(),
                    start: 0,
                    end: normalized.len(),
                }],
                desync: None,
            };
        };

        loop {
            let mut out_of_sync = false;

            for tc in crt_token.chars() {
                if roff >= chars.len() {
                    out_of_sync = true;
                    break;
                }
                let sc = chars[roff];
                if tc == sc || (tc == '_' && sc == ' ') {
                    roff += 1;
                } else {
                    warn!(token = %crt_token, offset = roff, normalized = %normalized, "pre-tokenizer offset desync");
                    desync = Some(Desync {
                        token: crt_token.clone(),
                        offset: byte_offsets[roff.min(byte_offsets.len() - 1)],
                    });
                    out_of_sync = true;
                    break;
                }
            }

            result.push(OffsetToken {
                text: char_slice(normalized, &byte_offsets, loff, roff),
                start: byte_offsets[loff],
                end: if roff < byte_offsets.len() {
                    byte_offsets[roff]
                } else {
                    normalized.len()
                },
            });

            if roff >= chars.len() {
                break;
            }

            if out_of_sync {
                if roff < chars.len() {
                    result.push(OffsetToken {
                        text: char_slice(normalized, &byte_offsets, roff, chars.len()),
                        start: byte_offsets[roff],
                        end: normalized.len(),
                    });
                }
                break;
            }

            if roff < chars.len() && chars[roff] == ' ' {
                roff += 1;
            }

            loff = roff;

            match ro_tokens.next() {
                Some(next) => crt_token = next,
                None => break,
            }
        }

        PreTokenizeResult {
            tokens: result,
            desync,
        }
    }
}

fn char_byte_offsets(s: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    offsets.push(s.len());
    offsets
}

fn char_slice(s: &str, byte_offsets: &[usize], start_char: usize, end_char: usize) -> String {
    let start = byte_offsets.get(start_char).copied().unwrap_or(s.len());
    let end = byte_offsets.get(end_char).copied().unwrap_or(s.len());
    s[start..end].to_string()
}

/// Training-mode pre-tokenizer: strips the input, then splits on the literal
/// `_tk_` delimiter (removed from the output), with no offset tracking.
/// Used when the corpus was already pre-segmented by this crate's own
/// tokenizer before being written to disk for the trainer to consume.
pub struct TrainingPreTokenizer;

impl TrainingPreTokenizer {
    pub const DELIMITER: &'static str = "_tk_";

    pub fn pre_tokenize(&self, input: &str) -> Vec<String> {
        let trimmed = input.trim();
        if trimmed.contains(Self::DELIMITER) {
            trimmed.split(Self::DELIMITER).map(str::to_string).collect()
        } else {
            vec![trimmed.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn tokenizer(lex: &Lexicon) -> Tokenizer<'_> {
        Tokenizer::new(lex)
    }

    #[test]
    fn reconciles_offsets_over_plain_words() {
        let lex = Lexicon::from_entries(["și", "cum"], [], []);
        let pre = InferencePreTokenizer::new(tokenizer(&lex));
        let result = pre.pre_tokenize_str("și cum");
        assert!(result.desync.is_none());
        let joined: String = result.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join("");
        assert_eq!(joined.replace(' ', ""), "șicum".replace(' ', ""));
    }

    #[test]
    fn mwe_underscore_matches_literal_space() {
        let lex = Lexicon::from_entries([], ["în_același_timp"], []);
        let pre = InferencePreTokenizer::new(tokenizer(&lex));
        let result = pre.pre_tokenize_str("în același timp");
        assert!(result.desync.is_none());
        assert_eq!(result.tokens[0].text, "în același timp");
    }

    #[test]
    fn training_pretokenizer_splits_on_delimiter() {
        let tk = TrainingPreTokenizer;
        let tokens = tk.pre_tokenize("  Recunoașterea_tk_artistică_tk_și_tk_comercială  ");
        assert_eq!(tokens, vec!["Recunoașterea", "artistică", "și", "comercială"]);
    }

    #[test]
    fn training_pretokenizer_passes_through_without_delimiter() {
        let tk = TrainingPreTokenizer;
        let tokens = tk.pre_tokenize("  plain line  ");
        assert_eq!(tokens, vec!["plain line"]);
    }

    #[test]
    fn empty_input_yields_single_empty_span() {
        let lex = Lexicon::from_entries(["și"], [], []);
        let pre = InferencePreTokenizer::new(tokenizer(&lex));
        let result = pre.pre_tokenize_str("");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].text, "");
    }
}
