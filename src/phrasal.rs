//! The phrasal recognizer: greedily relabels runs of adjacent tokens as
//! `ABBR` or `MWE` when their concatenation is a known lexicon entry.

use smallvec::SmallVec;

use crate::alphabets::{REJECT_ABBRS, REJECT_MWES};
use crate::lexicon::Lexicon;
use crate::token::{Token, TokenClass};

/// Which phrasal label a recognition pass is looking for.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PhrasalKind {
    Abbr,
    Mwe,
}

impl PhrasalKind {
    fn label(self) -> TokenClass {
        match self {
            PhrasalKind::Abbr => TokenClass::Abbr,
            PhrasalKind::Mwe => TokenClass::Mwe,
        }
    }

    fn is_first_word(self, lexicon: &Lexicon, word: &str) -> bool {
        match self {
            PhrasalKind::Abbr => lexicon.is_abbr_first_word(word),
            PhrasalKind::Mwe => lexicon.is_mwe_first_word(word),
        }
    }

    fn max_parts(self, lexicon: &Lexicon) -> usize {
        match self {
            PhrasalKind::Abbr => lexicon.max_abbr_parts(),
            PhrasalKind::Mwe => lexicon.max_mwe_parts(),
        }
    }

    fn reject_set_contains(self, candidate: &str) -> bool {
        match self {
            PhrasalKind::Abbr => REJECT_ABBRS.contains(candidate),
            PhrasalKind::Mwe => REJECT_MWES.contains(candidate),
        }
    }

    fn candidate_is_well_formed(self, candidate: &str) -> bool {
        match self {
            PhrasalKind::Abbr => candidate.ends_with('.'),
            PhrasalKind::Mwe => !candidate.ends_with('_'),
        }
    }
}

/// Runs one greedy leftmost-longest recognition pass over `tokens` for the
/// given `kind`. Call once with [`PhrasalKind::Abbr`] then once with
/// [`PhrasalKind::Mwe`] — abbreviations are recognized first so an
/// abbreviation never gets swallowed into a larger MWE candidate.
pub fn recognize(lexicon: &Lexicon, tokens: Vec<Token>, kind: PhrasalKind) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if !kind.is_first_word(lexicon, &tokens[i].text) {
            out.push(tokens[i].clone());
            i += 1;
            continue;
        }

        // Collect the longest possible phrase starting at `i`: up to
        // `max_parts` word-ish tokens, stopping at EOL always and at SPACE
        // for ABBR. SPACE contributes a literal `_` separator for MWE.
        // Most abbreviation/MWE candidates are a handful of pieces; the inline
        // capacity avoids a heap allocation for the common case.
        let mut pieces: SmallVec<[String; 8]> = SmallVec::from_elem(tokens[i].text.clone(), 1);
        let mut word_count = 1usize;
        let max_parts = kind.max_parts(lexicon);
        let mut j = i + 1;

        while word_count < max_parts && j < tokens.len() {
            let tag = tokens[j].class;

            if tag == TokenClass::Eol || (tag == TokenClass::Space && kind == PhrasalKind::Abbr) {
                break;
            }

            if tag == TokenClass::Space {
                if kind == PhrasalKind::Mwe && pieces.last().map(|s| s.as_str()) != Some("_") {
                    pieces.push("_".to_string());
                }
            } else {
                pieces.push(tokens[j].text.clone());
                if matches!(
                    tag,
                    TokenClass::RWord | TokenClass::FWord | TokenClass::Word | TokenClass::Abbr
                ) {
                    word_count += 1;
                }
            }

            j += 1;
        }

        let mut matched = false;
        for k in (2..=pieces.len()).rev() {
            let candidate: String = pieces[0..k].concat();
            if !kind.candidate_is_well_formed(&candidate) {
                continue;
            }
            if lexicon.is_lex_word(&candidate) && !kind.reject_set_contains(&candidate.to_lowercase()) {
                let end = i + k;
                for tok in &tokens[i..end] {
                    out.push(Token::new(tok.text.clone(), kind.label()));
                }
                i = end;
                matched = true;
                break;
            }
        }

        if !matched {
            out.push(tokens[i].clone());
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, class: TokenClass) -> Token {
        Token::new(text, class)
    }

    #[test]
    fn recognizes_abbreviation_across_word_tokens() {
        let lex = Lexicon::from_entries([], [], ["S.U.A."]);
        let tokens = vec![
            tok("S", TokenClass::Word),
            tok(".", TokenClass::Punct),
            tok("U", TokenClass::Word),
            tok(".", TokenClass::Punct),
            tok("A", TokenClass::Word),
            tok(".", TokenClass::Punct),
        ];
        let out = recognize(&lex, tokens, PhrasalKind::Abbr);
        assert!(out.iter().all(|t| t.class == TokenClass::Abbr));
        let joined: String = out.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "S.U.A.");
    }

    #[test]
    fn abbr_does_not_cross_space_tokens() {
        let lex = Lexicon::from_entries([], [], ["nr. 1"]);
        let tokens = vec![
            tok("nr", TokenClass::Word),
            tok(".", TokenClass::Punct),
            tok(" ", TokenClass::Space),
            tok("1", TokenClass::Num),
        ];
        let out = recognize(&lex, tokens, PhrasalKind::Abbr);
        assert_eq!(out[0].class, TokenClass::Word);
    }

    #[test]
    fn recognizes_mwe_with_underscore_joined_spaces() {
        let lex = Lexicon::from_entries([], ["în_același_timp"], []);
        let tokens = vec![
            tok("în", TokenClass::RWord),
            tok(" ", TokenClass::Space),
            tok("același", TokenClass::RWord),
            tok(" ", TokenClass::Space),
            tok("timp", TokenClass::RWord),
        ];
        let out = recognize(&lex, tokens, PhrasalKind::Mwe);
        assert!(out.iter().all(|t| t.class == TokenClass::Mwe));
    }

    #[test]
    fn mwe_does_not_cross_eol() {
        let lex = Lexicon::from_entries([], ["în_același"], []);
        let tokens = vec![
            tok("în", TokenClass::RWord),
            tok("\n", TokenClass::Eol),
            tok("același", TokenClass::RWord),
        ];
        let out = recognize(&lex, tokens, PhrasalKind::Mwe);
        assert_eq!(out[0].class, TokenClass::RWord);
    }

    #[test]
    fn reject_set_blocks_recognition() {
        let lex = Lexicon::from_entries([], ["de_a"], []);
        let tokens = vec![
            tok("de", TokenClass::RWord),
            tok(" ", TokenClass::Space),
            tok("a", TokenClass::RWord),
        ];
        let out = recognize(&lex, tokens, PhrasalKind::Mwe);
        assert_eq!(out[0].class, TokenClass::RWord);
        assert_eq!(out[2].class, TokenClass::RWord);
    }
}
