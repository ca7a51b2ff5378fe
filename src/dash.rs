//! The dash-splitter: re-segments hyphenated word tokens into their
//! constituent parts using a lexicon-driven scoring rule.

use crate::alphabets::DASH_KEEP_WORDS;
use crate::classify::Classifier;
use crate::lexicon::Lexicon;
use crate::token::{Token, TokenClass};

/// Per-side score used by the two-part dash split: `+1` if the side is a
/// known dash-adjacent clitic, `+2` if it is independently a lexicon hit, a
/// number, or an all-caps/mixed-caps spec form.
fn score_dash_side(lexicon: &Lexicon, side: &str) -> u8 {
    let mut score = 0;
    if DASH_KEEP_WORDS.contains(side.to_lowercase().as_str()) {
        score += 1;
    }
    if lexicon.is_lex_word(side)
        || Classifier::word_is_number(side)
        || Classifier::word_is_spec_caps(side)
    {
        score += 2;
    }
    score
}

/// Minimum combined score required for a two-part dash split to be accepted.
const SPLIT_THRESHOLD: u8 = 4;

/// Decides whether `word` (already known to contain an internal `-` and to
/// neither start nor end with one) should be re-split, and returns the
/// replacement tokens if so. Returns `None` when the original token should
/// be kept as-is.
pub fn decide_dash_split(lexicon: &Lexicon, word: &str) -> Option<Vec<Token>> {
    let parts: Vec<&str> = word.split('-').collect();

    if parts.len() == 3 {
        let left = parts[0];
        let mid = format!("-{}", parts[1]);
        let right = format!("-{}", parts[2]);

        if lexicon.is_lex_word(left) && lexicon.is_lex_word(&mid) && lexicon.is_lex_word(&right) {
            return Some(vec![
                Token::new(left, TokenClass::RWord),
                Token::new(mid, TokenClass::RWord),
                Token::new(right, TokenClass::RWord),
            ]);
        }
        return None;
    }

    if parts.len() == 2 {
        let lw1 = format!("{}-", parts[0]);
        let rw1 = parts[1].to_string();
        let score1 = score_dash_side(lexicon, &lw1) + score_dash_side(lexicon, &rw1);

        let lw2 = parts[0].to_string();
        let rw2 = format!("-{}", parts[1]);
        let score2 = score_dash_side(lexicon, &lw2) + score_dash_side(lexicon, &rw2);

        let (left, right, best_score) = if score1 >= score2 {
            (lw1, rw1, score1)
        } else {
            (lw2, rw2, score2)
        };

        if best_score >= SPLIT_THRESHOLD {
            return Some(vec![
                Token::new(left, TokenClass::RWord),
                Token::new(right, TokenClass::RWord),
            ]);
        }
    }

    None
}

/// Applies [`decide_dash_split`] to every eligible token in `tokens`,
/// replacing it in place when a split is accepted.
pub fn split_dashed_words(lexicon: &Lexicon, tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for tok in tokens {
        let eligible =
            tok.text.contains('-') && !tok.text.starts_with('-') && !tok.text.ends_with('-');

        if eligible {
            if let Some(split) = decide_dash_split(lexicon, &tok.text) {
                out.extend(split);
                continue;
            }
        }
        out.push(tok);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clitic_host_and_keepword_clear_the_threshold() {
        // "Ți-" as an explicit clitic-boundary entry (+2 lexicon) combines with
        // "am" scoring both the keep-word bonus and its own lexicon hit (+3),
        // clearing the >=4 threshold.
        let lex = Lexicon::from_entries(["Ți-", "am"], [], []);
        let result = decide_dash_split(&lex, "Ți-am").expect("should split");
        assert_eq!(result[0].text, "Ți-");
        assert_eq!(result[1].text, "am");
    }

    #[test]
    fn three_part_split_requires_all_three_lexicon_hits() {
        let lex = Lexicon::from_entries(["du", "-te", "-acasă"], [], []);
        let result = decide_dash_split(&lex, "du-te-acasă").unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "du");
        assert_eq!(result[1].text, "-te");
        assert_eq!(result[2].text, "-acasă");
    }

    #[test]
    fn unsplittable_pair_keeps_original() {
        let lex = Lexicon::from_entries([], [], []);
        assert!(decide_dash_split(&lex, "xyz-abc").is_none());
    }

    #[test]
    fn spec_caps_side_contributes_to_score() {
        // pairing ("un-", "ABC"): "un-" as a lexicon clitic-boundary entry (+2)
        // plus "ABC" scoring as spec-caps (+2) clears the threshold at exactly 4.
        let lex = Lexicon::from_entries(["un-"], [], []);
        let result = decide_dash_split(&lex, "un-ABC").expect("should split");
        assert_eq!(result[0].text, "un-");
        assert_eq!(result[1].text, "ABC");
    }
}
