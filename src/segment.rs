//! First-pass character segmentation: splits raw text into maximal runs of
//! one character class, then applies the leading-dot punctuation split.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::alphabets::{EOL_CHARS, PUNCT_CHARS, SPACE_CHARS, SYM_CHARS, WORD_CHARS};
use crate::classify::Classifier;
use crate::token::{Token, TokenClass};

/// Index of each character-class set in priority order, matching the order
/// the segmenter tests sets in. The final "other" bucket has no fixed index
/// here — see [`segment`] for why it is pass-local instead.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CharSet {
    Word,
    Punct,
    Sym,
    Eol,
    Space,
}

const CHAR_SETS: [CharSet; 5] = [
    CharSet::Word,
    CharSet::Punct,
    CharSet::Sym,
    CharSet::Eol,
    CharSet::Space,
];

fn category_starts_with(c: char, letter: char) -> bool {
    use GeneralCategory::*;
    let starts = match c.general_category() {
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter => 'L',
        NonspacingMark | SpacingMark | EnclosingMark => 'M',
        DecimalNumber | LetterNumber | OtherNumber => 'N',
        FinalPunctuation | InitialPunctuation | ClosePunctuation | OpenPunctuation
        | DashPunctuation | ConnectorPunctuation => 'P',
        MathSymbol | CurrencySymbol | ModifierSymbol => 'S',
        SpaceSeparator | LineSeparator | ParagraphSeparator => 'Z',
        _ => '\0',
    };
    starts == letter
}

fn set_contains(set: CharSet, c: char) -> bool {
    match set {
        CharSet::Word => {
            WORD_CHARS.contains(c)
                || category_starts_with(c, 'L')
                || category_starts_with(c, 'N')
        }
        CharSet::Punct => {
            PUNCT_CHARS.contains(c)
                || (category_starts_with(c, 'P')
                    && !matches!(c.general_category(), GeneralCategory::OtherPunctuation))
        }
        CharSet::Sym => {
            SYM_CHARS.contains(c)
                || (category_starts_with(c, 'S')
                    && !matches!(c.general_category(), GeneralCategory::OtherSymbol))
        }
        CharSet::Eol => EOL_CHARS.contains(c),
        CharSet::Space => SPACE_CHARS.contains(c) || category_starts_with(c, 'Z'),
    }
}

/// Classifies `input` into maximal runs of a single character class, tagging
/// each run via `classifier.tag_word`, then splits any multi-character
/// `PUNCT` token that starts with a lone `.` (and isn't exactly `...`) into
/// its leading dot and the remainder.
///
/// The catch-all "other" bucket that coalesces unrecognized characters is a
/// `Vec<char>` local to this call — not shared state — so this function is
/// reentrant and safe to call concurrently from multiple threads sharing one
/// [`Classifier`]/[`crate::lexicon::Lexicon`].
pub fn segment(input: &str, classifier: &Classifier<'_>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // None == no run started yet; Some(i) == currently inside CHAR_SETS[i];
    // Some(CHAR_SETS.len()) == currently inside the pass-local "other" bucket.
    let mut last_set_index: Option<usize> = None;
    let mut other_chars: Vec<char> = Vec::new();

    for raw_c in input.chars() {
        let c = if raw_c == '\t' { ' ' } else { raw_c };

        let found = CHAR_SETS.iter().position(|&set| set_contains(set, c));
        let this_index = found.unwrap_or(CHAR_SETS.len());

        if found.is_none() {
            other_chars.push(c);
        }

        match last_set_index {
            None => {
                current.push(c);
                last_set_index = Some(this_index);
            }
            Some(idx) if idx == this_index => {
                current.push(c);
            }
            Some(_) => {
                let class = classifier.tag_word(&current);
                tokens.push(Token::new(std::mem::take(&mut current), class));
                current.push(c);
                last_set_index = Some(this_index);
            }
        }
    }

    if !current.is_empty() {
        let class = classifier.tag_word(&current);
        tokens.push(Token::new(current, class));
    }

    split_leading_dot_punct(tokens)
}

fn split_leading_dot_punct(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for tok in tokens {
        let chars_len = tok.text.chars().count();
        if tok.class == TokenClass::Punct && chars_len > 1 && tok.text.starts_with('.') && tok.text != "..." {
            let mut chars = tok.text.chars();
            let first = chars.next().expect("non-empty");
            let rest: String = chars.collect();
            out.push(Token::new(first.to_string(), TokenClass::Punct));
            out.push(Token::new(rest, TokenClass::Punct));
        } else {
            out.push(tok);
        }
    }
    out
}
