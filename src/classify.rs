//! Pure, stateless predicates over token candidate strings.
//!
//! Each `is_*` predicate mirrors one Unicode-category-and-lexicon rule. They
//! are pure functions of their argument and the shared [`Lexicon`]; none of
//! them observe or mutate anything else, so a `Classifier` is `Send + Sync`
//! and trivially shareable across threads.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::alphabets::{
    DIACRITIC_CHARS, EOL_CHARS, NUMBER_CHARS, PUNCT_CHARS, ROMAN_NUMERALS, SPACE_CHARS, SYM_CHARS,
    WORD_CHARS,
};
use crate::lexicon::Lexicon;
use crate::token::TokenClass;

/// Two-letter Unicode general category abbreviation, matching the strings
/// Python's `unicodedata.category()` returns (`"Lu"`, `"Po"`, `"Nd"`, ...).
/// The rest of this module's rules are written against these abbreviations
/// because the source rules themselves are expressed that way (a leading
/// letter selects the broad group, the full two letters select a specific
/// category the rule wants to exclude, e.g. `Po`/`So`).
fn category_code(c: char) -> &'static str {
    use GeneralCategory::*;
    match c.general_category() {
        UppercaseLetter => "Lu",
        LowercaseLetter => "Ll",
        TitlecaseLetter => "Lt",
        ModifierLetter => "Lm",
        OtherLetter => "Lo",
        NonspacingMark => "Mn",
        SpacingMark => "Mc",
        EnclosingMark => "Me",
        DecimalNumber => "Nd",
        LetterNumber => "Nl",
        OtherNumber => "No",
        ConnectorPunctuation => "Pc",
        DashPunctuation => "Pd",
        OpenPunctuation => "Ps",
        ClosePunctuation => "Pe",
        InitialPunctuation => "Pi",
        FinalPunctuation => "Pf",
        OtherPunctuation => "Po",
        MathSymbol => "Sm",
        CurrencySymbol => "Sc",
        ModifierSymbol => "Sk",
        OtherSymbol => "So",
        SpaceSeparator => "Zs",
        LineSeparator => "Zl",
        ParagraphSeparator => "Zp",
        Control => "Cc",
        Format => "Cf",
        Surrogate => "Cs",
        PrivateUse => "Co",
        Unassigned => "Cn",
    }
}

fn starts_with(code: &str, letter: char) -> bool {
    code.starts_with(letter)
}

fn is_special_only(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c == '-' || c == '_')
}

/// Bundles a [`Lexicon`] reference with the classification predicates that
/// need lexicon lookups (`is_rword`, `is_fword`, `is_abbr`, the dash scorer).
pub struct Classifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Classifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Classifier { lexicon }
    }

    /// A Romanian lexicon hit, or a word containing at least one Romanian
    /// diacritic, counts as `RWORD`.
    pub fn is_rword(&self, word: &str) -> bool {
        if self.lexicon.is_lex_word(word) {
            return true;
        }
        word.chars().any(|c| DIACRITIC_CHARS.contains(c))
    }

    /// A valid word containing at least one letter outside the Romanian
    /// word alphabet is a foreign word.
    pub fn is_fword(&self, word: &str) -> bool {
        let has_foreign_letter = word
            .chars()
            .any(|c| starts_with(category_code(c), 'L') && !WORD_CHARS.contains(c));
        has_foreign_letter && self.is_word(word)
    }

    /// True for Roman numerals I..XXX and for runs of digits / `N*`-category
    /// characters.
    pub fn is_num(&self, word: &str) -> bool {
        if ROMAN_NUMERALS.contains(word) || ROMAN_NUMERALS.contains(word.to_uppercase().as_str()) {
            return true;
        }
        word.chars()
            .all(|c| NUMBER_CHARS.contains(c) || starts_with(category_code(c), 'N'))
    }

    /// Letters, marks, numbers, or Romanian word-alphabet characters only,
    /// and not a bare run of `-`/`_`.
    pub fn is_word(&self, word: &str) -> bool {
        let all_word_chars = word.chars().all(|c| {
            let code = category_code(c);
            starts_with(code, 'L') || starts_with(code, 'M') || starts_with(code, 'N')
                || WORD_CHARS.contains(c)
        });
        all_word_chars && !is_special_only(word)
    }

    /// No single token is ever classified `MWE` by the segmenter; the label
    /// is only assigned by the phrasal recognizer pass.
    pub fn is_mwe(&self, _word: &str) -> bool {
        false
    }

    /// A `.`-bearing lexicon hit.
    pub fn is_abbr(&self, word: &str) -> bool {
        word.contains('.') && self.lexicon.is_lex_word(word)
    }

    /// Runs the ordered tag-precedence table and returns the first class
    /// whose predicate matches, or [`TokenClass::Junk`] if none does.
    ///
    /// This is a fixed array of `(class, fn)` pairs rather than a dynamic
    /// dispatch by stringified predicate name: adding a class is a single
    /// array edit, and there is nothing to look up at runtime.
    pub fn tag_word(&self, word: &str) -> TokenClass {
        const TABLE: &[(TokenClass, fn(&Classifier, &str) -> bool)] = &[
            (TokenClass::Abbr, Classifier::is_abbr),
            (TokenClass::Num, Classifier::is_num),
            (TokenClass::RWord, Classifier::is_rword),
            (TokenClass::Mwe, Classifier::is_mwe),
            (TokenClass::FWord, Classifier::is_fword),
            (TokenClass::Word, Classifier::is_word),
            (TokenClass::Eol, Classifier::is_eol),
            (TokenClass::Space, Classifier::is_space),
            (TokenClass::Punct, Classifier::is_punct),
            (TokenClass::Sym, Classifier::is_sym),
        ];

        for (class, predicate) in TABLE {
            if predicate(self, word) {
                return *class;
            }
        }
        TokenClass::Junk
    }

    pub fn is_punct(&self, word: &str) -> bool {
        word.chars().all(|c| {
            let code = category_code(c);
            PUNCT_CHARS.contains(c) || (starts_with(code, 'P') && code != "Po")
        })
    }

    pub fn is_sym(&self, word: &str) -> bool {
        word.chars().all(|c| {
            let code = category_code(c);
            SYM_CHARS.contains(c) || (starts_with(code, 'S') && code != "So")
        })
    }

    pub fn is_eol(&self, word: &str) -> bool {
        word.chars().any(|c| EOL_CHARS.contains(c))
    }

    pub fn is_space(&self, word: &str) -> bool {
        word.chars()
            .all(|c| SPACE_CHARS.contains(c) || starts_with(category_code(c), 'Z'))
    }

    /// `true` for a run of ASCII digits or a Roman numeral — used by the
    /// dash-splitter scorer, distinct from [`Classifier::is_num`] in that it
    /// does not also accept arbitrary `N*`-category characters.
    pub fn word_is_number(word: &str) -> bool {
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        ROMAN_NUMERALS.contains(word) || ROMAN_NUMERALS.contains(word.to_uppercase().as_str())
    }

    /// `true` for `ABCD`-style (all-uppercase letters) or `AbCd`-style
    /// (mixed case with at least one lower-to-upper transition) strings.
    pub fn word_is_spec_caps(word: &str) -> bool {
        let mut all_upper = true;
        let mut mixed = false;
        let mut prev_was_lower = false;

        for c in word.chars() {
            if !starts_with(category_code(c), 'L') {
                return false;
            }
            let is_upper = category_code(c) == "Lu";
            if !is_upper {
                all_upper = false;
            } else if prev_was_lower {
                mixed = true;
            }
            prev_was_lower = category_code(c) == "Ll";
        }

        all_upper || mixed
    }
}
