use crate::{decode, normalize, normalize_str, InferencePreTokenizer, Lexicon, LexiconPaths, Tokenizer};
use proptest::prelude::*;

fn data_lexicon() -> Lexicon {
    let paths = LexiconPaths::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
    Lexicon::load(&paths).expect("fixture lexicon should load")
}

proptest! {
    // Invariant 2: normalize(normalize(s)) == normalize(s).
    #[test]
    fn normalization_is_idempotent(s in ".{0,300}") {
        let once = normalize_str(&s);
        let twice = normalize_str(&once);
        prop_assert_eq!(once, twice);
    }

    // Invariant 3: the streaming and pure normalizer forms agree on every input.
    #[test]
    fn streaming_and_pure_normalizer_forms_agree(s in ".{0,300}") {
        let pure = normalize_str(&s);
        let streaming = normalize(s.clone());
        prop_assert_eq!(pure, streaming);
    }

    // Invariant 4: normalize is a pure function of its input.
    #[test]
    fn normalize_is_deterministic(s in ".{0,300}") {
        prop_assert_eq!(normalize_str(&s), normalize_str(&s));
    }

    // Invariant 5: no EOL/SPACE-labeled token survives the final tokenizer output.
    #[test]
    fn tokenizer_output_has_no_whitespace_tokens(s in "[a-zA-Zăâîșț .,\n\t]{0,200}") {
        let lex = data_lexicon();
        let tokenizer = Tokenizer::new(&lex);
        let normalized = normalize_str(&s);
        let tokens = tokenizer.tokenize(&normalized);
        for t in &tokens {
            prop_assert!(t.chars().any(|c| !c.is_whitespace()));
        }
    }

    // Invariant 4 (tokenizer side): tokenize is a pure function of the input and lexicon.
    #[test]
    fn tokenize_is_deterministic(s in "[a-zA-Zăâîșț .,\n\t]{0,200}") {
        let lex = data_lexicon();
        let tokenizer = Tokenizer::new(&lex);
        let normalized = normalize_str(&s);
        prop_assert_eq!(tokenizer.tokenize(&normalized), tokenizer.tokenize(&normalized));
    }

    // Invariant 1: pre-tokenizer offsets, with at most one inter-token space,
    // reproduce the normalized input exactly unless a desync is reported.
    #[test]
    fn pretokenizer_offsets_cover_the_normalized_string(s in "[a-zA-Zăâîșț .,\n\t]{0,200}") {
        let lex = data_lexicon();
        let pre = InferencePreTokenizer::new(Tokenizer::new(&lex));
        let normalized = normalize_str(&s);
        let result = pre.pre_tokenize_str(&normalized);

        if result.desync.is_none() {
            let mut cursor = 0usize;
            for tok in &result.tokens {
                prop_assert!(tok.start >= cursor);
                // at most one inter-token gap byte (a single ASCII space)
                prop_assert!(tok.start - cursor <= 1);
                cursor = tok.end;
            }
            prop_assert!(normalized.len() - cursor <= 1);
        }
    }

    // Invariant 8: decode(tokens) only omits the inter-token space around a
    // dash boundary.
    #[test]
    fn decode_adjacency_matches_dash_rule(a in "[a-zA-Z-]{1,10}", b in "[a-zA-Z-]{1,10}") {
        let tokens = vec![a.clone(), b.clone()];
        let decoded = decode(&tokens);
        let expect_no_space = a.ends_with('-') || b.starts_with('-');
        let has_space = decoded == format!("{a} {b}");
        let no_space = decoded == format!("{a}{b}");
        if expect_no_space {
            prop_assert!(no_space);
        } else {
            prop_assert!(has_space);
        }
    }
}
