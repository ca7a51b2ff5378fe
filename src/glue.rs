//! Final glue/flatten pass: fuses ABBR/MWE spans into single tokens,
//! explodes surviving multi-character PUNCT/SYM runs, and drops whitespace.

use crate::token::{Token, TokenClass};

/// Fuses consecutive ABBR tokens (always) and consecutive MWE tokens (when
/// `glue_mwes` is set) into one token each, replacing internal spaces with
/// `_`. Then explodes any remaining multi-character PUNCT/SYM token into
/// one token per character. Whitespace-labeled tokens are left in place —
/// dropping them is [`flatten`]'s job, run separately so callers that want
/// offsets (the pre-tokenizer) can still see where the whitespace was.
pub fn glue(tokens: Vec<Token>, glue_mwes: bool) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut expr_tokens: Vec<String> = Vec::new();
    let mut expr_label: Option<TokenClass> = None;

    let flush = |expr_tokens: &mut Vec<String>, expr_label: &mut Option<TokenClass>, out: &mut Vec<Token>| {
        if let Some(label) = expr_label.take() {
            let fused = expr_tokens.join("").replace(' ', "_");
            out.push(Token::new(fused, label));
            expr_tokens.clear();
        }
    };

    for tok in tokens {
        let is_phrasal = tok.class == TokenClass::Abbr || (glue_mwes && tok.class == TokenClass::Mwe);

        if is_phrasal {
            expr_tokens.push(tok.text);
            expr_label = Some(tok.class);
            continue;
        }

        flush(&mut expr_tokens, &mut expr_label, &mut out);

        if tok.class.is_punct_or_sym_label() && tok.text.chars().count() > 1 {
            for c in tok.text.chars() {
                out.push(Token::new(c.to_string(), tok.class));
            }
        } else {
            out.push(tok);
        }
    }

    flush(&mut expr_tokens, &mut expr_label, &mut out);
    out
}

/// Drops every whitespace-labeled ([`TokenClass::is_whitespace_label`])
/// token from an already-glued stream.
pub fn drop_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| !t.class.is_whitespace_label())
        .collect()
}
