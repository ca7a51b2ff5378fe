//! The decoder: reattaches clitics to their host when joining tokens back
//! into a display string.

/// Joins `tokens` with a single space between each pair, except when the
/// left token ends with `-` or the right token starts with `-` — those
/// join directly with no space, since the dash marks a clitic boundary the
/// [`crate::dash`] splitter introduced.
pub fn decode(tokens: &[String]) -> String {
    match tokens.len() {
        0 => String::new(),
        1 => tokens[0].clone(),
        _ => {
            let mut out = String::new();
            for pair in tokens.windows(2) {
                let (ctok, ntok) = (&pair[0], &pair[1]);
                out.push_str(ctok);
                if !ctok.ends_with('-') && !ntok.starts_with('-') {
                    out.push(' ');
                }
            }
            out.push_str(&tokens[tokens.len() - 1]);
            out
        }
    }
}
