//! Value normalization for categorical quantity answers.
//!
//! The survey wizard offers a fixed vocabulary of human-readable quantity
//! labels ("1 1/2", "20 or more", "----", "Unknown") plus a handful of legacy
//! annotated forms ("0.5 (1/2 gram)"). [`normalize_answer`] maps all of them
//! onto canonical decimal strings, with `----` and `Unknown` encoded as the
//! `-8888`/`-9999` sentinels.

use tlfb_model::Sentinel;

/// Normalizes one raw answer to a canonical numeric string.
///
/// Total over the wizard's choice vocabulary and never panics: text outside
/// the vocabulary is reported through `tracing` and propagated in its
/// partially cleaned form rather than aborting the transform.
pub fn normalize_answer(raw: &str) -> String {
    if raw.eq_ignore_ascii_case("yes") {
        return "1".to_string();
    }
    // Substitution order matters: fractions first, then the or-more/or-less
    // qualifiers, then whitespace, then annotations, then stray characters.
    let value = raw
        .replace("1/2", ".5")
        .replace("1/4", ".25")
        .replace("3/4", ".75")
        .replace("or more", "")
        .replace("or less", "")
        .replace(' ', "");
    let value = strip_annotations(&value);
    let token: String = value
        .chars()
        .filter(|ch| !matches!(ch, 'a'..='z' | 'A'..='Z' | ' ' | '/' | ','))
        .collect();

    if token == "999" || raw == "Unknown" {
        return Sentinel::Unknown.as_str().to_string();
    }
    if token == "----" {
        return Sentinel::NoAnswer.as_str().to_string();
    }
    if !token.is_empty() && token.parse::<f64>().is_err() {
        tracing::warn!(raw, token, "answer did not normalize to a numeric value");
    }
    token
}

/// Drops annotation spans: each `(` or `[` through the nearest `)` or `]`.
/// An opener with no closer is kept as-is.
fn strip_annotations(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '(' || ch == '[' {
            if let Some(offset) = chars[i + 1..].iter().position(|&c| c == ')' || c == ']') {
                i += offset + 2;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }
    out
}
