//! Markup Normalizer: folds every bold notation into canonical `<strong>` tags.
//!
//! Rule order:
//! 1. Decode `&lt; &gt; &amp; &quot;` so entity-encoded tags become real tags.
//! 2. Rewrite `<b>` / `</b>` (any case, optional attributes) to `<strong>` / `</strong>`.
//! 3. Rewrite `**text**` (non-greedy, leftmost first, may span lines) to `<strong>text</strong>`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Entities decoded before tag unification. Order is significant: `&amp;` is
/// decoded after `&lt;`/`&gt;`, so `&amp;lt;` decodes one level to `&lt;`.
const ENTITIES: [(&str, &str); 4] = [("&lt;", "<"), ("&gt;", ">"), ("&amp;", "&"), ("&quot;", "\"")];

static RE_B_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b\b[^>]*>|</b\s*>").unwrap());

static RE_DOUBLE_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());

/// Normalises raw inline markup into canonical `<strong>` form. Pure.
pub fn normalize(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let unified = RE_B_TAG.replace_all(&decoded, |caps: &Captures| {
        if caps[0].starts_with("</") {
            "</strong>"
        } else {
            "<strong>"
        }
    });
    RE_DOUBLE_STAR
        .replace_all(&unified, "<strong>$1</strong>")
        .into_owned()
}

/// Decodes the four entities model output commonly escapes.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    ENTITIES
        .iter()
        .fold(raw.to_string(), |acc, (entity, literal)| acc.replace(entity, literal))
}
