use once_cell::sync::Lazy;
use regex::Regex;

static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Returns the first 19xx/20xx year found in a free-text date, or the input
/// verbatim when there is none ("ongoing" stays "ongoing").
pub fn extract_year(raw: &str) -> &str {
    RE_YEAR.find(raw).map(|m| m.as_str()).unwrap_or(raw)
}
