//! Run Splitter: turns canonical `<strong>` markup into styled text runs.
//!
//! Malformed markup never errors and never leaks: tags that do not form a
//! complete `<strong>…</strong>` pair are stripped from plain runs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_STRONG_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<strong\b[^>]*>(.*?)</strong\s*>").unwrap());

static RE_STRAY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:strong|b)\b[^>]*>").unwrap());

static RE_ANY_STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?strong").unwrap());

/// A contiguous piece of text with a single emphasis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupRun {
    pub text: String,
    pub emphasis: bool,
}

impl MarkupRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// Splits normalised markup into runs.
///
/// Empty input yields no runs. Input without any `<strong` / `</strong` yields
/// exactly one plain run holding the input.
pub fn split(normalized: &str) -> Vec<MarkupRun> {
    if normalized.is_empty() {
        return Vec::new();
    }
    if !RE_ANY_STRONG.is_match(normalized) {
        return vec![MarkupRun::plain(normalized)];
    }

    let mut runs = Vec::new();
    let mut last_end = 0;

    for caps in RE_STRONG_SPAN.captures_iter(normalized) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_plain(&mut runs, &normalized[last_end..whole.start()]);
        // Nested opening tags inside a span are malformed; keep their text only.
        let inner = strip_tags(inner.as_str());
        if !inner.is_empty() {
            runs.push(MarkupRun::bold(inner));
        }
        last_end = whole.end();
    }
    push_plain(&mut runs, &normalized[last_end..]);

    runs
}

/// Removes any `<strong>`/`<b>` tag, paired or not, keeping inner text.
pub fn strip_tags(text: &str) -> String {
    RE_STRAY_TAG.replace_all(text, "").into_owned()
}

fn push_plain(runs: &mut Vec<MarkupRun>, segment: &str) {
    if segment.is_empty() {
        return;
    }
    let cleaned = strip_tags(segment);
    if !cleaned.is_empty() {
        runs.push(MarkupRun::plain(cleaned));
    }
}

/// Concatenated run text, ignoring emphasis.
#[cfg(test)]
pub fn plain_text(runs: &[MarkupRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
