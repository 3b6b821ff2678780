// Inline rich-text handling for free-text resume fields.
// Every summary, skill list and experience bullet passes through here before
// it reaches the document tree.

pub mod normalize;
pub mod runs;

pub use normalize::normalize;
pub use runs::{split, MarkupRun};

/// `split(normalize(raw))`, the full pipeline for one free-text field.
pub fn parse_runs(raw: &str) -> Vec<MarkupRun> {
    split(&normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runs_mixed_notations() {
        let runs = parse_runs("**Rust**, <b>Go</b> &amp; &lt;strong&gt;Zig&lt;/strong&gt;");
        let bold: Vec<&str> = runs
            .iter()
            .filter(|r| r.emphasis)
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(bold, vec!["Rust", "Go", "Zig"]);
        assert_eq!(runs::plain_text(&runs), "Rust, Go & Zig");
    }

    #[test]
    fn test_parse_runs_never_panics_on_garbage() {
        for raw in ["<", "</", "<strong", "**", "****", "&amp;", "<b><b><b>", "</strong></strong>"] {
            let runs = parse_runs(raw);
            assert!(runs.iter().all(|r| {
                let lower = r.text.to_lowercase();
                !lower.contains("<strong>") && !lower.contains("</strong>")
            }));
        }
    }
}
