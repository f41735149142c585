//! Query highlighters and the process-wide colour switch.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::traits::Highlighter;

/// Returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHighlighter;

impl Highlighter for NullHighlighter {
    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

static SQL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(select|insert|update|delete|from|where|into|values|set|join|left|right|inner|outer|on|and|or|not|null|order|group|by|having|limit|offset|returning|create|alter|drop|table|index|begin|commit|rollback)\b",
    )
    .expect("Static regex is valid")
});

/// Wraps SQL keywords in ANSI bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordHighlighter;

impl Highlighter for KeywordHighlighter {
    fn highlight(&self, text: &str) -> String {
        SQL_KEYWORD
            .replace_all(text, "\x1b[1m$1\x1b[22m")
            .into_owned()
    }
}

/// Whether coloured output is allowed, given the `colors` option and the
/// process environment (`NO_COLOR`, `FORCE_COLOR=0`).
pub fn colors_enabled(colors_option: bool) -> bool {
    colors_enabled_with(colors_option, |name| std::env::var(name).ok())
}

pub(crate) fn colors_enabled_with(colors_option: bool, env: impl Fn(&str) -> Option<String>) -> bool {
    if !colors_option {
        return false;
    }
    if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    !matches!(env("FORCE_COLOR").as_deref(), Some("0") | Some("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_highlighter() {
        let out = KeywordHighlighter.highlight("select id from book");
        assert_eq!(out, "\x1b[1mselect\x1b[22m id \x1b[1mfrom\x1b[22m book");
        assert_eq!(NullHighlighter.highlight("select 1"), "select 1");
    }

    #[test]
    fn test_keywords_inside_identifiers_untouched() {
        let out = KeywordHighlighter.highlight("fromage");
        assert_eq!(out, "fromage");
    }

    #[test]
    fn test_colors_switch() {
        let none = |_: &str| None;
        assert!(colors_enabled_with(true, none));
        assert!(!colors_enabled_with(false, none));
        assert!(!colors_enabled_with(true, |k: &str| (k == "NO_COLOR").then(|| "1".to_string())));
        assert!(!colors_enabled_with(true, |k: &str| (k == "FORCE_COLOR").then(|| "0".to_string())));
        assert!(colors_enabled_with(true, |k: &str| (k == "FORCE_COLOR").then(|| "1".to_string())));
    }
}
