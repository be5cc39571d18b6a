//! Stable tool ids derived from display names.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Derive a URL-safe id from a tool name.
///
/// ```
/// use toolcompare::catalog::slugify;
///
/// assert_eq!(slugify("ChatGPT Plus!"), "chatgpt-plus");
/// assert_eq!(slugify("  Jasper -- AI "), "jasper-ai");
/// ```
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let stripped = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// First candidate that is present and not blank, trimmed.
pub(crate) fn first_non_blank<'a>(
    candidates: impl IntoIterator<Item = Option<&'a String>>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("Copy.ai"), "copyai");
        assert_eq!(slugify("Notion   AI"), "notion-ai");
        assert_eq!(slugify("Midjourney (v6)"), "midjourney-v6");
        assert_eq!(slugify("--Leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn names_without_usable_characters_become_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn first_non_blank_skips_missing_and_blank() {
        let blank = "  ".to_string();
        let name = " Claude ".to_string();
        assert_eq!(
            first_non_blank([None, Some(&blank), Some(&name)]),
            Some("Claude")
        );
        assert_eq!(first_non_blank([None, Some(&blank)]), None);
    }
}
