//! Artist name normalization.
//!
//! Encyclopedia article titles carry parenthetical disambiguation suffixes
//! ("Boston (band)") and bands whose names start with "The" are frequently
//! written with a lower-case article mid-sentence ("the Kinks"). Both forms
//! must be recognized when counting mentions, so this module derives them
//! once per name.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a parenthesized span together with any whitespace directly
/// before it, so stripping "(band)" from "Boston (band)" leaves "Boston"
/// rather than "Boston ".
static PAREN_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("parenthesis pattern is valid"));

/// The disambiguation-stripped and case-variant forms of an artist name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// The name with every parenthesized span removed and trimmed.
    pub clean: String,
    /// The clean name with a leading "The" lower-cased, when present.
    pub lower_first: Option<String>,
}

/// Normalize a canonical artist name.
///
/// Pure and total; applying it to its own `clean` output is a no-op.
pub fn normalize(name: &str) -> NormalizedName {
    let clean = PAREN_SPAN.replace_all(name, "").trim().to_string();
    let lower_first = lower_first_variant(&clean);
    NormalizedName { clean, lower_first }
}

/// The lower-cased-leading-article variant of a name, if one exists.
///
/// Returns `Some` only when the first whitespace-delimited token is exactly
/// `"The"`; the variant replaces it with `"the"` and leaves the rest of the
/// name untouched. Used both on clean names (plain-text counting) and on
/// raw names (hyperlink matching keeps the disambiguation suffix).
pub fn lower_first_variant(name: &str) -> Option<String> {
    let rest = name.strip_prefix("The")?;
    match rest.chars().next() {
        None => Some("the".to_string()),
        Some(c) if c.is_whitespace() => Some(format!("the{rest}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_disambiguation_suffix() {
        let n = normalize("Boston (band)");
        assert_eq!(n.clean, "Boston");
        assert_eq!(n.lower_first, None);
    }

    #[test]
    fn strips_every_parenthesized_span() {
        let n = normalize("Nirvana (band) (disambiguation)");
        assert_eq!(n.clean, "Nirvana");
    }

    #[test]
    fn leading_the_gets_variant() {
        let n = normalize("The Kinks");
        assert_eq!(n.clean, "The Kinks");
        assert_eq!(n.lower_first.as_deref(), Some("the Kinks"));
    }

    #[test]
    fn the_must_be_a_whole_token() {
        // "Them" and "Therapy?" start with T-h-e but carry no article.
        assert_eq!(normalize("Them").lower_first, None);
        assert_eq!(normalize("Therapy?").lower_first, None);
    }

    #[test]
    fn suffixed_the_band_keeps_suffix_in_raw_variant() {
        // Hyperlink matching uses the raw name, suffix included.
        assert_eq!(
            lower_first_variant("The Replacements (band)").as_deref(),
            Some("the Replacements (band)")
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for name in ["Boston (band)", "The Replacements (band)", "Queen", "The Who"] {
            let once = normalize(name);
            let twice = normalize(&once.clean);
            assert_eq!(twice.clean, once.clean);
        }
    }

    #[test]
    fn plain_name_passes_through() {
        let n = normalize("Queen");
        assert_eq!(n.clean, "Queen");
        assert_eq!(n.lower_first, None);
    }
}
