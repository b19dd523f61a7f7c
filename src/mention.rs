//! Mention detection: scan one artist's article text for references to
//! every other artist in the roster.
//!
//! Detection is gated on hyperlink evidence. Article markup links an artist
//! as `[[Boston (band)]]` or `[[Boston (band)|Boston]]`, using the raw
//! article title. A candidate whose name never appears in link syntax is
//! assumed to refer to something else entirely (a city, a common word) and
//! contributes nothing. Once the gate passes, every occurrence of the
//! disambiguation-stripped name is counted as a mention.
//!
//! Known imprecision, kept on purpose: after the gate passes for a common
//! name, unlinked occurrences that actually refer to something else are
//! still counted. Articles link only the first reference to a page, so
//! there is no cheap way to tell the rest apart.

use crate::matrix::MentionEdge;
use crate::normalize::{lower_first_variant, normalize};

/// One roster entry with its matching patterns precomputed.
///
/// The link patterns use the raw name (suffix included, since links target
/// the article title); the plain patterns use the clean name. Preparing
/// these once per build keeps the per-document loop down to substring
/// scans.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Canonical artist name, exactly as in the roster.
    pub name: String,
    link_exact: String,
    link_piped: String,
    link_exact_lower: Option<String>,
    link_piped_lower: Option<String>,
    clean: String,
    clean_lower: Option<String>,
}

impl Candidate {
    /// Build the patterns for one roster name.
    pub fn new(name: &str) -> Self {
        let normalized = normalize(name);
        let raw_lower = lower_first_variant(name);
        Self {
            name: name.to_string(),
            link_exact: format!("[[{name}]]"),
            link_piped: format!("[[{name}|"),
            link_exact_lower: raw_lower.as_deref().map(|v| format!("[[{v}]]")),
            link_piped_lower: raw_lower.as_deref().map(|v| format!("[[{v}|")),
            clean: normalized.clean,
            clean_lower: normalized.lower_first,
        }
    }

    /// Number of hyperlink-syntax occurrences of this candidate in `text`.
    fn hyperlink_evidence(&self, text: &str) -> u64 {
        let mut n = count_occurrences(text, &self.link_exact)
            + count_occurrences(text, &self.link_piped);
        if let Some(exact) = &self.link_exact_lower {
            n += count_occurrences(text, exact);
        }
        if let Some(piped) = &self.link_piped_lower {
            n += count_occurrences(text, piped);
        }
        n
    }

    /// Total occurrences of the clean name (both case variants) in `text`.
    fn full_count(&self, text: &str) -> u64 {
        let mut n = count_occurrences(text, &self.clean);
        if let Some(lower) = &self.clean_lower {
            n += count_occurrences(text, lower);
        }
        n
    }
}

/// Prepare the full roster for scanning. Input order is preserved.
pub fn prepare_roster<I, S>(names: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|n| Candidate::new(n.as_ref())).collect()
}

/// Count the mentions of every roster candidate in one article text.
///
/// Returns one edge per candidate with nonzero count, in roster order,
/// never including `source_name` itself. This is the O(|roster| × |text|)
/// hot loop the matrix builder parallelizes over documents.
pub fn count_mentions(source_name: &str, text: &str, roster: &[Candidate]) -> Vec<MentionEdge> {
    let mut edges = Vec::new();
    for candidate in roster {
        if candidate.name == source_name {
            continue;
        }
        if candidate.hyperlink_evidence(text) == 0 {
            continue;
        }
        let count = candidate.full_count(text);
        if count > 0 {
            edges.push(MentionEdge {
                target: candidate.name.clone(),
                count,
            });
        }
    }
    edges
}

/// Non-overlapping substring occurrence count.
fn count_occurrences(text: &str, pattern: &str) -> u64 {
    if pattern.is_empty() {
        return 0;
    }
    text.matches(pattern).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Candidate> {
        prepare_roster(names.iter().copied())
    }

    fn counts(source: &str, text: &str, names: &[&str]) -> Vec<(String, u64)> {
        count_mentions(source, text, &roster(names))
            .into_iter()
            .map(|e| (e.target, e.count))
            .collect()
    }

    #[test]
    fn unlinked_name_is_never_counted() {
        // "Boston" appears three times but never in link syntax, so the
        // occurrences are assumed to refer to the city.
        let text = "Boston was great. They toured Boston and loved Boston.";
        assert!(counts("Queen", text, &["Boston (band)"]).is_empty());
    }

    #[test]
    fn gate_passes_and_counts_all_clean_occurrences() {
        // One linked plus two unlinked occurrences of "Boston".
        let text = "[[Boston (band)]] Boston played in Boston.";
        assert_eq!(
            counts("Queen", text, &["Boston (band)"]),
            vec![("Boston (band)".to_string(), 3)]
        );
    }

    #[test]
    fn piped_link_counts_as_evidence() {
        let text = "[[Boston (band)|Boston]] rocked.";
        assert_eq!(
            counts("Queen", text, &["Boston (band)"]),
            vec![("Boston (band)".to_string(), 1)]
        );
    }

    #[test]
    fn lowercase_the_variant_gates_and_counts() {
        let text = "[[the Kinks]] the Kinks are great.";
        assert_eq!(
            counts("Queen", text, &["The Kinks"]),
            vec![("The Kinks".to_string(), 2)]
        );
    }

    #[test]
    fn both_case_variants_are_summed() {
        let text = "[[The Kinks]] influenced them; the Kinks again, and The Kinks once more.";
        // "The Kinks" twice (link text included) + "the Kinks" once.
        assert_eq!(
            counts("Queen", text, &["The Kinks"]),
            vec![("The Kinks".to_string(), 3)]
        );
    }

    #[test]
    fn source_never_mentions_itself() {
        let text = "[[Queen]] Queen Queen";
        assert!(counts("Queen", text, &["Queen"]).is_empty());
    }

    #[test]
    fn results_follow_roster_order() {
        let text = "[[Zebra]] Zebra and [[ABBA]] ABBA ABBA";
        let got = counts("Queen", text, &["ABBA", "Zebra"]);
        assert_eq!(
            got,
            vec![("ABBA".to_string(), 2), ("Zebra".to_string(), 1)]
        );
    }

    #[test]
    fn link_evidence_requires_closing_syntax() {
        // "[[Boston (band) tour]]" links a different page; neither the
        // exact nor the piped pattern matches.
        let text = "[[Boston (band) tour]] Boston";
        assert!(counts("Queen", text, &["Boston (band)"]).is_empty());
    }
}
