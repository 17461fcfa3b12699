//! Query resolution against the knowledge base.
//!
//! Maps free-form user text (e.g. "Summarize AS 10" or "explain as 2 with
//! example") to a [`StandardEntry`], or to a fixed not-found outcome.
//! Resolution is a pure scan over the static table: no I/O, deterministic,
//! idempotent for identical input.

use crate::kb::{KnowledgeBase, StandardEntry};

/// Warning shown when no known code appears in the query.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, couldn't find a summary for that AS.";

/// Prompt shown by the interactive surface when nothing was submitted.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query or select an AS.";

/// Outcome of resolving a query or selection.
///
/// On a hit, `code` is the canonical identifier and `summary`/`examples`
/// are the stored reference material. On a miss, `code` is `None`,
/// `summary` carries [`NOT_FOUND_MESSAGE`], and `examples` is empty.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub code: Option<&'static str>,
    pub summary: &'static str,
    pub examples: &'static [&'static str],
}

impl Resolution {
    pub fn found(entry: &'static StandardEntry) -> Self {
        Resolution {
            code: Some(entry.code),
            summary: entry.summary,
            examples: entry.examples,
        }
    }

    pub fn not_found() -> Self {
        Resolution {
            code: None,
            summary: NOT_FOUND_MESSAGE,
            examples: &[],
        }
    }

    pub fn is_found(&self) -> bool {
        self.code.is_some()
    }
}

/// Resolve free-form text to a standard.
///
/// Scans the table in insertion order and returns the first entry whose
/// code occurs in the query under [`contains_code`]. The boundary rules in
/// that test make prefix-overlapping codes unambiguous ("AS 1" never
/// claims a query about "AS 10"), so the scan order is a stable default
/// rather than a load-bearing tie-break.
pub fn resolve(query: &str) -> Resolution {
    let kb = KnowledgeBase::global();
    for entry in kb.entries() {
        if contains_code(query, entry.code) {
            return Resolution::found(entry);
        }
    }
    Resolution::not_found()
}

/// Resolve an explicit selection (a code chosen from the enumerated list).
///
/// Direct key lookup; succeeds for every code in the table.
pub fn resolve_selection(code: &str) -> Resolution {
    match KnowledgeBase::global().get(code) {
        Some(entry) => Resolution::found(entry),
        None => Resolution::not_found(),
    }
}

/// Case-insensitive containment test with boundary rules.
///
/// An occurrence of `code` inside `text` counts only when:
/// - the preceding character is absent or non-alphanumeric, and
/// - the following character is absent or not an ASCII digit.
///
/// The digit rule keeps "AS 1" from matching inside "AS 10"/"AS 12" and
/// "AS 9" from matching inside "AS 99"; the leading rule keeps codes from
/// matching inside longer words.
fn contains_code(text: &str, code: &str) -> bool {
    let haystack = text.to_lowercase();
    let needle = code.to_lowercase();
    if needle.is_empty() {
        return false;
    }

    let mut search_from = 0;
    while let Some(rel) = haystack[search_from..].find(&needle) {
        let start = search_from + rel;
        let end = start + needle.len();

        let ok_before = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let ok_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_digit());

        if ok_before && ok_after {
            return true;
        }
        search_from = start + 1;
    }
    false
}

/// CLI entry point for `asref resolve` — prints the outcome to stdout.
pub fn run_resolve(query: &str) -> anyhow::Result<()> {
    print_resolution(&resolve(query));
    Ok(())
}

/// CLI entry point for `asref show` — explicit-selection lookup.
///
/// Exits non-zero for unknown codes so scripts can tell a miss apart
/// from a rendered summary.
pub fn run_show(code: &str) -> anyhow::Result<()> {
    let resolution = resolve_selection(code);
    if !resolution.is_found() {
        eprintln!("{}", NOT_FOUND_MESSAGE);
        std::process::exit(1);
    }
    print_resolution(&resolution);
    Ok(())
}

/// CLI entry point for `asref list` — enumerates all codes with titles.
pub fn run_list() -> anyhow::Result<()> {
    let kb = KnowledgeBase::global();
    println!("{} standards:", kb.len());
    for entry in kb.entries() {
        // First summary line is "<code>: <title>".
        let title = entry.summary.lines().next().unwrap_or(entry.code);
        println!("  {}", title);
    }
    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    match resolution.code {
        Some(code) => {
            println!("--- {} ---", code);
            println!("{}", resolution.summary);
            if !resolution.examples.is_empty() {
                println!();
                println!("Real-life Examples:");
                for (i, example) in resolution.examples.iter().enumerate() {
                    println!("  {}. {}", i + 1, example);
                }
            }
        }
        None => println!("{}", resolution.summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::STANDARDS;

    #[test]
    fn test_every_code_resolves_plain_and_wrapped() {
        for entry in STANDARDS {
            let plain = resolve(entry.code);
            assert_eq!(plain.code, Some(entry.code));
            assert_eq!(plain.summary, entry.summary);
            assert_eq!(plain.examples, entry.examples);

            let wrapped = resolve(&format!("Summarize {}", entry.code));
            assert_eq!(wrapped.code, Some(entry.code), "wrapped {}", entry.code);
        }
    }

    #[test]
    fn test_empty_and_garbage_are_not_found() {
        for query in ["", "xyz"] {
            let r = resolve(query);
            assert!(r.code.is_none());
            assert_eq!(r.summary, NOT_FOUND_MESSAGE);
            assert!(r.examples.is_empty());
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lower = resolve("as 10");
        let upper = resolve("AS 10");
        assert_eq!(lower.code, Some("AS 10"));
        assert_eq!(lower.code, upper.code);
        assert_eq!(lower.summary, upper.summary);
    }

    #[test]
    fn test_substring_containment_with_surrounding_words() {
        let r = resolve("please explain AS 2 fully");
        assert_eq!(r.code, Some("AS 2"));
    }

    #[test]
    fn test_prefix_code_does_not_claim_longer_code() {
        // "AS 1" precedes "AS 12" in the table; the boundary rule must
        // keep it from winning here.
        let r = resolve("Explain AS 12 with example");
        assert_eq!(r.code, Some("AS 12"));
        assert!(!r.examples.is_empty());
        assert!(r.summary.starts_with("AS 12:"));
    }

    #[test]
    fn test_unknown_numbered_code_is_not_found() {
        // "AS 9" is in the table but must not match inside "AS 99".
        let r = resolve("AS 99");
        assert!(r.code.is_none());
        assert_eq!(r.summary, NOT_FOUND_MESSAGE);
        assert!(r.examples.is_empty());
    }

    #[test]
    fn test_code_embedded_in_word_is_rejected() {
        let r = resolve("bias 1 in estimates");
        assert!(r.code.is_none());
    }

    #[test]
    fn test_selection_never_misses_enumerated_codes() {
        for entry in STANDARDS {
            let r = resolve_selection(entry.code);
            assert_eq!(r.code, Some(entry.code));
        }
    }

    #[test]
    fn test_selection_unknown_code() {
        let r = resolve_selection("AS 99");
        assert!(!r.is_found());
        assert_eq!(r.summary, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve("Explain AS 12 with example");
        let b = resolve("Explain AS 12 with example");
        assert_eq!(a.code, b.code);
        assert_eq!(a.summary, b.summary);
    }
}
