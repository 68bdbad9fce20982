//! Prefix-compressed summaries of a vocabulary
//!
//! Strings are loaded character by character into a throwaway [`Radix`] and
//! folded back up. Shared prefixes are written once and the diverging tails
//! follow as separate words, so `page:0 page:1` reads `page:0 1`.

use log::trace;
use radix::{Radix, RadixPath};

use crate::render::{span, RenderedItem};

/// What one trie node contributes to its parent
struct Abbrev {
    /// The character on the edge into this node
    lead: String,
    /// Everything rendered below it
    rest: String,
}

/// Abbreviate `terms` into one space separated string
///
/// A term that ends at a node is written verbatim up to that node and hides
/// any longer term continuing through it. Where terms branch, the branches
/// are written in the order they were first seen. The resulting words are
/// deduplicated, first occurrence wins, and sorted longest first.
///
/// ```
/// use narrowing_filter::render_abbrev_string;
///
/// assert_eq!(render_abbrev_string(["page:0", "page:1", "page:11"]), "page:0 1");
/// ```
pub fn render_abbrev_string<I>(terms: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trie: Radix<usize> = Radix::new();
    for term in terms {
        let path = RadixPath::from_segments(term.as_ref().chars().map(String::from));
        if path.is_root() {
            continue;
        }
        trie.upsert(path, |count| count.unwrap_or(0) + 1);
    }

    let folded = trie.fold_subtrees(|path, args| {
        let lead = path.last_segment().unwrap_or_default().to_string();
        if args.node_data.is_some() && !path.is_root() {
            return Abbrev {
                lead,
                rest: String::new(),
            };
        }

        // Child aggregates arrive newest first
        let rest = args
            .child_results
            .iter()
            .rev()
            .map(|child| format!("{}{}", child.lead, child.rest))
            .collect::<Vec<_>>()
            .join(" ");
        Abbrev { lead, rest }
    });
    trace!("abbreviation before cleanup: {:?}", folded.rest);

    let mut words: Vec<&str> = Vec::new();
    for word in folded.rest.split_whitespace() {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    words.join(" ")
}

/// A `label` span summarizing every term of `items`
pub fn render_term_summary<T, F, I>(items: &[T], terms_of: F) -> RenderedItem
where
    F: FnMut(&T) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let terms: Vec<String> = items
        .iter()
        .flat_map(terms_of)
        .map(|term| term.as_ref().to_string())
        .collect();
    span(render_abbrev_string(&terms), "label", Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefix() {
        assert_eq!(render_abbrev_string(["page:0", "page:1", "page:11"]), "page:0 1");
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        assert_eq!(render_abbrev_string(none), "");
        assert_eq!(render_abbrev_string(["", "  "]), "");
    }

    #[test]
    fn test_single_term() {
        assert_eq!(render_abbrev_string(["abc"]), "abc");
        assert_eq!(render_abbrev_string(["abc", "abc"]), "abc");
    }

    #[test]
    fn test_branches_keep_creation_order() {
        assert_eq!(render_abbrev_string(["abc", "abd", "b"]), "abc d b");
    }

    #[test]
    fn test_repeated_tails_are_deduplicated() {
        assert_eq!(render_abbrev_string(["a1", "a2", "b1", "b2"]), "a1 b1 2");
    }

    #[test]
    fn test_term_summary() {
        let items = vec![vec!["x1", "x2"], vec!["x2", "y"]];
        let summary = render_term_summary(&items, |terms| terms.clone());
        assert_eq!(summary.text, "x1 2 y");
        assert_eq!(summary.classes, vec!["label"]);
    }
}
