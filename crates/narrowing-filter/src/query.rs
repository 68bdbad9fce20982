//! Query parsing and matching

/// A parsed narrowing query
///
/// The raw text is trimmed, split on whitespace and lowercased. Terms that
/// start with the attribute marker are matched against an item's own terms;
/// all other terms are matched against the segments of the group path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    attribute_terms: Vec<String>,
    path_terms: Vec<String>,
}

impl Query {
    /// Parse raw query text
    pub fn parse(query: &str, attribute_marker: char) -> Self {
        let mut parsed = Self::default();
        for term in query.split_whitespace().map(str::to_lowercase) {
            match term.strip_prefix(attribute_marker) {
                Some(attribute) => parsed.attribute_terms.push(attribute.to_string()),
                None => parsed.path_terms.push(term),
            }
        }
        parsed
    }

    /// True when the query has no terms at all and everything is shown
    pub fn shows_all(&self) -> bool {
        self.attribute_terms.is_empty() && self.path_terms.is_empty()
    }

    pub fn attribute_terms(&self) -> &[String] {
        &self.attribute_terms
    }

    pub fn path_terms(&self) -> &[String] {
        &self.path_terms
    }

    /// Whether an item matches
    ///
    /// Both slices must already be lowercased. Every attribute term must be a
    /// substring of some item term, and every path term a substring of some
    /// path segment. An empty term list matches anything.
    pub fn matches<S: AsRef<str>>(&self, item_terms: &[S], path_segments: &[S]) -> bool {
        all_found(&self.attribute_terms, item_terms) && all_found(&self.path_terms, path_segments)
    }
}

fn all_found<S: AsRef<str>>(needles: &[String], haystack: &[S]) -> bool {
    needles.iter().all(|needle| {
        haystack
            .iter()
            .any(|candidate| candidate.as_ref().contains(needle.as_str()))
    })
}
