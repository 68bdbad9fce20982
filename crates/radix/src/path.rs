//! Normalized paths into a [`Radix`](crate::Radix)
//!
//! A path is an ordered list of segments. It may be written as a single
//! `.`-delimited string or given as an explicit list of segments. Either
//! way every segment is trimmed and empty segments are dropped, so
//! `" a . .b "` and `["a", "", "b"]` both address `a.b`.

use derive_more::Deref;
use smallvec::SmallVec;
use std::fmt;

/// Delimiter used when a path is written as a single string
pub const DELIMITER: char = '.';

/// A normalized, possibly empty, sequence of path segments
///
/// The empty path addresses the root node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref)]
pub struct RadixPath(SmallVec<[String; 4]>);

impl RadixPath {
    /// The empty path, addressing the root node
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `.`-delimited path string
    pub fn parse(path: &str) -> Self {
        Self::from_segments(path.split(DELIMITER))
    }

    /// Build a path from explicit segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            segments
                .into_iter()
                .filter_map(|segment| {
                    let segment = segment.as_ref().trim();
                    (!segment.is_empty()).then(|| segment.to_string())
                })
                .collect(),
        )
    }

    /// Returns true for the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments (root = 0)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The segments of this path
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment, `None` for the root
    pub fn last_segment(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The path of a direct child of this path
    pub fn child(&self, segment: impl AsRef<str>) -> Self {
        let mut path = self.clone();
        path.0.extend(Self::from_segments([segment]).0);
        path
    }

    /// Join the segments with an arbitrary separator
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub(crate) fn push(&mut self, segment: String) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for RadixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(&DELIMITER.to_string()))
    }
}

impl From<&str> for RadixPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for RadixPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for RadixPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&RadixPath> for RadixPath {
    fn from(path: &RadixPath) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for RadixPath {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<Vec<&str>> for RadixPath {
    fn from(segments: Vec<&str>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&[String]> for RadixPath {
    fn from(segments: &[String]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&[&str]> for RadixPath {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments)
    }
}

impl<const N: usize> From<[&str; N]> for RadixPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}
