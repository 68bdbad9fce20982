//! Configuration options for a display tree.
//!
//! This module provides the `FilterOptions` struct which controls how
//! queries are parsed and how the rendered outline is labelled and
//! indented.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration options for a [`DisplayTree`](crate::DisplayTree).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterOptions {
    /// Prefix marking a query term as an attribute term (matched against
    /// item terms rather than the group path).
    pub attribute_marker: char,

    /// Indentation levels added per path segment in the rendered outline.
    pub indent_step: usize,

    /// Text placed before the segment name in header rows.
    pub header_marker: String,

    /// Class prefix for header rows; the row's level is appended.
    pub header_class_prefix: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            attribute_marker: ':',
            indent_step: 2,
            header_marker: "> ".to_string(),
            header_class_prefix: "header-".to_string(),
        }
    }
}

impl FilterOptions {
    /// Create new filter options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute-term marker.
    pub fn attribute_marker(mut self, marker: char) -> Self {
        self.attribute_marker = marker;
        self
    }

    /// Set the indentation step per path segment.
    pub fn indent_step(mut self, step: usize) -> Self {
        self.indent_step = step;
        self
    }

    /// Set the header row marker.
    pub fn header_marker(mut self, marker: impl Into<String>) -> Self {
        self.header_marker = marker.into();
        self
    }

    /// Set the header row class prefix.
    pub fn header_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_class_prefix = prefix.into();
        self
    }
}
