//! Framework-agnostic render output

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A minimal render tree: a tagged element with text, classes and children
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedItem {
    /// Element tag, e.g. `span`
    pub tag: String,

    /// Text content
    pub text: String,

    /// Class names
    pub classes: Vec<String>,

    /// Nested elements
    pub children: Vec<RenderedItem>,
}

/// One row of a rendered display tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedGroup<D> {
    /// Indentation depth
    pub level: usize,

    /// What to show for this row
    pub rendered_item: RenderedItem,

    /// The visible items for content rows, `None` for header rows
    pub node_data: Option<D>,
}

impl<D> RenderedGroup<D> {
    /// Returns true if this row is a group header
    pub fn is_header(&self) -> bool {
        self.node_data.is_none()
    }
}

/// Build a `span` element; `classes` is split on runs of spaces
pub fn span(text: impl Into<String>, classes: &str, children: Vec<RenderedItem>) -> RenderedItem {
    RenderedItem {
        tag: "span".to_string(),
        text: text.into(),
        classes: classes
            .split(' ')
            .filter(|class| !class.is_empty())
            .map(str::to_string)
            .collect(),
        children,
    }
}

/// Collect the items of every content row, in row order
///
/// This is what a submitted selection contains: everything currently shown.
pub fn selected_items<T: Clone>(rows: &[RenderedGroup<Vec<T>>]) -> Vec<T> {
    rows.iter()
        .filter_map(|row| row.node_data.as_ref())
        .flat_map(|items| items.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_splits_classes() {
        let item = span("hello", "label  header-2", vec![]);
        assert_eq!(item.tag, "span");
        assert_eq!(item.text, "hello");
        assert_eq!(item.classes, vec!["label", "header-2"]);
        assert!(item.children.is_empty());
    }

    #[test]
    fn test_selected_items_skip_headers() {
        let rows = vec![
            RenderedGroup {
                level: 0,
                rendered_item: span("> a (1/0)", "header-0", vec![]),
                node_data: None,
            },
            RenderedGroup {
                level: 1,
                rendered_item: span("x y", "label", vec![]),
                node_data: Some(vec!["x", "y"]),
            },
            RenderedGroup {
                level: 3,
                rendered_item: span("z", "label", vec![]),
                node_data: Some(vec!["z"]),
            },
        ];
        assert!(rows[0].is_header());
        assert!(!rows[1].is_header());
        assert_eq!(selected_items(&rows), vec!["x", "y", "z"]);
    }
}
