//! Narrowing Filter Library
//!
//! An in-memory faceted filter over items grouped by path, built on the
//! [`radix`] trie. A query narrows the visible items; the survivors are
//! rendered as a pruned, indented outline of framework-agnostic rows.
//!
//! # Core Concepts
//!
//! - **DisplayTree**: items grouped by path, one visibility flag per item
//! - **Query**: whitespace separated terms; `:term` matches item terms,
//!   plain terms match the group path
//! - **Rendering**: header and content rows as [`RenderedGroup`]s
//! - **Abbreviation**: a prefix-compressed summary of a set of terms
//!
//! # Example
//!
//! ```
//! use narrowing_filter::{render_term_summary, DisplayTree};
//!
//! let labels = vec![
//!     ("page.1", "page:1"),
//!     ("page.1", "page:11"),
//!     ("page.2", "page:2"),
//! ];
//! let mut tree = DisplayTree::new(labels, |(path, _)| *path);
//! tree.query("1", |(_, term)| [*term]);
//!
//! let rows = tree.render(|items| render_term_summary(items, |(_, term)| [*term]));
//! let texts: Vec<_> = rows.iter().map(|row| row.rendered_item.text.as_str()).collect();
//! assert_eq!(texts, vec!["> page (0/2)", "> 1 (2/0)", "page:1"]);
//! ```

mod abbrev;
mod display_tree;
mod options;
mod query;
mod render;
mod visible;

pub use abbrev::{render_abbrev_string, render_term_summary};
pub use display_tree::{DataNode, DisplayTree, NodeKind, TreeNode};
pub use options::FilterOptions;
pub use query::Query;
pub use render::{selected_items, span, RenderedGroup, RenderedItem};
pub use visible::VisibleSet;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        render_term_summary, span, DisplayTree, FilterOptions, RenderedGroup, RenderedItem,
    };
}
