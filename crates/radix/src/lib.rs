//! Radix: a path-keyed trie
//!
//! A [`Radix`] maps [`RadixPath`]s to values. Every node along a path exists
//! as a branch point, and any node may additionally hold a value, so `a`
//! and `a.b.c` can both carry data.
//!
//! # Core Concepts
//!
//! - **Upsert**: compute a node's new value from its prior one
//! - **Traversal**: deterministic pre-order walk, children in creation order
//! - **Unfold**: flatten the trie into a list, skipping selected nodes
//! - **Fold-up**: bottom-up aggregation of child results into parents
//!
//! # Example
//!
//! ```
//! use radix::Radix;
//!
//! let mut tree = Radix::new();
//! tree.insert("a.b", 1);
//! tree.upsert("a.b", |prior| prior.unwrap_or(0) + 1);
//! tree.insert("a.c", 5);
//!
//! assert_eq!(tree.get("a.b"), Some(&2));
//! assert_eq!(tree.get("a"), None);
//!
//! let total = tree.fold_up(|_path, args| {
//!     args.node_data.copied().unwrap_or(0) + args.child_results.iter().sum::<i32>()
//! });
//! assert_eq!(total, 7);
//! ```

mod fold;
mod node;
mod path;
mod traverse;

use std::fmt;

pub use fold::FoldArgs;
pub use node::RadixNode;
pub use path::{RadixPath, DELIMITER};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{FoldArgs, Radix, RadixNode, RadixPath};
}

/// A trie keyed by path segments
///
/// The root node always exists and is addressed by the empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radix<T> {
    root: RadixNode<T>,
}

impl<T> Default for Radix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Radix<T> {
    /// Create an empty trie
    pub fn new() -> Self {
        Self {
            root: RadixNode::new(),
        }
    }

    /// The root node
    pub fn root(&self) -> &RadixNode<T> {
        &self.root
    }

    /// Insert or update the value at `path`
    ///
    /// Missing intermediate nodes are created empty. `updater` receives the
    /// prior value (or `None`) and returns the value to store. Existing
    /// children of the target node are left untouched.
    pub fn upsert<P, F>(&mut self, path: P, updater: F)
    where
        P: Into<RadixPath>,
        F: FnOnce(Option<T>) -> T,
    {
        let path = path.into();
        let node = self.root.descend_or_create(&path);
        let prior = node.value.take();
        node.value = Some(updater(prior));
    }

    /// Store `value` at `path`, returning the value it replaced
    pub fn insert<P>(&mut self, path: P, value: T) -> Option<T>
    where
        P: Into<RadixPath>,
    {
        let path = path.into();
        self.root.descend_or_create(&path).value.replace(value)
    }

    /// Get the value stored at `path`
    ///
    /// Returns `None` for paths that were never given a value, including
    /// nodes that only exist as branch points.
    pub fn get<P>(&self, path: P) -> Option<&T>
    where
        P: Into<RadixPath>,
    {
        self.node(path)?.value()
    }

    /// Get a mutable reference to the value stored at `path`
    pub fn get_mut<P>(&mut self, path: P) -> Option<&mut T>
    where
        P: Into<RadixPath>,
    {
        let path = path.into();
        self.root.descend_mut(&path)?.value_mut()
    }

    /// Returns true if a value is stored at `path`
    pub fn contains<P>(&self, path: P) -> bool
    where
        P: Into<RadixPath>,
    {
        self.get(path).is_some()
    }

    /// Get the node at `path`, whether or not it holds a value
    pub fn node<P>(&self, path: P) -> Option<&RadixNode<T>>
    where
        P: Into<RadixPath>,
    {
        let path = path.into();
        self.root.descend(&path)
    }

    /// Graft a whole trie at `path`
    ///
    /// The subtree's root value, if present, replaces the value at `path`.
    /// Children are merged recursively; children not already present are
    /// appended in the subtree's order.
    pub fn graft<P>(&mut self, path: P, subtree: Radix<T>)
    where
        P: Into<RadixPath>,
    {
        let path = path.into();
        self.root.descend_or_create(&path).merge(subtree.root);
    }

    /// Total number of nodes, including the root and branch points
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.traverse_depth_first(|_, _, _| count += 1);
        count
    }

    /// Number of nodes holding a value
    pub fn value_count(&self) -> usize {
        let mut count = 0;
        self.traverse_values(|_, _| count += 1);
        count
    }

    /// Returns true if the trie holds no values and no branches
    pub fn is_empty(&self) -> bool {
        self.root.value.is_none() && self.root.children.is_empty()
    }
}

/// Indented outline of the trie, one node per line
impl<T: fmt::Display> fmt::Display for Radix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.traverse_depth_first(|path, value, _| {
            let indent = "  ".repeat(path.depth().saturating_sub(1));
            let name = path.last_segment().unwrap_or("");
            let line = match value {
                Some(value) if path.is_root() => format!("= {}", value),
                Some(value) => format!("{}{} = {}", indent, name, value),
                None if path.is_root() => return,
                None => format!("{}{}", indent, name),
            };
            lines.push(line);
        });
        write!(f, "{}", lines.join("\n"))
    }
}
