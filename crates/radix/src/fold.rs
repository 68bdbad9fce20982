//! Bottom-up aggregation
//!
//! Both folds issue their `combine` calls in reverse pre-order, so a node is
//! always combined after every node in its subtree and leaves receive the
//! smallest indices. They differ in how finished aggregates are handed to
//! parents:
//!
//! - [`Radix::fold_up`] keeps finished aggregates in a queue and gives a node
//!   with `k` children the `k` oldest pending ones. For sibling leaves this
//!   is the reverse of their creation order.
//! - [`Radix::fold_subtrees`] gives each node exactly the aggregates of its
//!   own children, in reverse creation order.
//!
//! The two agree whenever no node has a child subtree deeper than one level
//! next to a later sibling; counts that must describe a node's own subtree
//! should use `fold_subtrees`.

use log::trace;

use crate::traverse::Visit;
use crate::{Radix, RadixPath};

/// Arguments handed to a fold's combine function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldArgs<N, U> {
    /// Position of this call in the overall call sequence (0-based)
    pub index: usize,
    /// The node's own value, if any
    pub node_data: Option<N>,
    /// Aggregates already computed for the node's children
    pub child_results: Vec<U>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// Oldest pending aggregates first
    Queue,
    /// Most recent aggregates, i.e. the node's own children
    Stack,
}

impl<T> Radix<T> {
    /// Fold the trie bottom-up, returning the root's aggregate
    ///
    /// `combine` is called once per node, strictly after every node below
    /// it. See the [module docs](self) for how child aggregates are paired
    /// with parents.
    ///
    /// # Example
    ///
    /// ```
    /// use radix::Radix;
    ///
    /// let mut tree = Radix::new();
    /// tree.insert("a", ());
    /// tree.insert("a.b.c", ());
    /// tree.insert("a.d.e", ());
    ///
    /// let folded = tree.fold_up(|path, args| {
    ///     let name = if path.is_root() { "root= ".to_string() } else { path.join("/") };
    ///     let data = if args.node_data.is_some() { "!" } else { "" };
    ///     let children = if args.child_results.is_empty() {
    ///         String::new()
    ///     } else {
    ///         format!("({})", args.child_results.join(", "))
    ///     };
    ///     format!("{}#{}{}{}", name, args.index, data, children)
    /// });
    /// assert_eq!(folded, "root= #5(a#4!(a/b/c#2!, a/b#3(a/d#1(a/d/e#0!))))");
    /// ```
    pub fn fold_up<U, F>(&self, combine: F) -> U
    where
        F: FnMut(&RadixPath, FoldArgs<&T, U>) -> U,
    {
        let (root, descendants) = self.visits();
        fold_visits(root, descendants, Pairing::Queue, combine)
    }

    /// [`fold_up`](Self::fold_up) with mutable access to node values
    pub fn fold_up_mut<U, F>(&mut self, combine: F) -> U
    where
        F: FnMut(&RadixPath, FoldArgs<&mut T, U>) -> U,
    {
        let (root, descendants) = self.visits_mut();
        fold_visits(root, descendants, Pairing::Queue, combine)
    }

    /// Fold the trie bottom-up, each node receiving exactly its own
    /// children's aggregates (in reverse creation order)
    pub fn fold_subtrees<U, F>(&self, combine: F) -> U
    where
        F: FnMut(&RadixPath, FoldArgs<&T, U>) -> U,
    {
        let (root, descendants) = self.visits();
        fold_visits(root, descendants, Pairing::Stack, combine)
    }

    /// [`fold_subtrees`](Self::fold_subtrees) with mutable access to node values
    pub fn fold_subtrees_mut<U, F>(&mut self, combine: F) -> U
    where
        F: FnMut(&RadixPath, FoldArgs<&mut T, U>) -> U,
    {
        let (root, descendants) = self.visits_mut();
        fold_visits(root, descendants, Pairing::Stack, combine)
    }
}

fn fold_visits<N, U, F>(
    root: Visit<N>,
    mut descendants: Vec<Visit<N>>,
    pairing: Pairing,
    mut combine: F,
) -> U
where
    F: FnMut(&RadixPath, FoldArgs<N, U>) -> U,
{
    trace!(
        "folding {} nodes ({:?} pairing)",
        descendants.len() + 1,
        pairing
    );

    let mut pending: Vec<U> = Vec::with_capacity(descendants.len());
    let mut index = 0;

    while let Some(visit) = descendants.pop() {
        let child_results = take_children(&mut pending, visit.child_count, pairing);
        let result = combine(
            &visit.path,
            FoldArgs {
                index,
                node_data: visit.node_data,
                child_results,
            },
        );
        pending.push(result);
        index += 1;
    }

    let child_results = take_children(&mut pending, root.child_count, pairing);
    combine(
        &root.path,
        FoldArgs {
            index,
            node_data: root.node_data,
            child_results,
        },
    )
}

fn take_children<U>(pending: &mut Vec<U>, child_count: usize, pairing: Pairing) -> Vec<U> {
    let child_count = child_count.min(pending.len());
    match pairing {
        Pairing::Queue => pending.drain(..child_count).collect(),
        Pairing::Stack => pending.split_off(pending.len() - child_count),
    }
}
