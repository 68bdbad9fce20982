//! Display tree: a narrowing filter over hierarchically grouped items
//!
//! Items are grouped by a caller-supplied path into a [`Radix`]. Each group
//! carries one visibility flag per item. A query recomputes every flag and
//! every node's count of visible descendants in a single bottom-up pass;
//! rendering then walks the tree top-down and emits a pruned outline.

use std::convert::Infallible;

use anyhow::{anyhow, bail, Context, Result};
use derive_more::Display;
use log::{debug, trace};
use radix::{Radix, RadixPath};

use crate::options::FilterOptions;
use crate::query::Query;
use crate::render::{span, RenderedGroup, RenderedItem};
use crate::visible::VisibleSet;

/// The kind of a display tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A pure branch point with no items
    #[display(fmt = "EmptyNode")]
    Empty,
    /// A group of items
    #[display(fmt = "DataNode")]
    Data,
}

/// A group of items sharing one path, with per-item visibility
#[derive(Debug, Clone)]
pub struct DataNode<T> {
    items: Vec<T>,
    visible: VisibleSet,
    descendant_visible: usize,
}

impl<T> DataNode<T> {
    fn new(item: T) -> Self {
        Self {
            items: vec![item],
            visible: VisibleSet::default(),
            descendant_visible: 0,
        }
    }

    /// Size the visibility flags to the final item count, all visible
    fn finalize(&mut self) {
        self.visible = VisibleSet::new(self.items.len(), true);
    }

    /// All items of the group, in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The visibility flags, one per item
    pub fn visibility(&self) -> &VisibleSet {
        &self.visible
    }

    /// Items currently visible, in insertion order
    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.filter(&self.items)
    }
}

/// Payload of every display tree node
#[derive(Debug, Clone)]
pub enum TreeNode<T> {
    /// A pure branch point
    Empty { descendant_visible: usize },
    /// A group of items
    Data(DataNode<T>),
}

impl<T> TreeNode<T> {
    fn empty() -> Self {
        TreeNode::Empty {
            descendant_visible: 0,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::Empty { .. } => NodeKind::Empty,
            TreeNode::Data(_) => NodeKind::Data,
        }
    }

    /// The item group, if this is a data node
    pub fn as_data(&self) -> Option<&DataNode<T>> {
        match self {
            TreeNode::Data(group) => Some(group),
            TreeNode::Empty { .. } => None,
        }
    }

    /// Visible items held directly by this node
    pub fn own_visible(&self) -> usize {
        match self {
            TreeNode::Empty { .. } => 0,
            TreeNode::Data(group) => group.visible.count(),
        }
    }

    /// Visible items held anywhere below this node
    pub fn descendant_visible(&self) -> usize {
        match self {
            TreeNode::Empty { descendant_visible } => *descendant_visible,
            TreeNode::Data(group) => group.descendant_visible,
        }
    }

    pub fn total_visible(&self) -> usize {
        self.own_visible() + self.descendant_visible()
    }

    fn set_descendant_visible(&mut self, count: usize) {
        match self {
            TreeNode::Empty { descendant_visible } => *descendant_visible = count,
            TreeNode::Data(group) => group.descendant_visible = count,
        }
    }
}

/// A narrowing filter over items grouped by path
///
/// Construction returns a fully finalized tree with every item visible.
/// Each call to [`query`](Self::query) recomputes visibility for the whole
/// tree; [`render`](Self::render) produces the outline for the last query.
///
/// # Example
///
/// ```
/// use narrowing_filter::{span, DisplayTree};
///
/// let items = vec![("doc.intro", "draft"), ("doc.body", "final"), ("notes", "draft")];
/// let mut tree = DisplayTree::new(items, |(path, _)| *path);
///
/// let visible = tree.query(":final", |(_, tag)| vec![*tag]);
/// assert_eq!(visible, 1);
///
/// let rows = tree.render(|items| span(format!("{} items", items.len()), "label", vec![]));
/// let texts: Vec<_> = rows.iter().map(|row| row.rendered_item.text.as_str()).collect();
/// assert_eq!(texts, vec!["> doc (0/1)", "> body (1/0)", "1 items"]);
/// ```
#[derive(Debug, Clone)]
pub struct DisplayTree<T> {
    tree: Radix<TreeNode<T>>,
    options: FilterOptions,
    item_count: usize,
}

impl<T> DisplayTree<T> {
    /// Group `items` by `path_of` using default options
    pub fn new<I, F, P>(items: I, path_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> P,
        P: Into<RadixPath>,
    {
        Self::with_options(items, path_of, FilterOptions::default())
    }

    /// Group `items` by `path_of`
    ///
    /// Items sharing a path form one group, in input order. Every node of
    /// the resulting tree is finalized: branch points become empty nodes and
    /// every group starts out fully visible.
    pub fn with_options<I, F, P>(items: I, mut path_of: F, options: FilterOptions) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> P,
        P: Into<RadixPath>,
    {
        let mut tree = Radix::new();
        let mut item_count = 0;

        for item in items {
            let path: RadixPath = path_of(&item).into();
            trace!("grouping item {} under `{}`", item_count, path);
            tree.upsert(path, |prior| match prior {
                Some(TreeNode::Data(mut group)) => {
                    group.items.push(item);
                    TreeNode::Data(group)
                }
                _ => TreeNode::Data(DataNode::new(item)),
            });
            item_count += 1;
        }

        let mut group_count = 0;
        tree.traverse_depth_first_mut(|_, slot, _| {
            if slot.is_none() {
                *slot = Some(TreeNode::empty());
            }
            if let Some(TreeNode::Data(group)) = slot {
                group.finalize();
                group_count += 1;
            }
        });

        debug!(
            "built display tree: {} items in {} groups",
            item_count, group_count
        );

        let mut display = Self {
            tree,
            options,
            item_count,
        };
        display.apply(&Query::default(), |_| std::iter::empty::<&str>());
        display
    }

    /// The options this tree was built with
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The underlying trie
    pub fn radix(&self) -> &Radix<TreeNode<T>> {
        &self.tree
    }

    /// Total number of items
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of visible items as of the last query
    pub fn total_visible(&self) -> usize {
        self.tree
            .root()
            .value()
            .map(TreeNode::total_visible)
            .unwrap_or(0)
    }

    /// The node at `path`, whether a group or a branch point
    pub fn node<P: Into<RadixPath>>(&self, path: P) -> Option<&TreeNode<T>> {
        self.tree.get(path)
    }

    /// The item group at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if nothing exists at `path` or if the node there is
    /// only a branch point.
    pub fn group<P: Into<RadixPath>>(&self, path: P) -> Result<&DataNode<T>> {
        let path = path.into();
        match self.tree.get(&path) {
            Some(TreeNode::Data(group)) => Ok(group),
            Some(TreeNode::Empty { .. }) => Err(anyhow!("`{}` is a branch point with no items", path)),
            None => bail!("no group at `{}`", path),
        }
    }

    /// The currently visible items of the group at `path`
    pub fn visible_items<P: Into<RadixPath>>(&self, path: P) -> Result<Vec<&T>> {
        let path = path.into();
        let group = self
            .group(&path)
            .with_context(|| format!("looking up visible items at `{}`", path))?;
        Ok(group.visible_items().collect())
    }

    /// Recompute visibility for `query`, returning the number of visible items
    ///
    /// `terms_of` yields an item's searchable terms. An empty query makes
    /// every item visible again.
    pub fn query<F, I>(&mut self, query: &str, terms_of: F) -> usize
    where
        F: FnMut(&T) -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let query = Query::parse(query, self.options.attribute_marker);
        debug!(
            "query: {} attribute terms {:?}, {} path terms {:?}",
            query.attribute_terms().len(),
            query.attribute_terms(),
            query.path_terms().len(),
            query.path_terms()
        );

        let visible = self.apply(&query, terms_of);
        debug!("query left {} of {} items visible", visible, self.item_count);
        visible
    }

    /// Recompute every visibility flag and count in one bottom-up pass
    fn apply<F, I>(&mut self, query: &Query, mut terms_of: F) -> usize
    where
        F: FnMut(&T) -> I,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.tree.fold_subtrees_mut(|path, args| {
            let descendant_visible: usize = args.child_results.iter().sum();
            let Some(node) = args.node_data else {
                return descendant_visible;
            };
            node.set_descendant_visible(descendant_visible);

            if let TreeNode::Data(group) = node {
                if query.shows_all() {
                    group.visible.set_all(true);
                } else {
                    let path_segments: Vec<String> =
                        path.iter().map(|segment| segment.to_lowercase()).collect();
                    for (pos, item) in group.items.iter().enumerate() {
                        let item_terms: Vec<String> = terms_of(item)
                            .into_iter()
                            .map(|term| term.as_ref().to_lowercase())
                            .collect();
                        group
                            .visible
                            .set(pos, query.matches(&item_terms, &path_segments));
                    }
                }
            }

            node.total_visible()
        })
    }

    /// Render the outline for the last query
    ///
    /// The root is never rendered, and neither is any node with nothing
    /// visible at or below it. Every other node gets a header row; groups
    /// with visible items also get a content row holding
    /// `render_group(visible items)`.
    pub fn render<F>(&self, mut render_group: F) -> Vec<RenderedGroup<Vec<T>>>
    where
        T: Clone,
        F: FnMut(&[T]) -> RenderedItem,
    {
        match self.render_with(|_, items| Ok::<_, Infallible>(render_group(items))) {
            Ok(rows) => rows,
            Err(never) => match never {},
        }
    }

    /// [`render`](Self::render) with a fallible group renderer
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `render_group`, with the group path
    /// attached as context.
    pub fn try_render<F>(&self, mut render_group: F) -> Result<Vec<RenderedGroup<Vec<T>>>>
    where
        T: Clone,
        F: FnMut(&[T]) -> Result<RenderedItem>,
    {
        self.render_with(|path, items| {
            render_group(items).with_context(|| format!("rendering group `{}`", path))
        })
    }

    fn render_with<F, E>(&self, mut render_group: F) -> Result<Vec<RenderedGroup<Vec<T>>>, E>
    where
        T: Clone,
        F: FnMut(&RadixPath, &[T]) -> Result<RenderedItem, E>,
    {
        let options = &self.options;
        let rows: Vec<Vec<RenderedGroup<Vec<T>>>> = self
            .tree
            .unfold(|path, node| {
                let node = node?;
                if path.is_root() || node.total_visible() == 0 {
                    return None;
                }

                let level = (path.depth() - 1) * options.indent_step;
                let header = span(
                    format!(
                        "{}{} ({}/{})",
                        options.header_marker,
                        path.last_segment().unwrap_or_default(),
                        node.own_visible(),
                        node.descendant_visible()
                    ),
                    &format!("{}{}", options.header_class_prefix, level),
                    Vec::new(),
                );
                let mut rows = vec![RenderedGroup {
                    level,
                    rendered_item: header,
                    node_data: None,
                }];

                if let TreeNode::Data(group) = node {
                    if group.visible.count() > 0 {
                        let visible: Vec<T> = group.visible_items().cloned().collect();
                        match render_group(path, visible.as_slice()) {
                            Ok(rendered_item) => rows.push(RenderedGroup {
                                level: level + 1,
                                rendered_item,
                                node_data: Some(visible),
                            }),
                            Err(err) => return Some(Err(err)),
                        }
                    }
                }
                Some(Ok(rows))
            })
            .into_iter()
            .collect::<Result<_, E>>()?;

        let rows: Vec<_> = rows.into_iter().flatten().collect();
        trace!("rendered {} rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> DisplayTree<&'static str> {
        DisplayTree::new(vec!["a", "a.b.c", "a.b.c", "d.e"], |path| *path)
    }

    #[test]
    fn test_construction_finalizes_every_node() {
        let tree = tree();
        assert_eq!(tree.item_count(), 4);
        assert_eq!(tree.radix().value_count(), tree.radix().node_count());
        assert_eq!(tree.node("a.b").map(TreeNode::kind), Some(NodeKind::Empty));
        assert_eq!(tree.node("a.b.c").map(TreeNode::kind), Some(NodeKind::Data));
        assert_eq!(tree.group("a.b.c").map(|g| g.items().len()).ok(), Some(2));
    }

    #[test]
    fn test_fresh_tree_is_all_visible() {
        let tree = tree();
        let group = tree.group("a.b.c").unwrap();
        assert_eq!(group.visibility().len(), group.items().len());
        assert_eq!(group.visibility().count(), 2);
        assert_eq!(tree.node("a").map(TreeNode::own_visible), Some(1));
        assert_eq!(tree.node("a").map(TreeNode::descendant_visible), Some(2));
        assert_eq!(tree.total_visible(), 4);
    }

    #[test]
    fn test_query_sets_descendant_counts() {
        let mut tree = tree();
        let visible = tree.query("", |_| Vec::<String>::new());
        assert_eq!(visible, 4);
        assert_eq!(tree.total_visible(), 4);
        assert_eq!(tree.node("a").map(TreeNode::descendant_visible), Some(2));
        assert_eq!(tree.node("d").map(TreeNode::total_visible), Some(1));
    }

    #[test]
    fn test_group_errors() {
        let tree = tree();
        let err = tree.group("a.b").unwrap_err();
        assert!(err.to_string().contains("branch point"));
        let err = tree.visible_items("zzz").unwrap_err();
        assert!(format!("{:#}", err).contains("no group at `zzz`"));
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Empty.to_string(), "EmptyNode");
        assert_eq!(NodeKind::Data.to_string(), "DataNode");
    }
}
