//! Trie node type

use indexmap::IndexMap;

/// A single node of a [`Radix`](crate::Radix)
///
/// A node owns an optional value and an insertion-ordered set of named
/// children. The two are independent: a node can hold a value and have
/// children at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixNode<T> {
    pub(crate) value: Option<T>,
    pub(crate) children: IndexMap<String, RadixNode<T>>,
}

impl<T> Default for RadixNode<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: IndexMap::new(),
        }
    }
}

impl<T> RadixNode<T> {
    /// Create a node with no value and no children
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored at this node, if any
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the value stored at this node, if any
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Returns true if a value is stored at this node
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Number of direct children (the value slot is not counted)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Look up a direct child by segment name
    pub fn child(&self, segment: &str) -> Option<&RadixNode<T>> {
        self.children.get(segment)
    }

    /// Iterate over direct children in the order they were first created
    pub fn children(&self) -> impl Iterator<Item = (&str, &RadixNode<T>)> + '_ {
        self.children
            .iter()
            .map(|(segment, child)| (segment.as_str(), child))
    }

    /// Walk down `path`, creating empty nodes for missing segments
    pub(crate) fn descend_or_create(&mut self, path: &[String]) -> &mut RadixNode<T> {
        let mut node = self;
        for segment in path {
            node = node.children.entry(segment.clone()).or_default();
        }
        node
    }

    pub(crate) fn descend(&self, path: &[String]) -> Option<&RadixNode<T>> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get(segment.as_str()))
    }

    pub(crate) fn descend_mut(&mut self, path: &[String]) -> Option<&mut RadixNode<T>> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get_mut(segment.as_str()))
    }

    /// Merge `other` into this node
    ///
    /// A value in `other` replaces ours; children are merged recursively and
    /// new children are appended in `other`'s order.
    pub(crate) fn merge(&mut self, other: RadixNode<T>) {
        if let Some(value) = other.value {
            self.value = Some(value);
        }
        for (segment, child) in other.children {
            self.children.entry(segment).or_default().merge(child);
        }
    }
}
