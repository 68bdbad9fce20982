//! Depth-first traversal and unfold

use crate::{Radix, RadixNode, RadixPath};

/// One node as seen by a pre-order walk
pub(crate) struct Visit<N> {
    pub(crate) path: RadixPath,
    pub(crate) node_data: Option<N>,
    pub(crate) child_count: usize,
}

impl<T> Radix<T> {
    /// Walk every node in pre-order
    ///
    /// `visit` receives the node's path (empty for the root), its value if
    /// any, and its number of children. Children are visited in the order
    /// their segment was first created. Every node is visited exactly once.
    pub fn traverse_depth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&RadixPath, Option<&T>, usize),
    {
        let mut path = RadixPath::root();
        walk(&self.root, &mut path, &mut visit);
    }

    /// Like [`traverse_depth_first`](Self::traverse_depth_first), with
    /// mutable access to each node's value slot
    pub fn traverse_depth_first_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&RadixPath, &mut Option<T>, usize),
    {
        let mut path = RadixPath::root();
        walk_mut(&mut self.root, &mut path, &mut visit);
    }

    /// Walk only the nodes holding a value, in pre-order
    pub fn traverse_values<F>(&self, mut visit: F)
    where
        F: FnMut(&RadixPath, &T),
    {
        self.traverse_depth_first(|path, value, _| {
            if let Some(value) = value {
                visit(path, value);
            }
        });
    }

    /// Map every node to zero or one output, in pre-order
    ///
    /// Nodes for which `transform` returns `None` are left out.
    pub fn unfold<U, F>(&self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&RadixPath, Option<&T>) -> Option<U>,
    {
        let mut unfolded = Vec::new();
        self.traverse_depth_first(|path, value, _| {
            if let Some(output) = transform(path, value) {
                unfolded.push(output);
            }
        });
        unfolded
    }

    /// Root visit plus all descendant visits in pre-order
    pub(crate) fn visits(&self) -> (Visit<&T>, Vec<Visit<&T>>) {
        let mut path = RadixPath::root();
        let mut descendants = Vec::new();
        for (segment, child) in &self.root.children {
            path.push(segment.clone());
            collect(child, &mut path, &mut descendants);
            path.pop();
        }

        let root = Visit {
            path,
            node_data: self.root.value.as_ref(),
            child_count: self.root.children.len(),
        };
        (root, descendants)
    }

    pub(crate) fn visits_mut(&mut self) -> (Visit<&mut T>, Vec<Visit<&mut T>>) {
        let RadixNode { value, children } = &mut self.root;
        let child_count = children.len();

        let mut path = RadixPath::root();
        let mut descendants = Vec::new();
        for (segment, child) in children.iter_mut() {
            path.push(segment.clone());
            collect_mut(child, &mut path, &mut descendants);
            path.pop();
        }

        let root = Visit {
            path,
            node_data: value.as_mut(),
            child_count,
        };
        (root, descendants)
    }
}

fn walk<T, F>(node: &RadixNode<T>, path: &mut RadixPath, visit: &mut F)
where
    F: FnMut(&RadixPath, Option<&T>, usize),
{
    visit(path, node.value.as_ref(), node.children.len());
    for (segment, child) in &node.children {
        path.push(segment.clone());
        walk(child, path, visit);
        path.pop();
    }
}

fn walk_mut<T, F>(node: &mut RadixNode<T>, path: &mut RadixPath, visit: &mut F)
where
    F: FnMut(&RadixPath, &mut Option<T>, usize),
{
    visit(path, &mut node.value, node.children.len());
    for (segment, child) in node.children.iter_mut() {
        path.push(segment.clone());
        walk_mut(child, path, visit);
        path.pop();
    }
}

fn collect<'a, T>(node: &'a RadixNode<T>, path: &mut RadixPath, out: &mut Vec<Visit<&'a T>>) {
    out.push(Visit {
        path: path.clone(),
        node_data: node.value.as_ref(),
        child_count: node.children.len(),
    });
    for (segment, child) in &node.children {
        path.push(segment.clone());
        collect(child, path, out);
        path.pop();
    }
}

fn collect_mut<'a, T>(
    node: &'a mut RadixNode<T>,
    path: &mut RadixPath,
    out: &mut Vec<Visit<&'a mut T>>,
) {
    let RadixNode { value, children } = node;
    out.push(Visit {
        path: path.clone(),
        node_data: value.as_mut(),
        child_count: children.len(),
    });
    for (segment, child) in children.iter_mut() {
        path.push(segment.clone());
        collect_mut(child, path, out);
        path.pop();
    }
}
