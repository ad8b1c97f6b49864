//! In-order traversal.

use std::iter::FusedIterator;

use crate::node::{Entry, Key, NodeId};
use crate::tree::OrderedIndex;

/// Ascending walk over the stored entries, left subtree first
///
/// Created by [`OrderedIndex::traverse_in_order`]. Nodes are visited lazily
/// with an explicit stack bounded by the tree height.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    index: &'a OrderedIndex,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    fn new(index: &'a OrderedIndex) -> Self {
        let mut iter = Self {
            index,
            stack: Vec::new(),
            remaining: index.len(),
        };
        iter.descend_left(index.root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.index.nodes[id].left();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let id = self.stack.pop()?;
        let node = &self.index.nodes[id];
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(Entry::from(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl FusedIterator for InOrder<'_> {}

/// Ascending keys, see [`OrderedIndex::keys`]
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: InOrder<'a>,
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        self.inner.next().map(|entry| entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

impl OrderedIndex {
    /// Every stored `(key, color)` pair in ascending key order. Each call
    /// starts a fresh walk from the smallest key.
    pub fn traverse_in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.traverse_in_order(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = Entry;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.traverse_in_order()
    }
}
