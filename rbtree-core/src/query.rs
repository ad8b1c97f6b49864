//! # Lookups
//!
//! Exact search and ordered bound queries. All run in O(height).

use crate::node::{Entry, Key, NodeId};
use crate::tree::OrderedIndex;

impl OrderedIndex {
    /// Find a stored entry equal to `key`
    pub fn search(&self, key: Key) -> Option<Entry> {
        self.find_node(key).map(|id| Entry::from(&self.nodes[id]))
    }

    pub fn contains(&self, key: Key) -> bool {
        self.find_node(key).is_some()
    }

    /// Smallest stored key that is `>= key`
    ///
    /// # Examples
    /// ```
    /// use rbtree_core::OrderedIndex;
    ///
    /// let index: OrderedIndex = [10, 18, 20].into_iter().collect();
    /// assert_eq!(index.lower_bound(18).map(|e| e.key), Some(18));
    /// assert_eq!(index.lower_bound(19).map(|e| e.key), Some(20));
    /// assert!(index.lower_bound(21).is_none());
    /// ```
    pub fn lower_bound(&self, key: Key) -> Option<Entry> {
        self.bound(|candidate| candidate >= key)
    }

    /// Smallest stored key that is `> key`
    ///
    /// # Examples
    /// ```
    /// use rbtree_core::OrderedIndex;
    ///
    /// let index: OrderedIndex = [10, 18, 20].into_iter().collect();
    /// assert_eq!(index.upper_bound(18).map(|e| e.key), Some(20));
    /// assert!(index.upper_bound(20).is_none());
    /// ```
    pub fn upper_bound(&self, key: Key) -> Option<Entry> {
        self.bound(|candidate| candidate > key)
    }

    /// Smallest stored key
    pub fn first(&self) -> Option<Entry> {
        self.root
            .map(|root| Entry::from(&self.nodes[self.minimum(root)]))
    }

    /// Largest stored key
    pub fn last(&self) -> Option<Entry> {
        self.root
            .map(|root| Entry::from(&self.nodes[self.maximum(root)]))
    }

    /// Descend from the root keeping the last node that satisfied `accept`,
    /// moving left after a hit and right after a miss. `accept` must be
    /// monotone in the key.
    fn bound(&self, accept: impl Fn(Key) -> bool) -> Option<Entry> {
        let mut best = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            if accept(node.key) {
                best = Some(id);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        best.map(|id| Entry::from(&self.nodes[id]))
    }

    pub(crate) fn find_node(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            if key == node.key {
                return Some(id);
            }
            current = if key < node.key { node.left() } else { node.right() };
        }

        None
    }

    /// Leftmost node of the subtree rooted at `id`
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left() {
            id = left;
        }
        id
    }

    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right() {
            id = right;
        }
        id
    }
}
