//! # Ordered Index
//!
//! Red-black tree over integer keys. Mutation keeps the five red-black
//! invariants after every call:
//!
//! 1. in-order keys are non-decreasing (new duplicates descend to the right)
//! 2. the root is black
//! 3. a red node never has a red child
//! 4. every path from a node down to an absent child crosses the same number
//!    of black nodes
//! 5. parent and child links agree
//!
//! Left/right mirrored cases of both rebalancing loops share one code path,
//! parameterized by [`Side`].

use std::collections::TryReserveError;
use std::fmt;

use tracing::{debug, trace};

use crate::arena::NodeArena;
use crate::node::{Color, Key, NodeId, Side};

/// Red-black tree keyed by [`Key`], duplicates allowed
#[derive(Clone, Default)]
pub struct OrderedIndex {
    pub(crate) nodes: NodeArena,
    pub(crate) root: Option<NodeId>,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    /// Create an empty index with room for `capacity` nodes, failing instead
    /// of aborting when the reservation cannot be made
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            nodes: NodeArena::try_with_capacity(capacity)?,
            root: None,
        })
    }

    /// Number of stored keys, duplicates included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes the arena can hold before reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserve room for at least `additional` more keys
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Insert `key`. An equal key already in the tree sends the new node into
    /// its right subtree; insertion never fails.
    pub fn insert(&mut self, key: Key) {
        let id = self.nodes.allocate(key);

        let Some(mut current) = self.root else {
            self.nodes[id].color = Color::Black;
            self.root = Some(id);
            trace!(key, "inserted root");
            return;
        };

        loop {
            let side = if key < self.nodes[current].key {
                Side::Left
            } else {
                Side::Right
            };
            let next = self.nodes[current][side];
            match next {
                Some(next) => current = next,
                None => {
                    self.nodes[current][side] = Some(id);
                    self.nodes[id].parent = Some(current);
                    break;
                }
            }
        }

        trace!(key, parent = self.nodes[current].key, "inserted leaf");
        self.fix_after_insert(id);
    }

    /// Remove one node holding `key`. Returns `false`, leaving the tree
    /// untouched, when no such key is stored.
    pub fn delete(&mut self, key: Key) -> bool {
        match self.find_node(key) {
            Some(id) => {
                self.delete_node(id);
                trace!(key, len = self.len(), "deleted");
                true
            }
            None => {
                debug!(key, "delete ignored, key not present");
                false
            }
        }
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Absent children count as black
    #[inline]
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].color.is_red())
    }

    #[inline]
    fn paint(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color;
        }
    }

    /// Which child of `parent` the slot holding `child` is. An absent `child`
    /// resolves to the empty slot.
    #[inline]
    fn side_of(&self, child: Option<NodeId>, parent: NodeId) -> Side {
        if self.nodes[parent].left() == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Put `replacement` where `id` hangs from its parent (or at the root).
    /// `id` keeps its own links.
    fn transplant(&mut self, id: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes[id].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_of(Some(id), parent);
                self.nodes[parent][side] = replacement;
            }
        }
        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
    }

    /// Single rotation moving `id` down toward `toward` and its child on the
    /// opposite side up into its place: `Side::Left` is a left rotation,
    /// `Side::Right` a right rotation. No-op when that child is absent.
    fn rotate(&mut self, id: NodeId, toward: Side) {
        let Some(pivot) = self.nodes[id][toward.opposite()] else {
            return;
        };

        let inner = self.nodes[pivot][toward];
        self.nodes[id][toward.opposite()] = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }

        self.transplant(id, Some(pivot));
        self.nodes[pivot][toward] = Some(id);
        self.nodes[id].parent = Some(pivot);
    }

    fn fix_after_insert(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.parent(node) {
            if !self.is_red(Some(parent)) {
                break;
            }
            // a red parent is never the root
            let Some(grandparent) = self.parent(parent) else {
                break;
            };

            let side = self.side_of(Some(parent), grandparent);
            let uncle = self.nodes[grandparent][side.opposite()];

            if self.is_red(uncle) {
                trace!(key = self.nodes[node].key, "insert: red uncle, recolor");
                self.paint(Some(parent), Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(Some(grandparent), Color::Red);
                node = grandparent;
                continue;
            }

            if self.nodes[parent][side.opposite()] == Some(node) {
                trace!(key = self.nodes[node].key, "insert: inner child, rotate parent");
                self.rotate(parent, side);
                std::mem::swap(&mut node, &mut parent);
            }

            trace!(key = self.nodes[node].key, "insert: outer child, rotate grandparent");
            self.paint(Some(parent), Color::Black);
            self.paint(Some(grandparent), Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        self.paint(self.root, Color::Black);
    }

    fn delete_node(&mut self, target: NodeId) {
        let mut removed_color = self.nodes[target].color;
        let left = self.nodes[target].left();
        let right = self.nodes[target].right();

        // the node that moves into the vacated position, and its parent
        let (child, child_parent) = match (left, right) {
            (None, _) => {
                let parent = self.parent(target);
                self.transplant(target, right);
                (right, parent)
            }
            (Some(_), None) => {
                let parent = self.parent(target);
                self.transplant(target, left);
                (left, parent)
            }
            (Some(left), Some(right)) => {
                let successor = self.minimum(right);
                removed_color = self.nodes[successor].color;
                let child = self.nodes[successor].right();

                let child_parent = if successor == right {
                    Some(successor)
                } else {
                    let parent = self.parent(successor);
                    self.transplant(successor, child);
                    self.nodes[successor][Side::Right] = Some(right);
                    self.nodes[right].parent = Some(successor);
                    parent
                };

                self.transplant(target, Some(successor));
                self.nodes[successor][Side::Left] = Some(left);
                self.nodes[left].parent = Some(successor);
                self.nodes[successor].color = self.nodes[target].color;

                (child, child_parent)
            }
        };

        self.nodes.release(target);

        if removed_color.is_black() {
            self.fix_after_delete(child, child_parent);
        }
    }

    /// `node` carries an extra black. It may be absent, in which case
    /// `parent` locates it.
    fn fix_after_delete(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && !self.is_red(node) {
            let Some(p) = parent else {
                break;
            };
            let side = self.side_of(node, p);

            // a black-height deficit on `side` means the sibling exists
            let Some(mut sibling) = self.nodes[p][side.opposite()] else {
                break;
            };

            if self.is_red(Some(sibling)) {
                trace!(parent = self.nodes[p].key, "delete: red sibling, rotate parent");
                self.paint(Some(sibling), Color::Black);
                self.paint(Some(p), Color::Red);
                self.rotate(p, side);
                let Some(next) = self.nodes[p][side.opposite()] else {
                    break;
                };
                sibling = next;
            }

            let near = self.nodes[sibling][side];
            let far = self.nodes[sibling][side.opposite()];

            if !self.is_red(near) && !self.is_red(far) {
                trace!(parent = self.nodes[p].key, "delete: black nephews, push up");
                self.paint(Some(sibling), Color::Red);
                node = Some(p);
                parent = self.parent(p);
                continue;
            }

            if !self.is_red(far) {
                trace!(parent = self.nodes[p].key, "delete: red near nephew, rotate sibling");
                self.paint(near, Color::Black);
                self.paint(Some(sibling), Color::Red);
                self.rotate(sibling, side.opposite());
                let Some(next) = self.nodes[p][side.opposite()] else {
                    break;
                };
                sibling = next;
            }

            trace!(parent = self.nodes[p].key, "delete: red far nephew, rotate parent");
            self.nodes[sibling].color = self.nodes[p].color;
            self.paint(Some(p), Color::Black);
            let far = self.nodes[sibling][side.opposite()];
            self.paint(far, Color::Black);
            self.rotate(p, side);
            node = self.root;
            break;
        }

        self.paint(node, Color::Black);
    }
}

impl fmt::Debug for OrderedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

impl Extend<Key> for OrderedIndex {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for OrderedIndex {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut index = OrderedIndex::new();
        index.extend(iter);
        index
    }
}
