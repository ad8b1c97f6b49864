//! Node storage for the index.
//!
//! Nodes live in a growable vector and are addressed by [`NodeId`]. Released
//! slots go onto a free list and are handed out again before the vector grows.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

use crate::node::{Key, Node, NodeId};

/// Slot allocator backing one tree
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Node>,
    free: Vec<NodeId>,
}

impl NodeArena {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Like [`NodeArena::with_capacity`], but reports an unsatisfiable
    /// reservation instead of aborting
    #[inline]
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free: Vec::new(),
        })
    }

    /// Allocate a red, unlinked node holding `key`
    #[inline]
    pub(crate) fn allocate(&mut self, key: Key) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Node::new(key);
                id
            }
            None => {
                self.slots.push(Node::new(key));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Return a slot to the free list. The caller must already have spliced
    /// the node out of the tree.
    #[inline]
    pub(crate) fn release(&mut self, id: NodeId) {
        self.slots[id.0].unlink();
        self.free.push(id);
    }

    /// Number of live nodes
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.free.len()));
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_allocation() {
        let mut arena = NodeArena::with_capacity(4);

        let a = arena.allocate(100);
        let b = arena.allocate(200);

        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[b].key, 200);
        assert!(arena.capacity() >= 4);
    }

    #[test]
    fn test_released_slot_is_reused() {
        let mut arena = NodeArena::default();

        let a = arena.allocate(1);
        let b = arena.allocate(2);
        arena[a].parent = Some(b);

        arena.release(a);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[a].parent, None);

        let c = arena.allocate(3);
        assert_eq!(c, a);
        assert_eq!(arena[c].key, 3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_oversized_reservation_is_reported() {
        assert!(NodeArena::try_with_capacity(usize::MAX).is_err());

        let arena = NodeArena::try_with_capacity(16).unwrap();
        assert!(arena.capacity() >= 16);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = NodeArena::with_capacity(10);

        let a = arena.allocate(1);
        arena.allocate(2);
        arena.release(a);

        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(5), NodeId(0));
    }
}
