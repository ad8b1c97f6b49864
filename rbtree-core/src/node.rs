//! # Node Model
//!
//! Node layout, colors and child sides for the red-black index.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Ordering key of the index (a price level expressed in ticks)
pub type Key = i64;

/// Node color. Absent children are read as `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

/// Which child slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Stable index of a node inside the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    children: [Option<NodeId>; 2],
}

impl Node {
    /// Fresh nodes are red and unlinked
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            color: Color::Red,
            parent: None,
            children: [None, None],
        }
    }

    pub(crate) fn left(&self) -> Option<NodeId> {
        self.children[0]
    }

    pub(crate) fn right(&self) -> Option<NodeId> {
        self.children[1]
    }

    /// Drop every link so a released slot cannot reach the tree
    pub(crate) fn unlink(&mut self) {
        self.parent = None;
        self.children = [None, None];
    }
}

impl Index<Side> for Node {
    type Output = Option<NodeId>;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Left => &self.children[0],
            Side::Right => &self.children[1],
        }
    }
}

impl IndexMut<Side> for Node {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Left => &mut self.children[0],
            Side::Right => &mut self.children[1],
        }
    }
}

/// A stored key together with its node color, as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub color: Color,
}

impl From<&Node> for Entry {
    fn from(node: &Node) -> Self {
        Entry {
            key: node.key,
            color: node.color,
        }
    }
}
