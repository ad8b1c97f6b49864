//! Structural checker used by the test suite.

use crate::node::{Key, NodeId};
use crate::tree::OrderedIndex;

/// First broken red-black property found by [`OrderedIndex::check_invariants`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InvariantViolation {
    RedRoot,
    RootHasParent,
    OutOfOrder { key: Key },
    RedRedEdge { parent: Key, child: Key },
    BlackHeightMismatch { key: Key, left: usize, right: usize },
    BrokenParentLink { key: Key },
    LenMismatch { reachable: usize, len: usize },
}

impl OrderedIndex {
    /// Walk the whole tree and return its black-height (black nodes on any
    /// root-to-leaf path), or the first violation encountered.
    pub(crate) fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(0),
                len => Err(InvariantViolation::LenMismatch { reachable: 0, len }),
            };
        };

        if self.nodes[root].parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if self.is_red(Some(root)) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut reachable = 0;
        let height = self.check_subtree(root, None, None, &mut reachable)?;

        if reachable != self.len() {
            return Err(InvariantViolation::LenMismatch {
                reachable,
                len: self.len(),
            });
        }
        Ok(height)
    }

    /// Rotations may carry an equal key into a left subtree, so both bounds
    /// are inclusive.
    fn check_subtree(
        &self,
        id: NodeId,
        low: Option<Key>,
        high: Option<Key>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let node = &self.nodes[id];
        *reachable += 1;

        if low.is_some_and(|low| node.key < low) || high.is_some_and(|high| node.key > high) {
            return Err(InvariantViolation::OutOfOrder { key: node.key });
        }

        let mut heights = [0; 2];
        for (slot, child) in [node.left(), node.right()].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            if self.nodes[child].parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink {
                    key: self.nodes[child].key,
                });
            }
            if node.color.is_red() && self.is_red(Some(child)) {
                return Err(InvariantViolation::RedRedEdge {
                    parent: node.key,
                    child: self.nodes[child].key,
                });
            }
            let (low, high) = if slot == 0 {
                (low, Some(node.key))
            } else {
                (Some(node.key), high)
            };
            heights[slot] = self.check_subtree(child, low, high, reachable)?;
        }

        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeightMismatch {
                key: node.key,
                left: heights[0],
                right: heights[1],
            });
        }

        Ok(heights[0] + usize::from(node.color.is_black()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Color, Side};

    fn sample() -> OrderedIndex {
        [20, 15, 25, 10, 18, 22, 30].into_iter().collect()
    }

    #[test]
    fn test_valid_tree_passes() {
        assert_eq!(sample().check_invariants(), Ok(2));
        assert_eq!(OrderedIndex::new().check_invariants(), Ok(0));
    }

    #[test]
    fn test_detects_red_root() {
        let mut index = sample();
        let root = index.root.unwrap();
        index.nodes[root].color = Color::Red;
        assert_eq!(index.check_invariants(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn test_detects_red_red_edge() {
        let mut index = sample();
        let root = index.root.unwrap();
        let left = index.nodes[root].left().unwrap();
        index.nodes[left].color = Color::Red;

        assert_eq!(
            index.check_invariants(),
            Err(InvariantViolation::RedRedEdge { parent: 15, child: 10 })
        );
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut index = sample();
        let root = index.root.unwrap();
        let right = index.nodes[root].right().unwrap();
        let leaf = index.nodes[right].right().unwrap();
        index.nodes[leaf].color = Color::Black;

        assert_eq!(
            index.check_invariants(),
            Err(InvariantViolation::BlackHeightMismatch { key: 25, left: 0, right: 1 })
        );
    }

    #[test]
    fn test_detects_out_of_order_key() {
        let mut index = sample();
        let root = index.root.unwrap();
        let left = index.nodes[root].left().unwrap();
        index.nodes[left].key = 21;

        assert!(matches!(
            index.check_invariants(),
            Err(InvariantViolation::OutOfOrder { .. })
        ));
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut index = sample();
        let root = index.root.unwrap();
        let left = index.nodes[root].left().unwrap();
        let right = index.nodes[root].right().unwrap();
        index.nodes[left].parent = Some(right);

        assert_eq!(
            index.check_invariants(),
            Err(InvariantViolation::BrokenParentLink { key: 15 })
        );
    }

    #[test]
    fn test_detects_detached_subtree() {
        let mut index = sample();
        let root = index.root.unwrap();
        let right = index.nodes[root].right().unwrap();
        index.nodes[right][Side::Left] = None;

        assert_eq!(
            index.check_invariants(),
            Err(InvariantViolation::LenMismatch { reachable: 6, len: 7 })
        );
    }
}
