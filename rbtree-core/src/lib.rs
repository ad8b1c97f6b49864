//! # RBTree Core - Ordered Price Level Index
//!
//! Red-black tree over integer keys (price levels expressed in ticks) with
//! exact lookup and ordered bound queries. This crate contains only the
//! index itself; price conversion lives in `price-levels`.
//!
//! ## Key Features
//!
//! - **O(log n)** insert, delete, search, `lower_bound` and `upper_bound`
//! - **Arena storage**: nodes are addressed by index, so parent links need no
//!   reference counting and deleted slots are reused
//! - **Duplicate tolerant**: equal keys are stored side by side, never merged
//!
//! ```rust
//! use rbtree_core::{Color, OrderedIndex};
//!
//! let mut index = OrderedIndex::new();
//! for price in [20, 15, 25, 10, 18, 22, 30] {
//!     index.insert(price);
//! }
//! index.delete(15);
//!
//! assert_eq!(index.keys().collect::<Vec<_>>(), vec![10, 18, 20, 22, 25, 30]);
//! assert_eq!(index.lower_bound(18).map(|e| e.key), Some(18));
//! assert_eq!(index.upper_bound(18).map(|e| e.key), Some(20));
//! assert!(index.upper_bound(30).is_none());
//! assert_eq!(index.first().map(|e| e.color), Some(Color::Red));
//! ```
//!
//! The index is single-threaded; wrap it in a lock to share it.

mod arena;
mod iter;
mod node;
mod query;
mod tree;
#[cfg(test)]
mod validate;

pub use iter::{InOrder, Keys};
pub use node::{Color, Entry, Key};
pub use tree::OrderedIndex;
