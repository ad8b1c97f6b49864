//! # Price Levels
//!
//! Price-denominated facade over [`rbtree_core::OrderedIndex`]. Decimal
//! prices are snapped to an integer tick grid before they reach the tree, so
//! `20.01` and `20.0100000001` land on the same level.
//!
//! ```rust
//! use price_levels::{LevelsConfig, PriceLevels};
//!
//! let mut levels = PriceLevels::new(LevelsConfig::default()).unwrap();
//! for price in [100.25, 100.10, 100.50] {
//!     levels.insert(price).unwrap();
//! }
//!
//! assert_eq!(levels.best_low(), Some(100.10));
//! assert_eq!(levels.upper_bound(100.25).unwrap(), Some(100.50));
//! assert!(levels.insert(f64::NAN).is_err());
//! ```

pub mod config;
pub mod conversions;
pub mod levels;

pub use config::LevelsConfig;
pub use conversions::TickScale;
pub use levels::PriceLevels;

use thiserror::Error;

/// Errors raised at the price-to-tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LevelError {
    /// Price is NaN, infinite, zero or negative
    #[error("invalid price {0}: must be finite and positive")]
    InvalidPrice(f64),
    /// Price is valid but its tick count does not fit in an `i64`
    #[error("price {0} overflows the tick range")]
    TickOverflow(f64),
    /// Configured tick size is unusable
    #[error("invalid tick size {0}: must be finite and positive")]
    InvalidTickSize(f64),
    /// Configured initial capacity cannot be reserved
    #[error("cannot reserve initial capacity of {0} levels")]
    InvalidCapacity(usize),
}

/// Result type alias for price level operations
pub type LevelResult<T> = Result<T, LevelError>;
