//! # Tick Conversions
//!
//! Convert between floating-point prices and the integer tick keys stored in
//! the index. A price maps to the nearest tick, ties rounding away from zero,
//! and must land on at least one tick.

use rbtree_core::Key;
use tracing::debug;

use crate::{LevelError, LevelResult};

/// Validated tick grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickScale {
    tick_size: f64,
    ticks_per_unit: f64,
}

impl TickScale {
    /// Build a grid with the given tick size
    ///
    /// # Examples
    /// ```
    /// use price_levels::TickScale;
    ///
    /// assert!(TickScale::new(0.01).is_ok());
    /// assert!(TickScale::new(0.0).is_err());
    /// assert!(TickScale::new(f64::NAN).is_err());
    /// ```
    pub fn new(tick_size: f64) -> LevelResult<Self> {
        let ticks_per_unit = tick_size.recip();
        if !tick_size.is_finite() || tick_size <= 0.0 || !ticks_per_unit.is_finite() {
            return Err(LevelError::InvalidTickSize(tick_size));
        }
        Ok(Self {
            tick_size,
            ticks_per_unit,
        })
    }

    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    /// Convert a price to its tick key
    ///
    /// # Examples
    /// ```
    /// use price_levels::TickScale;
    ///
    /// let scale = TickScale::new(0.01).unwrap();
    /// assert_eq!(scale.to_ticks(20.01).unwrap(), 2001);
    /// assert_eq!(scale.to_ticks(20.014).unwrap(), 2001);
    /// assert!(scale.to_ticks(-1.0).is_err());
    /// ```
    pub fn to_ticks(&self, price: f64) -> LevelResult<Key> {
        if !price.is_finite() || price <= 0.0 {
            debug!(price, "rejected invalid price");
            return Err(LevelError::InvalidPrice(price));
        }

        let ticks = (price * self.ticks_per_unit).round();
        if ticks < 1.0 {
            debug!(price, "rejected price below half a tick");
            return Err(LevelError::InvalidPrice(price));
        }
        // i64::MAX is not exactly representable; its f64 rounds up to 2^63
        if ticks >= i64::MAX as f64 {
            debug!(price, "rejected price beyond tick range");
            return Err(LevelError::TickOverflow(price));
        }

        Ok(ticks as Key)
    }

    /// Convert a tick key back to a price
    pub fn to_price(&self, ticks: Key) -> f64 {
        ticks as f64 / self.ticks_per_unit
    }

    /// Smallest tick whose price is `>= price` (`inclusive`) or `> price`.
    /// `None` when no representable tick qualifies. Unlike [`to_ticks`], the
    /// query price may sit off the grid or outside the valid price range;
    /// only NaN is rejected.
    ///
    /// [`to_ticks`]: TickScale::to_ticks
    ///
    /// # Examples
    /// ```
    /// use price_levels::TickScale;
    ///
    /// let scale = TickScale::new(0.01).unwrap();
    /// assert_eq!(scale.bound_ticks(20.004, true).unwrap(), Some(2001));
    /// assert_eq!(scale.bound_ticks(20.01, true).unwrap(), Some(2001));
    /// assert_eq!(scale.bound_ticks(20.01, false).unwrap(), Some(2002));
    /// assert_eq!(scale.bound_ticks(-3.0, false).unwrap(), Some(1));
    /// assert_eq!(scale.bound_ticks(1e300, true).unwrap(), None);
    /// ```
    pub fn bound_ticks(&self, price: f64, inclusive: bool) -> LevelResult<Option<Key>> {
        if price.is_nan() {
            debug!(price, "rejected NaN bound");
            return Err(LevelError::InvalidPrice(price));
        }

        let accepts = |ticks: Key| {
            let level = self.to_price(ticks);
            if inclusive {
                level >= price
            } else {
                level > price
            }
        };

        let scaled = price * self.ticks_per_unit;
        let estimate = if inclusive {
            scaled.ceil()
        } else {
            scaled.floor() + 1.0
        };
        // stored keys start at one tick
        let estimate = estimate.max(1.0);
        if estimate >= i64::MAX as f64 {
            return Ok(None);
        }

        // scaling can be off by one ulp on either side of a grid point
        let mut ticks = estimate as Key;
        if ticks > 1 && accepts(ticks - 1) {
            ticks -= 1;
        } else if !accepts(ticks) {
            ticks += 1;
        }
        Ok(Some(ticks))
    }
}
