//! # Price Level Index
//!
//! [`PriceLevels`] keeps the set of live price levels for one side of a book.
//! Every call converts its price through the configured [`TickScale`] and
//! delegates to the red-black index; lookups convert ticks back to prices.

use rbtree_core::{Entry, OrderedIndex};
use tracing::{debug, trace};

use crate::config::LevelsConfig;
use crate::conversions::TickScale;
use crate::{LevelError, LevelResult};

/// Ordered set of price levels on a fixed tick grid
#[derive(Debug, Clone)]
pub struct PriceLevels {
    index: OrderedIndex,
    scale: TickScale,
    config: LevelsConfig,
}

impl PriceLevels {
    /// Create an empty level index. Fails if the configured tick size is not
    /// finite and positive, or if `initial_capacity` nodes cannot be reserved.
    pub fn new(config: LevelsConfig) -> LevelResult<Self> {
        let scale = TickScale::new(config.tick_size)?;
        let index = OrderedIndex::try_with_capacity(config.initial_capacity).map_err(|err| {
            debug!(capacity = config.initial_capacity, %err, "rejected initial capacity");
            LevelError::InvalidCapacity(config.initial_capacity)
        })?;
        trace!(tick_size = config.tick_size, capacity = config.initial_capacity, "created price levels");

        Ok(Self {
            index,
            scale,
            config,
        })
    }

    pub fn config(&self) -> &LevelsConfig {
        &self.config
    }

    /// The underlying tick-keyed index, for diagnostics
    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    /// Add a level. Re-adding a price already present stores it again.
    pub fn insert(&mut self, price: f64) -> LevelResult<()> {
        let ticks = self.scale.to_ticks(price)?;
        self.index.insert(ticks);
        Ok(())
    }

    /// Remove one level at `price`; `Ok(false)` if none was stored
    pub fn delete(&mut self, price: f64) -> LevelResult<bool> {
        let ticks = self.scale.to_ticks(price)?;
        Ok(self.index.delete(ticks))
    }

    pub fn contains(&self, price: f64) -> LevelResult<bool> {
        let ticks = self.scale.to_ticks(price)?;
        Ok(self.index.contains(ticks))
    }

    /// Lowest stored level at or above `price`. `price` need not lie on the
    /// tick grid or inside the valid price range; only NaN is an error.
    pub fn lower_bound(&self, price: f64) -> LevelResult<Option<f64>> {
        self.bound(price, true)
    }

    /// Lowest stored level strictly above `price`, with the same input rules
    /// as [`PriceLevels::lower_bound`]
    pub fn upper_bound(&self, price: f64) -> LevelResult<Option<f64>> {
        self.bound(price, false)
    }

    /// Lowest stored level (best ask when the index holds asks)
    pub fn best_low(&self) -> Option<f64> {
        self.to_price(self.index.first())
    }

    /// Highest stored level (best bid when the index holds bids)
    pub fn best_high(&self) -> Option<f64> {
        self.to_price(self.index.last())
    }

    /// All stored levels in ascending order
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.index.keys().map(|ticks| self.scale.to_price(ticks))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// The first qualifying tick is already strict for `upper_bound`, so both
    /// queries resolve through the index's inclusive bound.
    fn bound(&self, price: f64, inclusive: bool) -> LevelResult<Option<f64>> {
        let Some(ticks) = self.scale.bound_ticks(price, inclusive)? else {
            return Ok(None);
        };
        Ok(self.to_price(self.index.lower_bound(ticks)))
    }

    fn to_price(&self, entry: Option<Entry>) -> Option<f64> {
        entry.map(|entry| self.scale.to_price(entry.key))
    }
}
