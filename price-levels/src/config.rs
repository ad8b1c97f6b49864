//! Configuration for [`crate::PriceLevels`].

use serde::{Deserialize, Serialize};

/// Tick grid and sizing for a level index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    /// Smallest price increment; every stored price is a multiple of it
    pub tick_size: f64,
    /// Node slots reserved up front
    pub initial_capacity: usize,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            tick_size: 0.01,
            initial_capacity: 1024,
        }
    }
}
