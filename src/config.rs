use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::optimizer::OptimizationStrategy;

/// A configuration for a single simulated cache
///
/// `cache_size` is the number of sets (equivalently lines, as every cache
/// here keeps one line per set), `block_size` is the number of bytes mapped
/// to one block. All fields must be positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub cache_size: u64,
    pub block_size: u64,
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u64,
}

impl CacheConfig {
    fn default_associativity() -> u64 {
        1
    }

    /// Creates a direct-mapped configuration, associativity 1
    pub fn direct_mapped(cache_size: u64, block_size: u64) -> Self {
        Self {
            cache_size,
            block_size,
            associativity: 1,
        }
    }

    /// Checks the construction invariants
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` naming the first field found to be zero
    pub fn validate(&self) -> Result<(), SimError> {
        if self.cache_size == 0 {
            return Err(SimError::InvalidConfiguration("cache_size"));
        }
        if self.block_size == 0 {
            return Err(SimError::InvalidConfiguration("block_size"));
        }
        if self.associativity == 0 {
            return Err(SimError::InvalidConfiguration("associativity"));
        }
        Ok(())
    }
}

/// The top-level JSON input format: a base cache, and optionally the
/// strategies an optimised cache should be derived from it with
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub cache: CacheConfig,
    #[serde(default)]
    pub strategies: Vec<OptimizationStrategy>,
}
