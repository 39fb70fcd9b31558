use serde::Deserialize;

use crate::cache::DirectMappedCache;
use crate::config::CacheConfig;
use crate::error::SimError;

/// A partial configuration produced by a strategy
///
/// Only the fields a strategy names are overwritten during folding; the rest
/// of the working configuration passes through untouched
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ConfigDelta {
    pub cache_size: Option<u64>,
    pub block_size: Option<u64>,
    pub associativity: Option<u64>,
}

/// The strategies an optimised configuration can be derived with
///
/// A closed set dispatched by pattern match. Strategies are stateless values
/// over a configuration; none of them holds a reference back to any cache or
/// mutates one in place
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizationStrategy {
    /// Grows the block size, either to a fixed target or by a multiplier
    #[serde(alias = "block")]
    BlockSize {
        #[serde(default)]
        target: Option<u64>,
        #[serde(default = "OptimizationStrategy::default_multiplier")]
        multiplier: u64,
    },
    /// Grows the number of sets, either to a fixed target or by a multiplier
    #[serde(alias = "size")]
    CacheSize {
        #[serde(default)]
        target: Option<u64>,
        #[serde(default = "OptimizationStrategy::default_multiplier")]
        multiplier: u64,
    },
    /// Raises associativity to a target; lowering is never proposed, so a
    /// target at or below the current level emits no delta at all
    #[serde(alias = "assoc")]
    Associativity { target: u64 },
}

impl OptimizationStrategy {
    fn default_multiplier() -> u64 {
        2
    }

    /// The conventional block-size doubling strategy
    pub fn double_block_size() -> Self {
        Self::BlockSize {
            target: None,
            multiplier: 2,
        }
    }

    /// The conventional set-count doubling strategy
    pub fn double_cache_size() -> Self {
        Self::CacheSize {
            target: None,
            multiplier: 2,
        }
    }

    /// Derives the delta this strategy wants applied to a configuration
    ///
    /// Pure and total; multiplications saturate rather than wrap
    pub fn derive(&self, config: &CacheConfig) -> ConfigDelta {
        match *self {
            Self::BlockSize { target, multiplier } => ConfigDelta {
                block_size: Some(
                    target.unwrap_or_else(|| config.block_size.saturating_mul(multiplier)),
                ),
                ..ConfigDelta::default()
            },
            Self::CacheSize { target, multiplier } => ConfigDelta {
                cache_size: Some(
                    target.unwrap_or_else(|| config.cache_size.saturating_mul(multiplier)),
                ),
                ..ConfigDelta::default()
            },
            Self::Associativity { target } => {
                if target > config.associativity {
                    ConfigDelta {
                        associativity: Some(target),
                        ..ConfigDelta::default()
                    }
                } else {
                    ConfigDelta::default()
                }
            }
        }
    }
}

/// Folds an ordered list of strategies over a base configuration
///
/// Every strategy derives its delta from the base configuration, and each
/// delta overwrites only the fields it names on the working copy. When two
/// strategies name the same field, the later one wins
pub fn fold_strategies(
    base: &CacheConfig,
    strategies: &[OptimizationStrategy],
) -> CacheConfig {
    let mut folded = *base;
    for strategy in strategies {
        let delta = strategy.derive(base);
        if let Some(cache_size) = delta.cache_size {
            folded.cache_size = cache_size;
        }
        if let Some(block_size) = delta.block_size {
            folded.block_size = block_size;
        }
        if let Some(associativity) = delta.associativity {
            folded.associativity = associativity;
        }
    }
    folded
}

/// Builds a fresh cache from the folded configuration
///
/// The cache the base configuration was taken from, and its accumulated
/// statistics, are untouched
///
/// # Errors
///
/// `InvalidConfiguration` when the folded configuration violates the
/// cache's construction invariants, e.g. a strategy targeted size zero
pub fn build_optimized(
    base: &CacheConfig,
    strategies: &[OptimizationStrategy],
) -> Result<DirectMappedCache, SimError> {
    DirectMappedCache::new(fold_strategies(base, strategies))
}
