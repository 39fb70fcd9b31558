use std::hash::Hash;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::analyzer::{compare, Comparison};
use crate::cache::DirectMappedCache;
use crate::config::CacheConfig;
use crate::error::SimError;
use crate::lru::LruKeyCache;
use crate::optimizer::{build_optimized, OptimizationStrategy};
use crate::stats::CacheStats;

/// Drives an address trace through a direct-mapped cache and collects results
///
/// It supports calling run multiple times, and will update the time taken to
/// simulate and the statistics accordingly
pub struct Simulator {
    cache: DirectMappedCache,
    simulation_time: Duration,
}

impl Simulator {
    /// Creates a new simulator for a given configuration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the configuration has a zero field
    pub fn new(config: CacheConfig) -> Result<Self, SimError> {
        Ok(Self {
            cache: DirectMappedCache::new(config)?,
            simulation_time: Duration::new(0, 0),
        })
    }

    /// Replays a trace, one access at a time, and snapshots the statistics
    ///
    /// Accesses never fail once the cache is constructed, so the replay has
    /// no error path
    pub fn run(&mut self, addresses: &[u64]) -> CacheStats {
        let start = Instant::now();
        for &address in addresses {
            self.cache.access(address);
        }
        self.simulation_time += start.elapsed();
        self.cache.stats()
    }

    /// Gets the wall-clock execution time across all runs so far
    pub fn get_execution_time(&self) -> &Duration {
        &self.simulation_time
    }

    pub fn cache(&self) -> &DirectMappedCache {
        &self.cache
    }
}

/// The before/after record produced by an optimisation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub base_config: CacheConfig,
    pub optimized_config: CacheConfig,
    pub comparison: Comparison,
}

/// Replays one trace through a base cache and a strategy-derived cache
///
/// Both caches are constructed fresh and share no state; the base cache's
/// statistics are accumulated independently of the optimised run
///
/// # Errors
///
/// `InvalidConfiguration` when the base or the folded configuration cannot
/// construct a cache
pub fn optimize_and_compare(
    base: CacheConfig,
    strategies: &[OptimizationStrategy],
    addresses: &[u64],
) -> Result<OptimizationReport, SimError> {
    let mut base_cache = DirectMappedCache::new(base)?;
    let mut optimized = build_optimized(&base, strategies)?;
    for &address in addresses {
        base_cache.access(address);
        optimized.access(address);
    }
    let comparison = compare(&base_cache.stats(), &optimized.stats())?;
    Ok(OptimizationReport {
        base_config: base,
        optimized_config: *optimized.config(),
        comparison,
    })
}

/// Hit/miss statistics for one page-cache capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub capacity: usize,
    pub stats: CacheStats,
}

/// Runs the same key trace through a fresh LRU cache for each capacity
///
/// Instances never alias state, so each capacity sees the full trace from a
/// cold cache
///
/// # Errors
///
/// `InvalidConfiguration` when any requested capacity is zero
pub fn sweep_capacities<K: Eq + Hash + Clone>(
    keys: &[K],
    capacities: &[usize],
) -> Result<Vec<SweepPoint>, SimError> {
    let mut points = Vec::with_capacity(capacities.len());
    for &capacity in capacities {
        let mut cache = LruKeyCache::new(capacity)?;
        for key in keys {
            cache.access(key.clone());
        }
        points.push(SweepPoint {
            capacity,
            stats: cache.stats(),
        });
    }
    Ok(points)
}
