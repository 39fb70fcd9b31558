use crate::config::CacheConfig;
use crate::error::SimError;
use crate::stats::{rate_pct, CacheStats};

/// The outcome of a single cache access
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit,
    Miss,
}

impl AccessOutcome {
    pub fn is_hit(self) -> bool {
        self == AccessOutcome::Hit
    }
}

/// Splits an address into a set index and a tag
///
/// The bottom of the address is discarded as the intra-block offset, the
/// remaining block number is striped across the sets by modulo, and whatever
/// is left over distinguishes blocks that share a set
///
/// Pure integer arithmetic with no error conditions; callers must have
/// validated `block_size` and `num_sets` as positive, which `CacheConfig`
/// enforces at construction
///
/// # Arguments
///
/// * `address`: The address of the access
/// * `block_size`: Bytes per block
/// * `num_sets`: Number of sets the block number is striped across
///
/// returns: (u64, u64)
pub fn split_address(address: u64, block_size: u64, num_sets: u64) -> (u64, u64) {
    debug_assert!(block_size > 0 && num_sets > 0);
    let block = address / block_size;
    (block % num_sets, address / (block_size * num_sets))
}

/// A direct-mapped cache: one tag/valid slot per set, no associative search
///
/// Each access either hits the single slot its address maps to or overwrites
/// it. There is no recency state to maintain, so hits mutate nothing but the
/// counters, which uphold `hits + misses == total_accesses` after every call
pub struct DirectMappedCache {
    config: CacheConfig,
    tags: Vec<u64>,
    valid: Vec<bool>,
    total_accesses: u64,
    hits: u64,
    misses: u64,
}

impl DirectMappedCache {
    /// Creates an empty cache for a configuration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when any field of the configuration is zero
    pub fn new(config: CacheConfig) -> Result<Self, SimError> {
        config.validate()?;
        let lines = config.cache_size as usize;
        Ok(Self {
            config,
            tags: vec![0; lines],
            valid: vec![false; lines],
            total_accesses: 0,
            hits: 0,
            misses: 0,
        })
    }

    /// Performs one access, reporting whether the addressed block was cached
    ///
    /// A miss unconditionally overwrites the set the address maps to, which
    /// is a no-op eviction when the slot was still empty
    pub fn access(&mut self, address: u64) -> AccessOutcome {
        self.total_accesses += 1;
        let (index, tag) =
            split_address(address, self.config.block_size, self.config.cache_size);
        let index = index as usize;
        if self.valid[index] && self.tags[index] == tag {
            self.hits += 1;
            AccessOutcome::Hit
        } else {
            self.misses += 1;
            self.valid[index] = true;
            self.tags[index] = tag;
            AccessOutcome::Miss
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Hit rate as a percentage, `0.0` before any access
    pub fn hit_rate(&self) -> f64 {
        rate_pct(self.hits, self.total_accesses)
    }

    /// Miss rate as a percentage, `0.0` before any access
    pub fn miss_rate(&self) -> f64 {
        rate_pct(self.misses, self.total_accesses)
    }

    /// Snapshots the counters for the statistics sink
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_counters(self.hits, self.misses)
    }
}
