use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A point-in-time statistics snapshot for a single cache
///
/// Rates are percentages in `[0, 100]`. Snapshots are plain records computed
/// on demand by the caches; whatever consumes them owns all presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate_pct: f64,
    pub miss_rate_pct: f64,
}

impl CacheStats {
    /// Builds a snapshot from raw hit/miss counters
    pub fn from_counters(hits: u64, misses: u64) -> Self {
        let total = hits + misses;
        Self {
            total_accesses: total,
            hits,
            misses,
            hit_rate_pct: rate_pct(hits, total),
            miss_rate_pct: rate_pct(misses, total),
        }
    }

    /// Checks that the snapshot is internally consistent: the counters add up
    /// and both rates are inside `[0, 100]`
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the inconsistency
    pub fn validate(&self) -> Result<(), SimError> {
        if self.hits + self.misses != self.total_accesses {
            return Err(SimError::InvalidInput(
                "hits + misses must equal total_accesses",
            ));
        }
        if !(0.0..=100.0).contains(&self.hit_rate_pct) {
            return Err(SimError::InvalidInput("hit_rate_pct outside [0, 100]"));
        }
        if !(0.0..=100.0).contains(&self.miss_rate_pct) {
            return Err(SimError::InvalidInput("miss_rate_pct outside [0, 100]"));
        }
        Ok(())
    }
}

/// `100 * part / total` as a float, or `0.0` when nothing was counted yet
pub(crate) fn rate_pct(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
