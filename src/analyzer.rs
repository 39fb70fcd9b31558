use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::stats::CacheStats;

/// Which of two compared caches performed better
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    FirstBetter,
    SecondBetter,
    Tie,
}

/// The result of comparing two statistics snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: CacheStats,
    pub second: CacheStats,
    pub verdict: Verdict,
}

/// Compares two snapshots on hit rate alone, strict in both directions
///
/// Pure; both snapshots are validated before being ranked
///
/// # Errors
///
/// `InvalidInput` when either snapshot is internally inconsistent
pub fn compare(first: &CacheStats, second: &CacheStats) -> Result<Comparison, SimError> {
    first.validate()?;
    second.validate()?;
    let verdict = if first.hit_rate_pct > second.hit_rate_pct {
        Verdict::FirstBetter
    } else if first.hit_rate_pct < second.hit_rate_pct {
        Verdict::SecondBetter
    } else {
        Verdict::Tie
    };
    Ok(Comparison {
        first: first.clone(),
        second: second.clone(),
        verdict,
    })
}
