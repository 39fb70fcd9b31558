//! # Cacheperf
//!
//! Cacheperf is a library for simulating cache behaviour under a stream of
//! access requests
//!
//! It provides a direct-mapped memory-address cache and a capacity-bounded
//! least-recently-used key cache, both reporting hit/miss statistics, and an
//! optimisation framework which derives new cache configurations from an
//! existing one so two configurations can be compared on the same trace
//!
//! The engine itself is pure computation over in-memory state; traces come in
//! through the `io` and `trace` modules and results leave as plain statistics
//! records

/// Contains the direct-mapped cache and the address decomposition it uses
pub mod cache;

/// Contains definitions for the JSON input format
pub mod config;

/// Contains the error taxonomy for the simulation core
pub mod error;

/// Contains the capacity-bounded least-recently-used key cache
pub mod lru;

/// Contains the optimisation strategies and configuration folding
pub mod optimizer;

/// Contains the comparison of statistics snapshots
pub mod analyzer;

/// Contains the statistics snapshot record
pub mod stats;

/// Contains the drivers which replay traces through caches and collect results
pub mod simulator;

/// Contains parsing for address and page traces
pub mod trace;

/// Contains readers for trace files
pub mod io;

#[cfg(test)]
mod test;

/// Contains deterministic trace generators for tests and benchmarks.
pub mod util;
