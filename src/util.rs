//! Deterministic trace generators
//!
//! Tests and benchmarks need traces with known reuse behaviour; these build
//! the same fixed patterns every time, so results are reproducible without
//! shipping trace files

/// An address pattern with spatial runs and temporal revisits
///
/// Four regions of consecutive word accesses, each revisited shortly after,
/// followed by a handful of strides across other regions
pub fn locality_address_trace() -> Vec<u64> {
    let mut addresses = Vec::new();
    for base in [1000u64, 5000, 10000, 15000] {
        // Spatial locality: consecutive words
        for i in 0..5 {
            addresses.push(base + i * 4);
        }
        // Temporal locality: revisit
        addresses.push(base);
        addresses.push(base + 4);
    }
    addresses.extend([3000, 7000, 12000, 8000]);
    addresses
}

/// A scattered pattern with no reuse at all; every access is a cold miss for
/// any reasonable configuration
pub fn scattered_address_trace() -> Vec<u64> {
    vec![
        1000, 5000, 9000, 13000, 17000, 2000, 6000, 10000, 14000, 18000, 3000, 7000, 11000,
        15000, 19000, 4000, 8000, 12000, 16000, 20000,
    ]
}

/// A browsing-style key trace over `unique_sites` pages
///
/// Roughly half the visits cycle through a popular fifth of the sites, a
/// third through a moderate band, and the rest through the long tail, so an
/// LRU cache sized near the popular set already captures most of the reuse
pub fn browsing_key_trace(visits: usize, unique_sites: usize) -> Vec<String> {
    let sites: Vec<String> = (0..unique_sites.max(1))
        .map(|i| format!("https://site{i}.com"))
        .collect();
    let popular_len = (sites.len() / 5).max(1);
    let (popular, rest) = sites.split_at(popular_len);
    let moderate_len = (sites.len() * 3 / 10).min(rest.len());
    let (moderate, tail) = rest.split_at(moderate_len);

    let mut pattern = Vec::with_capacity(visits);
    for i in 0..visits {
        let slot = i % 10;
        let pick = if slot < 5 {
            &popular[i % popular.len()]
        } else if slot < 8 && !moderate.is_empty() {
            &moderate[i % moderate.len()]
        } else if !tail.is_empty() {
            &tail[i % tail.len()]
        } else {
            &popular[i % popular.len()]
        };
        pattern.push(pick.clone());
    }
    pattern
}
