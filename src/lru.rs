use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::AccessOutcome;
use crate::error::SimError;
use crate::stats::{rate_pct, CacheStats};

/// One slot in the recency list. `prev` points towards the least-recently-used
/// end, `next` towards the most-recently-used end.
struct Slot<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A capacity-bounded key cache with least-recently-used eviction
///
/// Keys live in slots threaded into a doubly linked recency list, with a map
/// from key to slot index, so hits, insertions, and evictions are all constant
/// time. The slot vector never grows past the capacity; an eviction hands its
/// slot straight to the incoming key
///
/// This models object caches such as a browser's page cache, where only
/// presence matters and the interesting behaviour is the recency order
pub struct LruKeyCache<K> {
    capacity: usize,
    map: HashMap<K, usize>,
    slots: Vec<Slot<K>>,
    /// Least recently used
    head: Option<usize>,
    /// Most recently used
    tail: Option<usize>,
    total_accesses: u64,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash + Clone> LruKeyCache<K> {
    /// Creates an empty cache holding at most `capacity` keys
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::InvalidConfiguration("capacity"));
        }
        Ok(Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            total_accesses: 0,
            hits: 0,
            misses: 0,
        })
    }

    /// Performs one access, reporting whether the key was cached
    ///
    /// A hit repositions the key at the most-recently-used end and changes
    /// nothing else. A miss on a full cache first evicts the key at the
    /// least-recently-used end, then inserts the new key as most recent
    pub fn access(&mut self, key: K) -> AccessOutcome {
        self.total_accesses += 1;
        if let Some(&slot) = self.map.get(&key) {
            self.detach(slot);
            self.push_mru(slot);
            self.hits += 1;
            return AccessOutcome::Hit;
        }
        self.misses += 1;
        if self.map.len() >= self.capacity {
            if let Some(lru) = self.head {
                self.detach(lru);
                self.map.remove(&self.slots[lru].key);
                self.slots[lru].key = key.clone();
                self.map.insert(key, lru);
                self.push_mru(lru);
                return AccessOutcome::Miss;
            }
        }
        let slot = self.slots.len();
        self.slots.push(Slot {
            key: key.clone(),
            prev: None,
            next: None,
        });
        self.map.insert(key, slot);
        self.push_mru(slot);
        AccessOutcome::Miss
    }

    /// Gets the cached keys ordered least- to most-recently used
    ///
    /// A read-only projection of the recency list; never mutates state
    pub fn get_current_contents(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.map.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            keys.push(self.slots[slot].key.clone());
            cursor = self.slots[slot].next;
        }
        keys
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
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

    /// Unlinks a slot from the recency list, patching its neighbours
    fn detach(&mut self, slot: usize) {
        match (self.slots[slot].prev, self.slots[slot].next) {
            (None, None) => {
                // Only node
                self.head = None;
                self.tail = None;
            }
            (None, Some(next)) => {
                // Head
                self.head = Some(next);
                self.slots[next].prev = None;
            }
            (Some(prev), None) => {
                // Tail
                self.tail = Some(prev);
                self.slots[prev].next = None;
            }
            (Some(prev), Some(next)) => {
                // Middle node
                self.slots[prev].next = Some(next);
                self.slots[next].prev = Some(prev);
            }
        }
        self.slots[slot].prev = None;
        self.slots[slot].next = None;
    }

    /// Appends a detached slot at the most-recently-used end
    fn push_mru(&mut self, slot: usize) {
        self.slots[slot].prev = self.tail;
        self.slots[slot].next = None;
        if let Some(tail) = self.tail {
            self.slots[tail].next = Some(slot);
        }
        self.tail = Some(slot);
        if self.head.is_none() {
            self.head = Some(slot);
        }
    }
}
