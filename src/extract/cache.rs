use std::collections::{HashMap, VecDeque};

use crate::transform::CanonicalMatrix;

/// Content-keyed store of finished results: blake3 of the uploaded image
/// bytes → the canonical matrices for every table found in that image.
/// Bounded LRU: a repeated request for the same image skips the engine, and
/// the store cannot grow with session length.
pub struct ResultCache {
    capacity: usize,
    entries: HashMap<blake3::Hash, Vec<CanonicalMatrix>>,
    /// Keys from least- to most-recently used.
    order: VecDeque<blake3::Hash>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        ResultCache {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Cache key for an upload.
    pub fn key(image_bytes: &[u8]) -> blake3::Hash {
        blake3::hash(image_bytes)
    }

    /// Look up a key, marking it most-recently used on a hit.
    pub fn get(&mut self, key: &blake3::Hash) -> Option<&Vec<CanonicalMatrix>> {
        if !self.entries.contains_key(key) {
            return None;
        }
        self.touch(key);
        self.entries.get(key)
    }

    /// Insert (or replace) an entry, evicting the least-recently-used one
    /// when past capacity. A zero-capacity cache stores nothing.
    pub fn insert(&mut self, key: blake3::Hash, matrices: Vec<CanonicalMatrix>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key, matrices).is_some() {
            self.touch(&key);
        } else {
            self.order.push_back(key);
        }
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn touch(&mut self, key: &blake3::Hash) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
            self.order.push_back(*key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u8) -> (blake3::Hash, Vec<CanonicalMatrix>) {
        (ResultCache::key(&[n]), vec![CanonicalMatrix::empty()])
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut cache = ResultCache::new(2);
        let (k1, v1) = entry(1);
        let (k2, v2) = entry(2);
        let (k3, v3) = entry(3);
        cache.insert(k1, v1);
        cache.insert(k2, v2);
        cache.insert(k3, v3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&k1).is_none());
        assert!(cache.get(&k2).is_some());
        assert!(cache.get(&k3).is_some());
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = ResultCache::new(2);
        let (k1, v1) = entry(1);
        let (k2, v2) = entry(2);
        let (k3, v3) = entry(3);
        cache.insert(k1, v1);
        cache.insert(k2, v2);
        assert!(cache.get(&k1).is_some());
        cache.insert(k3, v3);
        // k2 was the stale one this time
        assert!(cache.get(&k1).is_some());
        assert!(cache.get(&k2).is_none());
    }

    #[test]
    fn reinsert_replaces_without_growth() {
        let mut cache = ResultCache::new(2);
        let (k1, v1) = entry(1);
        cache.insert(k1, v1.clone());
        cache.insert(k1, v1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = ResultCache::new(0);
        let (k1, v1) = entry(1);
        cache.insert(k1, v1);
        assert!(cache.is_empty());
        assert!(cache.get(&k1).is_none());
    }
}
