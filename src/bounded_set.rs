// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity membership set over `u64` keys.
//!
//! Open addressing with linear probing. Capacity is chosen at creation and
//! the table never resizes, so placing a key can fail with
//! [`CapacityExhausted`]. There is no removal, hence no tombstones: once a
//! slot is occupied it stays occupied for the life of the set.
//!
//! Two insertion variants exist. [`BoundedSet::insert`] deduplicates and is
//! what new callers should use; [`BoundedSet::push`] is the bag variant, in
//! which a repeated key occupies an extra slot and is counted twice.

use std::fmt;

use crate::AllocError;

/// Every slot along the probe path was occupied; the key was not placed and
/// the set is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExhausted;

impl fmt::Display for CapacityExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bounded set is at capacity")
    }
}

impl std::error::Error for CapacityExhausted {}

/// Capacity used by [`BoundedSet::new`].
pub const DEFAULT_CAPACITY: usize = 300;

/// A slot is `Some(key)` when occupied, `None` when free.
#[derive(Debug, Clone)]
pub struct BoundedSet {
    slots: Box<[Option<u64>]>,
    count: usize,
}

impl BoundedSet {
    /// Creates a set with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Result<BoundedSet, AllocError> {
        BoundedSet::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a set with room for exactly `capacity` keys.
    ///
    /// Panics on `capacity == 0`: a set that can hold nothing (and would
    /// divide by zero in the hash) is a programmer error, not a runtime
    /// condition.
    pub fn with_capacity(capacity: usize) -> Result<BoundedSet, AllocError> {
        assert!(capacity > 0, "bounded set capacity must be positive");
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, None);
        Ok(BoundedSet {
            slots: slots.into_boxed_slice(),
            count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    fn hash(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    /// Places `key` in the first free slot along its probe path without
    /// checking for an existing copy: pushing a key twice while slots remain
    /// occupies two slots and `len` counts both.
    pub fn push(&mut self, key: u64) -> Result<(), CapacityExhausted> {
        let capacity = self.slots.len();
        let start = self.hash(key);
        for i in 0..capacity {
            let index = (start + i) % capacity;
            if self.slots[index].is_none() {
                self.slots[index] = Some(key);
                self.count += 1;
                return Ok(());
            }
        }
        Err(CapacityExhausted)
    }

    /// Deduplicating insert.
    ///
    /// Returns `Ok(true)` if `key` was placed, `Ok(false)` if an equal key
    /// was already present (set unchanged), and [`CapacityExhausted`] if a
    /// full probe cycle found neither `key` nor a free slot.
    pub fn insert(&mut self, key: u64) -> Result<bool, CapacityExhausted> {
        let capacity = self.slots.len();
        let start = self.hash(key);
        for i in 0..capacity {
            let index = (start + i) % capacity;
            match self.slots[index] {
                Some(existing) if existing == key => return Ok(false),
                Some(_) => {}
                // No removals means any copy of `key` sits before the first
                // free slot on its probe path, so this slot is safe to claim.
                None => {
                    self.slots[index] = Some(key);
                    self.count += 1;
                    return Ok(true);
                }
            }
        }
        Err(CapacityExhausted)
    }

    /// Whether `key` occupies some slot.
    pub fn contains(&self, key: u64) -> bool {
        self.find(key).is_some()
    }

    /// Slot index currently holding `key`.
    ///
    /// Scans the full probe cycle, not just the occupied run at the hash
    /// slot; a probe that completes the cycle without a match reports the
    /// key absent.
    pub fn find(&self, key: u64) -> Option<usize> {
        let capacity = self.slots.len();
        let start = self.hash(key);
        for i in 0..capacity {
            let index = (start + i) % capacity;
            if self.slots[index] == Some(key) {
                return Some(index);
            }
        }
        None
    }

    /// Occupied keys in slot-index order (not insertion order).
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Exports the occupied keys in slot-index order, exactly `len` of them.
    ///
    /// Returns `None` when the set is empty, when `count` has somehow left
    /// the `0..=capacity` range (invariant check), or when storage for the
    /// result cannot be obtained.
    pub fn to_vec(&self) -> Option<Vec<u64>> {
        if self.count == 0 || self.count > self.slots.len() {
            return None;
        }
        let mut keys = Vec::new();
        keys.try_reserve_exact(self.count).ok()?;
        keys.extend(self.iter());
        debug_assert_eq!(keys.len(), self.count);
        Some(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_capacity() {
        let set = BoundedSet::new().unwrap();
        assert_eq!(set.capacity(), DEFAULT_CAPACITY);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_then_contains_distinct_keys() {
        let mut set = BoundedSet::with_capacity(64).unwrap();
        let keys: Vec<u64> = (0..40).map(|i| i * 17 + 3).collect();
        for &key in &keys {
            assert_eq!(set.insert(key), Ok(true));
        }
        assert_eq!(set.len(), keys.len());
        for &key in &keys {
            assert!(set.contains(key), "key {} missing", key);
        }
        assert!(!set.contains(999_999));
    }

    #[test]
    fn test_insert_at_full_capacity_fails_and_leaves_count() {
        let mut set = BoundedSet::with_capacity(4).unwrap();
        for key in 0..4 {
            assert_eq!(set.insert(key), Ok(true));
        }
        assert!(set.is_full());
        assert_eq!(set.insert(100), Err(CapacityExhausted));
        assert_eq!(set.len(), 4);
        assert_eq!(set.push(100), Err(CapacityExhausted));
        assert_eq!(set.len(), 4);
        // Existing keys still answer membership at full capacity.
        assert!(set.contains(2));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_to_vec_slot_order() {
        let mut set = BoundedSet::with_capacity(300).unwrap();
        for key in [5u64, 12, 7] {
            set.insert(key).unwrap();
        }
        let keys = set.to_vec().unwrap();
        // Capacity 300 hashes each key to its own value, so slot order is
        // ascending key order here.
        assert_eq!(keys, vec![5, 7, 12]);
    }

    #[test]
    fn test_to_vec_empty_is_none() {
        let set = BoundedSet::with_capacity(8).unwrap();
        assert_eq!(set.to_vec(), None);
    }

    #[test]
    fn test_push_counts_duplicates_insert_does_not() {
        let mut set = BoundedSet::with_capacity(16).unwrap();
        assert_eq!(set.insert(9), Ok(true));
        assert_eq!(set.insert(9), Ok(false));
        assert_eq!(set.len(), 1);

        // Bag behavior: the same key lands in a second slot.
        set.push(9).unwrap();
        set.push(9).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec().unwrap(), vec![9, 9, 9]);

        // Deduplicating insert still sees the key as present.
        assert_eq!(set.insert(9), Ok(false));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_probe_wraps_around_table_end() {
        let mut set = BoundedSet::with_capacity(5).unwrap();
        // 4 hashes to the last slot; 9 and 14 collide with it and must wrap
        // to slots 0 and 1.
        for key in [4u64, 9, 14] {
            assert_eq!(set.insert(key), Ok(true));
        }
        assert_eq!(set.find(4), Some(4));
        assert_eq!(set.find(9), Some(0));
        assert_eq!(set.find(14), Some(1));
        for key in [4u64, 9, 14] {
            assert!(set.contains(key));
        }
        assert!(!set.contains(19));
    }

    #[test]
    fn test_find_absent_is_none_even_at_slot_zero() {
        let mut set = BoundedSet::with_capacity(7).unwrap();
        set.insert(0).unwrap();
        assert_eq!(set.find(0), Some(0));
        assert_eq!(set.find(7), None);
        assert_eq!(set.find(3), None);
    }

    #[test]
    fn test_collision_chain_membership() {
        let mut set = BoundedSet::with_capacity(6).unwrap();
        // All three hash to slot 0 and form a linear run.
        for key in [0u64, 6, 12] {
            set.insert(key).unwrap();
        }
        assert_eq!(set.find(0), Some(0));
        assert_eq!(set.find(6), Some(1));
        assert_eq!(set.find(12), Some(2));
        // A fourth colliding key extends the run, not a duplicate.
        assert_eq!(set.insert(18), Ok(true));
        assert_eq!(set.find(18), Some(3));
        assert_eq!(set.len(), 4);
    }
}
