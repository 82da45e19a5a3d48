//! HashTable: fixed-capacity chained table with multiplicative hashing.
//!
//! Entries live in a `SlotMap`; each bucket is an `ArrayedList` of slot
//! keys. The bucket for a hash code `h` is the top `d` bits of the
//! wrapping product `z * h`, where `2^d` is the bucket count chosen once
//! from the expected-size hint.

use crate::arrayed_list::ArrayedList;
use crate::hash_element::HashElement;
use crate::multiplier::Multiplier;
use core::fmt;
use log::{debug, warn};
use rand::RngCore;
use slotmap::{DefaultKey, SlotMap};

/// Stable reference to a stored entry. Goes stale after `clear`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub fn get<'a, T>(&self, table: &'a HashTable<T>) -> Option<&'a T> {
        table.slots.get(self.0)
    }

    pub fn get_mut<'a, T>(&self, table: &'a mut HashTable<T>) -> Option<&'a mut T> {
        table.slots.get_mut(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("expected size must be at least 1")]
    ZeroSizeHint,
    #[error("expected size {expected_size} needs more than 2^32 buckets")]
    SizeHintTooLarge { expected_size: usize },
}

/// Bucket occupancy snapshot, see `HashTable::stats`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainStats {
    pub capacity: usize,
    pub len: usize,
    pub empty_buckets: usize,
    pub longest_chain: usize,
}

impl ChainStats {
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }

    /// Mean length of the non-empty chains; 0.0 for an empty table.
    pub fn mean_chain_len(&self) -> f64 {
        let used = self.capacity - self.empty_buckets;
        if used == 0 {
            0.0
        } else {
            self.len as f64 / used as f64
        }
    }
}

type Chain = ArrayedList<DefaultKey>;

#[derive(Clone)]
pub struct HashTable<T> {
    buckets: Box<[Chain]>,
    slots: SlotMap<DefaultKey, T>,
    z: Multiplier,
    d: u32,
}

/// `ceil(log2(2 * expected_size))`, bounded so the index fits a `u32` product.
fn bucket_bits(expected_size: usize) -> Result<u32, TableError> {
    if expected_size == 0 {
        return Err(TableError::ZeroSizeHint);
    }
    let too_large = TableError::SizeHintTooLarge { expected_size };
    let d = expected_size
        .checked_mul(2)
        .and_then(usize::checked_next_power_of_two)
        .ok_or(too_large)?
        .trailing_zeros();
    if d > u32::BITS {
        return Err(too_large);
    }
    Ok(d)
}

impl<T: HashElement> HashTable<T> {
    /// Table for about `expected_size` distinct keys with a random multiplier.
    pub fn with_expected_size(expected_size: usize) -> Result<Self, TableError> {
        Self::with_multiplier(expected_size, Multiplier::random())
    }

    /// Table with a multiplier drawn from `rng`.
    pub fn with_rng<R: RngCore + ?Sized>(
        expected_size: usize,
        rng: &mut R,
    ) -> Result<Self, TableError> {
        Self::with_multiplier(expected_size, Multiplier::from_rng(rng))
    }

    /// Table with an explicit multiplier; bucket placement is deterministic.
    pub fn with_multiplier(expected_size: usize, z: Multiplier) -> Result<Self, TableError> {
        let d = bucket_bits(expected_size)?;
        let capacity = 1usize << d;
        let buckets = (0..capacity).map(|_| Chain::new()).collect();
        debug!(
            "hash table for {expected_size} keys: d = {d}, capacity = {capacity}, z = {:#010x}",
            z.get()
        );
        Ok(Self {
            buckets,
            slots: SlotMap::with_capacity(expected_size),
            z,
            d,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets, always `2^d`.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    pub fn bucket_bits(&self) -> u32 {
        self.d
    }
    pub fn multiplier(&self) -> Multiplier {
        self.z
    }

    #[inline]
    pub(crate) fn index_of(&self, hash_code: u32) -> usize {
        (hash_code.wrapping_mul(self.z.get()) >> (u32::BITS - self.d)) as usize
    }

    /// Bucket that `entry` hashes to; always `< capacity()`.
    pub fn bucket_index(&self, entry: &T) -> usize {
        self.index_of(entry.hash_code())
    }

    fn find_key<F>(&self, hash_code: u32, mut eq: F) -> Option<DefaultKey>
    where
        F: FnMut(&T) -> bool,
    {
        self.buckets[self.index_of(hash_code)]
            .iter()
            .copied()
            .find(|&k| self.slots.get(k).map(&mut eq).unwrap_or(false))
    }

    pub fn find(&self, probe: &T) -> Option<&T> {
        self.find_by(probe.hash_code(), |e| e.equals(probe))
    }

    pub fn find_mut(&mut self, probe: &T) -> Option<&mut T> {
        self.find_by_mut(probe.hash_code(), |e| e.equals(probe))
    }

    pub fn find_handle(&self, probe: &T) -> Option<Handle> {
        self.find_key(probe.hash_code(), |e| e.equals(probe))
            .map(Handle)
    }

    pub fn contains(&self, probe: &T) -> bool {
        self.find_handle(probe).is_some()
    }

    /// Look up by a precomputed hash code and key predicate.
    ///
    /// `hash_code` must be the value `HashElement::hash_code` returns for the
    /// entry `eq` accepts, otherwise the wrong chain is scanned.
    pub fn find_by<F>(&self, hash_code: u32, eq: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        let k = self.find_key(hash_code, eq)?;
        self.slots.get(k)
    }

    pub fn find_by_mut<F>(&mut self, hash_code: u32, eq: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let k = self.find_key(hash_code, eq)?;
        self.slots.get_mut(k)
    }

    /// Store `entry`, replacing any entry with an equal key.
    ///
    /// Returns the replaced entry, or `None` when the key is new. The whole
    /// entry is swapped, not merged: to bump a field of a stored entry use
    /// `find_mut` instead.
    pub fn add(&mut self, entry: T) -> Option<T> {
        let hash_code = entry.hash_code();
        if let Some(k) = self.find_key(hash_code, |e| e.equals(&entry)) {
            return self
                .slots
                .get_mut(k)
                .map(|stored| core::mem::replace(stored, entry));
        }

        let i = self.index_of(hash_code);
        let k = self.slots.insert(entry);
        // Newest first; chain order carries no meaning.
        self.buckets[i].insert(0, k);

        if self.len() == self.capacity() {
            warn!(
                "hash table load factor reached 1.0 ({} keys in {} buckets); the size hint was too small",
                self.len(),
                self.capacity()
            );
        }
        None
    }

    /// Drop every entry. Capacity and multiplier are unchanged.
    pub fn clear(&mut self) {
        let dropped = self.len();
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.slots.clear();
        debug!("hash table cleared, {dropped} entries dropped");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.slots.values(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            it: self.slots.values_mut(),
        }
    }

    pub fn stats(&self) -> ChainStats {
        let (empty_buckets, longest_chain) =
            self.buckets
                .iter()
                .fold((0, 0), |(empty, longest), chain| {
                    let n = chain.len();
                    (empty + usize::from(n == 0), longest.max(n))
                });
        ChainStats {
            capacity: self.capacity(),
            len: self.len(),
            empty_buckets,
            longest_chain,
        }
    }
}

impl<T> fmt::Debug for HashTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.slots.len())
            .field("capacity", &self.buckets.len())
            .field("multiplier", &self.z)
            .finish_non_exhaustive()
    }
}

/// Iterator over stored entries, in no particular order.
pub struct Iter<'a, T> {
    it: slotmap::basic::Values<'a, DefaultKey, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

pub struct IterMut<'a, T> {
    it: slotmap::basic::ValuesMut<'a, DefaultKey, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

impl<'a, T: HashElement> IntoIterator for &'a HashTable<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
