// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core map type for the separate-chaining hash map.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use crate::collections::chained_map::config::ChainedHashMapConfig;
use crate::collections::chained_map::entry::{Chain, Entry};
use crate::collections::chained_map::hash;

/// A hash map over an array of independent entry chains.
///
/// Every stored key appears in exactly one bucket chain, placed
/// deterministically by its hash. The bucket array doubles whenever an
/// insert finds the load-factor threshold reached, relinking all existing
/// entries before the insert proceeds.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash + Eq`.
/// * `V` - The value type.
#[derive(Debug)]
pub struct ChainedHashMap<K, V> {
    /// The bucket array; each slot holds an independent chain.
    buckets: Vec<Chain<K, V>>,

    /// Number of live entries across all chains.
    len: usize,

    /// Entry count at which the next insert grows the bucket array.
    threshold: usize,

    /// Configured growth trigger, retained for threshold recomputation.
    load_factor: f64,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new empty map with default configuration
    /// (16 buckets, 0.75 load factor).
    pub fn new() -> Self {
        Self::with_config(ChainedHashMapConfig::default())
    }

    /// Creates a new empty map with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the map.
    pub fn with_config(config: ChainedHashMapConfig) -> Self {
        let bucket_count = config.get_initial_buckets();
        let load_factor = config.get_load_factor();
        Self {
            buckets: (0..bucket_count).map(|_| None).collect(),
            len: 0,
            threshold: (bucket_count as f64 * load_factor) as usize,
            load_factor,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Calculates the current ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Inserts a key/value pair, replacing in place when the key is
    /// already present.
    ///
    /// The growth threshold is checked before the target bucket is
    /// computed, so the new entry is always placed against the grown
    /// array. A replaced key leaves the entry count unchanged; a new key
    /// is prepended to its bucket chain.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert or update.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// The previous value when the key was already present, `None`
    /// otherwise.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.len >= self.threshold {
            self.grow();
        }

        let index = hash::bucket_index(&key, self.buckets.len());

        let mut cursor = &mut self.buckets[index];
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
            cursor = &mut entry.next;
        }

        let mut entry = Box::new(Entry::new(key, value));
        entry.next = self.buckets[index].take();
        self.buckets[index] = Some(entry);
        self.len += 1;
        None
    }

    /// Gets a reference to the value associated with the key.
    ///
    /// O(1) expected, O(chain length) worst case; a missing key is an
    /// expected outcome, never an error.
    ///
    /// # Returns
    ///
    /// `Some(&value)` if the key is present, `None` otherwise.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = hash::bucket_index(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Gets a mutable reference to the value associated with the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = hash::bucket_index(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Checks whether the key is present.
    ///
    /// Defined as "get succeeds". Values are owned and non-optional in
    /// this map, so presence of a key and presence of its value are the
    /// same thing.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for the key, unlinking it from its chain.
    ///
    /// # Returns
    ///
    /// The removed value when the key was present, `None` otherwise.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = hash::bucket_index(key, self.buckets.len());

        let mut cursor = &mut self.buckets[index];
        while cursor.as_deref().is_some_and(|entry| entry.key.borrow() != key) {
            let Some(entry) = cursor else {
                unreachable!("cursor checked non-empty");
            };
            cursor = &mut entry.next;
        }

        let mut entry = cursor.take()?;
        *cursor = entry.next.take();
        self.len -= 1;
        Some(entry.value)
    }

    /// Returns an iterator over the entries in bucket order.
    ///
    /// The order is an artifact of hashing and carries no meaning.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Renders every stored key as `Keys: [a, b, c]` for diagnostics.
    ///
    /// Walks the bucket array with a plain loop and accumulator; the
    /// rendering depth does not depend on how many entries are stored.
    pub fn keys_text(&self) -> String
    where
        K: Display,
    {
        let mut keys = Vec::with_capacity(self.len);
        for (key, _) in self.iter() {
            keys.push(key.to_string());
        }
        format!("Keys: [{}]", keys.join(", "))
    }

    /// Doubles the bucket array and relinks every entry against the new
    /// bucket count.
    ///
    /// Entries are moved box by box; nothing is copied or reallocated.
    /// Runs synchronously inside the insert that crossed the threshold,
    /// O(total entries).
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old_buckets =
            std::mem::replace(&mut self.buckets, (0..new_count).map(|_| None).collect());
        self.threshold = (new_count as f64 * self.load_factor) as usize;

        for mut chain in old_buckets {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = hash::bucket_index(&entry.key, new_count);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }

        tracing::debug!(
            buckets = new_count,
            entries = self.len,
            "grew bucket array"
        );
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bucket-order iterator over a [`ChainedHashMap`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Chain<K, V>>,
    chain: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((&entry.key, &entry.value));
            }
            match self.buckets.next() {
                Some(slot) => self.chain = slot.as_deref(),
                None => return None,
            }
        }
    }
}

impl<K, V> Display for ChainedHashMap<K, V>
where
    K: Hash + Eq + Display,
    V: Display,
{
    /// Dumps the non-empty buckets as `i: [k=>v] -> [k=>v]` lines.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChainedHashMap[len={}]", self.len)?;
        for (index, slot) in self.buckets.iter().enumerate() {
            let mut cursor = slot.as_deref();
            if cursor.is_none() {
                continue;
            }
            write!(f, "{index}: ")?;
            while let Some(entry) = cursor {
                write!(f, "[{}=>{}]", entry.key, entry.value)?;
                cursor = entry.next.as_deref();
                if cursor.is_some() {
                    write!(f, " -> ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
