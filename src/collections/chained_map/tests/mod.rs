// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the chained hash map.


use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::collections::chained_map::{ChainedHashMap, ChainedHashMapConfig};

/// Key whose hash is constant: every instance lands in the same bucket no
/// matter how large the array grows, forcing chains to form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CollidingKey(u32);

impl Hash for CollidingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(7);
    }
}

impl Display for CollidingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

#[test]
fn test_insert_and_get() {
    let mut map = ChainedHashMap::new();

    assert_eq!(map.insert("key1".to_string(), 1), None);
    assert_eq!(map.insert("key2".to_string(), 2), None);

    assert_eq!(map.get("key1"), Some(&1));
    assert_eq!(map.get("key2"), Some(&2));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_get_missing_key_is_not_an_error() {
    let map: ChainedHashMap<String, i32> = ChainedHashMap::new();
    assert_eq!(map.get("absent"), None);
    assert!(!map.contains_key("absent"));
}

#[test]
fn test_insert_existing_key_replaces_in_place() {
    let mut map = ChainedHashMap::new();

    assert_eq!(map.insert("key1".to_string(), 1), None);
    assert_eq!(map.insert("key1".to_string(), 2), Some(1));

    // The value changed, the entry count did not
    assert_eq!(map.get("key1"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_remove() {
    let mut map = ChainedHashMap::new();
    map.insert("key1".to_string(), 1);
    map.insert("key2".to_string(), 2);

    assert_eq!(map.remove("key1"), Some(1));
    assert_eq!(map.get("key1"), None);
    assert_eq!(map.len(), 1);

    // Removing an absent key is an expected outcome
    assert_eq!(map.remove("key1"), None);
    assert_eq!(map.len(), 1);

    assert_eq!(map.remove("key2"), Some(2));
    assert!(map.is_empty());
}

#[test]
fn test_remove_from_every_chain_position() {
    // Constant-hash keys force every entry into one chain
    let mut map = ChainedHashMap::new();
    for i in 0..5 {
        map.insert(CollidingKey(i), i);
    }

    // New entries are prepended, so the chain runs 4,3,2,1,0: remove the
    // middle, the tail, and the head
    assert_eq!(map.remove(&CollidingKey(2)), Some(2));
    assert_eq!(map.remove(&CollidingKey(0)), Some(0));
    assert_eq!(map.remove(&CollidingKey(4)), Some(4));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&CollidingKey(1)), Some(&1));
    assert_eq!(map.get(&CollidingKey(3)), Some(&3));
}

#[test]
fn test_colliding_keys_stay_distinct() {
    // Equality, not hash identity, decides uniqueness within a chain
    let mut map = ChainedHashMap::new();
    for i in 0..8 {
        map.insert(CollidingKey(i), i * 10);
    }

    assert_eq!(map.len(), 8);
    for i in 0..8 {
        assert_eq!(map.get(&CollidingKey(i)), Some(&(i * 10)));
    }

    // Replacement still finds the right entry mid-chain
    assert_eq!(map.insert(CollidingKey(3), 999), Some(30));
    assert_eq!(map.len(), 8);
}

#[test]
fn test_growth_is_triggered_before_the_insert_lands() {
    let mut map = ChainedHashMap::new();
    assert_eq!(map.bucket_count(), 16);

    // Threshold is 16 * 0.75 = 12: the first twelve inserts fit
    for i in 0..12 {
        map.insert(format!("player{i}"), i);
        assert_eq!(map.bucket_count(), 16);
    }

    // The 13th insert grows the array to 32 before completing
    map.insert("player12".to_string(), 12);
    assert_eq!(map.bucket_count(), 32);
    assert_eq!(map.len(), 13);

    // Every key inserted before the growth is still retrievable
    for i in 0..13 {
        assert_eq!(map.get(&format!("player{i}")), Some(&i));
    }
}

#[test]
fn test_custom_config_moves_the_growth_trigger() {
    let mut map = ChainedHashMap::with_config(
        ChainedHashMapConfig::new()
            .with_initial_buckets(4)
            .with_load_factor(0.5),
    );

    // Threshold is 4 * 0.5 = 2: the third insert doubles the array
    map.insert("a", 1);
    map.insert("b", 2);
    assert_eq!(map.bucket_count(), 4);

    map.insert("c", 3);
    assert_eq!(map.bucket_count(), 8);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_load_factor_invariant_after_every_insert() {
    let mut map = ChainedHashMap::new();
    for i in 0..200 {
        map.insert(i, i * 10);
        assert!(
            map.load_factor() <= 0.75,
            "load factor {} exceeded threshold after insert {}",
            map.load_factor(),
            i
        );
    }
}

#[test]
fn test_repeated_replacement_keeps_a_single_entry() {
    let mut map = ChainedHashMap::new();
    for i in 0..50 {
        map.insert("same-key".to_string(), i);
    }
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("same-key"), Some(&49));
}

#[test]
fn test_iter_visits_every_entry_once() {
    let mut map = ChainedHashMap::new();
    for i in 0..40 {
        map.insert(i, i * 2);
    }

    let mut seen: Vec<i32> = map.iter().map(|(&k, _)| k).collect();
    seen.sort_unstable();
    let expected: Vec<i32> = (0..40).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_keys_text() {
    let mut map = ChainedHashMap::new();
    assert_eq!(map.keys_text(), "Keys: []");

    map.insert("P1".to_string(), 1);
    let text = map.keys_text();
    assert_eq!(text, "Keys: [P1]");

    map.insert("P2".to_string(), 2);
    let text = map.keys_text();
    assert!(text.starts_with("Keys: ["));
    assert!(text.contains("P1"));
    assert!(text.contains("P2"));
}

#[test]
fn test_display_dumps_occupied_buckets() {
    let mut map = ChainedHashMap::new();
    map.insert(CollidingKey(1), 10);
    map.insert(CollidingKey(2), 20);

    let dump = map.to_string();
    assert!(dump.starts_with("ChainedHashMap[len=2]"));
    assert!(dump.contains("[C2=>20] -> [C1=>10]"));
}

#[test]
fn test_get_mut_updates_value_slot() {
    let mut map = ChainedHashMap::new();
    map.insert("wins".to_string(), 0);

    if let Some(wins) = map.get_mut("wins") {
        *wins += 1;
    }
    assert_eq!(map.get("wins"), Some(&1));
}
