// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the chained hash map used as a player registry.
//! Verifies that bucket-array growth stays transparent to callers that only
//! see the public API.

use veintiuna_lib::collections::chained_map::{ChainedHashMap, ChainedHashMapConfig};
use veintiuna_lib::game::Player;

#[test]
fn test_growth_preserves_every_registered_player() {
    let mut registry: ChainedHashMap<String, Player> = ChainedHashMap::new();
    assert_eq!(registry.bucket_count(), 16);

    // Thirteen seats: the thirteenth insert crosses the 0.75 threshold of
    // a 16-bucket array and must double it before landing
    for i in 0..12 {
        registry.insert(format!("seat{i}"), Player::new(format!("seat{i}")));
        assert_eq!(registry.bucket_count(), 16);
    }
    registry.insert("seat12".to_string(), Player::new("seat12"));

    assert_eq!(registry.bucket_count(), 32);
    assert_eq!(registry.len(), 13);

    for i in 0..13 {
        let name = format!("seat{i}");
        let player = registry.get(&name).expect("player lost in growth");
        assert_eq!(player.name(), name);
    }
}

#[test]
fn test_growth_cascades_through_repeated_doubling() {
    let mut registry = ChainedHashMap::with_config(
        ChainedHashMapConfig::new()
            .with_initial_buckets(2)
            .with_load_factor(0.75),
    );

    for i in 0..100 {
        registry.insert(i, i * 3);
        assert!(registry.load_factor() <= 0.75);
    }

    // 2 -> 4 -> ... doubling only, so the final count is a power of two
    assert!(registry.bucket_count().is_power_of_two());
    assert!(registry.bucket_count() >= 128);

    for i in 0..100 {
        assert_eq!(registry.get(&i), Some(&(i * 3)));
    }
}

#[test]
fn test_removals_and_reinserts_survive_growth() {
    let mut registry = ChainedHashMap::new();

    for i in 0..40 {
        registry.insert(format!("k{i}"), i);
    }
    for i in (0..40).step_by(2) {
        assert_eq!(registry.remove(&format!("k{i}")), Some(i));
    }
    for i in 100..140 {
        registry.insert(format!("k{i}"), i);
    }

    assert_eq!(registry.len(), 60);
    for i in (1..40).step_by(2) {
        assert_eq!(registry.get(&format!("k{i}")), Some(&i));
    }
    for i in 100..140 {
        assert_eq!(registry.get(&format!("k{i}")), Some(&i));
    }
}
