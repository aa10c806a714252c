#![cfg(feature = "collection")]
//! Property-based tests for [`AssocMap`].
//!
//! ## Map Laws
//! - **Get-Insert**: `map.insert(k, v); map.get(k) == Some(v)`
//! - **Insert Order**: keys iterate in order of first insertion
//! - **Replace Keeps Position**: re-inserting a key does not move it
//! - **Remove**: removing a key preserves the order of the others

use std::collections::HashSet;

use fnkit::collection::AssocMap;
use proptest::prelude::*;

fn first_occurrences(keys: &[u8]) -> Vec<u8> {
    let mut seen = HashSet::new();
    keys.iter().copied().filter(|key| seen.insert(*key)).collect()
}

proptest! {
    #[test]
    fn prop_get_after_insert(entries in prop::collection::vec((any::<u8>(), any::<i32>()), 0..64), key in any::<u8>(), value in any::<i32>()) {
        let mut map: AssocMap<u8, i32> = entries.into_iter().collect();
        map.insert(key, value);

        prop_assert_eq!(map.get(&key), Some(&value));
        prop_assert!(map.contains_key(&key));
    }

    #[test]
    fn prop_keys_in_first_insertion_order(keys in prop::collection::vec(any::<u8>(), 0..64)) {
        let map: AssocMap<u8, usize> = keys.iter().copied().zip(0..).collect();

        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), first_occurrences(&keys));
        prop_assert_eq!(map.len(), first_occurrences(&keys).len());
    }

    #[test]
    fn prop_last_write_wins(keys in prop::collection::vec(any::<u8>(), 1..64)) {
        let map: AssocMap<u8, usize> = keys.iter().copied().zip(0..).collect();

        for (position, key) in keys.iter().enumerate() {
            let last = keys.iter().rposition(|candidate| candidate == key);
            prop_assert_eq!(map.get(key).copied(), last);
            prop_assert!(last >= Some(position));
        }
    }

    #[test]
    fn prop_remove_preserves_order(keys in prop::collection::vec(any::<u8>(), 1..64), index in any::<prop::sample::Index>()) {
        let mut map: AssocMap<u8, u8> = keys.iter().map(|key| (*key, *key)).collect();
        let order = first_occurrences(&keys);
        let removed = order[index.index(order.len())];

        prop_assert_eq!(map.remove(&removed), Some(removed));
        prop_assert_eq!(map.get(&removed), None);

        let expected: Vec<u8> = order.into_iter().filter(|key| *key != removed).collect();
        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), expected.clone());
        for key in expected {
            prop_assert_eq!(map.get(&key), Some(&key));
        }
    }

    #[test]
    fn prop_equality_is_order_sensitive(a in any::<u8>(), b in any::<u8>()) {
        prop_assume!(a != b);
        let forward = AssocMap::from([(a, ()), (b, ())]);
        let backward = AssocMap::from([(b, ()), (a, ())]);

        prop_assert_ne!(forward, backward);
    }
}
