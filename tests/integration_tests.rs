// Integration tests for OidMap
// These tests exercise the public surface end to end with realistic key volumes

use std::collections::HashSet;

use oidmap::{Error, Oid, OidMap, Options};
use rand::Rng;

/// Generates `count` distinct pseudo-random identifiers.
fn random_oids(count: usize) -> Vec<Oid> {
    let mut rng = rand::rng();
    let mut raws: HashSet<[u8; Oid::RAW_SIZE]> = HashSet::with_capacity(count);
    while raws.len() < count {
        raws.insert(rng.random());
    }
    raws.into_iter().map(Oid::new).collect()
}

/// Every inserted pair must come back from get, regardless of insertion order
#[test]
fn test_round_trip_10k_random_keys() {
    let oids = random_oids(10_000);
    let mut map = OidMap::new();

    for (i, oid) in oids.iter().enumerate() {
        map.insert(*oid, i).unwrap();
    }

    assert_eq!(map.len(), 10_000);
    for (i, oid) in oids.iter().enumerate() {
        assert_eq!(map.get(oid), Some(&i), "lost binding for {}", oid);
    }
}

/// Iteration must yield keys in strictly ascending full lexicographic order
#[test]
fn test_iteration_order_10k_random_keys() {
    let oids = random_oids(10_000);
    let mut map = OidMap::new();

    for oid in &oids {
        map.insert(*oid, ()).unwrap();
    }

    let visited: Vec<Oid> = map.iter().map(|(oid, _)| *oid).collect();
    assert_eq!(visited.len(), oids.len());

    let mut expected = oids.clone();
    expected.sort();
    assert_eq!(visited, expected);

    for window in visited.windows(2) {
        assert!(
            window[0].as_bytes() < window[1].as_bytes(),
            "iteration order not strictly ascending: {} !< {}",
            window[0],
            window[1]
        );
    }
}

/// A second insert of the same key fails and leaves prior state intact
#[test]
fn test_duplicate_insert_preserves_existing_state() {
    let oids = random_oids(100);
    let mut map = OidMap::new();

    for (i, oid) in oids.iter().enumerate() {
        map.insert(*oid, i).unwrap();
    }

    let dup = oids[42];
    match map.insert(dup, 9_999) {
        Err(Error::DuplicateOid(reported)) => assert_eq!(reported, dup),
        other => panic!("expected DuplicateOid, got {:?}", other),
    }

    // Nothing moved: every original binding is still exact.
    assert_eq!(map.len(), 100);
    for (i, oid) in oids.iter().enumerate() {
        assert_eq!(map.get(oid), Some(&i));
    }
}

/// Lookup on keys that were never inserted returns None
#[test]
fn test_absent_keys_return_none() {
    let oids = random_oids(2_000);
    let (present, absent) = oids.split_at(1_000);

    let mut map = OidMap::new();
    for oid in present {
        map.insert(*oid, ()).unwrap();
    }

    for oid in absent {
        assert_eq!(map.get(oid), None);
        assert!(!map.contains(oid));
    }
}

/// Pre-sizing via expected_keys changes no observable behavior
#[test]
fn test_presized_map_matches_default_map() {
    let oids = random_oids(5_000);

    let mut plain = OidMap::new();
    let mut presized =
        OidMap::with_options(Options::new().expected_keys(5_000)).unwrap();

    for (i, oid) in oids.iter().enumerate() {
        plain.insert(*oid, i).unwrap();
        presized.insert(*oid, i).unwrap();
    }

    assert_eq!(plain.len(), presized.len());
    let a: Vec<(Oid, usize)> = plain.iter().map(|(o, v)| (*o, *v)).collect();
    let b: Vec<(Oid, usize)> = presized.iter().map(|(o, v)| (*o, *v)).collect();
    assert_eq!(a, b);
}

/// Hex-parsed identifiers work end to end
#[test]
fn test_hex_workflow() {
    let mut map = OidMap::new();

    let blob = Oid::from_hex("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d").unwrap();
    let empty = Oid::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();

    map.insert(blob, "hello").unwrap();
    map.insert(empty, "empty").unwrap();

    let parsed: Oid = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d".parse().unwrap();
    assert_eq!(map.get(&parsed), Some(&"hello"));
}
