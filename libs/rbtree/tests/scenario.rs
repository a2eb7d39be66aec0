mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rbtree::RBTree;

use crate::common::{Entry, assert_height_bound, init_tracing, keys};

#[test]
fn smoke() {
    init_tracing();

    let mut tree = RBTree::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        tracing::debug!("inserting {key}");
        tree.insert(Entry::new(key, key * 10));
        tree.assert_valid();
    }

    assert_eq!(tree.min(), Some(&Entry::new(1, 10)));
    assert_eq!(tree.max(), Some(&Entry::new(9, 90)));
    assert_eq!(tree.len(), 7);
    assert_eq!(keys(&tree), [1, 3, 4, 5, 7, 8, 9]);

    assert_eq!(tree.remove(&Entry::probe(5)), Some(Entry::new(5, 50)));
    assert_eq!(tree.get(&Entry::probe(5)), None);
    assert_eq!(tree.len(), 6);
    tree.assert_valid();
    assert_eq!(keys(&tree), [1, 3, 4, 7, 8, 9]);
}

#[test]
fn round_trip() {
    let mut tree = RBTree::new();

    for key in [42, 7, 1000, 0, 13] {
        tree.insert(Entry::new(key, key + 1));
        assert_eq!(tree.get(&Entry::probe(key)), Some(&Entry::new(key, key + 1)));
        assert!(tree.contains(&Entry::probe(key)));
    }

    for key in [7, 0, 1000, 42, 13] {
        tree.remove(&Entry::probe(key));
        assert_eq!(tree.get(&Entry::probe(key)), None);
        assert!(!tree.contains(&Entry::probe(key)));
        tree.assert_valid();
    }

    assert!(tree.is_empty());
}

#[test]
fn remove_absent_is_noop() {
    let mut tree: RBTree<Entry> = (0..20).map(|key| Entry::new(key * 2, key)).collect();
    let before = keys(&tree);

    assert_eq!(tree.remove(&Entry::probe(7)), None);
    assert_eq!(tree.remove(&Entry::probe(100)), None);
    assert_eq!(tree.len(), 20);
    assert_eq!(keys(&tree), before);
    tree.assert_valid();

    let mut empty: RBTree<Entry> = RBTree::new();
    assert_eq!(empty.remove(&Entry::probe(1)), None);
    assert!(empty.is_empty());
    empty.assert_valid();
}

#[test]
fn overwrite_replaces_payload() {
    let mut tree: RBTree<Entry> = (0..32).map(|key| Entry::new(key, 0)).collect();
    let height = tree.height();
    let black_height = tree.black_height();
    let before = keys(&tree);

    for key in (0..32).step_by(3) {
        assert_eq!(tree.insert(Entry::new(key, 1)), Some(Entry::new(key, 0)));
    }

    assert_eq!(tree.len(), 32);
    assert_eq!(keys(&tree), before);
    assert_eq!(tree.height(), height);
    assert_eq!(tree.black_height(), black_height);
    assert_eq!(tree.get(&Entry::probe(3)).map(|e| e.value), Some(1));
    assert_eq!(tree.get(&Entry::probe(4)).map(|e| e.value), Some(0));
    tree.assert_valid();
}

#[test]
fn ascend_and_descend() {
    let mut keys: Vec<u64> = (0..200).map(|i| i * 7 % 200).collect();
    keys.shuffle(&mut rand::rng());
    let tree: RBTree<u64> = keys.into_iter().collect();

    let mut ascending = Vec::new();
    tree.ascend(|key| ascending.push(*key));
    assert!(ascending.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ascending.len(), 200);

    let mut descending = Vec::new();
    tree.descend(|key| descending.push(*key));
    ascending.reverse();
    assert_eq!(descending, ascending);

    let reversed: Vec<u64> = tree.iter().rev().copied().collect();
    assert_eq!(reversed, descending);
}

#[test]
fn sorted_inserts_stay_balanced() {
    let mut tree = RBTree::new();
    for key in 0..1024u64 {
        tree.insert(key);
        assert_height_bound(&tree);
    }
    tree.assert_valid();

    let mut tree = RBTree::new();
    for key in (0..1024u64).rev() {
        tree.insert(key);
        assert_height_bound(&tree);
    }
    tree.assert_valid();
}

#[test]
fn stress() {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(0x5eed);

    let mut keys: Vec<u64> = (0..100_000).collect();
    keys.shuffle(&mut rng);
    keys.truncate(1000);

    let mut tree = RBTree::new();
    for key in &keys {
        assert_eq!(tree.insert(Entry::new(*key, !*key)), None);
    }
    tree.assert_valid();
    assert_height_bound(&tree);
    assert_eq!(tree.len(), 1000);

    keys.shuffle(&mut rng);
    for (removed, key) in keys.iter().enumerate() {
        assert_eq!(tree.remove(&Entry::probe(*key)), Some(Entry::new(*key, !*key)));
        tree.assert_valid();
        assert_eq!(tree.len(), 999 - removed);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
}

#[test]
fn strings_and_pairs() {
    let mut words: RBTree<&str> = ["pear", "apple", "fig"].into_iter().collect();
    words.insert("banana");
    assert_eq!(words.iter().copied().collect::<Vec<_>>(), ["apple", "banana", "fig", "pear"]);

    let mut map: RBTree<(String, u32)> = RBTree::new();
    map.insert(("b".to_string(), 1));
    map.insert(("a".to_string(), 2));
    assert_eq!(map.insert(("b".to_string(), 3)), Some(("b".to_string(), 1)));
    assert_eq!(
        map.get(&("b".to_string(), 0)),
        Some(&("b".to_string(), 3))
    );
    assert_eq!(map.len(), 2);
    map.assert_valid();
}
