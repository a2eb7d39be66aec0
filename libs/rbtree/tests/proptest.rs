mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;
use rbtree::RBTree;

use crate::common::{Entry, assert_height_bound, keys};

#[derive(Debug, Clone)]
enum Op {
    Insert(u64, u64),
    Remove(u64),
    Get(u64),
}

fn op() -> impl Strategy<Value = Op> {
    // a narrow key space makes overwrites and hits on remove likely
    prop_oneof![
        3 => (0..256u64, any::<u64>()).prop_map(|(key, value)| Op::Insert(key, value)),
        2 => (0..256u64).prop_map(Op::Remove),
        1 => (0..256u64).prop_map(Op::Get),
    ]
}

proptest! {
    #[test]
    fn matches_btreemap(ops in proptest::collection::vec(op(), 1..750)) {
        let mut tree = RBTree::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let expected = model.insert(key, value).map(|old| Entry::new(key, old));
                    prop_assert_eq!(tree.insert(Entry::new(key, value)), expected);
                }
                Op::Remove(key) => {
                    let expected = model.remove(&key).map(|old| Entry::new(key, old));
                    prop_assert_eq!(tree.remove(&Entry::probe(key)), expected);
                }
                Op::Get(key) => {
                    let expected = model.get(&key).map(|value| Entry::new(key, *value));
                    prop_assert_eq!(tree.get(&Entry::probe(key)).cloned(), expected);
                }
            }

            tree.assert_valid();
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert_eq!(keys(&tree), model.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.min().map(|e| e.key), model.keys().next().copied());
        prop_assert_eq!(tree.max().map(|e| e.key), model.keys().next_back().copied());
    }

    #[test]
    fn insert_random(input in proptest::collection::hash_set(any::<u64>(), 1..750)) {
        let mut tree = RBTree::new();

        for key in &input {
            tracing::debug!("inserting {key}");
            tree.insert(*key);
            tree.assert_valid();
        }
        assert_height_bound(&tree);

        let mut sorted: Vec<_> = input.into_iter().collect();
        sorted.sort_unstable();
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), sorted.clone());

        sorted.reverse();
        prop_assert_eq!(tree.into_iter().rev().collect::<Vec<_>>(), sorted);
    }
}
