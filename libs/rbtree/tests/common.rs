#![allow(unused, reason = "not used by all tests")]

use rbtree::{Item, RBTree};

/// A keyed entry whose payload does not take part in the ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub value: u64,
}

impl Entry {
    pub fn new(key: u64, value: u64) -> Self {
        Self { key, value }
    }

    /// An entry usable as a lookup probe for `key`.
    pub fn probe(key: u64) -> Self {
        Self { key, value: 0 }
    }
}

impl Item for Entry {
    fn less(&self, other: &Self) -> bool {
        self.key < other.key
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn keys(tree: &RBTree<Entry>) -> Vec<u64> {
    tree.iter().map(|entry| entry.key).collect()
}

/// `height <= 2 * log2(n + 1)`, checked as `2^height <= (n + 1)^2`.
pub fn assert_height_bound<T>(tree: &RBTree<T>) {
    let n = u128::try_from(tree.len()).unwrap() + 1;
    let height = tree.height();
    assert!(
        height < 128 && (1u128 << height) <= n * n,
        "height {height} exceeds the bound for {} items",
        tree.len()
    );
}
