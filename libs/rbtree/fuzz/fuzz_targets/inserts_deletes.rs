#![no_main]

use libfuzzer_sys::fuzz_target;
use rbtree::RBTree;

fuzz_target!(|inserts_removals: (Vec<usize>, Vec<usize>)| {
    let mut tree: RBTree<usize> = RBTree::new();

    for i in inserts_removals.0 {
        tree.insert(i);
        tree.assert_valid();
    }

    for i in inserts_removals.1 {
        let present = tree.contains(&i);
        assert_eq!(tree.remove(&i).is_some(), present);
        tree.assert_valid();
    }
});
