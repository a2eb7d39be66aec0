use crate::Item;
use crate::node::{NodePool, NodeRef};
use core::cmp::Ordering;
use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Compares `a` against `b` using only [`Item::less`].
#[inline]
pub(crate) fn compare<T: Item + ?Sized>(a: &T, b: &T) -> Ordering {
    if a.less(b) {
        Ordering::Less
    } else if b.less(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns which side of `parent` the node `node` hangs off.
pub(crate) fn side_of<T>(pool: &NodePool<T>, node: NodeRef, parent: NodeRef) -> Side {
    if pool[parent].left == node {
        Side::Left
    } else {
        debug_assert_eq!(
            pool[parent].right,
            node,
            "{parent:?} is not the parent of {node:?}"
        );
        Side::Right
    }
}

pub(crate) fn find_minimum<T>(pool: &NodePool<T>, mut curr: NodeRef) -> NodeRef {
    while !pool[curr].left.is_sentinel() {
        curr = pool[curr].left;
    }

    curr
}

pub(crate) fn find_maximum<T>(pool: &NodePool<T>, mut curr: NodeRef) -> NodeRef {
    while !pool[curr].right.is_sentinel() {
        curr = pool[curr].right;
    }

    curr
}

/// Returns the in-order successor of `node`, or the sentinel if `node` is the maximum.
pub(crate) fn next<T>(pool: &NodePool<T>, node: NodeRef) -> NodeRef {
    // If we have a right child, its least descendant is our next node
    let right = pool[node].right;
    if !right.is_sentinel() {
        return find_minimum(pool, right);
    }

    // otherwise climb until we leave a left subtree
    let mut curr = node;
    let mut parent = pool[curr].parent;
    while !parent.is_sentinel() && pool[parent].right == curr {
        curr = parent;
        parent = pool[curr].parent;
    }

    parent
}

/// Returns the in-order predecessor of `node`, or the sentinel if `node` is the minimum.
pub(crate) fn prev<T>(pool: &NodePool<T>, node: NodeRef) -> NodeRef {
    // If we have a left child, its greatest descendant is our previous node
    let left = pool[node].left;
    if !left.is_sentinel() {
        return find_maximum(pool, left);
    }

    let mut curr = node;
    let mut parent = pool[curr].parent;
    while !parent.is_sentinel() && pool[parent].left == curr {
        curr = parent;
        parent = pool[curr].parent;
    }

    parent
}
