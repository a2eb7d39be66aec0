// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # An arena-backed Red-Black Tree.
//!
//! Red-black trees are *self-balancing binary search trees* that bound their height by coloring
//! every node red or black and maintaining these rules:
//!
//! 1. the root is black,
//! 2. a red node never has a red child,
//! 3. every path from a node down to a missing child passes the same number of black nodes.
//!
//! Together they guarantee a height of at most `2 * log2(n + 1)`, so lookups, insertions and
//! removals all complete in `O(log n)`.
//!
//! Nodes live in an arena owned by the tree and refer to each other through indices, with index
//! `0` reserved for a shared, permanently black *sentinel* that stands in for every missing child
//! and for the root's parent. The tree never hands out references into the arena that outlive a
//! borrow of the tree, so the whole crate is free of `unsafe`.
//!
//! Items are ordered by a single caller-defined strict weak ordering, the [`Item`] trait. Two
//! items are considered equal when neither is less than the other; inserting an item equal to
//! one already stored replaces the stored item in place.
//!
//! This crate is self-contained, fuzzed, and fully `no_std` (it does require `alloc`).
//!
//! ```
//! use rbtree::{Item, RBTree};
//!
//! struct Player {
//!     score: u32,
//!     name: &'static str,
//! }
//!
//! impl Item for Player {
//!     fn less(&self, other: &Self) -> bool {
//!         self.score < other.score
//!     }
//! }
//!
//! let mut tree = RBTree::new();
//! tree.insert(Player { score: 30, name: "carol" });
//! tree.insert(Player { score: 10, name: "alice" });
//! tree.insert(Player { score: 20, name: "bob" });
//!
//! assert_eq!(tree.min().map(|p| p.name), Some("alice"));
//! assert_eq!(tree.max().map(|p| p.name), Some("carol"));
//!
//! let names: Vec<_> = tree.iter().map(|p| p.name).collect();
//! assert_eq!(names, ["alice", "bob", "carol"]);
//! ```
//!
//! ## when not to use this
//!
//! - **need concurrent access** - the tree performs no internal synchronization. Wrap it in a
//!   mutex or read-write lock if it must be shared between threads.
//! - **need composite orderings** - every tree instance has exactly one ordering, the one given
//!   by [`Item::less`].
//!
//! ## features
//!
//! The following features are available:
//!
//! | Feature | Default | Explanation                                                                           |
//! |:--------|:--------|:--------------------------------------------------------------------------------------|
//! | `dot`   | `false` | Enables the `RBTree::dot` method, which allows display of the tree in [graphviz format] |
//!
//! [graphviz format]: https://graphviz.org/doc/info/lang.html

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod balance;
#[cfg(feature = "dot")]
mod dot;
mod error;
mod iter;
mod node;
mod utils;

use crate::node::{NodePool, NodeRef};
use core::cmp::{Ordering, Reverse};
use core::fmt;

#[cfg(feature = "dot")]
pub use dot::Dot;
pub use error::InvariantViolation;
pub use iter::{IntoIter, Iter};

/// Trait implemented by types which can be stored in a [`RBTree`].
///
/// `less` must be a *strict weak ordering*: irreflexive (`!a.less(a)`), asymmetric and
/// transitive, and "neither is less than the other" must be transitive as well. Items for which
/// neither `a.less(b)` nor `b.less(a)` holds are treated as the same key.
///
/// Violating these rules cannot cause memory unsafety, but the tree may end up storing items out
/// of order, lookups may miss items that are present and [`RBTree::validate`] will report an
/// [`InvariantViolation::OrderViolation`].
///
/// # Example
///
/// Suppose this is our element data structure where we want to identify entries *only* by their
/// age:
///
/// ```rust
/// struct Entry {
///     age: u16,
///     name: String,
/// }
///
/// impl rbtree::Item for Entry {
///     fn less(&self, other: &Self) -> bool {
///         self.age < other.age
///     }
/// }
/// ```
pub trait Item {
    /// Returns `true` if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

macro_rules! impl_item_for_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Item for $ty {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_item_for_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, str,
    alloc::string::String,
);

impl<T: Item + ?Sized> Item for &T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        T::less(self, other)
    }
}

impl<T: Item + ?Sized> Item for alloc::boxed::Box<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        T::less(self, other)
    }
}

impl<T: Item> Item for Reverse<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        other.0.less(&self.0)
    }
}

/// `(key, value)` pairs are ordered by their key alone, which turns a [`RBTree`] of pairs into an
/// ordered map.
impl<K: Item, V> Item for (K, V) {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self.0.less(&other.0)
    }
}

/// An ordered collection backed by a red-black tree.
///
/// All operations complete in logarithmic time, except for traversal which is linear in the
/// number of items. See the [crate-level documentation](crate) for an overview.
#[derive(Clone)]
pub struct RBTree<T> {
    pub(crate) pool: NodePool<T>,
    pub(crate) root: NodeRef,
    size: usize,
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RBTree<T> {
    /// Creates a new, empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pool: NodePool::new(),
            root: NodeRef::SENTINEL,
            size: 0,
        }
    }

    /// Creates a new, empty tree with room for at least `capacity` items before the node arena
    /// has to grow.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: NodePool::with_capacity(capacity),
            root: NodeRef::SENTINEL,
            size: 0,
        }
    }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no items.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_sentinel(), self.size == 0);
        self.size == 0
    }

    /// Returns the number of items the tree can hold without reallocating its node arena.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Reserves room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.pool.reserve(additional);
    }

    /// Returns the smallest item in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        if self.root.is_sentinel() {
            return None;
        }
        let min = utils::find_minimum(&self.pool, self.root);
        self.pool[min].item.as_ref()
    }

    /// Returns the largest item in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        if self.root.is_sentinel() {
            return None;
        }
        let max = utils::find_maximum(&self.pool, self.root);
        self.pool[max].item.as_ref()
    }

    /// Gets an iterator over the items in the tree, sorted in ascending order.
    ///
    /// The iterator is double-ended, so `tree.iter().rev()` yields items in descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.bounds();
        Iter {
            head,
            tail,
            len: self.size,
            tree: self,
        }
    }

    /// Calls `visit` once for every item, in ascending order.
    pub fn ascend<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    /// Calls `visit` once for every item, in descending order.
    pub fn descend<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().rev().for_each(visit);
    }

    /// Removes all items from the tree.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.root = NodeRef::SENTINEL;
        self.size = 0;
    }

    /// Returns the number of nodes on the longest path from the root down to a missing child.
    ///
    /// An empty tree has height `0`, a single item has height `1`. For any red-black tree holding
    /// `n` items the height is at most `2 * log2(n + 1)`.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Returns the number of black nodes on every path from the root down to a missing child,
    /// not counting the sentinel.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while !curr.is_sentinel() {
            if self.pool[curr].color.is_black() {
                height += 1;
            }
            curr = self.pool[curr].left;
        }
        height
    }

    /// Returns a [`Dot`] which renders the tree in graphviz format when displayed.
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> Dot<'_, T> {
        Dot { tree: self }
    }

    /// Returns the minimum and maximum node, or the sentinel twice for an empty tree.
    pub(crate) fn bounds(&self) -> (NodeRef, NodeRef) {
        if self.root.is_sentinel() {
            (NodeRef::SENTINEL, NodeRef::SENTINEL)
        } else {
            (
                utils::find_minimum(&self.pool, self.root),
                utils::find_maximum(&self.pool, self.root),
            )
        }
    }

    fn subtree_height(&self, node: NodeRef) -> usize {
        if node.is_sentinel() {
            return 0;
        }
        let n = &self.pool[node];
        1 + self.subtree_height(n.left).max(self.subtree_height(n.right))
    }
}

impl<T: Item> RBTree<T> {
    /// Inserts `item` into the tree.
    ///
    /// If the tree already holds an item equal to `item` (neither is less than the other), the
    /// stored item is replaced in place and returned. The tree's shape and colors are left
    /// untouched in that case.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let mut parent = NodeRef::SENTINEL;
        let mut side = utils::Side::Left;
        let mut curr = self.root;

        while !curr.is_sentinel() {
            side = match utils::compare(&item, self.pool[curr].item()) {
                Ordering::Less => utils::Side::Left,
                Ordering::Greater => utils::Side::Right,
                Ordering::Equal => {
                    tracing::debug!("replacing item stored at {curr:?}");
                    return self.pool[curr].item.replace(item);
                }
            };
            parent = curr;
            curr = self.pool[curr].child(side);
        }

        let node = self.pool.alloc(item, parent);
        if parent.is_sentinel() {
            self.root = node;
        } else {
            self.pool[parent].set_child(side, node);
        }
        self.size += 1;

        self.insert_fixup(node);

        None
    }

    /// Removes the item equal to `probe` from the tree, returning it if it was present.
    pub fn remove(&mut self, probe: &T) -> Option<T> {
        let mut y = self.find(probe);
        if y.is_sentinel() {
            tracing::debug!("nothing to remove");
            return None;
        }

        // A node with two children is not spliced out itself. Its in-order successor (which has
        // no left child) donates its item and is removed instead.
        let removed = if !self.pool[y].left.is_sentinel() && !self.pool[y].right.is_sentinel() {
            let successor = utils::find_minimum(&self.pool, self.pool[y].right);
            let donated = self.pool[successor].item.take();
            let removed = core::mem::replace(&mut self.pool[y].item, donated);
            y = successor;
            removed
        } else {
            None
        };

        // y has at most one child now, x is that child or the sentinel
        let x = if self.pool[y].left.is_sentinel() {
            self.pool[y].right
        } else {
            self.pool[y].left
        };

        let parent = self.pool[y].parent;
        self.replace_child(parent, y, x);
        // for the sentinel this records where the fixup has to start
        self.pool[x].parent = parent;
        self.size -= 1;

        let color = self.pool[y].color;
        let freed = self.pool.free(y);

        if color.is_black() {
            self.remove_fixup(x);
        }

        removed.or(freed)
    }

    /// Returns a reference to the stored item equal to `probe`.
    pub fn get(&self, probe: &T) -> Option<&T> {
        let node = self.find(probe);
        self.pool[node].item.as_ref()
    }

    /// Returns `true` if the tree holds an item equal to `probe`.
    pub fn contains(&self, probe: &T) -> bool {
        !self.find(probe).is_sentinel()
    }

    /// Checks every red-black tree invariant, returning the first violation found.
    ///
    /// This walks the entire tree and is meant for tests and debugging.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] describing the first broken invariant.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let sentinel = self.pool.sentinel();
        if sentinel.color.is_red() {
            return Err(InvariantViolation::SentinelNotBlack);
        }
        if sentinel.item.is_some() {
            return Err(InvariantViolation::SentinelHasItem);
        }

        if self.root.is_sentinel() {
            return match self.size {
                0 => Ok(()),
                expected => Err(InvariantViolation::SizeMismatch {
                    expected,
                    actual: 0,
                }),
            };
        }

        let root = &self.pool[self.root];
        if root.color.is_red() {
            return Err(InvariantViolation::RootNotBlack);
        }
        if !root.parent.is_sentinel() {
            return Err(InvariantViolation::RootHasParent);
        }

        let mut count = 0;
        self.validate_subtree(self.root, &mut count)?;
        if count != self.size {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.size,
                actual: count,
            });
        }

        // Now that the links are known to be sound, walk the in-order sequence.
        let mut prev: Option<&T> = None;
        let mut curr = utils::find_minimum(&self.pool, self.root);
        while !curr.is_sentinel() {
            let item = self.pool[curr].item();
            if prev.is_some_and(|prev| !prev.less(item)) {
                return Err(InvariantViolation::OrderViolation { node: curr.index() });
            }
            prev = Some(item);
            curr = utils::next(&self.pool, curr);
        }

        Ok(())
    }

    /// Asserts all of the tree's invariants.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first broken invariant, see [`RBTree::validate`].
    #[track_caller]
    pub fn assert_valid(&self) {
        if let Err(err) = self.validate() {
            panic!("red-black tree invariant violated: {err}");
        }
    }

    /// Checks the subtree rooted at `node`, returning its black-height.
    fn validate_subtree(
        &self,
        node: NodeRef,
        count: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if node.is_sentinel() {
            return Ok(0);
        }

        *count += 1;
        // a corrupted tree might contain a cycle, stop as soon as we've seen too many nodes
        if *count > self.size {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.size,
                actual: *count,
            });
        }

        let n = &self.pool[node];
        if n.item.is_none() {
            return Err(InvariantViolation::MissingItem { node: node.index() });
        }

        for child in [n.left, n.right] {
            if child.is_sentinel() {
                continue;
            }
            if self.pool[child].parent != node {
                return Err(InvariantViolation::BrokenParentLink {
                    node: child.index(),
                });
            }
            if n.color.is_red() && self.pool[child].color.is_red() {
                return Err(InvariantViolation::RedViolation { node: node.index() });
            }
        }

        let left = self.validate_subtree(n.left, count)?;
        let right = self.validate_subtree(n.right, count)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: node.index(),
                left,
                right,
            });
        }

        Ok(left + usize::from(n.color.is_black()))
    }

    /// Returns the node holding an item equal to `probe`, or the sentinel.
    fn find(&self, probe: &T) -> NodeRef {
        let mut curr = self.root;
        while !curr.is_sentinel() {
            let n = &self.pool[curr];
            match utils::compare(probe, n.item()) {
                Ordering::Equal => return curr,
                Ordering::Less => curr = n.left,
                Ordering::Greater => curr = n.right,
            }
        }

        NodeRef::SENTINEL
    }
}

impl<T: fmt::Debug> fmt::Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RBTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RBTree<T> {}

impl<T: Item> Extend<T> for RBTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Item> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RBTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
