// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::utils::Side;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub(crate) fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    #[inline]
    pub(crate) fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Index of a node inside a [`NodePool`].
///
/// Index `0` is reserved for the sentinel, every other index refers to a slot in the pool
/// that is either live or on the free list.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef(u32);

impl NodeRef {
    pub(crate) const SENTINEL: Self = Self(0);

    #[inline]
    pub(crate) fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("NIL")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    /// `None` only for the sentinel and for slots on the free list.
    pub(crate) item: Option<T>,
    pub(crate) color: Color,
    pub(crate) parent: NodeRef,
    pub(crate) left: NodeRef,
    pub(crate) right: NodeRef,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            item: None,
            color: Color::Black,
            parent: NodeRef::SENTINEL,
            left: NodeRef::SENTINEL,
            right: NodeRef::SENTINEL,
        }
    }

    /// Returns the item stored in a live node.
    ///
    /// # Panics
    ///
    /// Panics when called on the sentinel or a freed slot, which means the tree's links are
    /// corrupted.
    #[inline]
    #[track_caller]
    pub(crate) fn item(&self) -> &T {
        self.item
            .as_ref()
            .expect("live red-black tree node must hold an item")
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> NodeRef {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: NodeRef) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_sentinel() && self.right.is_sentinel()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("item", &self.item)
            .field("color", &self.color)
            .field("parent", &self.parent)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// Arena owning every node of a tree.
///
/// The sentinel lives outside the backing vector so that an empty pool can be created in a
/// `const` context; `NodeRef(i)` for `i > 0` maps to `nodes[i - 1]`.
#[derive(Clone)]
pub(crate) struct NodePool<T> {
    sentinel: Node<T>,
    nodes: Vec<Node<T>>,
    /// Linked list of freed nodes threaded through their `right` link, terminated by the
    /// sentinel.
    free_list: NodeRef,
}

impl<T> NodePool<T> {
    pub(crate) const fn new() -> Self {
        Self {
            sentinel: Node::sentinel(),
            nodes: Vec::new(),
            free_list: NodeRef::SENTINEL,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            sentinel: Node::sentinel(),
            nodes: Vec::with_capacity(capacity),
            free_list: NodeRef::SENTINEL,
        }
    }

    /// Number of slots (live and free) the pool can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Allocates a new red node holding `item` below `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the pool would exceed `u32::MAX` slots.
    pub(crate) fn alloc(&mut self, item: T, parent: NodeRef) -> NodeRef {
        let node = Node {
            item: Some(item),
            color: Color::Red,
            parent,
            left: NodeRef::SENTINEL,
            right: NodeRef::SENTINEL,
        };

        // First try re-using a node from the free list.
        if !self.free_list.is_sentinel() {
            let slot = self.free_list;
            self.free_list = self[slot].right;
            self[slot] = node;
            return slot;
        }

        let raw = u32::try_from(self.nodes.len() + 1)
            .expect("exceeded RBTree maximum node count");
        self.nodes.push(node);
        NodeRef(raw)
    }

    /// Returns a node to the free list, handing back its item.
    pub(crate) fn free(&mut self, slot: NodeRef) -> Option<T> {
        debug_assert!(!slot.is_sentinel(), "the sentinel cannot be freed");

        let next = self.free_list;
        let node = &mut self[slot];
        let item = node.item.take();
        node.color = Color::Black;
        node.parent = NodeRef::SENTINEL;
        node.left = NodeRef::SENTINEL;
        node.right = next;
        self.free_list = slot;

        item
    }

    /// Frees every node allocated from this pool and resets the sentinel.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.sentinel = Node::sentinel();
        self.free_list = NodeRef::SENTINEL;
    }

    pub(crate) fn sentinel(&self) -> &Node<T> {
        &self.sentinel
    }
}

impl<T> Index<NodeRef> for NodePool<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, node: NodeRef) -> &Self::Output {
        match node.index().checked_sub(1) {
            Some(idx) => &self.nodes[idx],
            None => &self.sentinel,
        }
    }
}

impl<T> IndexMut<NodeRef> for NodePool<T> {
    #[inline]
    fn index_mut(&mut self, node: NodeRef) -> &mut Self::Output {
        match node.index().checked_sub(1) {
            Some(idx) => &mut self.nodes[idx],
            None => &mut self.sentinel,
        }
    }
}
