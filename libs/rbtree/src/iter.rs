use crate::node::NodeRef;
use crate::{RBTree, utils};
use core::iter::FusedIterator;

/// An iterator over references to the items of a [`RBTree`], in ascending order.
///
/// Created by [`RBTree::iter`]. Iterating from the back yields items in descending order.
pub struct Iter<'a, T> {
    pub(crate) head: NodeRef,
    pub(crate) tail: NodeRef,
    pub(crate) len: usize,
    pub(crate) tree: &'a RBTree<T>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
            len: self.len,
            tree: self.tree,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let head = self.head;
        self.len -= 1;
        self.head = utils::next(&self.tree.pool, head);

        self.tree.pool[head].item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let tail = self.tail;
        self.len -= 1;
        self.tail = utils::prev(&self.tree.pool, tail);

        self.tree.pool[tail].item.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the items of a [`RBTree`], in ascending order.
///
/// Created by the [`IntoIterator`] implementation of [`RBTree`]. The tree's links are left as
/// they are while items are moved out, so stepping stays O(1) amortized.
pub struct IntoIter<T> {
    head: NodeRef,
    tail: NodeRef,
    len: usize,
    tree: RBTree<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: RBTree<T>) -> Self {
        let (head, tail) = tree.bounds();
        Self {
            head,
            tail,
            len: tree.len(),
            tree,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let head = self.head;
        self.len -= 1;
        self.head = utils::next(&self.tree.pool, head);

        self.tree.pool[head].item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let tail = self.tail;
        self.len -= 1;
        self.tail = utils::prev(&self.tree.pool, tail);

        self.tree.pool[tail].item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
