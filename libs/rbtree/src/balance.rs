// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Rotations and the insert/remove rebalancing loops.
//!
//! Both fixup routines are written once for the case where the node being repaired hangs off
//! the left of its parent; the mirror image is obtained by swapping [`Side`] for its opposite.

use crate::RBTree;
use crate::node::{Color, NodeRef};
use crate::utils::{self, Side};

impl<T> RBTree<T> {
    /// Rotates the subtree rooted at `x` towards `dir`.
    ///
    /// The child of `x` on the opposite side (`y`) takes `x`'s place, `y`'s `dir`-side subtree
    /// moves over to become `x`'s opposite-side child and `x` becomes `y`'s `dir`-side child.
    /// `rotate(x, Side::Left)` is the classic left rotation.
    ///
    /// Requesting a rotation when `y` is the sentinel is a bug in the caller, the fixup loops
    /// never do this. Debug builds assert, release builds leave the tree untouched.
    pub(crate) fn rotate(&mut self, x: NodeRef, dir: Side) {
        let y = self.pool[x].child(dir.opposite());
        debug_assert!(
            !x.is_sentinel() && !y.is_sentinel(),
            "cannot rotate {x:?} {dir}: missing {} child",
            dir.opposite()
        );
        if x.is_sentinel() || y.is_sentinel() {
            return;
        }

        tracing::trace!("rotating {x:?} {dir}, promoting {y:?}");

        // y takes x's place below x's parent
        let parent = self.pool[x].parent;
        self.replace_child(parent, x, y);
        self.pool[y].parent = parent;

        // y's inner subtree moves over to x. This may write the sentinel's parent link, which is
        // scratch space as far as the tree is concerned.
        let inner = self.pool[y].child(dir);
        self.pool[x].set_child(dir.opposite(), inner);
        self.pool[inner].parent = x;

        // x becomes y's child
        self.pool[y].set_child(dir, x);
        self.pool[x].parent = y;
    }

    /// Makes `new` take the place of `old` below `parent`, updating the root if `parent` is the
    /// sentinel. Does not touch `new`'s parent link.
    pub(crate) fn replace_child(&mut self, parent: NodeRef, old: NodeRef, new: NodeRef) {
        if parent.is_sentinel() {
            self.root = new;
        } else if self.pool[parent].left == old {
            self.pool[parent].left = new;
        } else {
            debug_assert_eq!(self.pool[parent].right, old);
            self.pool[parent].right = new;
        }
    }

    /// Restores the red-black rules after `x` was linked into the tree as a red leaf.
    ///
    /// The only rule a red leaf can break is "no red node has a red child", so we loop while
    /// `x`'s parent is red, pushing the violation towards the root.
    pub(crate) fn insert_fixup(&mut self, mut x: NodeRef) {
        while self.pool[self.pool[x].parent].color.is_red() {
            let parent = self.pool[x].parent;
            // a red parent is never the root, so the grandparent is a real node
            let grandparent = self.pool[parent].parent;
            let parent_side = utils::side_of(&self.pool, parent, grandparent);
            let uncle = self.pool[grandparent].child(parent_side.opposite());

            if self.pool[uncle].color.is_red() {
                // Case A: red uncle. Recolor and continue two levels up.
                tracing::trace!("insert fixup at {x:?}: red uncle {uncle:?}, recoloring");
                self.pool[parent].color = Color::Black;
                self.pool[uncle].color = Color::Black;
                self.pool[grandparent].color = Color::Red;
                x = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.pool[parent].child(parent_side.opposite()) == x {
                // Case B: black uncle, x and parent on opposite sides. Rotate x up into the
                // parent's position so both hang off the same side, then continue with case C.
                tracing::trace!("insert fixup at {x:?}: inner child, rotating {parent:?}");
                self.rotate(parent, parent_side);
                parent = x;
            }

            // Case C: black uncle, x and parent on the same side.
            tracing::trace!("insert fixup at {x:?}: outer child, rotating {grandparent:?}");
            self.pool[parent].color = Color::Black;
            self.pool[grandparent].color = Color::Red;
            self.rotate(grandparent, parent_side.opposite());
            break;
        }

        let root = self.root;
        self.pool[root].color = Color::Black;
    }

    /// Restores equal black-heights after a black node was spliced out above `x`.
    ///
    /// `x` carries an "extra black". It may be the sentinel, in which case its parent link has
    /// been pointed at the splice point by the caller.
    pub(crate) fn remove_fixup(&mut self, mut x: NodeRef) {
        while x != self.root && self.pool[x].color.is_black() {
            let parent = self.pool[x].parent;
            // the sentinel compares equal to an empty left slot, which is what we want here:
            // a spliced-out black leaf always has a real sibling.
            let x_side = utils::side_of(&self.pool, x, parent);
            let far = x_side.opposite();
            let mut sibling = self.pool[parent].child(far);

            if self.pool[sibling].color.is_red() {
                // Case A: red sibling. Rotate it above the parent so x gets a black sibling.
                tracing::trace!("remove fixup at {x:?}: red sibling {sibling:?}, rotating {parent:?}");
                self.pool[sibling].color = Color::Black;
                self.pool[parent].color = Color::Red;
                self.rotate(parent, x_side);
                sibling = self.pool[parent].child(far);
            }

            let near_child = self.pool[sibling].child(x_side);
            let far_child = self.pool[sibling].child(far);

            if self.pool[near_child].color.is_black() && self.pool[far_child].color.is_black() {
                // Case B: black sibling with two black children. Recoloring the sibling moves the
                // deficit up to the parent.
                tracing::trace!("remove fixup at {x:?}: black nephews, recoloring {sibling:?}");
                self.pool[sibling].color = Color::Red;
                x = parent;
                continue;
            }

            if self.pool[far_child].color.is_black() {
                // Case C: only the near nephew is red. Rotate it into the sibling's position so
                // the red nephew ends up on the far side.
                tracing::trace!("remove fixup at {x:?}: red near nephew, rotating {sibling:?}");
                self.pool[near_child].color = Color::Black;
                self.pool[sibling].color = Color::Red;
                self.rotate(sibling, far);
                sibling = self.pool[parent].child(far);
            }

            // Case D: the far nephew is red. One rotation at the parent absorbs the deficit.
            tracing::trace!("remove fixup at {x:?}: red far nephew, rotating {parent:?}");
            let far_child = self.pool[sibling].child(far);
            self.pool[sibling].color = self.pool[parent].color;
            self.pool[parent].color = Color::Black;
            self.pool[far_child].color = Color::Black;
            self.rotate(parent, x_side);
            break;
        }

        // a red x absorbs the extra black
        self.pool[x].color = Color::Black;

        let root = self.root;
        self.pool[root].color = Color::Black;
    }
}
