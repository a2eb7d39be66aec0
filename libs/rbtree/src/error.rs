// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::fmt;

/// A broken red-black tree invariant, as reported by [`RBTree::validate`][crate::RBTree::validate].
///
/// Node positions are reported as opaque arena indices, which are stable for as long as the
/// tree isn't mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The sentinel was recolored red.
    SentinelNotBlack,
    /// The sentinel holds an item.
    SentinelHasItem,
    /// The root of a non-empty tree is red.
    RootNotBlack,
    /// The root's parent link does not point at the sentinel.
    RootHasParent,
    /// A reachable node has no item.
    MissingItem { node: usize },
    /// A child's parent link does not point back at the node it hangs off.
    BrokenParentLink { node: usize },
    /// A red node has a red child.
    RedViolation { node: usize },
    /// The two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        node: usize,
        left: usize,
        right: usize,
    },
    /// The in-order sequence is not strictly increasing at this node.
    OrderViolation { node: usize },
    /// The node count tracked by the tree disagrees with the number of reachable nodes.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::SentinelNotBlack => write!(f, "sentinel is not black"),
            InvariantViolation::SentinelHasItem => write!(f, "sentinel holds an item"),
            InvariantViolation::RootNotBlack => write!(f, "root is not black"),
            InvariantViolation::RootHasParent => write!(f, "root has a parent"),
            InvariantViolation::MissingItem { node } => {
                write!(f, "node #{node} is reachable but holds no item")
            }
            InvariantViolation::BrokenParentLink { node } => {
                write!(f, "parent link of node #{node} does not point at its parent")
            }
            InvariantViolation::RedViolation { node } => {
                write!(f, "red node #{node} has a red child")
            }
            InvariantViolation::BlackHeightMismatch { node, left, right } => write!(
                f,
                "black-height mismatch below node #{node}: left {left}, right {right}"
            ),
            InvariantViolation::OrderViolation { node } => {
                write!(f, "node #{node} is not ordered after its in-order predecessor")
            }
            InvariantViolation::SizeMismatch { expected, actual } => write!(
                f,
                "tree tracks {expected} nodes but {actual} are reachable"
            ),
        }
    }
}

impl core::error::Error for InvariantViolation {}
