// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Search tree nodes
//!
//! A `SearchNode` is one partial packing in the include/exclude decision
//! tree. Items are decided in density order, so a node at depth `d` has
//! decided exactly the sorted positions `0..d` and the next item to branch on
//! is position `d`. Each node records which of the decided positions it
//! included, its accumulated value and weight, and its fractional bound.
//!
//! Nodes are immutable once built. Expanding a node produces fresh children;
//! the exclude child takes over the parent's selection buffer.

use crate::bound::fractional_bound;
use fixedbitset::FixedBitSet;
use satchel_model::model::Model;

/// A partial packing in the branch-and-bound tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    value: f64,
    weight: f64,
    bound: f64,
    depth: usize,
    selection: FixedBitSet,
}

impl SearchNode {
    /// Creates the root node: nothing decided, nothing packed.
    #[inline]
    pub fn root(model: &Model) -> Self {
        Self {
            value: 0.0,
            weight: 0.0,
            bound: fractional_bound(model, 0, 0.0, 0.0),
            depth: 0,
            selection: FixedBitSet::with_capacity(model.num_items()),
        }
    }

    /// Returns the accumulated value of the included items.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the accumulated weight of the included items.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the fractional relaxation bound of this node.
    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Returns the number of decided items.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the sorted position of the last decided item,
    /// or `None` for the root.
    #[inline]
    pub fn last_decided(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }

    /// Returns the sorted position this node branches on next.
    #[inline]
    pub fn next_item(&self) -> usize {
        self.depth
    }

    /// Returns the sorted positions this node included.
    #[inline]
    pub fn selection(&self) -> &FixedBitSet {
        &self.selection
    }

    /// Returns `true` if the item at sorted position `position` was included.
    #[inline]
    pub fn is_included(&self, position: usize) -> bool {
        self.selection.contains(position)
    }

    /// Returns `true` if every item of the model has been decided.
    #[inline]
    pub fn is_terminal(&self, model: &Model) -> bool {
        self.depth >= model.num_items()
    }

    /// Returns `true` if the accumulated weight fits the capacity.
    #[inline]
    pub fn is_feasible(&self, model: &Model) -> bool {
        self.weight <= model.capacity()
    }

    /// Returns `true` if including the next item keeps the packing within capacity.
    ///
    /// # Panics
    ///
    /// Panics if the node is terminal.
    #[inline]
    pub fn can_include_next(&self, model: &Model) -> bool {
        debug_assert!(
            !self.is_terminal(model),
            "called `SearchNode::can_include_next` on a terminal node: the len is {} but the depth is {}",
            model.num_items(),
            self.depth
        );

        self.weight + model.weight(self.depth) <= model.capacity()
    }

    /// Builds the child that includes the next item.
    ///
    /// The child is built even when it exceeds the capacity; its bound is then `0`.
    ///
    /// # Panics
    ///
    /// Panics if the node is terminal.
    pub fn include_child(&self, model: &Model) -> Self {
        debug_assert!(
            !self.is_terminal(model),
            "called `SearchNode::include_child` on a terminal node: the len is {} but the depth is {}",
            model.num_items(),
            self.depth
        );

        let position = self.depth;
        let value = self.value + model.value(position);
        let weight = self.weight + model.weight(position);
        let depth = position + 1;

        let mut selection = self.selection.clone();
        selection.insert(position);

        Self {
            value,
            weight,
            bound: fractional_bound(model, depth, value, weight),
            depth,
            selection,
        }
    }

    /// Turns this node into the child that excludes the next item.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the node is terminal.
    pub fn into_exclude_child(self, model: &Model) -> Self {
        debug_assert!(
            !self.is_terminal(model),
            "called `SearchNode::into_exclude_child` on a terminal node: the len is {} but the depth is {}",
            model.num_items(),
            self.depth
        );

        let depth = self.depth + 1;
        Self {
            value: self.value,
            weight: self.weight,
            bound: fractional_bound(model, depth, self.value, self.weight),
            depth,
            selection: self.selection,
        }
    }
}

impl std::fmt::Display for SearchNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode(depth: {}, value: {}, weight: {}, bound: {})",
            self.depth, self.value, self.weight, self.bound
        )
    }
}
