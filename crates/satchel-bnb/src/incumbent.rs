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

//! Incumbent tracking for branch-and-bound
//!
//! The incumbent is the best complete packing found so far. Its value only
//! ever increases, starting from the empty packing with value `0`, which is
//! always feasible because the capacity is non-negative.

use crate::node::SearchNode;
use fixedbitset::FixedBitSet;
use satchel_model::{model::Model, solution::Solution};

/// The best feasible packing found so far.
#[derive(Clone, Debug, PartialEq)]
pub struct Incumbent {
    value: f64,
    weight: f64,
    selection: FixedBitSet,
}

impl Incumbent {
    /// Creates the empty incumbent for a model with `num_items` items.
    #[inline]
    pub fn empty(num_items: usize) -> Self {
        Self {
            value: 0.0,
            weight: 0.0,
            selection: FixedBitSet::with_capacity(num_items),
        }
    }

    /// Returns the value of the incumbent.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the weight of the incumbent.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if a node with bound `bound` may still beat the incumbent.
    #[inline]
    pub fn is_beaten_by(&self, bound: f64) -> bool {
        bound > self.value
    }

    /// Installs `node` as the new incumbent if it is feasible and strictly better.
    /// Returns `true` if the incumbent changed.
    #[inline]
    pub fn try_install(&mut self, node: &SearchNode, model: &Model) -> bool {
        if !node.is_feasible(model) || node.value() <= self.value {
            return false;
        }

        self.value = node.value();
        self.weight = node.weight();
        self.selection.clone_from(node.selection());
        true
    }

    /// Converts the incumbent into a `Solution` that refers to items by
    /// the indices they were added to the model with.
    pub fn to_solution(&self, model: &Model) -> Solution {
        let selected = self
            .selection
            .ones()
            .map(|position| model.source_index(position))
            .collect();
        Solution::new(self.value, self.weight, selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::{index::ItemIndex, model::ModelBuilder};

    fn model() -> Model {
        // Insertion order differs from density order.
        let mut builder = ModelBuilder::new(50.0f64);
        builder
            .add_item_parts(120.0, 30.0)
            .add_item_parts(60.0, 10.0)
            .add_item_parts(100.0, 20.0);
        builder.build().unwrap()
    }

    #[test]
    fn test_empty_incumbent() {
        let model = model();
        let incumbent = Incumbent::empty(model.num_items());
        assert_eq!(incumbent.value(), 0.0);
        assert!(incumbent.is_beaten_by(1e-9));
        assert!(!incumbent.is_beaten_by(0.0));

        let solution = incumbent.to_solution(&model);
        assert_eq!(solution.objective_value(), 0.0);
        assert!(solution.selected().is_empty());
    }

    #[test]
    fn test_install_only_when_better_and_feasible() {
        let model = model();
        let mut incumbent = Incumbent::empty(model.num_items());

        let root = SearchNode::root(&model);
        assert!(!incumbent.try_install(&root, &model));

        // Sorted positions: 0 = (60,10), 1 = (100,20), 2 = (120,30).
        let first = root.include_child(&model);
        assert!(incumbent.try_install(&first, &model));
        assert_eq!(incumbent.value(), 60.0);
        assert!(!incumbent.try_install(&first, &model));

        let both = first.include_child(&model);
        let overweight = both.include_child(&model);
        assert!(!incumbent.try_install(&overweight, &model));
        assert!(incumbent.try_install(&both, &model));
        assert_eq!(incumbent.value(), 160.0);
        assert_eq!(incumbent.weight(), 30.0);
    }

    #[test]
    fn test_solution_uses_source_indices() {
        let model = model();
        let mut incumbent = Incumbent::empty(model.num_items());
        let node = SearchNode::root(&model)
            .include_child(&model)
            .into_exclude_child(&model)
            .include_child(&model);
        assert!(incumbent.try_install(&node, &model));

        let solution = incumbent.to_solution(&model);
        assert_eq!(solution.objective_value(), 180.0);
        assert_eq!(solution.total_weight(), 40.0);
        assert_eq!(solution.selected(), &[ItemIndex::new(0), ItemIndex::new(1)]);
    }
}
