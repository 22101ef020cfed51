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

//! Fractional relaxation bound
//!
//! `fractional_bound` is the optimistic estimate that drives pruning. Items
//! are visited in density order starting at `next_item`; whole items are
//! added while they fit, and the first item that does not fit contributes the
//! fraction of its value that fills the remaining capacity. Because the model
//! is sorted by descending density, this is the optimum of the LP relaxation
//! of the remaining subproblem and therefore never underestimates any
//! completion of the partial packing.
//!
//! Notes
//! - A partial packing that already exceeds the capacity gets a bound of `0`.
//! - Zero-weight items always fit, so they never reach the fractional step.

use satchel_model::model::Model;

/// Computes the fractional relaxation bound of a partial packing.
///
/// `value` and `weight` are the totals of the items already included, and
/// `next_item` is the first sorted position that has not been decided yet.
/// Passing `next_item == model.num_items()` returns `value` unchanged.
#[inline]
pub fn fractional_bound(model: &Model, next_item: usize, value: f64, weight: f64) -> f64 {
    let capacity = model.capacity();
    if weight > capacity {
        return 0.0;
    }

    let values = model.values();
    let weights = model.weights();

    let mut bound = value;
    let mut total_weight = weight;

    for position in next_item..model.num_items() {
        let item_weight = weights[position];
        if total_weight + item_weight > capacity {
            let remaining = capacity - total_weight;
            // Only reachable with item_weight > remaining >= 0.
            debug_assert!(
                item_weight > 0.0,
                "called `fractional_bound` with a zero-weight item that does not fit at position {}",
                position
            );
            bound += remaining / item_weight * values[position];
            return bound;
        }
        total_weight += item_weight;
        bound += values[position];
    }

    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use satchel_model::model::ModelBuilder;

    fn build(capacity: f64, items: &[(f64, f64)]) -> Model {
        let mut builder = ModelBuilder::new(capacity);
        for &(v, w) in items {
            builder.add_item_parts(v, w);
        }
        builder.build().expect("valid model")
    }

    #[test]
    fn test_classic_root_bound() {
        // Sorted: (60,10) d=6, (100,20) d=5, (120,30) d=4.
        let model = build(50.0, &[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)]);
        // 60 + 100 + 20/30 * 120 = 240
        assert_relative_eq!(fractional_bound(&model, 0, 0.0, 0.0), 240.0);
    }

    #[test]
    fn test_bound_without_fractional_term() {
        let model = build(100.0, &[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
        assert_relative_eq!(fractional_bound(&model, 0, 0.0, 0.0), 6.0);
    }

    #[test]
    fn test_bound_from_partial_packing() {
        let model = build(50.0, &[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)]);
        // Excluded position 0, included nothing: 100 + 30/30 * 120 = 220.
        assert_relative_eq!(fractional_bound(&model, 1, 0.0, 0.0), 220.0);
        // Included position 0 and 1: 160 + 20/30 * 120 = 240.
        assert_relative_eq!(fractional_bound(&model, 2, 160.0, 30.0), 240.0);
    }

    #[test]
    fn test_overweight_partial_packing_has_zero_bound() {
        let model = build(10.0, &[(5.0, 4.0), (5.0, 8.0)]);
        assert_eq!(fractional_bound(&model, 2, 10.0, 12.0), 0.0);
    }

    #[test]
    fn test_leaf_bound_is_value() {
        let model = build(10.0, &[(5.0, 4.0), (5.0, 8.0)]);
        assert_eq!(fractional_bound(&model, 2, 5.0, 4.0), 5.0);
    }

    #[test]
    fn test_zero_weight_items_always_fit() {
        let model = build(0.0, &[(7.0, 0.0), (3.0, 1.0), (0.0, 0.0)]);
        assert_relative_eq!(fractional_bound(&model, 0, 0.0, 0.0), 7.0);
    }

    #[test]
    fn test_exactly_full_knapsack_has_no_fraction() {
        let model = build(30.0, &[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0)]);
        assert_relative_eq!(fractional_bound(&model, 0, 0.0, 0.0), 160.0);
    }
}
