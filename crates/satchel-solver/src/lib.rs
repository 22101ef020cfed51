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

//! # Satchel Solver
//!
//! High-level entry points to the branch-and-bound knapsack solver.
//!
//! ## Modules
//!
//! - `solver`: `Solver` and `SolverBuilder`, which pick a frontier strategy
//!   and assemble limits, interruption and progress logging.
//! - `error`: the facade's error type.
//!
//! The crate root exposes `solve`, the one-call form: sort the items in
//! place, validate, search breadth-first without limits and return the
//! optimum value.

pub mod error;
pub mod solver;

use crate::error::SolveError;
use satchel_bnb::{bnb::BnbSolver, monitor::no_op::NoOperationMonitor};
use satchel_core::num::float::SolverFloat;
use satchel_model::{
    item::{Item, sort_by_density},
    model::ModelBuilder,
};

/// Solves the 0/1 knapsack problem for `items` and `capacity` and returns the
/// maximum total value of any subset whose total weight does not exceed
/// `capacity`.
///
/// On success `items` is left sorted by descending value density (stable).
/// On error `items` is left untouched.
///
/// # Errors
///
/// Returns `SolveError::InvalidInput` if `items` is empty, or if the capacity
/// or any value or weight is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use satchel_model::item::Item;
///
/// let mut items = vec![
///     Item::new(60.0f32, 10.0),
///     Item::new(100.0, 20.0),
///     Item::new(120.0, 30.0),
/// ];
/// let best = satchel_solver::solve(&mut items, 40.0).unwrap();
/// assert_eq!(best, 180.0);
/// assert_eq!(items[0], Item::new(60.0, 10.0));
/// ```
pub fn solve<T>(items: &mut [Item<T>], capacity: T) -> Result<f64, SolveError>
where
    T: SolverFloat,
{
    let model = ModelBuilder::from_items(capacity, items).build()?;
    sort_by_density(items);

    let outcome = BnbSolver::new().solve(&model, NoOperationMonitor::new());
    Ok(outcome.objective())
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::{index::ItemIndex, model::ModelError};

    #[test]
    fn test_solve_sorts_and_returns_optimum() {
        let mut items = vec![
            Item::new(120.0f64, 30.0),
            Item::new(60.0, 10.0),
            Item::new(100.0, 20.0),
        ];
        assert_eq!(solve(&mut items, 50.0), Ok(220.0));
        assert_eq!(
            items,
            vec![
                Item::new(60.0, 10.0),
                Item::new(100.0, 20.0),
                Item::new(120.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_invalid_input_leaves_items_untouched() {
        let mut items = vec![Item::new(1.0f64, 2.0), Item::new(5.0, -1.0)];
        let before = items.clone();
        assert_eq!(
            solve(&mut items, 10.0),
            Err(SolveError::InvalidInput(ModelError::NegativeWeight {
                index: ItemIndex::new(1)
            }))
        );
        assert_eq!(items, before);
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut items: Vec<Item<f32>> = Vec::new();
        assert_eq!(
            solve(&mut items, 1.0),
            Err(SolveError::InvalidInput(ModelError::EmptyItems))
        );
    }

    #[test]
    fn test_error_display() {
        let err = SolveError::from(ModelError::NegativeCapacity);
        assert!(err.to_string().starts_with("Invalid input: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
