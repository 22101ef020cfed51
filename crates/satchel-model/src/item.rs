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

//! Knapsack items and the value-density ordering.
//!
//! The fractional relaxation bound used by the branch-and-bound engine is
//! only admissible when it fills the remaining capacity in order of
//! decreasing value per unit of weight. This module owns that ordering:
//! [`density`] defines the key, including the zero-weight policy, and
//! [`sort_by_density`] applies it in place.
//!
//! Zero-weight policy
//! - `weight == 0 && value > 0`: density is `+inf`. Such items cost no
//!   capacity and are always worth taking, so they sort first.
//! - `weight == 0 && value == 0`: density is `0`. The item is irrelevant and
//!   sorts with the other worthless items.
//!
//! The sort is stable, so items of equal density keep their relative input
//! order and sorting an already sorted slice leaves it untouched.

use satchel_core::num::float::SolverFloat;

/// A candidate object for the knapsack: a value and the capacity it consumes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Item<T> {
    value: T,
    weight: T,
}

impl<T> Item<T>
where
    T: SolverFloat,
{
    /// Creates a new item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use satchel_model::item::Item;
    ///
    /// let item = Item::new(60.0f64, 10.0);
    /// assert_eq!(item.value(), 60.0);
    /// assert_eq!(item.weight(), 10.0);
    /// assert_eq!(item.density(), 6.0);
    /// ```
    #[inline]
    pub fn new(value: T, weight: T) -> Self {
        Self { value, weight }
    }

    /// Returns the value of the item.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the weight of the item.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the value per unit of weight, widened to `f64`.
    /// See the module documentation for the zero-weight policy.
    #[inline]
    pub fn density(&self) -> f64 {
        density(self.value.widen(), self.weight.widen())
    }
}

impl<T> From<(T, T)> for Item<T>
where
    T: SolverFloat,
{
    #[inline]
    fn from((value, weight): (T, T)) -> Self {
        Self::new(value, weight)
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(value: {}, weight: {})", self.value, self.weight)
    }
}

/// Returns the value density `value / weight`.
///
/// # Examples
///
/// ```rust
/// # use satchel_model::item::density;
///
/// assert_eq!(density(10.0, 4.0), 2.5);
/// assert_eq!(density(3.0, 0.0), f64::INFINITY);
/// assert_eq!(density(0.0, 0.0), 0.0);
/// ```
#[inline]
pub fn density(value: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        if value > 0.0 { f64::INFINITY } else { 0.0 }
    } else {
        value / weight
    }
}

/// Sorts the items in place by decreasing density.
///
/// # Examples
///
/// ```rust
/// # use satchel_model::item::{Item, sort_by_density, is_sorted_by_density};
///
/// let mut items = vec![
///     Item::new(120.0f32, 30.0),
///     Item::new(60.0, 10.0),
///     Item::new(100.0, 20.0),
/// ];
/// sort_by_density(&mut items);
/// assert!(is_sorted_by_density(&items));
/// assert_eq!(items[0], Item::new(60.0, 10.0));
/// ```
pub fn sort_by_density<T>(items: &mut [Item<T>])
where
    T: SolverFloat,
{
    items.sort_by(|a, b| b.density().total_cmp(&a.density()));
}

/// Returns `true` if `items` is ordered by non-increasing density.
pub fn is_sorted_by_density<T>(items: &[Item<T>]) -> bool
where
    T: SolverFloat,
{
    items.windows(2).all(|w| w[0].density() >= w[1].density())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn it(value: f64, weight: f64) -> Item<f64> {
        Item::new(value, weight)
    }

    #[test]
    fn test_density_regular_and_zero_weight() {
        assert_eq!(it(10.0, 5.0).density(), 2.0);
        assert_eq!(it(7.0, 0.0).density(), f64::INFINITY);
        assert_eq!(it(0.0, 0.0).density(), 0.0);
        assert_eq!(it(0.0, 3.0).density(), 0.0);
    }

    #[test]
    fn test_sort_orders_by_decreasing_density() {
        let mut items = vec![it(120.0, 30.0), it(60.0, 10.0), it(100.0, 20.0)];
        sort_by_density(&mut items);
        assert_eq!(items, vec![it(60.0, 10.0), it(100.0, 20.0), it(120.0, 30.0)]);
    }

    #[test]
    fn test_zero_weight_items_with_value_sort_first() {
        let mut items = vec![it(1.0, 1.0), it(0.0, 0.0), it(5.0, 0.0), it(9.0, 1.0)];
        sort_by_density(&mut items);
        assert_eq!(items[0], it(5.0, 0.0));
        assert_eq!(items[1], it(9.0, 1.0));
        assert_eq!(items[2], it(1.0, 1.0));
        assert_eq!(items[3], it(0.0, 0.0));
        assert!(is_sorted_by_density(&items));
    }

    #[test]
    fn test_sort_is_stable_for_equal_densities() {
        let mut items = vec![it(2.0, 1.0), it(4.0, 2.0), it(6.0, 3.0), it(1.0, 1.0)];
        sort_by_density(&mut items);
        assert_eq!(items, vec![it(2.0, 1.0), it(4.0, 2.0), it(6.0, 3.0), it(1.0, 1.0)]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut items = vec![it(3.0, 7.0), it(8.0, 2.0), it(5.0, 5.0), it(0.0, 0.0)];
        sort_by_density(&mut items);
        let once = items.clone();
        sort_by_density(&mut items);
        assert_eq!(items, once);
    }

    #[test]
    fn test_f32_items_widen_density() {
        let item = Item::new(1.0f32, 3.0f32);
        let expected = 1.0f64 / 3.0f64;
        approx::assert_relative_eq!(item.density(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_from_tuple_and_display() {
        let item: Item<f64> = (4.0, 2.0).into();
        assert_eq!(item, it(4.0, 2.0));
        assert_eq!(format!("{}", item), "Item(value: 4, weight: 2)");
    }
}
