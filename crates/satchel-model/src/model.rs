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

//! Validated knapsack instances.
//!
//! A `Model` is the immutable, solver-facing view of one knapsack instance:
//! a capacity plus the items laid out structure-of-arrays in decreasing
//! density order. It is only obtainable through [`ModelBuilder::build`],
//! which rejects invalid input before any search starts, so the solver
//! never has to second-guess the numbers it reads.
//!
//! Two index spaces exist:
//! - *positions* (`usize`, `0..num_items`) address the sorted arrays and
//!   are what the search uses internally;
//! - *item indices* (`ItemIndex`) are the order in which items were added
//!   to the builder and are what solutions report back.

use crate::{
    index::ItemIndex,
    item::{Item, density},
};
use satchel_core::num::float::SolverFloat;

/// The reasons a knapsack instance is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The instance contains no items.
    EmptyItems,
    /// The capacity is negative.
    NegativeCapacity,
    /// The capacity is NaN or infinite.
    NonFiniteCapacity,
    /// An item has a negative value.
    NegativeValue { index: ItemIndex },
    /// An item has a negative weight.
    NegativeWeight { index: ItemIndex },
    /// An item value is NaN or infinite.
    NonFiniteValue { index: ItemIndex },
    /// An item weight is NaN or infinite.
    NonFiniteWeight { index: ItemIndex },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyItems => write!(f, "The instance must contain at least one item"),
            Self::NegativeCapacity => write!(f, "The capacity must not be negative"),
            Self::NonFiniteCapacity => write!(f, "The capacity must be a finite number"),
            Self::NegativeValue { index } => {
                write!(f, "Item {} has a negative value", index.get())
            }
            Self::NegativeWeight { index } => {
                write!(f, "Item {} has a negative weight", index.get())
            }
            Self::NonFiniteValue { index } => {
                write!(f, "Item {} has a non-finite value", index.get())
            }
            Self::NonFiniteWeight { index } => {
                write!(f, "Item {} has a non-finite weight", index.get())
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// The immutable data model of a knapsack instance.
///
/// Holds, in decreasing density order:
/// - `values[position]` and `weights[position]`, widened to `f64`;
/// - `source_indices[position]`, the `ItemIndex` the item had in the builder.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated `Model`.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    capacity: f64,
    values: Vec<f64>,               // len = num_items
    weights: Vec<f64>,              // len = num_items
    source_indices: Vec<ItemIndex>, // len = num_items
    total_value: f64,
    total_weight: f64,
}

impl Model {
    /// Returns the number of items in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use satchel_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::new(10.0f64);
    /// builder.add_item_parts(4.0, 2.0).add_item_parts(3.0, 5.0);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_items(), 2);
    /// ```
    #[inline]
    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    /// Returns the capacity of the knapsack.
    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Returns the value of the item at the given sorted position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..num_items()`.
    #[inline]
    pub fn value(&self, position: usize) -> f64 {
        debug_assert!(
            position < self.num_items(),
            "called `Model::value` with position out of bounds: the len is {} but the position is {}",
            self.num_items(),
            position
        );

        self.values[position]
    }

    /// Returns the weight of the item at the given sorted position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..num_items()`.
    #[inline]
    pub fn weight(&self, position: usize) -> f64 {
        debug_assert!(
            position < self.num_items(),
            "called `Model::weight` with position out of bounds: the len is {} but the position is {}",
            self.num_items(),
            position
        );

        self.weights[position]
    }

    /// Returns the density of the item at the given sorted position.
    #[inline]
    pub fn density(&self, position: usize) -> f64 {
        density(self.value(position), self.weight(position))
    }

    /// Returns the builder index the item at the given sorted position was added with.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..num_items()`.
    #[inline]
    pub fn source_index(&self, position: usize) -> ItemIndex {
        debug_assert!(
            position < self.num_items(),
            "called `Model::source_index` with position out of bounds: the len is {} but the position is {}",
            self.num_items(),
            position
        );

        self.source_indices[position]
    }

    /// Returns all item values in sorted order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns all item weights in sorted order.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the builder indices in sorted order.
    #[inline]
    pub fn source_indices(&self) -> &[ItemIndex] {
        &self.source_indices
    }

    /// Returns the sum of all item values.
    /// This is a trivial upper bound on any solution.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns the sum of all item weights.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns `log10(2^(n+1))`, just above the number of nodes in the full
    /// include/exclude decision tree. Used to put explored node counts into
    /// perspective.
    pub fn log10_search_space(&self) -> f64 {
        ((self.num_items() + 1) as f64) * std::f64::consts::LOG10_2
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_items: {}, capacity: {})",
            self.num_items(),
            self.capacity
        )
    }
}

/// A mutable builder for `Model`.
///
/// Items are appended in order; the index returned by `add_item` is the
/// `ItemIndex` that solutions will use to refer to the item.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T> {
    capacity: T,
    items: Vec<Item<T>>,
}

impl<T> ModelBuilder<T>
where
    T: SolverFloat,
{
    /// Creates an empty builder for a knapsack of the given capacity.
    #[inline]
    pub fn new(capacity: T) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    /// Creates an empty builder with room for `num_items` items.
    #[inline]
    pub fn preallocated(capacity: T, num_items: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(num_items),
        }
    }

    /// Creates a builder holding a copy of `items`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use satchel_model::{item::Item, model::ModelBuilder};
    ///
    /// let items = [Item::new(60.0f32, 10.0), Item::new(100.0, 20.0)];
    /// let model = ModelBuilder::from_items(50.0, &items).build().unwrap();
    /// assert_eq!(model.num_items(), 2);
    /// assert_eq!(model.capacity(), 50.0);
    /// ```
    #[inline]
    pub fn from_items(capacity: T, items: &[Item<T>]) -> Self {
        Self {
            capacity,
            items: items.to_vec(),
        }
    }

    /// Returns the capacity configured so far.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items added so far.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Replaces the capacity.
    #[inline]
    pub fn set_capacity(&mut self, capacity: T) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Appends an item and returns its `ItemIndex`.
    #[inline]
    pub fn add_item(&mut self, item: Item<T>) -> ItemIndex {
        let index = ItemIndex::new(self.items.len());
        self.items.push(item);
        index
    }

    /// Appends an item given by its parts.
    #[inline]
    pub fn add_item_parts(&mut self, value: T, weight: T) -> &mut Self {
        self.items.push(Item::new(value, weight));
        self
    }

    /// Appends all items of the iterator, in order.
    #[inline]
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Item<T>>,
    {
        self.items.extend(items);
        self
    }

    /// Validates the instance and builds the `Model`.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` if there are no items, if the capacity is
    /// negative or not finite, or if any item has a negative or non-finite
    /// value or weight. The first offending item is reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use satchel_model::model::{ModelBuilder, ModelError};
    /// # use satchel_model::index::ItemIndex;
    ///
    /// let mut builder = ModelBuilder::new(5.0f64);
    /// builder.add_item_parts(1.0, 1.0).add_item_parts(2.0, -1.0);
    /// assert_eq!(
    ///     builder.build(),
    ///     Err(ModelError::NegativeWeight { index: ItemIndex::new(1) })
    /// );
    /// ```
    pub fn build(self) -> Result<Model, ModelError> {
        self.validate()?;

        let capacity = self.capacity.widen();
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        // Stable, so equal densities keep insertion order.
        order.sort_by(|&a, &b| {
            self.items[b]
                .density()
                .total_cmp(&self.items[a].density())
        });

        let mut values = Vec::with_capacity(order.len());
        let mut weights = Vec::with_capacity(order.len());
        let mut source_indices = Vec::with_capacity(order.len());
        let mut total_value = 0.0f64;
        let mut total_weight = 0.0f64;

        for index in order {
            let item = &self.items[index];
            let (value, weight) = (item.value().widen(), item.weight().widen());
            values.push(value);
            weights.push(weight);
            source_indices.push(ItemIndex::new(index));
            total_value += value;
            total_weight += weight;
        }

        Ok(Model {
            capacity,
            values,
            weights,
            source_indices,
            total_value,
            total_weight,
        })
    }

    fn validate(&self) -> Result<(), ModelError> {
        if !self.capacity.is_finite() {
            return Err(ModelError::NonFiniteCapacity);
        }
        if self.capacity < T::zero() {
            return Err(ModelError::NegativeCapacity);
        }
        if self.items.is_empty() {
            return Err(ModelError::EmptyItems);
        }

        for (i, item) in self.items.iter().enumerate() {
            let index = ItemIndex::new(i);
            if !item.value().is_finite() {
                return Err(ModelError::NonFiniteValue { index });
            }
            if !item.weight().is_finite() {
                return Err(ModelError::NonFiniteWeight { index });
            }
            if item.value() < T::zero() {
                return Err(ModelError::NegativeValue { index });
            }
            if item.weight() < T::zero() {
                return Err(ModelError::NegativeWeight { index });
            }
        }

        Ok(())
    }
}

impl<T> std::fmt::Display for ModelBuilder<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ModelBuilder(num_items: {}, capacity: {})",
            self.items.len(),
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn classic() -> ModelBuilder<f64> {
        let mut builder = ModelBuilder::new(50.0);
        builder
            .add_item_parts(120.0, 30.0)
            .add_item_parts(60.0, 10.0)
            .add_item_parts(100.0, 20.0);
        builder
    }

    #[test]
    fn test_build_sorts_by_density_and_keeps_source_indices() {
        let model = classic().build().expect("valid model");

        assert_eq!(model.num_items(), 3);
        assert_eq!(model.capacity(), 50.0);
        assert_eq!(model.values(), &[60.0, 100.0, 120.0]);
        assert_eq!(model.weights(), &[10.0, 20.0, 30.0]);
        assert_eq!(model.source_indices(), &[ii(1), ii(2), ii(0)]);
        assert_eq!(model.source_index(0), ii(1));
        assert_eq!(model.density(0), 6.0);
        assert_eq!(model.total_value(), 280.0);
        assert_eq!(model.total_weight(), 60.0);
    }

    #[test]
    fn test_add_item_returns_sequential_indices() {
        let mut builder = ModelBuilder::<f32>::preallocated(1.0, 4);
        assert_eq!(builder.add_item(Item::new(1.0, 1.0)), ii(0));
        assert_eq!(builder.add_item(Item::new(2.0, 1.0)), ii(1));
        assert_eq!(builder.num_items(), 2);
    }

    #[test]
    fn test_f32_inputs_are_widened() {
        let items = [Item::new(0.1f32, 0.3f32)];
        let model = ModelBuilder::from_items(1.0f32, &items).build().unwrap();
        assert_eq!(model.value(0), 0.1f32 as f64);
        assert_eq!(model.weight(0), 0.3f32 as f64);
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        let items = [Item::new(1.0f64, 1.0)];
        assert!(ModelBuilder::from_items(0.0, &items).build().is_ok());
    }

    #[test]
    fn test_rejects_empty_items() {
        assert_eq!(
            ModelBuilder::<f64>::new(1.0).build(),
            Err(ModelError::EmptyItems)
        );
    }

    #[test]
    fn test_rejects_bad_capacity() {
        let items = [Item::new(1.0f64, 1.0)];
        assert_eq!(
            ModelBuilder::from_items(-1.0, &items).build(),
            Err(ModelError::NegativeCapacity)
        );
        assert_eq!(
            ModelBuilder::from_items(f64::NAN, &items).build(),
            Err(ModelError::NonFiniteCapacity)
        );
        assert_eq!(
            ModelBuilder::from_items(f64::INFINITY, &items).build(),
            Err(ModelError::NonFiniteCapacity)
        );
    }

    #[test]
    fn test_rejects_bad_items_reporting_first_offender() {
        let mut builder = ModelBuilder::new(10.0f64);
        builder
            .add_item_parts(1.0, 1.0)
            .add_item_parts(-2.0, 1.0)
            .add_item_parts(1.0, -3.0);
        assert_eq!(
            builder.build(),
            Err(ModelError::NegativeValue { index: ii(1) })
        );

        let mut builder = ModelBuilder::new(10.0f64);
        builder.add_item_parts(f64::NAN, 1.0);
        assert_eq!(
            builder.build(),
            Err(ModelError::NonFiniteValue { index: ii(0) })
        );

        let mut builder = ModelBuilder::new(10.0f64);
        builder
            .add_item_parts(1.0, 1.0)
            .add_item_parts(1.0, f64::INFINITY);
        assert_eq!(
            builder.build(),
            Err(ModelError::NonFiniteWeight { index: ii(1) })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelError::NegativeWeight { index: ii(4) }.to_string(),
            "Item 4 has a negative weight"
        );
        assert_eq!(
            ModelError::EmptyItems.to_string(),
            "The instance must contain at least one item"
        );
    }

    #[test]
    fn test_display() {
        let model = classic().build().unwrap();
        assert_eq!(format!("{}", model), "Model(num_items: 3, capacity: 50)");
        assert_eq!(
            format!("{}", classic()),
            "ModelBuilder(num_items: 3, capacity: 50)"
        );
    }

    #[test]
    fn test_log10_search_space() {
        let model = classic().build().unwrap();
        approx::assert_relative_eq!(model.log10_search_space(), 16f64.log10(), epsilon = 1e-12);
    }
}
