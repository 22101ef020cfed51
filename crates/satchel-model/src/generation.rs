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

//! Synthetic instance generation.
//!
//! Items are drawn from two independent standard normal samples per item:
//! `value = max_value * |z1|` and `weight = |z2|`. The generator owns a
//! seeded `SmallRng`, so a given seed always yields the same sequence of
//! instances.

use crate::item::Item;
use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, StandardNormal};
use satchel_core::num::float::SolverFloat;

/// The default scale applied to sampled values.
pub const DEFAULT_MAX_VALUE: f64 = 100.0;

/// A reproducible generator of random knapsack items.
#[derive(Debug, Clone)]
pub struct InstanceGenerator<T> {
    rng: SmallRng,
    max_value: T,
}

impl<T> InstanceGenerator<T>
where
    T: SolverFloat,
    StandardNormal: Distribution<T>,
{
    /// Creates a generator seeded with `seed`.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    #[inline]
    fn with_rng(rng: SmallRng) -> Self {
        let max_value = num_traits::cast(DEFAULT_MAX_VALUE).unwrap_or_else(T::one);
        Self { rng, max_value }
    }

    /// Sets the scale applied to sampled values.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `max_value` is negative or not finite.
    #[inline]
    pub fn with_max_value(mut self, max_value: T) -> Self {
        debug_assert!(
            max_value.is_finite() && max_value >= T::zero(),
            "called `InstanceGenerator::with_max_value` with invalid scale {}",
            max_value
        );
        self.max_value = max_value;
        self
    }

    /// Returns the scale applied to sampled values.
    #[inline]
    pub fn max_value(&self) -> T {
        self.max_value
    }

    /// Draws a single item.
    #[inline]
    pub fn next_item(&mut self) -> Item<T> {
        let z1: T = StandardNormal.sample(&mut self.rng);
        let z2: T = StandardNormal.sample(&mut self.rng);
        Item::new(self.max_value * z1.abs(), z2.abs())
    }

    /// Draws `num_items` items.
    pub fn generate(&mut self, num_items: usize) -> Vec<Item<T>> {
        let mut items = Vec::with_capacity(num_items);
        for _ in 0..num_items {
            items.push(self.next_item());
        }
        items
    }
}
