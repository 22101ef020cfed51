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

//! # Satchel Model
//!
//! **The domain model for the Satchel knapsack solver.**
//!
//! This crate defines the data structures that describe a 0/1 knapsack
//! instance and its answer. It sits between the caller's raw items and the
//! search engine (`satchel_bnb`).
//!
//! ## Architecture
//!
//! * **`item`**: The `Item` value object and the density ordering used by the search.
//! * **`index`**: The strongly-typed `ItemIndex`.
//! * **`model`**: `Model` (immutable, density-sorted, SoA) and `ModelBuilder` (mutable, validating).
//! * **`solution`**: The objective value, total weight and selected items of an answer.
//! * **`loading`**: Reading item lists from delimited text.
//! * **`generation`**: Seeded random instances for benchmarks and tests.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: `ModelBuilder::build` rejects negative or non-finite input before any search starts.
//! 2.  **Memory Layout**: Values and weights are stored as flat `f64` vectors in density order.
//! 3.  **Traceability**: Every sorted position remembers the index the caller inserted the item at.

pub mod generation;
pub mod index;
pub mod item;
pub mod loading;
pub mod model;
pub mod solution;
