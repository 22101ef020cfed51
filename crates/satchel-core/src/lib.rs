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

//! # Satchel Core
//!
//! Foundational numerics and indexing primitives for the satchel knapsack
//! workspace. Higher-level crates (`satchel-model`, `satchel-bnb`,
//! `satchel-solver`) build on these to stay generic over the input float
//! type while keeping the search loop free of ad hoc conversions.
//!
//! ## Modules
//!
//! - `num`: the `SolverFloat` trait alias for item values and weights, and
//!   by-value saturating arithmetic used by the search counters.
//! - `utils`: phantom-tagged indices (`TypedIndex<T>`) that keep item
//!   positions from being mixed with other `usize` quantities.

pub mod num;
pub mod utils;
