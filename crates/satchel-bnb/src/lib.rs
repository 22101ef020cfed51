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

//! Satchel-BnB: branch-and-bound for the 0/1 knapsack problem
//!
//! Implements a deterministic branch-and-bound solver over the include/exclude
//! decision tree of a density-sorted `satchel_model::model::Model`. Subtrees
//! are pruned with the fractional (LP) relaxation bound against a running
//! incumbent.
//!
//! Core flow
//! - Provide a validated `Model`.
//! - Choose a `frontier::Frontier` (traversal order), FIFO by default.
//! - Optionally attach monitors for logging, limits or cancellation.
//! - Run `bnb::BnbSolver::solve` and inspect the `result::BnbSolverOutcome`.
//!
//! Assumptions and guarantees
//! - The model is sorted by descending density, which `ModelBuilder` ensures;
//!   the bound relies on it to be admissible.
//! - Every frontier yields the same optimum value.
//! - All accumulation is done in `f64`.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `bound`: the fractional relaxation bound.
//! - `node`: search tree nodes.
//! - `frontier`: FIFO, LIFO and best-bound frontiers.
//! - `incumbent`: the best packing found so far.
//! - `monitor`: tree-search monitors (log, composite, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod bound;
pub mod frontier;
pub mod incumbent;
pub mod monitor;
pub mod node;
pub mod result;
pub mod stats;
