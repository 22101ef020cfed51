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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `SearchCommand` and `PruneReason`
//! for observing and controlling branch-and-bound. Callbacks track the solver
//! lifecycle, and a monitor can stop the search via `SearchCommand`
//! (default: Continue).
//!
//! Lifecycle highlights
//! - enter → {command → step → bound/prune/enqueue/incumbent}* → exit
//! - `BnbSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - `search_command` runs once per loop iteration, before a node is taken
//!   off the frontier. Keep it cheap.
//! - Callbacks see nodes by reference and cannot alter the search.

use crate::{incumbent::Incumbent, node::SearchNode, stats::BnbSolverStatistics};
use satchel_model::model::Model;

/// The instruction a monitor gives the search loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop and report the incumbent. The string says why.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for pruning a search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// Including the next item would exceed the capacity.
    Infeasible,
    /// The node's bound does not exceed the incumbent.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, model: &Model, statistics: &BnbSolverStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics);
    /// Called to determine the next action of the search.
    fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when a node is taken off the frontier.
    fn on_step(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics);
    /// Called when the bound of a freshly generated node is known.
    fn on_bound_computed(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics);
    /// Called when a node is pruned.
    /// For `PruneReason::Infeasible`, `node` is the parent whose include move was rejected.
    fn on_prune(
        &mut self,
        node: &SearchNode,
        reason: PruneReason,
        statistics: &BnbSolverStatistics,
    );
    /// Called when a node is pushed onto the frontier.
    fn on_enqueue(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics);
    /// Called when a better packing becomes the incumbent.
    fn on_incumbent_improved(&mut self, incumbent: &Incumbent, statistics: &BnbSolverStatistics);
}

impl<M> TreeSearchMonitor for &mut M
where
    M: TreeSearchMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, model: &Model, statistics: &BnbSolverStatistics) {
        (**self).on_enter_search(model, statistics)
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }

    #[inline(always)]
    fn on_step(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        (**self).on_step(node, statistics)
    }

    #[inline(always)]
    fn on_bound_computed(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        (**self).on_bound_computed(node, statistics)
    }

    #[inline(always)]
    fn on_prune(&mut self, node: &SearchNode, reason: PruneReason, statistics: &BnbSolverStatistics) {
        (**self).on_prune(node, reason, statistics)
    }

    #[inline(always)]
    fn on_enqueue(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        (**self).on_enqueue(node, statistics)
    }

    #[inline(always)]
    fn on_incumbent_improved(&mut self, incumbent: &Incumbent, statistics: &BnbSolverStatistics) {
        (**self).on_incumbent_improved(incumbent, statistics)
    }
}

impl std::fmt::Debug for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
