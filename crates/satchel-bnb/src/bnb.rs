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

//! Branch-and-bound solver for the 0/1 knapsack problem.
//!
//! `BnbSolver` explores the include/exclude decision tree over the items of a
//! `Model` in density order. Every generated node carries the fractional
//! relaxation bound of its subtree; a node is only kept on the frontier while
//! that bound strictly exceeds the incumbent, and it is checked again when it
//! is taken off the frontier because the incumbent may have improved in the
//! meantime. When the frontier runs empty the incumbent is optimal.
//!
//! The traversal order is a property of the frontier (`FifoFrontier` by
//! default), while the pruning rules are fixed. The solver owns its frontier
//! and clears it after each solve without releasing capacity, so repeated
//! solves do not churn memory. A search session object encapsulates per-run
//! state, statistics and timing.

use crate::{
    frontier::{FifoFrontier, Frontier},
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    result::{BnbSolverOutcome, BnbTerminationReason},
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;

/// A branch-and-bound solver for the 0/1 knapsack problem using
/// fractional relaxation bounds. The traversal order is delegated to the
/// `Frontier`; monitors observe the run and may stop it early.
#[derive(Clone, Debug)]
pub struct BnbSolver<F = FifoFrontier> {
    frontier: F,
}

impl Default for BnbSolver<FifoFrontier> {
    fn default() -> Self {
        Self::new()
    }
}

impl BnbSolver<FifoFrontier> {
    /// Creates a new breadth-first solver.
    #[inline]
    pub fn new() -> Self {
        Self {
            frontier: FifoFrontier::new(),
        }
    }

    /// Creates a new breadth-first solver whose frontier can hold
    /// `capacity` nodes before it has to grow.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            frontier: FifoFrontier::preallocated(capacity),
        }
    }
}

impl<F> BnbSolver<F>
where
    F: Frontier,
{
    /// Creates a new solver that traverses the tree with `frontier`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `frontier` is not empty.
    #[inline]
    pub fn with_frontier(frontier: F) -> Self {
        debug_assert!(
            frontier.is_empty(),
            "called `BnbSolver::with_frontier` with a non-empty frontier: the len is {}",
            frontier.len()
        );

        Self { frontier }
    }

    /// Returns the frontier of the solver.
    #[inline]
    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    /// Solves `model`, reporting progress to `monitor`.
    pub fn solve<S>(&mut self, model: &Model, mut monitor: S) -> BnbSolverOutcome
    where
        S: TreeSearchMonitor,
    {
        ::log::debug!(
            "Starting branch-and-bound on {} with {}",
            model,
            self.frontier.name()
        );

        let session = BnbSolverSearchSession::new(&mut self.frontier, model, &mut monitor);
        let outcome = session.run();
        self.reset();

        ::log::debug!(
            "Finished branch-and-bound: {} ({})",
            outcome.result(),
            outcome.termination_reason()
        );
        outcome
    }

    /// Clears the frontier without releasing its storage.
    #[inline]
    fn reset(&mut self) {
        self.frontier.clear();
    }
}

/// A search session for the branch-and-bound solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, F, S>
where
    F: Frontier,
    S: TreeSearchMonitor,
{
    frontier: &'a mut F,
    model: &'a Model,
    monitor: &'a mut S,
    incumbent: Incumbent,
    stats: BnbSolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, F, S> std::fmt::Debug for BnbSolverSearchSession<'a, F, S>
where
    F: Frontier,
    S: TreeSearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("model", &self.model)
            .field("frontier_len", &self.frontier.len())
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, F, S> BnbSolverSearchSession<'a, F, S>
where
    F: Frontier,
    S: TreeSearchMonitor,
{
    /// Create a new search session.
    #[inline]
    fn new(frontier: &'a mut F, model: &'a Model, monitor: &'a mut S) -> Self {
        debug_assert!(
            frontier.is_empty(),
            "called `BnbSolverSearchSession::new` with a non-empty frontier: the len is {}",
            frontier.len()
        );

        Self {
            frontier,
            model,
            monitor,
            incumbent: Incumbent::empty(model.num_items()),
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    fn run(mut self) -> BnbSolverOutcome {
        self.monitor.on_enter_search(self.model, &self.stats);
        self.initialize();

        let termination_reason = loop {
            if self.frontier.is_empty() {
                break BnbTerminationReason::OptimalityProven;
            }

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break BnbTerminationReason::Aborted(msg);
            }
            self.stats.on_step();

            let Some(node) = self.frontier.pop() else {
                break BnbTerminationReason::OptimalityProven;
            };
            self.process_node(node);
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    /// Pushes the root node. The root is enqueued unconditionally,
    /// even if its bound cannot beat the empty incumbent.
    #[inline]
    fn initialize(&mut self) {
        let root = SearchNode::root(self.model);
        self.stats.set_root_bound(root.bound());
        self.monitor.on_bound_computed(&root, &self.stats);
        self.enqueue(root);
    }

    /// Finalize the solver result based on the incumbent
    /// and the termination reason.
    #[inline]
    fn finalize_result(self, reason: BnbTerminationReason) -> BnbSolverOutcome {
        let solution = self.incumbent.to_solution(self.model);
        match reason {
            BnbTerminationReason::OptimalityProven => {
                BnbSolverOutcome::optimal(solution, self.stats)
            }
            BnbTerminationReason::Aborted(msg) => {
                BnbSolverOutcome::aborted(solution, msg, self.stats)
            }
        }
    }

    /// Handles a node taken off the frontier.
    fn process_node(&mut self, node: SearchNode) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(node.depth() as u64);
        self.monitor.on_step(&node, &self.stats);

        // The incumbent may have improved since the node was enqueued.
        if !self.incumbent.is_beaten_by(node.bound()) {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&node, PruneReason::BoundDominated, &self.stats);
            return;
        }

        if node.is_terminal(self.model) {
            self.stats.on_terminal_node();
            return;
        }

        self.expand(node);
    }

    /// Generates the include and the exclude child of `node`.
    fn expand(&mut self, node: SearchNode) {
        if node.can_include_next(self.model) {
            let include = node.include_child(self.model);
            if self.incumbent.try_install(&include, self.model) {
                self.stats.on_incumbent_update();
                self.monitor
                    .on_incumbent_improved(&self.incumbent, &self.stats);
            }
            self.monitor.on_bound_computed(&include, &self.stats);
            self.offer(include);
        } else {
            self.stats.on_pruning_infeasible();
            self.monitor
                .on_prune(&node, PruneReason::Infeasible, &self.stats);
        }

        let exclude = node.into_exclude_child(self.model);
        self.monitor.on_bound_computed(&exclude, &self.stats);
        self.offer(exclude);
    }

    /// Enqueues `child` iff its bound strictly exceeds the incumbent.
    #[inline]
    fn offer(&mut self, child: SearchNode) {
        if self.incumbent.is_beaten_by(child.bound()) {
            self.enqueue(child);
        } else {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&child, PruneReason::BoundDominated, &self.stats);
        }
    }

    #[inline]
    fn enqueue(&mut self, node: SearchNode) {
        self.stats.on_node_enqueued(self.frontier.len() + 1);
        self.monitor.on_enqueue(&node, &self.stats);
        self.frontier.push(node);
    }
}
