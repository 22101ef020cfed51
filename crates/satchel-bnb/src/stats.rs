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

use satchel_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during the execution of the branch-and-bound solver.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbSolverStatistics {
    /// Total nodes taken off the frontier.
    pub nodes_explored: u64,
    /// Total nodes pushed onto the frontier, the root included.
    pub nodes_enqueued: u64,
    /// Nodes dropped because their bound could not beat the incumbent,
    /// either when generated or when taken off the frontier.
    pub prunings_bound: u64,
    /// Include moves rejected because the item did not fit.
    pub prunings_infeasible: u64,
    /// Nodes with every item decided.
    pub terminal_nodes: u64,
    /// Times the incumbent improved.
    pub incumbent_updates: u64,
    /// The largest number of pending nodes at any point.
    pub max_frontier_size: u64,
    /// The deepest level taken off the frontier.
    pub max_depth: u64,
    /// Main loop iterations that passed the monitor check.
    pub steps: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The fractional bound of the root node.
    pub root_bound: f64,
}

impl Default for BnbSolverStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            nodes_enqueued: 0,
            prunings_bound: 0,
            prunings_infeasible: 0,
            terminal_nodes: 0,
            incumbent_updates: 0,
            max_frontier_size: 0,
            max_depth: 0,
            steps: 0,
            time_total: Duration::ZERO,
            root_bound: 0.0,
        }
    }
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add_val(1);
    }

    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    /// Records an enqueue; `frontier_len` is the frontier size after the push.
    #[inline]
    pub fn on_node_enqueued(&mut self, frontier_len: usize) {
        self.nodes_enqueued = self.nodes_enqueued.saturating_add_val(1);
        self.max_frontier_size = self.max_frontier_size.max(frontier_len as u64);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add_val(1);
    }

    #[inline]
    pub fn on_terminal_node(&mut self) {
        self.terminal_nodes = self.terminal_nodes.saturating_add_val(1);
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add_val(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_bound(&mut self, bound: f64) {
        self.root_bound = bound;
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Satchel-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Nodes enqueued:        {}", self.nodes_enqueued)?;
        writeln!(f, "  Max frontier size:     {}", self.max_frontier_size)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Terminal nodes:        {}", self.terminal_nodes)?;
        writeln!(f, "  Prunings (infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Incumbent updates:     {}", self.incumbent_updates)?;
        writeln!(f, "  Steps:                 {}", self.steps)?;
        writeln!(f, "  Root bound:            {}", self.root_bound)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_maxima() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_node_enqueued(1);
        stats.on_node_enqueued(5);
        stats.on_node_enqueued(3);
        stats.on_depth_update(4);
        stats.on_depth_update(2);
        stats.on_step();
        stats.on_node_explored();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_terminal_node();
        stats.on_incumbent_update();

        assert_eq!(stats.nodes_enqueued, 3);
        assert_eq!(stats.max_frontier_size, 5);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.steps, 1);
        assert_eq!(stats.nodes_explored, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.terminal_nodes, 1);
        assert_eq!(stats.incumbent_updates, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let mut stats = BnbSolverStatistics::default();
        stats.set_root_bound(240.0);
        let text = stats.to_string();
        assert!(text.contains("Nodes explored"));
        assert!(text.contains("Root bound:            240"));
    }
}
