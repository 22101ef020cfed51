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

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;

/// A tree search monitor that stops the search once a number of nodes
/// has been taken off the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLimitMonitor {
    node_limit: u64,
}

impl NodeLimitMonitor {
    /// Creates a new `NodeLimitMonitor` that allows at most `node_limit` explored nodes.
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self { node_limit }
    }

    /// Returns the configured node limit.
    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }
}

impl TreeSearchMonitor for NodeLimitMonitor {
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model, _statistics: &BnbSolverStatistics) {}

    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        if statistics.nodes_explored >= self.node_limit {
            return SearchCommand::Terminate(format!("node limit of {} reached", self.node_limit));
        }
        SearchCommand::Continue
    }

    fn on_step(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {}

    fn on_bound_computed(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {}

    fn on_prune(
        &mut self,
        _node: &SearchNode,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    fn on_enqueue(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {}

    fn on_incumbent_improved(
        &mut self,
        _incumbent: &Incumbent,
        _statistics: &BnbSolverStatistics,
    ) {
    }
}
