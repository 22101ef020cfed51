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

//! Progress logging for tree search
//!
//! `LogTreeSearchMonitor` writes a table of progress lines through the `log`
//! facade at `info` level: a header when the search starts, a line at most
//! once per `log_interval` and a footer when the search ends. Incumbent
//! improvements only refresh the incumbent column of the next line; each one
//! is reported individually at `debug` level. The clock is only consulted
//! when the explored node count hits the clock check mask.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;
use std::time::{Duration, Instant};

/// A tree search monitor that periodically logs search progress.
#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_objective: Option<f64>,
    lines_written: u64,
}

impl LogTreeSearchMonitor {
    /// Creates a new monitor that logs at most once per `log_interval`,
    /// checking the clock whenever `nodes_explored & clock_check_mask == 0`.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            best_objective: None,
            lines_written: 0,
        }
    }

    /// Returns the number of progress lines written so far, header and footer excluded.
    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    #[inline(always)]
    fn log_header(&self) {
        ::log::info!(
            "{:<9} | {:<14} | {:<10} | {:<7} | {:<14} | {:<14} | {:<12}",
            "Elapsed",
            "Nodes",
            "Peak Front",
            "Depth",
            "Incumbent",
            "Node Bound",
            "Pruned"
        );
        ::log::info!("{}", "-".repeat(99));
    }

    #[inline(always)]
    fn log_line(&mut self, node: &SearchNode, stats: &BnbSolverStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_obj_str = match self.best_objective {
            Some(obj) => format!("{:.4}", obj),
            None => "-".to_string(),
        };
        let pruned = stats
            .prunings_bound
            .saturating_add(stats.prunings_infeasible);

        ::log::info!(
            "{:<9} | {:<14} | {:<10} | {:<7} | {:<14} | {:<14.4} | {:<12}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            stats.max_frontier_size,
            node.depth(),
            best_obj_str,
            node.bound(),
            pruned
        );

        self.last_log_time = now;
        self.lines_written += 1;
    }
}

impl Default for LogTreeSearchMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogTreeSearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

impl TreeSearchMonitor for LogTreeSearchMonitor {
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, model: &Model, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_objective = None;
        self.lines_written = 0;
        ::log::info!(
            "Searching {} items, capacity {}, tree size ~10^{:.1} nodes",
            model.num_items(),
            model.capacity(),
            model.log10_search_space()
        );
        self.log_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        ::log::info!("{}", "-".repeat(99));
        ::log::info!(
            "Search finished after {} nodes in {:.2?}",
            statistics.nodes_explored,
            self.start_time.elapsed()
        );
    }

    fn on_step(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(node, statistics);
        }
    }

    fn on_bound_computed(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {}

    fn on_prune(
        &mut self,
        _node: &SearchNode,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    fn on_enqueue(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {}

    fn on_incumbent_improved(&mut self, incumbent: &Incumbent, statistics: &BnbSolverStatistics) {
        self.best_objective = Some(incumbent.value());
        ::log::debug!(
            "New incumbent {} (weight {}) after {} nodes",
            incumbent.value(),
            incumbent.weight(),
            statistics.nodes_explored
        );
    }
}
