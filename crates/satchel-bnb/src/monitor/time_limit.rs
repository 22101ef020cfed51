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

//! Time limit monitor for tree search
//!
//! `TimeLimitMonitor` implements `TreeSearchMonitor` and enforces a wall-clock
//! time budget for the search. It resets its clock at the start, checks
//! elapsed time at masked step intervals to minimize overhead, and signals
//! termination when the configured limit is reached.
//!
//! Construct with `new(limit)` or `with_clock_check_mask(limit, mask)` to
//! tune how frequently the clock is checked versus search throughput.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;
use std::time::{Duration, Instant};

/// A tree search monitor that enforces a time limit on the search process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
}

impl TimeLimitMonitor {
    /// Default mask for clock checks; the clock is read every 1024 steps.
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FF;

    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_STEP_CLOCK_CHECK_MASK)
    }

    /// Creates a new `TimeLimitMonitor` with the specified time limit and clock check mask.
    /// The clock is read whenever `steps & mask == 0`.
    pub fn with_clock_check_mask(time_limit: Duration, mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask: mask,
        }
    }

    /// Returns the configured time limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl TreeSearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
    }

    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        if (statistics.steps & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit exceeded".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_terminates_on_masked_step() {
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 3);
        let mut stats = BnbSolverStatistics::default();

        stats.steps = 1;
        assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);

        stats.steps = 4;
        assert_eq!(
            monitor.search_command(&stats),
            SearchCommand::Terminate("time limit exceeded".to_string())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::from_secs(3600), 0);
        let stats = BnbSolverStatistics::default();
        for _ in 0..10 {
            assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);
        }
        assert_eq!(monitor.time_limit(), Duration::from_secs(3600));
    }
}
