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

//! Cooperative cancellation
//!
//! `InterruptMonitor` watches an `AtomicBool` owned by the caller. Another
//! thread (a signal handler, a UI, a supervisor) sets the flag and the search
//! stops at its next step, reporting the incumbent as a feasible result.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;
use std::sync::atomic::{AtomicBool, Ordering};

/// A tree search monitor that stops the search when a shared flag is raised.
#[derive(Debug, Clone, Copy)]
pub struct InterruptMonitor<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InterruptMonitor<'a> {
    /// Creates a new `InterruptMonitor` watching `flag`.
    #[inline]
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }

    /// Returns `true` if the flag is raised.
    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl TreeSearchMonitor for InterruptMonitor<'_> {
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model, _statistics: &BnbSolverStatistics) {}

    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
        if self.is_interrupted() {
            return SearchCommand::Terminate("interrupted".to_string());
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
    fn test_reacts_to_flag() {
        let flag = AtomicBool::new(false);
        let mut monitor = InterruptMonitor::new(&flag);
        let stats = BnbSolverStatistics::default();

        assert_eq!(monitor.search_command(&stats), SearchCommand::Continue);
        flag.store(true, Ordering::Relaxed);
        assert!(monitor.is_interrupted());
        assert_eq!(
            monitor.search_command(&stats),
            SearchCommand::Terminate("interrupted".to_string())
        );
    }

    #[test]
    fn test_flag_raised_from_another_thread() {
        let flag = AtomicBool::new(false);
        std::thread::scope(|scope| {
            scope.spawn(|| flag.store(true, Ordering::Relaxed));
        });
        assert!(InterruptMonitor::new(&flag).is_interrupted());
    }
}
