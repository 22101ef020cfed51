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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, limits and cancellation
//! without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use satchel_model::model::Model;

/// A tree search monitor that aggregates multiple monitors and forwards events to all of them.
#[derive(Default)]
pub struct CompositeTreeSearchMonitor<'a> {
    monitors: Vec<Box<dyn TreeSearchMonitor + 'a>>,
}

impl<'a> CompositeTreeSearchMonitor<'a> {
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeTreeSearchMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn TreeSearchMonitor + 'a>> for CompositeTreeSearchMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeTreeSearchMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeTreeSearchMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<'a> TreeSearchMonitor for CompositeTreeSearchMonitor<'a> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, model: &Model, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(model, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(node, statistics);
        }
    }

    #[inline(always)]
    fn on_bound_computed(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_bound_computed(node, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(&mut self, node: &SearchNode, reason: PruneReason, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_prune(node, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_enqueue(&mut self, node: &SearchNode, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enqueue(node, statistics);
        }
    }

    #[inline(always)]
    fn on_incumbent_improved(&mut self, incumbent: &Incumbent, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_incumbent_improved(incumbent, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::cell::RefCell;

    /// Records event names into a shared log and answers with a fixed command.
    struct Recorder<'l> {
        tag: &'static str,
        log: &'l RefCell<Vec<String>>,
        command: SearchCommand,
    }

    impl<'l> Recorder<'l> {
        fn new(tag: &'static str, log: &'l RefCell<Vec<String>>, command: SearchCommand) -> Self {
            Self { tag, log, command }
        }

        fn record(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, event));
        }
    }

    impl TreeSearchMonitor for Recorder<'_> {
        fn name(&self) -> &str {
            self.tag
        }
        fn on_enter_search(&mut self, _model: &Model, _statistics: &BnbSolverStatistics) {
            self.record("enter");
        }
        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {
            self.record("exit");
        }
        fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
            self.record("command");
            self.command.clone()
        }
        fn on_step(&mut self, _node: &SearchNode, _statistics: &BnbSolverStatistics) {
            self.record("step");
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
        fn on_incumbent_improved(
            &mut self,
            _incumbent: &Incumbent,
            _statistics: &BnbSolverStatistics,
        ) {
        }
    }

    #[test]
    fn test_first_terminate_wins_and_short_circuits() {
        let log = RefCell::new(Vec::new());
        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(Recorder::new("a", &log, SearchCommand::Continue));
        composite.add_monitor(Recorder::new(
            "b",
            &log,
            SearchCommand::Terminate("first".into()),
        ));
        composite.add_monitor(Recorder::new(
            "c",
            &log,
            SearchCommand::Terminate("second".into()),
        ));

        let cmd = composite.search_command(&BnbSolverStatistics::default());
        assert_eq!(cmd, SearchCommand::Terminate("first".into()));
        assert_eq!(*log.borrow(), vec!["a:command", "b:command"]);
    }

    #[test]
    fn test_events_fan_out_in_order() {
        let log = RefCell::new(Vec::new());
        let mut composite = CompositeTreeSearchMonitor::with_capacity(2);
        composite.add_monitor(Recorder::new("a", &log, SearchCommand::Continue));
        composite.add_monitor_boxed(Box::new(Recorder::new("b", &log, SearchCommand::Continue)));
        assert_eq!(composite.len(), 2);

        let stats = BnbSolverStatistics::default();
        composite.on_exit_search(&stats);
        assert_eq!(composite.search_command(&stats), SearchCommand::Continue);
        assert_eq!(
            *log.borrow(),
            vec!["a:exit", "b:exit", "a:command", "b:command"]
        );
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite: CompositeTreeSearchMonitor = std::iter::empty().collect();
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&BnbSolverStatistics::default()),
            SearchCommand::Continue
        );

        composite.add_monitor(NoOperationMonitor::new());
        assert_eq!(
            format!("{:?}", composite.monitors()[0]),
            "SearchMonitor(NoOperationMonitor)"
        );
    }
}
