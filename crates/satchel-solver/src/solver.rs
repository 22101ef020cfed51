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

//! # Configurable Solver
//!
//! A high-level front end to the branch-and-bound engine that assembles the
//! monitor stack from a handful of settings: frontier strategy, time limit,
//! node limit, external interrupt and progress logging.
//!
//! ## Highlights
//!
//! - Builder pattern:
//!   - `SolverBuilder` configures limits and strategy, `build` returns a reusable `Solver`.
//! - Monitor stack:
//!   - Interrupt first, then node limit, then time limit, then logging.
//!     The first monitor that asks to stop wins.
//! - Reuse:
//!   - The `Solver` keeps its engine between calls, so repeated solves reuse
//!     frontier storage.
//!
//! ## Usage
//!
//! ```rust
//! use satchel_bnb::frontier::FrontierKind;
//! use satchel_model::model::ModelBuilder;
//! use satchel_solver::solver::SolverBuilder;
//! use std::time::Duration;
//!
//! let mut builder = ModelBuilder::new(50.0f64);
//! builder
//!     .add_item_parts(60.0, 10.0)
//!     .add_item_parts(100.0, 20.0)
//!     .add_item_parts(120.0, 30.0);
//! let model = builder.build().unwrap();
//!
//! let mut solver = SolverBuilder::new()
//!     .with_frontier(FrontierKind::BestBound)
//!     .with_time_limit(Duration::from_secs(10))
//!     .build();
//!
//! let outcome = solver.solve(&model);
//! assert!(outcome.is_optimal());
//! assert_eq!(outcome.objective(), 220.0);
//! ```

use satchel_bnb::{
    bnb::BnbSolver,
    frontier::{Frontier, FrontierKind},
    monitor::{
        composite::CompositeTreeSearchMonitor, interrupt::InterruptMonitor,
        log::LogTreeSearchMonitor, node_limit::NodeLimitMonitor, time_limit::TimeLimitMonitor,
    },
    result::BnbSolverOutcome,
};
use satchel_model::model::Model;
use std::{sync::atomic::AtomicBool, time::Duration};

/// Clock check mask used by the progress logger.
const LOG_CLOCK_CHECK_MASK: u64 = 0x3FF;

/// A configured branch-and-bound solver.
pub struct Solver<'a> {
    engine: BnbSolver<Box<dyn Frontier>>,
    frontier: FrontierKind,
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
    interrupt: Option<&'a AtomicBool>,
    log_interval: Option<Duration>,
}

impl<'a> Solver<'a> {
    #[inline]
    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    #[inline]
    pub fn has_node_limit(&self) -> bool {
        self.node_limit.is_some()
    }

    #[inline]
    pub fn has_interrupt(&self) -> bool {
        self.interrupt.is_some()
    }

    #[inline]
    pub fn log_interval(&self) -> Option<Duration> {
        self.log_interval
    }

    /// Solves `model` with the configured strategy and limits.
    pub fn solve(&mut self, model: &Model) -> BnbSolverOutcome {
        let mut monitor = CompositeTreeSearchMonitor::with_capacity(4);

        if let Some(flag) = self.interrupt {
            monitor.add_monitor(InterruptMonitor::new(flag));
        }
        if let Some(limit) = self.node_limit {
            monitor.add_monitor(NodeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(interval) = self.log_interval {
            monitor.add_monitor(LogTreeSearchMonitor::new(interval, LOG_CLOCK_CHECK_MASK));
        }

        self.engine.solve(model, monitor)
    }
}

impl std::fmt::Debug for Solver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("frontier", &self.frontier)
            .field("time_limit", &self.time_limit)
            .field("node_limit", &self.node_limit)
            .field("interrupt", &self.interrupt.is_some())
            .field("log_interval", &self.log_interval)
            .finish()
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder<'a> {
    frontier: FrontierKind,
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
    interrupt: Option<&'a AtomicBool>,
    log_interval: Option<Duration>,
}

impl<'a> SolverBuilder<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the traversal order. Defaults to `FrontierKind::Fifo`.
    #[inline]
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Stops the search as soon as `flag` is set, from any thread.
    #[inline]
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Logs a progress line at most once per `interval`.
    #[inline]
    pub fn with_logging(mut self, interval: Duration) -> Self {
        self.log_interval = Some(interval);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a> {
        Solver {
            engine: BnbSolver::with_frontier(self.frontier.build()),
            frontier: self.frontier,
            time_limit: self.time_limit,
            node_limit: self.node_limit,
            interrupt: self.interrupt,
            log_interval: self.log_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_bnb::result::{BnbTerminationReason, SolverResult};
    use satchel_model::{generation::InstanceGenerator, model::ModelBuilder};
    use std::sync::atomic::Ordering;

    fn classic() -> Model {
        let mut builder = ModelBuilder::new(50.0f64);
        builder
            .add_item_parts(60.0, 10.0)
            .add_item_parts(100.0, 20.0)
            .add_item_parts(120.0, 30.0);
        builder.build().unwrap()
    }

    fn large() -> Model {
        let items = InstanceGenerator::<f64>::seeded(2024).generate(40);
        let total: f64 = items.iter().map(|i| i.weight()).sum();
        ModelBuilder::from_items(total / 3.0, &items).build().unwrap()
    }

    #[test]
    fn test_builder_records_settings() {
        let flag = AtomicBool::new(false);
        let solver = SolverBuilder::new()
            .with_frontier(FrontierKind::Lifo)
            .with_time_limit(Duration::from_millis(250))
            .with_node_limit(10)
            .with_interrupt(&flag)
            .with_logging(Duration::from_secs(2))
            .build();

        assert_eq!(solver.frontier(), FrontierKind::Lifo);
        assert_eq!(solver.time_limit(), Some(Duration::from_millis(250)));
        assert_eq!(solver.node_limit(), Some(10));
        assert!(solver.has_interrupt());
        assert_eq!(solver.log_interval(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_default_solver_proves_optimality() {
        let mut solver = SolverBuilder::new().build();
        assert!(!solver.has_time_limit() && !solver.has_node_limit());

        let outcome = solver.solve(&classic());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.objective(), 220.0);
    }

    #[test]
    fn test_every_frontier_reaches_same_optimum() {
        let model = large();
        let reference = SolverBuilder::new().build().solve(&model).objective();
        for kind in FrontierKind::ALL {
            let outcome = SolverBuilder::new().with_frontier(kind).build().solve(&model);
            assert!(outcome.is_optimal());
            approx::assert_relative_eq!(outcome.objective(), reference, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_raised_interrupt_aborts_immediately() {
        let flag = AtomicBool::new(true);
        let mut solver = SolverBuilder::new()
            .with_interrupt(&flag)
            .with_node_limit(1)
            .build();

        let outcome = solver.solve(&large());
        assert_eq!(
            outcome.termination_reason(),
            &BnbTerminationReason::Aborted("interrupted".to_string())
        );
        assert!(matches!(outcome.result(), SolverResult::Feasible(_)));
        assert_eq!(outcome.objective(), 0.0);

        flag.store(false, Ordering::Relaxed);
        let outcome = solver.solve(&large());
        assert_eq!(
            outcome.termination_reason(),
            &BnbTerminationReason::Aborted("node limit of 1 reached".to_string())
        );
    }

    #[test]
    fn test_zero_time_limit_aborts() {
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::ZERO)
            .build();
        let outcome = solver.solve(&large());
        assert!(!outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &BnbTerminationReason::Aborted("time limit exceeded".to_string())
        );
    }
}
