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

use crate::stats::BnbSolverStatistics;
use satchel_model::solution::Solution;

/// The packing a solve produced, tagged with how much is known about it.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult {
    /// The packing is proven optimal.
    Optimal(Solution),
    /// The packing is feasible, but the search stopped before proving optimality.
    Feasible(Solution),
}

impl SolverResult {
    /// Returns the packing regardless of its status.
    #[inline]
    pub fn solution(&self) -> &Solution {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    /// Consumes the result and returns the packing.
    #[inline]
    pub fn into_solution(self) -> Solution {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    /// Returns the packing if it is proven optimal.
    #[inline]
    pub fn optimal(&self) -> Option<&Solution> {
        match self {
            SolverResult::Optimal(solution) => Some(solution),
            SolverResult::Feasible(_) => None,
        }
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(objective={})", solution.objective_value())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(objective={})", solution.objective_value())
            }
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BnbTerminationReason {
    /// The frontier ran empty, so the incumbent is optimal.
    OptimalityProven,
    /// A monitor stopped the search. The string says why.
    Aborted(String),
}

impl std::fmt::Display for BnbTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BnbTerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            BnbTerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome {
    result: SolverResult,
    termination_reason: BnbTerminationReason,
    statistics: BnbSolverStatistics,
}

impl BnbSolverOutcome {
    #[inline]
    pub fn optimal(solution: Solution, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: BnbTerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(solution: Solution, reason: R, statistics: BnbSolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(solution),
            termination_reason: BnbTerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    /// Consumes the outcome and returns the solver result.
    #[inline]
    pub fn into_result(self) -> SolverResult {
        self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &BnbTerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns the value of the best packing found.
    #[inline]
    pub fn objective(&self) -> f64 {
        self.result.solution().objective_value()
    }

    /// Returns `true` if the search proved the packing optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }
}

impl std::fmt::Display for BnbSolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result:      {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_model::index::ItemIndex;

    fn stats() -> BnbSolverStatistics {
        BnbSolverStatistics::default()
    }

    fn solution() -> Solution {
        Solution::new(180.0, 40.0, vec![ItemIndex::new(2), ItemIndex::new(0)])
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = BnbSolverOutcome::optimal(solution(), stats());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.objective(), 180.0);
        assert_eq!(
            outcome.termination_reason(),
            &BnbTerminationReason::OptimalityProven
        );
        assert!(outcome.result().optimal().is_some());
        assert_eq!(outcome.result().to_string(), "Optimal(objective=180)");
    }

    #[test]
    fn test_aborted_outcome_keeps_incumbent() {
        let outcome = BnbSolverOutcome::aborted(solution(), "node limit reached", stats());
        assert!(!outcome.is_optimal());
        assert_eq!(outcome.objective(), 180.0);
        match outcome.termination_reason() {
            BnbTerminationReason::Aborted(msg) => assert_eq!(msg, "node limit reached"),
            other => panic!("expected Aborted termination reason, got {}", other),
        }
        assert!(outcome.result().optimal().is_none());

        let sol = outcome.into_result().into_solution();
        assert_eq!(sol.selected(), &[ItemIndex::new(0), ItemIndex::new(2)]);
    }

    #[test]
    fn test_outcome_display() {
        let outcome = BnbSolverOutcome::aborted(solution(), "time limit exceeded", stats());
        let text = outcome.to_string();
        assert!(text.contains("Feasible(objective=180)"));
        assert!(text.contains("Aborted: time limit exceeded"));
    }
}
