//! Linear-program solver seam for the budget allocation.
//!
//! The allocation LP has exactly one shape: minimize `c * x` subject to
//! `sum(x) = total_budget` with `x >= 0`. Maximization is phrased as
//! minimization of the negated coefficients because solver backends are
//! minimizers.

mod highs;

pub use highs::HiGHSSolver;

use rust_decimal::Decimal;

use crate::error::Result;

/// A budget-split linear program.
///
/// Variables are one per platform, implicitly non-negative, with a single
/// equality constraint tying their sum to the total budget.
#[derive(Debug, Clone)]
pub struct AllocationLp {
    /// Objective coefficients, minimized.
    pub objective: Vec<Decimal>,
    /// Right-hand side of the equality constraint.
    pub total_budget: Decimal,
}

impl AllocationLp {
    /// Formulate "maximize `sum(roi_i * x_i)`" in minimizer form.
    #[must_use]
    pub fn maximize_return(rois: &[Decimal], total_budget: Decimal) -> Self {
        Self {
            objective: rois.iter().map(|r| -*r).collect(),
            total_budget,
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Solution to an allocation LP.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Optimal variable values, one per platform.
    pub values: Vec<Decimal>,
    /// Achieved (minimization) objective value.
    pub objective: Decimal,
}

impl LpSolution {
    /// Sum of all variable values, pre-rounding.
    #[must_use]
    pub fn total_spend(&self) -> Decimal {
        self.values.iter().sum()
    }
}

/// A linear programming solver.
///
/// Implementations wrap a specific backend and must be thread-safe. A solve
/// either returns an optimal solution or fails with an
/// [`OptimizationError`](crate::error::OptimizationError) carrying the
/// backend's diagnostic; there are no retries.
pub trait Solver: Send + Sync {
    /// Solver name for logging/config.
    fn name(&self) -> &'static str;

    /// Solve: minimize `c * x` subject to `sum(x) = total_budget`, `x >= 0`.
    fn solve(&self, problem: &AllocationLp) -> Result<LpSolution>;
}
