//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear programming solver. This
//! implementation wraps it using the good_lp crate for ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{AllocationLp, LpSolution, Solver};
use crate::error::{OptimizationError, Result};

/// HiGHS-based LP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &AllocationLp) -> Result<LpSolution> {
        let n = problem.num_vars();

        // Handle empty problem
        if n == 0 {
            return Ok(LpSolution {
                values: vec![],
                objective: Decimal::ZERO,
            });
        }

        // One non-negative variable per platform
        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);
        for _ in 0..n {
            var_list.push(vars.add(variable().min(0.0)));
        }

        // Build objective function
        let objective: Expression = var_list
            .iter()
            .zip(problem.objective.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        // The single equality constraint: everything gets spent
        let spend: Expression = var_list.iter().map(|v| 1.0 * *v).sum();
        let total = problem.total_budget.to_f64().unwrap_or(0.0);

        let model = vars
            .minimise(&objective)
            .using(highs)
            .with(constraint!(spend == total));

        match model.solve() {
            Ok(solution) => {
                let values: Vec<Decimal> = var_list
                    .iter()
                    .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                    .collect();

                // Re-evaluate the objective with the solved values
                let objective: Decimal = values
                    .iter()
                    .zip(problem.objective.iter())
                    .map(|(x, c)| x * c)
                    .sum();

                Ok(LpSolution { values, objective })
            }
            // good_lp returns an error for infeasible/unbounded problems
            Err(e) => Err(OptimizationError::SolveFailed {
                detail: e.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
    }

    #[test]
    fn test_single_maximum_takes_whole_budget() {
        // Maximize 1.2*x0 + 0.8*x1 + 1.5*x2 with x0+x1+x2 = 100
        let solver = HiGHSSolver::new();
        let lp = AllocationLp::maximize_return(&[dec!(1.2), dec!(0.8), dec!(1.5)], dec!(100));

        let solution = solver.solve(&lp).unwrap();

        assert!(
            (solution.values[2] - dec!(100)).abs() < dec!(0.000001),
            "winner should take the full budget, got {}",
            solution.values[2]
        );
        assert!(solution.values[0].abs() < dec!(0.000001));
        assert!(solution.values[1].abs() < dec!(0.000001));
        assert!((solution.objective - dec!(-150)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_budget_is_conserved() {
        let solver = HiGHSSolver::new();
        let lp = AllocationLp::maximize_return(&[dec!(0.5), dec!(0.5), dec!(0.1)], dec!(250));

        let solution = solver.solve(&lp).unwrap();

        assert!(
            (solution.total_spend() - dec!(250)).abs() < dec!(0.001),
            "spend should equal budget, got {}",
            solution.total_spend()
        );
        for value in &solution.values {
            assert!(*value >= dec!(-0.000001), "allocation went negative: {value}");
        }
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let lp = AllocationLp {
            objective: vec![],
            total_budget: dec!(100),
        };

        let solution = solver.solve(&lp).unwrap();
        assert!(solution.values.is_empty());
        assert_eq!(solution.objective, Decimal::ZERO);
    }

    #[test]
    fn test_single_platform_gets_everything() {
        let solver = HiGHSSolver::new();
        let lp = AllocationLp::maximize_return(&[dec!(0.2)], dec!(5000));

        let solution = solver.solve(&lp).unwrap();
        assert!((solution.values[0] - dec!(5000)).abs() < dec!(0.001));
    }
}
