//! Budget allocation across platforms via linear optimization.

use rust_decimal::Decimal;

use super::allocation::{AllocationRow, AllocationTable};
use super::metrics::MetricsTable;
use super::solver::{AllocationLp, HiGHSSolver, Solver};
use crate::error::{InputError, Result};

/// Split `total_budget` across the platforms in `metrics` to maximize
/// expected return, using the default HiGHS solver.
///
/// The LP being solved: maximize `sum(roi_i * x_i)` subject to
/// `sum(x_i) = total_budget` and `x_i >= 0`. Rows in the result are ranked
/// by expected return, descending.
pub fn allocate(metrics: &MetricsTable, total_budget: Decimal) -> Result<AllocationTable> {
    allocate_with(&HiGHSSolver::new(), metrics, total_budget)
}

/// [`allocate`] with an explicit solver implementation.
pub fn allocate_with(
    solver: &dyn Solver,
    metrics: &MetricsTable,
    total_budget: Decimal,
) -> Result<AllocationTable> {
    if metrics.is_empty() {
        return Err(InputError::NoPlatforms.into());
    }
    if total_budget <= Decimal::ZERO {
        return Err(InputError::NonPositiveBudget {
            budget: total_budget,
        }
        .into());
    }

    let rois: Vec<Decimal> = metrics.rows.iter().map(|r| r.roi).collect();
    let lp = AllocationLp::maximize_return(&rois, total_budget);
    let solution = solver.solve(&lp)?;

    // Rank by expected return before rounding so near-ties order by the
    // solver's actual split, then round the derived fields for output.
    let mut ranked: Vec<(Decimal, AllocationRow)> = metrics
        .rows
        .iter()
        .zip(solution.values.iter())
        .map(|(platform, &spend)| {
            let expected_return = spend * platform.roi;
            let row = AllocationRow {
                platform: platform.platform.clone(),
                roi: platform.roi,
                budget_allocation: spend.round_dp(2),
                expected_return: expected_return.round_dp(2),
                allocation_percentage: (spend / total_budget * Decimal::ONE_HUNDRED).round_dp(2),
            };
            (expected_return, row)
        })
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(AllocationTable {
        rows: ranked.into_iter().map(|(_, row)| row).collect(),
    })
}
