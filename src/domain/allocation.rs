//! Solved budget allocation, shaped for external consumption.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;

use super::table::csv_field;

/// Budget assigned to one platform.
///
/// `budget_allocation`, `expected_return` and `allocation_percentage` are
/// rounded to 2 decimal places; `roi` is carried through from aggregation
/// unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationRow {
    pub platform: String,
    pub roi: Decimal,
    pub budget_allocation: Decimal,
    pub expected_return: Decimal,
    pub allocation_percentage: Decimal,
}

/// Allocation rows ranked by expected return, best first.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationTable {
    pub rows: Vec<AllocationRow>,
}

impl AllocationTable {
    /// Sum of the rounded per-platform allocations.
    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.rows.iter().map(|r| r.budget_allocation).sum()
    }

    /// Sum of the rounded per-platform expected returns.
    #[must_use]
    pub fn total_expected_return(&self) -> Decimal {
        self.rows.iter().map(|r| r.expected_return).sum()
    }

    /// Best-performing row, if any.
    #[must_use]
    pub fn top(&self) -> Option<&AllocationRow> {
        self.rows.first()
    }

    /// Render as CSV: header row plus one line per platform, numeric fields
    /// formatted with 2 decimal places.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out =
            String::from("Platform,ROI,Budget_Allocation,Expected_Return,Allocation_Percentage\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{},{:.2},{:.2},{:.2},{:.2}",
                csv_field(&row.platform),
                row.roi,
                row.budget_allocation,
                row.expected_return,
                row.allocation_percentage
            );
        }
        out
    }
}
