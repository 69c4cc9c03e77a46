//! Handler for the `optimize` command.

use tabled::{Table, Tabled};
use tracing::info;

use crate::cli::{csv, output, OptimizeArgs};
use crate::config::Config;
use crate::domain::{aggregate, allocate, AllocationTable, SchemaReport};
use crate::error::Result;

#[derive(Tabled)]
struct AllocationDisplayRow {
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Budget_Allocation")]
    budget_allocation: String,
    #[tabled(rename = "Expected_Return")]
    expected_return: String,
    #[tabled(rename = "Allocation_Percentage")]
    allocation_percentage: String,
}

/// Execute the optimize command.
pub fn execute(config: &Config, args: &OptimizeArgs) -> Result<()> {
    let table = csv::read_table(&args.input)?;

    let report = SchemaReport::inspect(&table);
    if report.is_valid() && !report.missing_recommended.is_empty() {
        output::warn(&format!(
            "missing recommended columns: {}",
            report.missing_recommended.join(", ")
        ));
    }

    let metrics = aggregate(&table)?;
    info!(platforms = metrics.platform_count(), "aggregated campaign data");

    let budget = args.budget.unwrap_or(config.budget.total);
    let allocation = allocate(&metrics, budget)?;
    info!(budget = %budget, solver = "highs", "allocation solved");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&allocation.rows)?);
    } else {
        print_allocation(&allocation, budget);
    }

    if let Some(path) = &args.output {
        std::fs::write(path, allocation.to_csv())?;
        output::ok(&format!("wrote allocation to {}", path.display()));
    }

    Ok(())
}

fn print_allocation(allocation: &AllocationTable, budget: rust_decimal::Decimal) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Optimized budget allocation");
    println!();

    let rows: Vec<AllocationDisplayRow> = allocation
        .rows
        .iter()
        .map(|r| AllocationDisplayRow {
            platform: r.platform.clone(),
            roi: format!("{:.2}", r.roi),
            budget_allocation: format!("{:.2}", r.budget_allocation),
            expected_return: format!("{:.2}", r.expected_return),
            allocation_percentage: format!("{:.2}", r.allocation_percentage),
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    output::section("Allocation summary");
    output::key_value("Total budget", format!("{budget:.2}"));
    if let Some(top) = allocation.top() {
        output::key_value("Top platform", &top.platform);
    }
    output::key_value(
        "Expected return",
        format!("{:.2}", allocation.total_expected_return()),
    );
    println!();
}
