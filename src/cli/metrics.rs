//! Handler for the `metrics` command.

use tabled::builder::Builder;
use tracing::info;

use crate::cli::{csv, output, MetricsArgs};
use crate::domain::{aggregate, columns, MetricsTable, SchemaReport};
use crate::error::Result;

/// Execute the metrics command.
pub fn execute(args: &MetricsArgs) -> Result<()> {
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

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics.rows)?);
    } else {
        print_metrics(&metrics);
    }

    if let Some(path) = &args.output {
        std::fs::write(path, metrics.to_csv())?;
        output::ok(&format!("wrote metrics to {}", path.display()));
    }

    Ok(())
}

/// Render the metrics with only the columns that survived aggregation,
/// which is why this builds the table dynamically instead of deriving.
fn print_metrics(metrics: &MetricsTable) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Per-platform metrics");
    println!();

    let mut header: Vec<&str> = vec![columns::CHANNEL_USED, columns::ROI];
    if metrics.columns.conversion_rate {
        header.push(columns::CONVERSION_RATE);
    }
    if metrics.columns.acquisition_cost {
        header.push(columns::ACQUISITION_COST);
    }
    if metrics.columns.clicks {
        header.push(columns::CLICKS);
    }
    if metrics.columns.impressions {
        header.push(columns::IMPRESSIONS);
    }
    if metrics.columns.engagement {
        header.push(columns::ENGAGEMENT);
    }

    let mut builder = Builder::default();
    builder.push_record(header);

    for row in &metrics.rows {
        let mut cells = vec![row.platform.clone(), format!("{:.2}", row.roi)];
        if metrics.columns.conversion_rate {
            cells.push(optional_cell(row.conversion_rate, 4));
        }
        if metrics.columns.acquisition_cost {
            cells.push(optional_cell(row.acquisition_cost, 2));
        }
        if metrics.columns.clicks {
            cells.push(optional_cell(row.clicks, 0));
        }
        if metrics.columns.impressions {
            cells.push(optional_cell(row.impressions, 0));
        }
        if metrics.columns.engagement {
            cells.push(optional_cell(row.engagement, 4));
        }
        builder.push_record(cells);
    }

    let table = builder.build().to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();
}

fn optional_cell(value: Option<rust_decimal::Decimal>, places: usize) -> String {
    match value {
        Some(v) => format!("{v:.places$}"),
        None => "-".to_string(),
    }
}
