//! Command-line interface definitions.

pub mod csv;
pub mod metrics;
pub mod optimize;
pub mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Admix - Marketing budget allocation via linear optimization.
#[derive(Parser, Debug)]
#[command(name = "admix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate campaign data and solve the budget allocation
    Optimize(OptimizeArgs),

    /// Show aggregated per-platform metrics without allocating
    Metrics(MetricsArgs),
}

#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Campaign data CSV file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Total budget to allocate (overrides config)
    #[arg(short, long)]
    pub budget: Option<Decimal>,

    /// Write the allocation table as CSV to this path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the allocation as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct MetricsArgs {
    /// Campaign data CSV file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the aggregated metrics as CSV to this path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the metrics as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
