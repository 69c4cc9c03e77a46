//! Admix - Marketing budget allocation via linear optimization.
//!
//! This crate turns a table of per-campaign performance records into an
//! optimal budget split across advertising platforms: aggregate the raw
//! records into per-platform metrics, then solve a linear program that
//! maximizes expected return subject to a fixed total budget.
//!
//! # Architecture
//!
//! Two pure components, composed in strict dependency order:
//!
//! - **`domain::aggregate`** - Reduces raw campaign records to one row per
//!   platform (mean ROI/conversion/cost, summed clicks/impressions, derived
//!   engagement ratio)
//! - **`domain::allocate`** - Formulates and solves the allocation LP:
//!   maximize sum(roi_i * x_i) subject to sum(x_i) = budget, x_i >= 0
//!
//! The LP is solved through a pluggable seam:
//!
//! - **`domain::solver`** - Minimizer-phrased LP abstraction
//!   - `HiGHSSolver` - Open-source HiGHS via good_lp
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with budget defaults
//! - [`domain`] - Pure core: raw tables, aggregation, allocation, LP solving
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line surface: CSV file adapters, table rendering
//!
//! # Example
//!
//! ```no_run
//! use admix::domain::{aggregate, allocate, RawTable};
//! use rust_decimal_macros::dec;
//!
//! let table = RawTable::new(
//!     vec!["Channel_Used".into(), "ROI".into()],
//!     vec![
//!         vec!["Search".into(), "1.2".into()],
//!         vec!["Social".into(), "1.5".into()],
//!     ],
//! );
//!
//! let metrics = aggregate(&table)?;
//! let allocation = allocate(&metrics, dec!(10000))?;
//! println!("{}", allocation.to_csv());
//! # Ok::<(), admix::error::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
