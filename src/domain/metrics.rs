//! Aggregated per-platform metrics.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;

use super::table::{columns, csv_field};

/// Summary metrics for one advertising platform.
///
/// `roi`, `conversion_rate` and `acquisition_cost` are arithmetic means;
/// `clicks` and `impressions` are sums; `engagement` is `clicks /
/// impressions`, suppressed when the summed impressions are zero.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformMetrics {
    pub platform: String,
    pub roi: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Decimal>,
}

/// Which optional columns survived aggregation.
///
/// Presence is decided column-by-column from the input schema, never from
/// per-row value validity: a column whose every cell failed numeric coercion
/// is still present, with missing cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OptionalColumns {
    pub conversion_rate: bool,
    pub acquisition_cost: bool,
    pub clicks: bool,
    pub impressions: bool,
    pub engagement: bool,
}

/// One row per distinct platform, plus the surviving optional columns.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsTable {
    pub columns: OptionalColumns,
    pub rows: Vec<PlatformMetrics>,
}

impl MetricsTable {
    #[must_use]
    pub fn platform_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV with the contract column names, emitting only the
    /// columns present in this table. Missing cells are left empty.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut header: Vec<&str> = vec![columns::CHANNEL_USED, columns::ROI];
        if self.columns.conversion_rate {
            header.push(columns::CONVERSION_RATE);
        }
        if self.columns.acquisition_cost {
            header.push(columns::ACQUISITION_COST);
        }
        if self.columns.clicks {
            header.push(columns::CLICKS);
        }
        if self.columns.impressions {
            header.push(columns::IMPRESSIONS);
        }
        if self.columns.engagement {
            header.push(columns::ENGAGEMENT);
        }

        let mut out = header.join(",");
        out.push('\n');

        for row in &self.rows {
            let _ = write!(out, "{},{}", csv_field(&row.platform), row.roi);
            if self.columns.conversion_rate {
                push_optional(&mut out, row.conversion_rate);
            }
            if self.columns.acquisition_cost {
                push_optional(&mut out, row.acquisition_cost);
            }
            if self.columns.clicks {
                push_optional(&mut out, row.clicks);
            }
            if self.columns.impressions {
                push_optional(&mut out, row.impressions);
            }
            if self.columns.engagement {
                push_optional(&mut out, row.engagement);
            }
            out.push('\n');
        }

        out
    }
}

fn push_optional(out: &mut String, value: Option<Decimal>) {
    match value {
        Some(v) => {
            let _ = write!(out, ",{v}");
        }
        None => out.push(','),
    }
}
