//! Aggregation of raw campaign records into per-platform metrics.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::metrics::{MetricsTable, OptionalColumns, PlatformMetrics};
use super::table::{columns, RawTable};
use crate::error::{Result, SchemaError};

/// Reduce raw campaign records to one metrics row per distinct platform.
///
/// Fails with [`SchemaError`] when `Channel_Used` or `ROI` is absent from
/// the schema. Optional columns are carried into the output only when they
/// exist in the input schema; cells that fail numeric coercion become
/// missing for their row and are excluded from that column's mean or sum.
///
/// Pure transformation: no I/O, no logging, recomputed from scratch on
/// every call.
pub fn aggregate(table: &RawTable) -> Result<MetricsTable> {
    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| (*c).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { columns: missing }.into());
    }

    let layout = ColumnLayout::resolve(table);
    let present = layout.present();

    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for row in 0..table.row_count() {
        let platform = table.cell(row, layout.platform).unwrap_or("").to_string();
        let acc = groups.entry(platform).or_default();

        acc.roi.observe(coerce(table, row, Some(layout.roi)));
        acc.conversion_rate
            .observe(coerce(table, row, layout.conversion_rate));
        acc.acquisition_cost
            .observe(coerce(table, row, layout.acquisition_cost));
        acc.clicks.observe(coerce(table, row, layout.clicks));
        acc.impressions.observe(coerce(table, row, layout.impressions));
    }

    let rows = groups
        .into_iter()
        .map(|(platform, acc)| {
            let clicks = present.clicks.then(|| acc.clicks.total());
            let impressions = present.impressions.then(|| acc.impressions.total());

            // Zero summed impressions must yield a missing engagement value,
            // never a division fault.
            let engagement = match (clicks, impressions) {
                (Some(c), Some(i)) if !i.is_zero() => Some(c / i),
                _ => None,
            };

            PlatformMetrics {
                platform,
                roi: acc.roi.mean().unwrap_or(Decimal::ZERO),
                conversion_rate: acc.conversion_rate.mean(),
                acquisition_cost: acc.acquisition_cost.mean(),
                clicks,
                impressions,
                engagement,
            }
        })
        .collect();

    Ok(MetricsTable {
        columns: present,
        rows,
    })
}

/// Resolved column indices for one aggregation pass.
struct ColumnLayout {
    platform: usize,
    roi: usize,
    conversion_rate: Option<usize>,
    acquisition_cost: Option<usize>,
    clicks: Option<usize>,
    impressions: Option<usize>,
}

impl ColumnLayout {
    fn resolve(table: &RawTable) -> Self {
        // Required indices exist: the caller checked the schema first.
        Self {
            platform: table.column_index(columns::CHANNEL_USED).unwrap_or(0),
            roi: table.column_index(columns::ROI).unwrap_or(0),
            conversion_rate: table.column_index(columns::CONVERSION_RATE),
            acquisition_cost: table.column_index(columns::ACQUISITION_COST),
            clicks: table.column_index(columns::CLICKS),
            impressions: table.column_index(columns::IMPRESSIONS),
        }
    }

    fn present(&self) -> OptionalColumns {
        OptionalColumns {
            conversion_rate: self.conversion_rate.is_some(),
            acquisition_cost: self.acquisition_cost.is_some(),
            clicks: self.clicks.is_some(),
            impressions: self.impressions.is_some(),
            engagement: self.clicks.is_some() && self.impressions.is_some(),
        }
    }
}

/// Coerce one cell to a numeric value; anything unparseable is missing.
fn coerce(table: &RawTable, row: usize, column: Option<usize>) -> Option<Decimal> {
    let text = table.cell(row, column?)?.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Running sum and valid-value count for one column of one platform.
#[derive(Default)]
struct ColumnAccumulator {
    sum: Decimal,
    count: u32,
}

impl ColumnAccumulator {
    fn observe(&mut self, value: Option<Decimal>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<Decimal> {
        (self.count > 0).then(|| self.sum / Decimal::from(self.count))
    }

    fn total(&self) -> Decimal {
        self.sum
    }
}

#[derive(Default)]
struct Accumulator {
    roi: ColumnAccumulator,
    conversion_rate: ColumnAccumulator,
    acquisition_cost: ColumnAccumulator,
    clicks: ColumnAccumulator,
    impressions: ColumnAccumulator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn groups_by_platform_with_mean_roi() {
        let input = table(
            &["Channel_Used", "ROI"],
            &[
                &["Search", "1.0"],
                &["Social", "0.8"],
                &["Search", "2.0"],
            ],
        );

        let metrics = aggregate(&input).unwrap();

        assert_eq!(metrics.platform_count(), 2);
        let search = metrics.rows.iter().find(|r| r.platform == "Search").unwrap();
        assert_eq!(search.roi, dec!(1.5));
        let social = metrics.rows.iter().find(|r| r.platform == "Social").unwrap();
        assert_eq!(social.roi, dec!(0.8));
    }

    #[test]
    fn output_platforms_match_distinct_input_platforms() {
        let input = table(
            &["Channel_Used", "ROI"],
            &[
                &["A", "1"],
                &["B", "not-a-number"],
                &["A", "2"],
                &["C", ""],
            ],
        );

        let metrics = aggregate(&input).unwrap();
        let platforms: Vec<&str> = metrics.rows.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(platforms, vec!["A", "B", "C"]);
    }

    #[test]
    fn absent_columns_stay_absent() {
        let input = table(&["Channel_Used", "ROI"], &[&["Search", "1.0"]]);

        let metrics = aggregate(&input).unwrap();

        assert_eq!(metrics.columns, OptionalColumns::default());
        let row = &metrics.rows[0];
        assert!(row.conversion_rate.is_none());
        assert!(row.clicks.is_none());
        assert!(row.engagement.is_none());
    }

    #[test]
    fn optional_means_skip_uncoercible_cells() {
        let input = table(
            &["Channel_Used", "ROI", "Conversion_Rate"],
            &[
                &["Search", "1.0", "0.10"],
                &["Search", "1.0", "n/a"],
                &["Search", "1.0", "0.30"],
            ],
        );

        let metrics = aggregate(&input).unwrap();
        assert!(metrics.columns.conversion_rate);
        assert_eq!(metrics.rows[0].conversion_rate, Some(dec!(0.20)));
    }

    #[test]
    fn coercion_failure_does_not_drop_the_column() {
        let input = table(
            &["Channel_Used", "ROI", "Acquisition_Cost"],
            &[&["Search", "1.0", "free"], &["Social", "0.9", "12.50"]],
        );

        let metrics = aggregate(&input).unwrap();

        assert!(metrics.columns.acquisition_cost);
        let search = metrics.rows.iter().find(|r| r.platform == "Search").unwrap();
        assert!(search.acquisition_cost.is_none());
        let social = metrics.rows.iter().find(|r| r.platform == "Social").unwrap();
        assert_eq!(social.acquisition_cost, Some(dec!(12.50)));
    }

    #[test]
    fn clicks_and_impressions_are_summed() {
        let input = table(
            &["Channel_Used", "ROI", "Clicks", "Impressions"],
            &[
                &["Search", "1.0", "100", "1000"],
                &["Search", "1.2", "50", "500"],
            ],
        );

        let metrics = aggregate(&input).unwrap();
        let row = &metrics.rows[0];

        assert_eq!(row.clicks, Some(dec!(150)));
        assert_eq!(row.impressions, Some(dec!(1500)));
        assert_eq!(row.engagement, Some(dec!(0.1)));
    }

    #[test]
    fn zero_impressions_suppresses_engagement() {
        let input = table(
            &["Channel_Used", "ROI", "Clicks", "Impressions"],
            &[&["Search", "1.0", "5", "0"]],
        );

        let metrics = aggregate(&input).unwrap();
        let row = &metrics.rows[0];

        assert_eq!(row.impressions, Some(dec!(0)));
        assert!(row.engagement.is_none());
        assert!(metrics.columns.engagement);
    }

    #[test]
    fn engagement_needs_both_count_columns() {
        let input = table(
            &["Channel_Used", "ROI", "Clicks"],
            &[&["Search", "1.0", "100"]],
        );

        let metrics = aggregate(&input).unwrap();
        assert!(!metrics.columns.engagement);
        assert!(metrics.rows[0].engagement.is_none());
    }

    #[test]
    fn missing_required_columns_fail_with_their_names() {
        let input = table(&["Spend"], &[&["100"]]);

        let err = aggregate(&input).unwrap_err();
        match err {
            Error::Schema(SchemaError::MissingColumns { columns }) => {
                assert_eq!(columns, vec!["Channel_Used", "ROI"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_roi_only_names_roi() {
        let input = table(&["Channel_Used"], &[&["Search"]]);

        let err = aggregate(&input).unwrap_err();
        assert!(err.to_string().contains("ROI"));
        assert!(!err.to_string().contains("Channel_Used"));
    }

    #[test]
    fn scientific_notation_coerces() {
        let input = table(
            &["Channel_Used", "ROI", "Impressions", "Clicks"],
            &[&["Search", "1.0", "1e3", "10"]],
        );

        let metrics = aggregate(&input).unwrap();
        assert_eq!(metrics.rows[0].impressions, Some(dec!(1000)));
        assert_eq!(metrics.rows[0].engagement, Some(dec!(0.01)));
    }
}
