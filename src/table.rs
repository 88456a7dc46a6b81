//! Metric row builder and the common-size (vertical analysis) transform.
//! Both are pure: they never mutate their inputs and rebuilding from the
//! same inputs yields deep-equal output.

use crate::error::Result;
use crate::schema::{MetricDefinition, PeriodKey, Statement};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One rendered table row: a metric across all reporting periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableRow {
    #[schemars(description = "Row key (line-item or computed-metric name); empty for separators")]
    pub key: String,

    #[schemars(description = "Display label")]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Hover text explaining the metric")]
    pub tooltip: Option<String>,

    #[serde(default)]
    #[schemars(description = "Section-header row carrying no values")]
    pub is_separator: bool,

    #[schemars(description = "Period key to cell value; None marks a truly absent figure")]
    pub values: BTreeMap<PeriodKey, Option<f64>>,
}

impl TableRow {
    fn separator(label: &str) -> Self {
        Self {
            key: String::new(),
            label: label.to_string(),
            tooltip: None,
            is_separator: true,
            values: BTreeMap::new(),
        }
    }

    /// True when at least one period holds a value. Zero counts: only true
    /// absence disqualifies a row.
    pub fn has_data(&self) -> bool {
        self.values.values().any(Option::is_some)
    }
}

/// A fully built table: ordered period columns plus rows in catalog order.
/// Consumable by any rendering layer without further transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    #[schemars(description = "Period keys sorted ascending; recomputed from the statement on every build")]
    pub columns: Vec<PeriodKey>,

    #[schemars(description = "Rows in metric-catalog order, separators included")]
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds table rows from an ordered metric catalog against one statement.
///
/// Definitions are walked in declaration order: separators become header
/// rows, raw metrics look their key up per period, computed metrics run
/// their function against `ctx`. Rows with no value in any period are
/// dropped afterwards (separators always survive).
pub fn build_rows<C>(
    definitions: &[MetricDefinition<C>],
    statement: &Statement,
    ctx: &C,
) -> Vec<TableRow> {
    let rows: Vec<TableRow> = definitions
        .iter()
        .map(|definition| match definition {
            MetricDefinition::Separator { label } => TableRow::separator(label),
            MetricDefinition::Raw { key, label, tooltip } => TableRow {
                key: key.clone(),
                label: label.clone(),
                tooltip: tooltip.clone(),
                is_separator: false,
                values: statement
                    .iter()
                    .map(|(period, items)| {
                        (period.clone(), items.get(key).copied().flatten())
                    })
                    .collect(),
            },
            MetricDefinition::Computed {
                key,
                label,
                tooltip,
                calculate,
            } => TableRow {
                key: key.clone(),
                label: label.clone(),
                tooltip: tooltip.clone(),
                is_separator: false,
                values: statement
                    .keys()
                    .map(|period| (period.clone(), calculate(ctx, period)))
                    .collect(),
            },
        })
        .filter(|row| row.is_separator || row.has_data())
        .collect();

    debug!(
        "Built {} rows from {} definitions across {} periods",
        rows.len(),
        definitions.len(),
        statement.len()
    );

    rows
}

/// Builds the complete table: ascending period columns plus rows.
pub fn build_table<C>(
    definitions: &[MetricDefinition<C>],
    statement: &Statement,
    ctx: &C,
) -> Table {
    Table {
        columns: statement.keys().cloned().collect(),
        rows: build_rows(definitions, statement, ctx),
    }
}

/// Re-expresses every non-excluded row as a percentage of the pivot row,
/// column by column. Separators and rows named in `excluded` pass through
/// with their original values. A missing pivot row yields an empty list,
/// which callers treat as "not ready". A missing or zero pivot cell yields
/// `None` for that column rather than dividing by zero.
pub fn common_size(rows: &[TableRow], pivot_key: &str, excluded: &[&str]) -> Vec<TableRow> {
    let Some(pivot) = rows.iter().find(|row| row.key == pivot_key) else {
        debug!("Common-size pivot '{}' not found", pivot_key);
        return Vec::new();
    };
    let pivot_values = pivot.values.clone();

    rows.iter()
        .map(|row| {
            if row.is_separator || excluded.contains(&row.key.as_str()) {
                return row.clone();
            }

            let values = row
                .values
                .iter()
                .map(|(period, value)| {
                    let scaled = match (value, pivot_values.get(period).copied().flatten()) {
                        (Some(v), Some(p)) if p != 0.0 => Some(v / p * 100.0),
                        _ => None,
                    };
                    (period.clone(), scaled)
                })
                .collect();

            TableRow {
                key: row.key.clone(),
                label: row.label.clone(),
                tooltip: row.tooltip.clone(),
                is_separator: false,
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LineItems;

    fn statement(periods: &[(&str, &[(&str, Option<f64>)])]) -> Statement {
        periods
            .iter()
            .map(|(period, items)| {
                let record: LineItems = items
                    .iter()
                    .map(|(name, value)| (name.to_string(), *value))
                    .collect();
                (period.to_string(), record)
            })
            .collect()
    }

    fn revenue_metric(s: &Statement, period: &str) -> Option<f64> {
        s.get(period)
            .map(|record| crate::statement::get_value(Some(record), "Total Revenue") * 2.0)
    }

    #[test]
    fn test_rows_preserve_declaration_order() {
        let s = statement(&[(
            "2023-12-31",
            &[("Total Revenue", Some(1000.0)), ("Net Income", Some(100.0))],
        )]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![
            MetricDefinition::separator("Revenue"),
            MetricDefinition::raw("Net Income", "Net Income"),
            MetricDefinition::raw("Total Revenue", "Total Revenue"),
        ];

        let rows = build_rows(&definitions, &s, &s);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_separator);
        assert_eq!(rows[1].key, "Net Income");
        assert_eq!(rows[2].key, "Total Revenue");
    }

    #[test]
    fn test_all_null_rows_are_dropped_zero_rows_kept() {
        let s = statement(&[
            ("2022-12-31", &[("Total Revenue", Some(0.0))]),
            ("2023-12-31", &[("Interest Expense", None)]),
        ]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![
            MetricDefinition::raw("Total Revenue", "Total Revenue"),
            MetricDefinition::raw("Interest Expense", "Interest Expense"),
        ];

        let rows = build_rows(&definitions, &s, &s);
        // Zero is meaningful data; an explicit-null-or-absent row is not
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "Total Revenue");
    }

    #[test]
    fn test_computed_metric_uses_context() {
        let s = statement(&[("2023-12-31", &[("Total Revenue", Some(500.0))])]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![MetricDefinition::computed(
            "Doubled Revenue",
            "Doubled Revenue",
            "Total Revenue * 2",
            revenue_metric,
        )];

        let rows = build_rows(&definitions, &s, &s);
        assert_eq!(rows[0].values["2023-12-31"], Some(1000.0));
    }

    #[test]
    fn test_build_is_idempotent() {
        let s = statement(&[
            ("2022-12-31", &[("Total Revenue", Some(900.0))]),
            ("2023-12-31", &[("Total Revenue", Some(1000.0))]),
        ]);
        let definitions: Vec<MetricDefinition<Statement>> =
            vec![MetricDefinition::raw("Total Revenue", "Total Revenue")];

        let first = build_table(&definitions, &s, &s);
        let second = build_table(&definitions, &s, &s);
        assert_eq!(first, second);
        assert_eq!(first.columns, vec!["2022-12-31", "2023-12-31"]);
    }

    #[test]
    fn test_common_size_pivot_missing_yields_empty() {
        let s = statement(&[("2023-12-31", &[("Net Income", Some(100.0))])]);
        let definitions: Vec<MetricDefinition<Statement>> =
            vec![MetricDefinition::raw("Net Income", "Net Income")];
        let rows = build_rows(&definitions, &s, &s);

        assert!(common_size(&rows, "Total Revenue", &[]).is_empty());
    }

    #[test]
    fn test_common_size_percentages_and_roundtrip() {
        let s = statement(&[(
            "2023-12-31",
            &[("Total Revenue", Some(1000.0)), ("Cost Of Revenue", Some(250.0))],
        )]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![
            MetricDefinition::raw("Total Revenue", "Total Revenue"),
            MetricDefinition::raw("Cost Of Revenue", "Cost of Goods Sold (COGS)"),
        ];
        let rows = build_rows(&definitions, &s, &s);

        let sized = common_size(&rows, "Total Revenue", &[]);
        // Pivot against itself is 100 wherever it had a non-zero value
        assert_eq!(sized[0].values["2023-12-31"], Some(100.0));
        assert_eq!(sized[1].values["2023-12-31"], Some(25.0));
    }

    #[test]
    fn test_common_size_zero_pivot_yields_none() {
        let s = statement(&[(
            "2023-12-31",
            &[("Total Revenue", Some(0.0)), ("Cost Of Revenue", Some(250.0))],
        )]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![
            MetricDefinition::raw("Total Revenue", "Total Revenue"),
            MetricDefinition::raw("Cost Of Revenue", "Cost of Goods Sold (COGS)"),
        ];
        let rows = build_rows(&definitions, &s, &s);

        let sized = common_size(&rows, "Total Revenue", &[]);
        assert_eq!(sized[1].values["2023-12-31"], None);
    }

    #[test]
    fn test_common_size_excluded_rows_pass_through() {
        let s = statement(&[(
            "2023-12-31",
            &[("Total Revenue", Some(1000.0)), ("Diluted EPS", Some(4.0))],
        )]);
        let definitions: Vec<MetricDefinition<Statement>> = vec![
            MetricDefinition::separator("Revenue"),
            MetricDefinition::raw("Total Revenue", "Total Revenue"),
            MetricDefinition::raw("Diluted EPS", "Diluted EPS"),
        ];
        let rows = build_rows(&definitions, &s, &s);

        let sized = common_size(&rows, "Total Revenue", &["Diluted EPS"]);
        assert!(sized[0].is_separator);
        assert_eq!(sized[2].values["2023-12-31"], Some(4.0));
    }
}
