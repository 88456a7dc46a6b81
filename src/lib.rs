//! # Statement Metrics
//!
//! A library for computing derived financial metrics (margins, returns,
//! leverage and liquidity ratios, valuation multiples, DCF) from raw
//! statement line items, and for building the annotated tables a dashboard
//! renders them in.
//!
//! ## Core Concepts
//!
//! - **Statement**: period key → line-item record, as parsed by the data
//!   layer. Income, balance and cash-flow statements share the shape.
//! - **Metric catalog**: an ordered list of raw, computed and separator
//!   definitions; declaration order is row order.
//! - **Highlighted metrics**: formula descriptors overlaying the table,
//!   classifying rows as operands/results per visibility tier.
//! - **Missing is neutral**: absent line items read as 0 in additive
//!   formulas, zero denominators yield 0, absent rows are dropped. Only
//!   invalid configuration (a degenerate DCF perpetuity) is an error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use statement_metrics::*;
//!
//! let income: Statement = serde_json::from_str(&payload)?;
//! let table = build_statement_table(&income_statement_metrics(), &income, &income);
//! let annotations = classify(&table.rows, &income_statement_highlights(), 1);
//! ```

pub mod annotate;
pub mod balance;
pub mod catalog;
pub mod dcf;
pub mod error;
pub mod income;
pub mod multiples;
pub mod returns;
pub mod schema;
pub mod statement;
pub mod table;

pub use annotate::{classify, validate_highlighted_metrics, CellClass, Linkage, RowAnnotation};
pub use catalog::{
    balance_sheet_highlights, balance_sheet_metrics, cash_flow_highlights, cash_flow_metrics,
    income_common_size_exclusions, income_statement_highlights, income_statement_metrics,
    multiples_metrics, MultiplesContext,
};
pub use dcf::{project, DcfInputs, DcfValuation};
pub use error::{Result, StatementMetricsError};
pub use multiples::{last_price, price_to_book, price_to_earnings};
pub use schema::{
    Calculate, FormulaKind, HighlightedMetric, LineItems, MetricDefinition, Operator, PeriodKey,
    PriceBar, Statement,
};
pub use statement::{get_value, get_value_at, periods_descending, previous_period};
pub use table::{build_rows, build_table, common_size, Table, TableRow};

use log::{debug, info};

/// Builds a statement table and logs the shape of the result. This is the
/// front door for hosts that do not need to compose the pieces themselves.
pub fn build_statement_table<C>(
    definitions: &[MetricDefinition<C>],
    statement: &Statement,
    ctx: &C,
) -> Table {
    info!(
        "Building statement table: {} definitions, {} periods",
        definitions.len(),
        statement.len()
    );

    let table = table::build_table(definitions, statement, ctx);

    debug!(
        "Table built: {} columns, {} rows retained",
        table.columns.len(),
        table.rows.len()
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn income_fixture() -> Statement {
        let mut statement: Statement = BTreeMap::new();
        for (period, revenue, cost) in [
            ("2022-12-31", 900.0, 380.0),
            ("2023-12-31", 1000.0, 400.0),
        ] {
            let mut items = LineItems::new();
            items.insert("Total Revenue".to_string(), Some(revenue));
            items.insert("Cost Of Revenue".to_string(), Some(cost));
            items.insert("Gross Profit".to_string(), Some(revenue - cost));
            statement.insert(period.to_string(), items);
        }
        statement
    }

    #[test]
    fn test_end_to_end_table_build() {
        let income = income_fixture();
        let table = build_statement_table(&income_statement_metrics(), &income, &income);

        assert_eq!(table.columns, vec!["2022-12-31", "2023-12-31"]);

        let margin = table
            .rows
            .iter()
            .find(|row| row.key == "Gross Margin")
            .unwrap();
        assert_eq!(margin.values["2023-12-31"], Some(60.0));

        // Raw line items with no data anywhere were dropped; separators kept
        assert!(table.rows.iter().all(|row| row.is_separator || row.has_data()));
        assert!(table.rows.iter().any(|row| row.is_separator));
    }

    #[test]
    fn test_table_json_export() {
        let income = income_fixture();
        let table = build_statement_table(&income_statement_metrics(), &income, &income);
        let json = table.to_json().unwrap();
        assert!(json.contains("Gross Margin"));
        assert!(json.contains("2023-12-31"));
    }
}
