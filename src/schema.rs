use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque reporting-period identifier. Period keys are ISO-like date strings
/// (e.g. "2023-12-31"), so lexicographic order equals chronological order.
pub type PeriodKey = String;

/// One period's statement record: line-item name to value. A key that is
/// absent and a key that holds `None` are both "missing".
pub type LineItems = BTreeMap<String, Option<f64>>;

/// A full financial statement: period key to line-item record. Income,
/// balance and cash-flow statements share this shape and differ only in
/// line-item vocabulary. `BTreeMap` keeps the period keys sorted ascending,
/// which every consumer of the column order relies on.
pub type Statement = BTreeMap<PeriodKey, LineItems>;

/// Signature of a computed-metric function: evaluates one derived value for
/// the given period key against a caller-supplied context (a statement, or a
/// bundle of statements plus a price history). Returns `None` when the
/// period has no usable data.
pub type Calculate<C> = fn(&C, &str) -> Option<f64>;

/// One entry in an ordered metric catalog. Declaration order is the
/// on-screen row order and is never re-sorted.
pub enum MetricDefinition<C> {
    /// Value is the raw line item named `key`, looked up per period.
    Raw {
        key: String,
        label: String,
        tooltip: Option<String>,
    },

    /// Value is computed per period by `calculate`.
    Computed {
        key: String,
        label: String,
        tooltip: Option<String>,
        calculate: Calculate<C>,
    },

    /// A non-data section header row. Carries no values and is always
    /// retained by the row builder.
    Separator { label: String },
}

impl<C> MetricDefinition<C> {
    pub fn raw(key: &str, label: &str) -> Self {
        Self::Raw {
            key: key.to_string(),
            label: label.to_string(),
            tooltip: None,
        }
    }

    pub fn raw_with_tooltip(key: &str, label: &str, tooltip: &str) -> Self {
        Self::Raw {
            key: key.to_string(),
            label: label.to_string(),
            tooltip: Some(tooltip.to_string()),
        }
    }

    pub fn computed(key: &str, label: &str, tooltip: &str, calculate: Calculate<C>) -> Self {
        Self::Computed {
            key: key.to_string(),
            label: label.to_string(),
            tooltip: Some(tooltip.to_string()),
            calculate,
        }
    }

    pub fn separator(label: &str) -> Self {
        Self::Separator {
            label: label.to_string(),
        }
    }

    /// Row key for data rows; separators have none.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Raw { key, .. } | Self::Computed { key, .. } => Some(key),
            Self::Separator { .. } => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Raw { label, .. }
            | Self::Computed { label, .. }
            | Self::Separator { label } => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Operator {
    #[serde(rename = "+")]
    #[schemars(description = "Operands are summed to produce the result row")]
    Add,

    #[serde(rename = "−", alias = "-")]
    #[schemars(description = "Operands are subtracted left to right to produce the result row")]
    Subtract,

    #[serde(rename = "/")]
    #[schemars(description = "The first operand is divided by the second to produce the result row")]
    Divide,
}

impl Operator {
    /// Display sign shown next to intermediate operand cells.
    pub fn sign(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Divide => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormulaKind {
    #[schemars(
        description = "Combines line items rendered as neighbouring rows. Active at visibility level 1."
    )]
    Adjacent,

    #[schemars(
        description = "Combines results of lower-tier formulas whose rows may be far apart, connected by drawn lines. Active at visibility level `level` + 1."
    )]
    Distant,
}

/// Formula descriptor overlaying a derived table: which rows are operands of
/// which result, with which operator, at which visibility tier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HighlightedMetric {
    #[schemars(description = "Row keys of the formula's operands, in declaration order")]
    pub operands: Vec<String>,

    #[schemars(description = "Row key of the formula's result row")]
    pub result: String,

    #[schemars(description = "Operator combining the operands")]
    pub operator: Operator,

    #[serde(rename = "type")]
    #[schemars(description = "Adjacent formulas activate at level 1; distant ones at their own tier")]
    pub kind: FormulaKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Visibility tier for distant formulas (>= 1). Required when type is distant; a distant formula without a level never activates."
    )]
    pub level: Option<u32>,
}

impl HighlightedMetric {
    pub fn adjacent(operands: &[&str], result: &str, operator: Operator) -> Self {
        Self {
            operands: operands.iter().map(|s| s.to_string()).collect(),
            result: result.to_string(),
            operator,
            kind: FormulaKind::Adjacent,
            level: None,
        }
    }

    pub fn distant(operands: &[&str], result: &str, operator: Operator, level: u32) -> Self {
        Self {
            operands: operands.iter().map(|s| s.to_string()).collect(),
            result: result.to_string(),
            operator,
            kind: FormulaKind::Distant,
            level: Some(level),
        }
    }
}

/// One trading day of a price time series, as flattened by the upstream data
/// layer: a `Date` field plus one `Close_<symbol>` column per symbol. The
/// date may carry a time portion ("2023-12-29 00:00:00"); only the
/// `YYYY-MM-DD` prefix is ever compared.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PriceBar {
    #[serde(rename = "Date")]
    #[schemars(description = "Trading date, YYYY-MM-DD with an optional time portion")]
    pub date: String,

    #[serde(flatten)]
    #[schemars(description = "Flattened numeric columns; the close price is the first Close_* entry")]
    pub fields: BTreeMap<String, f64>,
}

impl PriceBar {
    /// Date portion of the `Date` field, with any time component stripped.
    pub fn day(&self) -> &str {
        self.date.split(' ').next().unwrap_or(&self.date)
    }

    /// First `Close_<symbol>` column, if any.
    pub fn close(&self) -> Option<f64> {
        self.fields
            .iter()
            .find(|(key, _)| key.starts_with("Close_"))
            .map(|(_, value)| *value)
    }
}
