//! Calculation-graph annotator: classifies table rows as operands or
//! results of the highlighted formulas active at a caller-selected
//! visibility level, and derives the per-cell decorations (sign, linkage)
//! the rendering layer draws from. The core only emits tags; positional
//! lookup and line drawing stay with the renderer.

use crate::error::{Result, StatementMetricsError};
use crate::schema::{FormulaKind, HighlightedMetric, Operator};
use crate::table::TableRow;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    #[schemars(description = "Row takes no part in any active formula")]
    None,

    #[schemars(description = "Operand followed by further visible operands")]
    OperandIntermediate,

    #[schemars(description = "Last visible operand (or the sole operand) of its formula")]
    OperandTerminal,

    #[schemars(description = "The formula's result row")]
    Result,
}

/// Geometric linkage the renderer uses: adjacent operands get inline signs,
/// distant ones get drawn connector lines instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    Adjacent,
    Distant,
}

/// Per-row classification for one visibility level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RowAnnotation {
    #[schemars(description = "Key of the row this annotation belongs to")]
    pub key: String,

    pub class: CellClass,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Display sign: the operator for intermediate operands, '=' for terminal ones")]
    pub sign: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkage: Option<Linkage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Operator of the matched formula, for styling")]
    pub operator: Option<Operator>,
}

impl RowAnnotation {
    fn none(key: &str) -> Self {
        Self {
            key: key.to_string(),
            class: CellClass::None,
            sign: None,
            linkage: None,
            operator: None,
        }
    }
}

/// Formulas active at `visibility`: level 0 none, level 1 only adjacent
/// formulas, level N > 1 exactly the distant formulas declared at tier
/// N - 1. Tiers are not cumulative; only one tier shows at a time. A
/// distant formula without a level never activates.
fn active_formulas(formulas: &[HighlightedMetric], visibility: u32) -> Vec<&HighlightedMetric> {
    match visibility {
        0 => Vec::new(),
        1 => formulas
            .iter()
            .filter(|formula| formula.kind == FormulaKind::Adjacent)
            .collect(),
        level => formulas
            .iter()
            .filter(|formula| {
                formula.kind == FormulaKind::Distant && formula.level == Some(level - 1)
            })
            .collect(),
    }
}

/// Classifies every row against the formulas active at `visibility`.
///
/// Formulas are tried in declaration order and the first match wins, with a
/// formula's result checked before its operands. Authors are expected to
/// keep operand/result sets disjoint within a tier; nothing here enforces
/// that. A formula whose operands are all filtered out of the current view
/// contributes no decoration.
pub fn classify(
    rows: &[TableRow],
    formulas: &[HighlightedMetric],
    visibility: u32,
) -> Vec<RowAnnotation> {
    if visibility > 0 {
        for formula in formulas {
            if formula.kind == FormulaKind::Distant && formula.level.is_none() {
                warn!(
                    "Distant formula '{}' has no level and will never activate",
                    formula.result
                );
            }
        }
    }

    let active = active_formulas(formulas, visibility);
    rows.iter()
        .map(|row| {
            if row.is_separator || active.is_empty() {
                return RowAnnotation::none(&row.key);
            }
            classify_row(rows, &active, row)
        })
        .collect()
}

fn classify_row(
    rows: &[TableRow],
    active: &[&HighlightedMetric],
    row: &TableRow,
) -> RowAnnotation {
    for formula in active {
        let linkage = match formula.kind {
            FormulaKind::Adjacent => Linkage::Adjacent,
            FormulaKind::Distant => Linkage::Distant,
        };

        if formula.result == row.key {
            return RowAnnotation {
                key: row.key.clone(),
                class: CellClass::Result,
                sign: None,
                linkage: Some(linkage),
                operator: Some(formula.operator),
            };
        }

        if formula.operands.iter().any(|operand| *operand == row.key) {
            // Intermediate rows may have been filtered out of the view;
            // signs are assigned over the operands actually visible
            let visible: Vec<&str> = formula
                .operands
                .iter()
                .filter(|operand| rows.iter().any(|r| !r.is_separator && r.key == **operand))
                .map(String::as_str)
                .collect();

            let Some(position) = visible.iter().position(|operand| *operand == row.key) else {
                return RowAnnotation::none(&row.key);
            };

            let is_last_visible = position == visible.len() - 1;
            let is_single = formula.operands.len() == 1;

            if is_single || is_last_visible {
                return RowAnnotation {
                    key: row.key.clone(),
                    class: CellClass::OperandTerminal,
                    sign: Some('='),
                    linkage: Some(linkage),
                    operator: Some(formula.operator),
                };
            }

            // Distant operands never carry an inline operator sign; they
            // are connected by drawn lines instead
            let sign = match linkage {
                Linkage::Adjacent => Some(formula.operator.sign()),
                Linkage::Distant => None,
            };

            return RowAnnotation {
                key: row.key.clone(),
                class: CellClass::OperandIntermediate,
                sign,
                linkage: Some(linkage),
                operator: Some(formula.operator),
            };
        }
    }

    RowAnnotation::none(&row.key)
}

/// Construction-time check for authoring mistakes the annotator otherwise
/// degrades around silently: distant formulas without a level, and formulas
/// with no operands at all.
pub fn validate_highlighted_metrics(formulas: &[HighlightedMetric]) -> Result<()> {
    for formula in formulas {
        if formula.kind == FormulaKind::Distant && formula.level.is_none() {
            return Err(StatementMetricsError::InvalidHighlightedMetric {
                result: formula.result.clone(),
                details: "distant formula requires a level".to_string(),
            });
        }
        if formula.operands.is_empty() {
            return Err(StatementMetricsError::InvalidHighlightedMetric {
                result: formula.result.clone(),
                details: "formula has no operands".to_string(),
            });
        }
    }
    Ok(())
}
