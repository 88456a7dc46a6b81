use crate::schema::{LineItems, Statement};

/// Looks up a line item within one period's record, treating a missing
/// record, a missing key and an explicit null all as `0.0`.
///
/// Every additive formula in this crate is a linear combination of line
/// items; zero is the neutral element, so a component that does not exist
/// for a given company or period simply contributes nothing instead of
/// poisoning the whole chain with NaN. Ratio formulas guard their
/// denominators separately, since zero is not safe there.
pub fn get_value(record: Option<&LineItems>, name: &str) -> f64 {
    record
        .and_then(|items| items.get(name))
        .copied()
        .flatten()
        .unwrap_or(0.0)
}

/// Line-item lookup addressed by period key.
pub fn get_value_at(statement: &Statement, period: &str, name: &str) -> f64 {
    get_value(statement.get(period), name)
}

/// The chronologically preceding period key, or `None` when `period` is the
/// earliest (or unknown). Relies on period keys sorting lexicographically
/// equal to chronologically.
pub fn previous_period<'a>(statement: &'a Statement, period: &str) -> Option<&'a str> {
    statement
        .range::<str, _>((std::ops::Bound::Unbounded, std::ops::Bound::Excluded(period)))
        .next_back()
        .map(|(key, _)| key.as_str())
}

/// Period keys in descending chronological order. Used by the quarterly
/// trailing-window calculations, which index from the most recent period.
pub fn periods_descending(statement: &Statement) -> Vec<&str> {
    statement.keys().rev().map(String::as_str).collect()
}
