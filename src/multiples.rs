//! Price-based valuation multiples. These are the only formulas that need a
//! second input besides the statements: a flattened daily price series.

use crate::schema::{PriceBar, Statement};
use crate::statement::{get_value, get_value_at, periods_descending};
use chrono::{Days, NaiveDate};
use log::debug;

/// Number of calendar days to scan backwards for the nearest prior trading
/// day when a statement date falls on a weekend or holiday.
const PRICE_LOOKBACK_DAYS: u64 = 30;

/// Close price observed on `date`, or on the nearest prior trading day
/// within [`PRICE_LOOKBACK_DAYS`]. Returns 0.0 when no price is found,
/// which the callers treat as "multiple unavailable".
pub fn last_price(history: &[PriceBar], date: &str) -> f64 {
    if let Some(bar) = history.iter().find(|bar| bar.day() == date) {
        return bar.close().unwrap_or(0.0);
    }

    let target = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!("Unparseable statement date '{}': {}", date, err);
            return 0.0;
        }
    };

    for offset in 1..=PRICE_LOOKBACK_DAYS {
        let Some(previous_day) = target.checked_sub_days(Days::new(offset)) else {
            break;
        };
        let formatted = previous_day.format("%Y-%m-%d").to_string();
        if let Some(bar) = history.iter().find(|bar| bar.day() == formatted) {
            return bar.close().unwrap_or(0.0);
        }
    }

    0.0
}

/// Price-to-earnings multiple for the statement period ending at `period`.
///
/// For quarterly statements the EPS is annualized by summing the requested
/// quarter plus the next three entries of the descending-date period list
/// (i.e. the four most recent quarters including the requested one); fewer
/// than four available quarters yields 0 rather than a partial estimate.
pub fn price_to_earnings(
    income: &Statement,
    history: &[PriceBar],
    period: &str,
    quarterly: bool,
) -> f64 {
    let price = last_price(history, period);
    if price == 0.0 {
        return 0.0;
    }

    if quarterly {
        let periods = periods_descending(income);
        let Some(start) = periods.iter().position(|key| *key == period) else {
            return 0.0;
        };

        let window = &periods[start..(start + 4).min(periods.len())];
        if window.len() < 4 {
            return 0.0;
        }

        let annualized_eps: f64 = window
            .iter()
            .map(|quarter| get_value_at(income, quarter, "Diluted EPS"))
            .sum();
        if annualized_eps == 0.0 {
            return 0.0;
        }
        return price / annualized_eps;
    }

    let eps = get_value(income.get(period), "Diluted EPS");
    if eps == 0.0 {
        return 0.0;
    }
    price / eps
}

/// Price-to-book multiple for the statement period ending at `period`.
pub fn price_to_book(balance: &Statement, history: &[PriceBar], period: &str) -> f64 {
    let price = last_price(history, period);
    if price == 0.0 {
        return 0.0;
    }

    let book_value_per_share = get_value(balance.get(period), "Book Value Per Share");
    if book_value_per_share == 0.0 {
        return 0.0;
    }
    price / book_value_per_share
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LineItems;
    use std::collections::BTreeMap;

    fn bar(date: &str, close: f64) -> PriceBar {
        let mut fields = BTreeMap::new();
        fields.insert("Close_MLI".to_string(), close);
        PriceBar {
            date: date.to_string(),
            fields,
        }
    }

    fn income_with_eps(periods: &[(&str, f64)]) -> Statement {
        periods
            .iter()
            .map(|(period, eps)| {
                let mut items = LineItems::new();
                items.insert("Diluted EPS".to_string(), Some(*eps));
                (period.to_string(), items)
            })
            .collect()
    }

    #[test]
    fn test_last_price_exact_match_ignores_time_portion() {
        let history = vec![bar("2023-12-29 00:00:00", 78.21)];
        assert_eq!(last_price(&history, "2023-12-29"), 78.21);
    }

    #[test]
    fn test_last_price_scans_backwards() {
        // 2023-12-31 is a Sunday; last trading day was the 29th
        let history = vec![bar("2023-12-28", 77.50), bar("2023-12-29", 78.21)];
        assert_eq!(last_price(&history, "2023-12-31"), 78.21);
    }

    #[test]
    fn test_last_price_gives_up_after_thirty_days() {
        let history = vec![bar("2023-10-31", 70.0)];
        assert_eq!(last_price(&history, "2023-12-31"), 0.0);
    }

    #[test]
    fn test_annual_pe() {
        let history = vec![bar("2023-12-31", 80.0)];
        let income = income_with_eps(&[("2023-12-31", 4.0)]);
        assert_eq!(price_to_earnings(&income, &history, "2023-12-31", false), 20.0);
    }

    #[test]
    fn test_annual_pe_zero_eps() {
        let history = vec![bar("2023-12-31", 80.0)];
        let income = income_with_eps(&[("2023-12-31", 0.0)]);
        assert_eq!(price_to_earnings(&income, &history, "2023-12-31", false), 0.0);
    }

    #[test]
    fn test_quarterly_pe_sums_four_quarters() {
        let history = vec![bar("2023-12-31", 80.0)];
        let income = income_with_eps(&[
            ("2023-03-31", 1.0),
            ("2023-06-30", 1.0),
            ("2023-09-30", 1.0),
            ("2023-12-31", 1.0),
            ("2022-12-31", 9.0),
        ]);
        // Window starts at 2023-12-31 in descending order and takes four
        // quarters: Q4+Q3+Q2+Q1 = 4.0
        assert_eq!(price_to_earnings(&income, &history, "2023-12-31", true), 20.0);
    }

    #[test]
    fn test_quarterly_pe_requires_four_quarters() {
        let history = vec![bar("2023-12-31", 80.0)];
        let income = income_with_eps(&[
            ("2023-06-30", 1.0),
            ("2023-09-30", 1.0),
            ("2023-12-31", 1.0),
        ]);
        assert_eq!(price_to_earnings(&income, &history, "2023-12-31", true), 0.0);
    }

    #[test]
    fn test_quarterly_pe_window_starts_at_requested_period() {
        let history = vec![bar("2023-06-30", 40.0)];
        let income = income_with_eps(&[
            ("2022-09-30", 2.0),
            ("2022-12-31", 2.0),
            ("2023-03-31", 2.0),
            ("2023-06-30", 2.0),
            ("2023-09-30", 100.0),
        ]);
        // Requested period is not the most recent; the window runs from it
        // backwards in time and never touches 2023-09-30
        assert_eq!(price_to_earnings(&income, &history, "2023-06-30", true), 5.0);
    }

    #[test]
    fn test_price_to_book() {
        let history = vec![bar("2023-12-31", 80.0)];
        let mut balance: Statement = BTreeMap::new();
        let mut items = LineItems::new();
        items.insert("Book Value Per Share".to_string(), Some(16.0));
        balance.insert("2023-12-31".to_string(), items);

        assert_eq!(price_to_book(&balance, &history, "2023-12-31"), 5.0);
    }

    #[test]
    fn test_price_to_book_no_price() {
        let balance: Statement = BTreeMap::new();
        assert_eq!(price_to_book(&balance, &[], "2023-12-31"), 0.0);
    }
}
