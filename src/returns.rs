//! Returns, leverage and liquidity ratios combining the income statement and
//! the balance sheet for one period. Percentage-valued ratios come back
//! multiplied by 100; multiples (current ratio, turnover) come back bare.
//! Every ratio returns 0.0 on a zero denominator instead of NaN/Infinity,
//! so a gap in the data renders as a visible "0" rather than a crash.

use crate::income::effective_tax_rate;
use crate::schema::{LineItems, Statement};
use crate::statement::{get_value, get_value_at, previous_period};

/// Return on Assets: net income over total assets, as a percentage.
pub fn roa(income: &LineItems, balance: &LineItems) -> f64 {
    let net_income = get_value(Some(income), "Net Income");
    let total_assets = get_value(Some(balance), "Total Assets");
    if total_assets == 0.0 {
        return 0.0;
    }
    (net_income / total_assets) * 100.0
}

/// Return on Equity: net income over stockholders' equity, as a percentage.
pub fn roe(income: &LineItems, balance: &LineItems) -> f64 {
    let net_income = get_value(Some(income), "Net Income");
    let equity = get_value(Some(balance), "Stockholders Equity");
    if equity == 0.0 {
        return 0.0;
    }
    (net_income / equity) * 100.0
}

/// Return on Invested Capital: NOPAT (EBIT taxed at the effective rate)
/// over invested capital (total assets less current liabilities).
pub fn roic(income: &LineItems, balance: &LineItems) -> f64 {
    let ebit = get_value(Some(income), "EBIT");
    let tax_rate = effective_tax_rate(income) / 100.0;
    let total_assets = get_value(Some(balance), "Total Assets");
    let current_liabilities = get_value(Some(balance), "Current Liabilities");
    let invested_capital = total_assets - current_liabilities;
    let nopat = ebit * (1.0 - tax_rate);

    if invested_capital == 0.0 {
        return 0.0;
    }
    (nopat / invested_capital) * 100.0
}

/// Return on Capital Employed: EBIT over capital employed (total assets
/// less current liabilities).
pub fn roce(income: &LineItems, balance: &LineItems) -> f64 {
    let ebit = get_value(Some(income), "EBIT");
    let total_assets = get_value(Some(balance), "Total Assets");
    let current_liabilities = get_value(Some(balance), "Current Liabilities");
    let capital_employed = total_assets - current_liabilities;
    if capital_employed == 0.0 {
        return 0.0;
    }
    (ebit / capital_employed) * 100.0
}

pub fn current_ratio(balance: &LineItems) -> f64 {
    let current_assets = get_value(Some(balance), "Current Assets");
    let current_liabilities = get_value(Some(balance), "Current Liabilities");
    if current_liabilities == 0.0 {
        return 0.0;
    }
    current_assets / current_liabilities
}

pub fn quick_ratio(balance: &LineItems) -> f64 {
    let current_assets = get_value(Some(balance), "Current Assets");
    let inventory = get_value(Some(balance), "Inventory");
    let current_liabilities = get_value(Some(balance), "Current Liabilities");
    if current_liabilities == 0.0 {
        return 0.0;
    }
    (current_assets - inventory) / current_liabilities
}

/// Days Sales Outstanding: receivables over revenue scaled to the period
/// length (90 days for quarterly statements, 365 for annual).
pub fn days_sales_outstanding(income: &LineItems, balance: &LineItems, quarterly: bool) -> f64 {
    let revenue = get_value(Some(income), "Total Revenue");
    let accounts_receivable = get_value(Some(balance), "Accounts Receivable");
    if revenue == 0.0 {
        return 0.0;
    }
    (accounts_receivable / revenue) * if quarterly { 90.0 } else { 365.0 }
}

pub fn days_inventory_outstanding(
    income: &LineItems,
    balance: &LineItems,
    quarterly: bool,
) -> f64 {
    let inventory = get_value(Some(balance), "Inventory");
    let cost_of_goods_sold = get_value(Some(income), "Cost Of Revenue");
    if cost_of_goods_sold == 0.0 {
        return 0.0;
    }
    (inventory / cost_of_goods_sold) * if quarterly { 90.0 } else { 365.0 }
}

pub fn inventory_turnover(income: &LineItems, balance: &LineItems) -> f64 {
    let cost_of_goods_sold = get_value(Some(income), "Cost Of Revenue");
    let inventory = get_value(Some(balance), "Inventory");
    if inventory == 0.0 {
        return 0.0;
    }
    cost_of_goods_sold / inventory
}

/// Debt to equity as a percentage.
pub fn debt_to_equity(balance: &LineItems) -> f64 {
    let total_debt = get_value(Some(balance), "Total Debt");
    let equity = get_value(Some(balance), "Stockholders Equity");
    if equity == 0.0 {
        return 0.0;
    }
    (total_debt / equity) * 100.0
}

/// Debt to assets as a percentage.
pub fn debt_to_asset(balance: &LineItems) -> f64 {
    let total_debt = get_value(Some(balance), "Total Debt");
    let total_assets = get_value(Some(balance), "Total Assets");
    if total_assets == 0.0 {
        return 0.0;
    }
    (total_debt / total_assets) * 100.0
}

pub fn equity_ratio(balance: &LineItems) -> f64 {
    let equity = get_value(Some(balance), "Stockholders Equity");
    let total_assets = get_value(Some(balance), "Total Assets");
    if total_assets == 0.0 {
        return 0.0;
    }
    equity / total_assets
}

/// Asset turnover: revenue over average total assets, where the average is
/// taken between the requested period and the chronologically preceding one.
/// With no preceding period the average degenerates to the current balance
/// used twice, i.e. the current value.
pub fn asset_turnover(income: &Statement, balance: &Statement, period: &str) -> f64 {
    let total_revenue = get_value_at(income, period, "Total Revenue");
    let current_assets = get_value_at(balance, period, "Total Assets");

    let previous_assets = match previous_period(balance, period) {
        Some(prior) => get_value_at(balance, prior, "Total Assets"),
        None => current_assets,
    };

    let average_assets = (current_assets + previous_assets) / 2.0;
    if average_assets == 0.0 {
        return 0.0;
    }
    total_revenue / average_assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, f64)]) -> LineItems {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), Some(*value)))
            .collect()
    }

    fn statement(periods: &[(&str, &[(&str, f64)])]) -> Statement {
        periods
            .iter()
            .map(|(period, items)| (period.to_string(), record(items)))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn test_roa_and_roe() {
        let income = record(&[("Net Income", 120.0)]);
        let balance = record(&[("Total Assets", 1200.0), ("Stockholders Equity", 600.0)]);
        assert_eq!(roa(&income, &balance), 10.0);
        assert_eq!(roe(&income, &balance), 20.0);
    }

    #[test]
    fn test_roe_zero_equity() {
        let income = record(&[("Net Income", 120.0)]);
        let balance = record(&[]);
        assert_eq!(roe(&income, &balance), 0.0);
    }

    #[test]
    fn test_roic_applies_effective_tax_rate() {
        // Tax rate = 50/200 = 25%, NOPAT = 200 * 0.75 = 150
        // Invested capital = 1100 - 100 = 1000
        let income = record(&[
            ("EBIT", 200.0),
            ("Interest Expense", 0.0),
            ("Tax Provision", 50.0),
        ]);
        let balance = record(&[("Total Assets", 1100.0), ("Current Liabilities", 100.0)]);
        assert_eq!(roic(&income, &balance), 15.0);
    }

    #[test]
    fn test_roce() {
        let income = record(&[("EBIT", 200.0)]);
        let balance = record(&[("Total Assets", 1100.0), ("Current Liabilities", 100.0)]);
        assert_eq!(roce(&income, &balance), 20.0);
    }

    #[test]
    fn test_current_ratio_zero_liabilities() {
        let balance = record(&[("Current Assets", 500.0), ("Current Liabilities", 0.0)]);
        assert_eq!(current_ratio(&balance), 0.0);
    }

    #[test]
    fn test_current_and_quick_ratio() {
        let balance = record(&[
            ("Current Assets", 500.0),
            ("Inventory", 100.0),
            ("Current Liabilities", 200.0),
        ]);
        assert_eq!(current_ratio(&balance), 2.5);
        assert_eq!(quick_ratio(&balance), 2.0);
    }

    #[test]
    fn test_days_sales_outstanding() {
        let income = record(&[("Total Revenue", 3650.0)]);
        let balance = record(&[("Accounts Receivable", 100.0)]);
        assert_eq!(days_sales_outstanding(&income, &balance, false), 10.0);
        assert!((days_sales_outstanding(&income, &balance, true) - 90.0 / 36.5).abs() < 1e-12);
    }

    #[test]
    fn test_leverage_ratios() {
        let balance = record(&[
            ("Total Debt", 300.0),
            ("Stockholders Equity", 600.0),
            ("Total Assets", 1200.0),
        ]);
        assert_eq!(debt_to_equity(&balance), 50.0);
        assert_eq!(debt_to_asset(&balance), 25.0);
        assert_eq!(equity_ratio(&balance), 0.5);
    }

    #[test]
    fn test_asset_turnover_averages_prior_period() {
        let income = statement(&[("2023-12-31", &[("Total Revenue", 900.0)])]);
        let balance = statement(&[
            ("2022-12-31", &[("Total Assets", 800.0)]),
            ("2023-12-31", &[("Total Assets", 1000.0)]),
        ]);
        // Average assets = (1000 + 800) / 2 = 900
        assert_eq!(asset_turnover(&income, &balance, "2023-12-31"), 1.0);
    }

    #[test]
    fn test_asset_turnover_without_prior_period() {
        let income = statement(&[("2023-12-31", &[("Total Revenue", 500.0)])]);
        let balance = statement(&[("2023-12-31", &[("Total Assets", 1000.0)])]);
        // No prior period: average degenerates to the current value
        assert_eq!(asset_turnover(&income, &balance, "2023-12-31"), 0.5);
    }

    #[test]
    fn test_inventory_turnover_zero_inventory() {
        let income = record(&[("Cost Of Revenue", 400.0)]);
        let balance = record(&[]);
        assert_eq!(inventory_turnover(&income, &balance), 0.0);
    }
}
