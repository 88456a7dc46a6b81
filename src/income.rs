//! Income-statement formulas. Each function is a pure pass over one period's
//! line-item record; margins and rates are returned already multiplied by
//! 100 (a return of 12.5 means 12.5%), bare ratios are not.

use crate::schema::LineItems;
use crate::statement::get_value;

pub fn gross_profit(record: &LineItems) -> f64 {
    let total_revenue = get_value(Some(record), "Total Revenue");
    let cost_of_revenue = get_value(Some(record), "Cost Of Revenue");
    total_revenue - cost_of_revenue
}

/// EBIT less interest expense.
pub fn ebt(record: &LineItems) -> f64 {
    let ebit = get_value(Some(record), "EBIT");
    let interest_expense = get_value(Some(record), "Interest Expense");
    ebit - interest_expense
}

/// EBIT plus reconciled depreciation.
pub fn ebitda(record: &LineItems) -> f64 {
    let ebit = get_value(Some(record), "EBIT");
    let depreciation = get_value(Some(record), "Reconciled Depreciation");
    ebit + depreciation
}

pub fn operating_expenses(record: &LineItems) -> f64 {
    let sga = get_value(Some(record), "Selling General And Administration");
    let selling_and_marketing = get_value(Some(record), "Selling And Marketing Expense");
    let interest_expense = get_value(Some(record), "Interest Expense");
    sga + selling_and_marketing + interest_expense
}

pub fn gross_margin(record: &LineItems) -> f64 {
    let total_revenue = get_value(Some(record), "Total Revenue");
    if total_revenue == 0.0 {
        return 0.0;
    }
    (gross_profit(record) / total_revenue) * 100.0
}

pub fn operating_margin(record: &LineItems) -> f64 {
    let operating_income = get_value(Some(record), "Operating Income");
    let total_revenue = get_value(Some(record), "Total Revenue");
    if total_revenue == 0.0 {
        return 0.0;
    }
    (operating_income / total_revenue) * 100.0
}

pub fn ebitda_margin(record: &LineItems) -> f64 {
    let total_revenue = get_value(Some(record), "Total Revenue");
    if total_revenue == 0.0 {
        return 0.0;
    }
    (ebitda(record) / total_revenue) * 100.0
}

/// Effective tax rate as a percentage. Both the tax provision and EBT are
/// taken as absolute values so the rate stays positive when a company
/// reports a tax benefit alongside a pretax loss, or vice versa.
pub fn effective_tax_rate(record: &LineItems) -> f64 {
    let tax_provision = get_value(Some(record), "Tax Provision").abs();
    let ebt = ebt(record).abs();
    if ebt == 0.0 {
        return 0.0;
    }
    (tax_provision / ebt) * 100.0
}
