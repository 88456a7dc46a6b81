//! Balance-sheet roll-up formulas: additive combinations of line items that
//! the statement reports in pieces.

use crate::schema::LineItems;
use crate::statement::get_value;

pub fn total_cash_and_short_term_investments(record: &LineItems) -> f64 {
    let cash_and_equivalents = get_value(Some(record), "Cash And Cash Equivalents");
    let other_short_term = get_value(Some(record), "Other Short Term Investments");
    cash_and_equivalents + other_short_term
}

pub fn total_receivables(record: &LineItems) -> f64 {
    let accounts_receivable = get_value(Some(record), "Accounts Receivable");
    let other_receivables = get_value(Some(record), "Other Receivables");
    accounts_receivable + other_receivables
}

/// Accrued expenses backed out of the combined payables line.
pub fn accrued_expenses(record: &LineItems) -> f64 {
    let payables_and_accrued = get_value(Some(record), "Payables And Accrued Expenses");
    let accounts_payable = get_value(Some(record), "Accounts Payable");
    payables_and_accrued - accounts_payable
}

pub fn total_capital_lease_obligations(record: &LineItems) -> f64 {
    get_value(Some(record), "Capital Lease Obligations")
}
