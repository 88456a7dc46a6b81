//! Production metric catalogs: the ordered row definitions, formula
//! descriptor sets and common-size exclusion lists the statement tables are
//! built from. Kept as data so a host application can use them verbatim or
//! author its own.

use crate::schema::{HighlightedMetric, LineItems, MetricDefinition, Operator, PriceBar, Statement};
use crate::{balance, income, multiples, returns};

fn calc(statement: &Statement, period: &str, f: fn(&LineItems) -> f64) -> Option<f64> {
    statement.get(period).map(f)
}

fn gross_margin(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::gross_margin)
}

fn operating_margin(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::operating_margin)
}

fn operating_expenses(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::operating_expenses)
}

fn ebitda(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::ebitda)
}

fn ebitda_margin(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::ebitda_margin)
}

fn ebt(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::ebt)
}

fn effective_tax_rate(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, income::effective_tax_rate)
}

fn total_cash_and_short_term_investments(s: &Statement, period: &str) -> Option<f64> {
    calc(s, period, balance::total_cash_and_short_term_investments)
}

/// Treasury stock is reported positive but reduces equity, so the row shows
/// it negated. Stays absent when the line item is absent.
fn treasury_stock(s: &Statement, period: &str) -> Option<f64> {
    s.get(period)
        .and_then(|record| record.get("Treasury Stock").copied().flatten())
        .map(|value| -value)
}

/// Income-statement rows in presentation order: raw line items interleaved
/// with computed margins and subtotals, grouped by section separators.
pub fn income_statement_metrics() -> Vec<MetricDefinition<Statement>> {
    vec![
        MetricDefinition::separator("Revenue"),
        MetricDefinition::raw("Total Revenue", "Total Revenue"),
        MetricDefinition::raw_with_tooltip(
            "Cost Of Revenue",
            "Cost of Goods Sold (COGS)",
            "Cost of Goods Sold (COGS)",
        ),
        MetricDefinition::raw_with_tooltip(
            "Gross Profit",
            "Gross Profit",
            "Total Revenue - Cost of Goods Sold (COGS)",
        ),
        MetricDefinition::computed(
            "Gross Margin",
            "Gross Margin %",
            "Gross Profit / Total Revenue",
            gross_margin,
        ),
        MetricDefinition::computed(
            "Operating Margin",
            "Operating Margin %",
            "Operating Income / Total Revenue",
            operating_margin,
        ),
        MetricDefinition::separator("Expenses"),
        MetricDefinition::raw(
            "Selling General And Administration",
            "Selling, General and Administrative Expenses",
        ),
        MetricDefinition::raw("Selling And Marketing Expense", "Selling and Marketing Expense"),
        MetricDefinition::raw("Interest Expense", "Interest Expense"),
        MetricDefinition::computed(
            "Operating Expense",
            "Total Operating Expense",
            "Selling, General and Administrative Expenses + Selling And Marketing Expense + Interest Expense",
            operating_expenses,
        ),
        MetricDefinition::raw(
            "Other Non Operating Income Expenses",
            "Other Non Operating Income Expenses",
        ),
        MetricDefinition::raw(
            "Depreciation And Amortization In Income Statement",
            "Depreciation & Amortization Expense (D&A)",
        ),
        MetricDefinition::separator("Gains and Losses"),
        MetricDefinition::raw_with_tooltip(
            "Operating Income",
            "Operating Income",
            "Gross income less operating expenses and other business-related expenses, such as SG&A and depreciation",
        ),
        MetricDefinition::raw_with_tooltip(
            "EBIT",
            "EBIT",
            "Similar to Operating Income, but includes non-operating income, non-operating expenses, and other income",
        ),
        MetricDefinition::raw("Reconciled Depreciation", "Reconciled Depreciation"),
        MetricDefinition::computed(
            "EBITDA",
            "EBITDA",
            "EBIT + Depreciation & Amortization Expense (Reconciled Depreciation)",
            ebitda,
        ),
        MetricDefinition::computed(
            "EBITDA Margin",
            "EBITDA Margin %",
            "EBITDA / Total Revenue",
            ebitda_margin,
        ),
        MetricDefinition::raw("Tax Provision", "Income Tax"),
        MetricDefinition::computed("EBT", "EBT", "EBIT - Interest Expense", ebt),
        MetricDefinition::computed(
            "Effective Tax Rate",
            "Effective Tax Rate %",
            "Income Tax / EBT",
            effective_tax_rate,
        ),
        MetricDefinition::separator("Net Income"),
        MetricDefinition::raw("Net Income", "Net Income"),
        MetricDefinition::raw_with_tooltip(
            "Basic Average Shares",
            "Basic Average Shares",
            "Average number of shares held by all shareholders",
        ),
        MetricDefinition::raw_with_tooltip(
            "Diluted Average Shares",
            "Diluted Average Shares",
            "Average number of shares that would be outstanding if all convertible securities were exercised",
        ),
        MetricDefinition::raw_with_tooltip(
            "Basic EPS",
            "Basic EPS",
            "Net Income / Basic Average Shares",
        ),
        MetricDefinition::raw_with_tooltip(
            "Diluted EPS",
            "Diluted EPS",
            "Net Income / Diluted Average Shares",
        ),
    ]
}

/// Balance-sheet rows in presentation order. Almost everything is a raw line
/// item; the cash roll-up is computed, and treasury stock is negated.
pub fn balance_sheet_metrics() -> Vec<MetricDefinition<Statement>> {
    vec![
        MetricDefinition::separator("Assets"),
        MetricDefinition::raw("Cash And Cash Equivalents", "Cash And Cash Equivalents"),
        MetricDefinition::raw("Other Short Term Investments", "Other Short Term Investments"),
        MetricDefinition::computed(
            "Total Cash And Short Term Investments",
            "Total Cash And Short Term Investments",
            "Cash And Cash Equivalents + Other Short Term Investments",
            total_cash_and_short_term_investments,
        ),
        MetricDefinition::raw("Gross Accounts Receivable", "Gross Accounts Receivable"),
        MetricDefinition::raw(
            "Allowance For Doubtful Accounts Receivable",
            "Allowance For Doubtful Accounts Receivable",
        ),
        MetricDefinition::raw("Taxes Receivable", "Taxes Receivable"),
        MetricDefinition::raw("Loans Receivable", "Loans Receivable"),
        MetricDefinition::raw("Other Receivables", "Other Receivables"),
        MetricDefinition::raw("Receivables", "Receivables"),
        MetricDefinition::raw("Raw Materials", "Raw Materials"),
        MetricDefinition::raw("Work In Process", "Work In Process"),
        MetricDefinition::raw("Finished Goods", "Finished Goods"),
        MetricDefinition::raw("Other Inventories", "Other Inventories"),
        MetricDefinition::raw(
            "Inventories Adjustments Allowances",
            "Inventories Adjustments Allowances",
        ),
        MetricDefinition::raw("Inventory", "Inventory"),
        MetricDefinition::raw("Prepaid Assets", "Prepaid Assets"),
        MetricDefinition::raw("Hedging Assets Current", "Hedging Assets Current"),
        MetricDefinition::raw("Other Current Assets", "Other Current Assets"),
        MetricDefinition::raw("Restricted Cash", "Restricted Cash"),
        MetricDefinition::raw("Current Assets", "Current Assets"),
        MetricDefinition::raw("Gross PPE", "Gross PPE"),
        MetricDefinition::raw("Accumulated Depreciation", "Accumulated Depreciation"),
        MetricDefinition::raw("Net PPE", "Net PPE"),
        MetricDefinition::raw("Investments And Advances", "Investments And Advances"),
        MetricDefinition::raw("Goodwill", "Goodwill"),
        MetricDefinition::raw("Other Intangible Assets", "Other Intangible Assets"),
        MetricDefinition::raw("Non Current Deferred Assets", "Non Current Deferred Assets"),
        MetricDefinition::raw("Non Current Note Receivables", "Non Current Note Receivables"),
        MetricDefinition::raw("Other Non Current Assets", "Other Non Current Assets"),
        MetricDefinition::raw("Total Non Current Assets", "Total Non Current Assets"),
        MetricDefinition::raw("Total Assets", "Total Assets"),
        MetricDefinition::separator("Liabilities"),
        MetricDefinition::raw("Payables And Accrued Expenses", "Payables And Accrued Expenses"),
        MetricDefinition::raw("Current Debt", "Current Debt"),
        MetricDefinition::raw(
            "Current Capital Lease Obligation",
            "Current Capital Lease Obligation",
        ),
        MetricDefinition::raw(
            "Current Debt And Capital Lease Obligation",
            "Current Debt And Capital Lease Obligation",
        ),
        MetricDefinition::raw("Current Deferred Liabilities", "Current Deferred Liabilities"),
        MetricDefinition::raw("Current Provisions", "Current Provisions"),
        MetricDefinition::raw(
            "Pensionand Other Post Retirement Benefit Plans Current",
            "Pensionand Other Post Retirement Benefit Plans Current",
        ),
        MetricDefinition::raw("Other Current Liabilities", "Other Current Liabilities"),
        MetricDefinition::raw("Current Liabilities", "Current Liabilities"),
        MetricDefinition::raw("Long Term Debt", "Long Term Debt"),
        MetricDefinition::raw(
            "Long Term Capital Lease Obligation",
            "Long Term Capital Lease Obligation",
        ),
        MetricDefinition::raw(
            "Long Term Debt And Capital Lease Obligation",
            "Long Term Debt And Capital Lease Obligation",
        ),
        MetricDefinition::raw(
            "Non Current Deferred Liabilities",
            "Non Current Deferred Liabilities",
        ),
        MetricDefinition::raw("Long Term Provisions", "Long Term Provisions"),
        MetricDefinition::raw("Employee Benefits", "Employee Benefits"),
        MetricDefinition::raw(
            "Preferred Securities Outside Stock Equity",
            "Preferred Securities Outside Stock Equity",
        ),
        MetricDefinition::raw("Other Non Current Liabilities", "Other Non Current Liabilities"),
        MetricDefinition::raw(
            "Total Non Current Liabilities Net Minority Interest",
            "Total Non Current Liabilities Net Minority Interest",
        ),
        MetricDefinition::raw(
            "Total Liabilities Net Minority Interest",
            "Total Liabilities Net Minority Interest",
        ),
        MetricDefinition::separator("Equity"),
        MetricDefinition::raw("Common Stock", "Common Stock"),
        MetricDefinition::raw("Additional Paid In Capital", "Additional Paid In Capital"),
        MetricDefinition::raw("Retained Earnings", "Retained Earnings"),
        MetricDefinition::computed(
            "Treasury Stock",
            "Treasury Stock",
            "Shares repurchased by the company, shown as a reduction of equity",
            treasury_stock,
        ),
        MetricDefinition::raw("Other Equity Adjustments", "Other Equity Adjustments"),
        MetricDefinition::raw("Other Equity Interest", "Other Equity Interest"),
        MetricDefinition::raw("Minority Interest", "Minority Interest"),
        MetricDefinition::raw(
            "Total Equity Gross Minority Interest",
            "Total Equity Gross Minority Interest",
        ),
        MetricDefinition::raw("Total Equity", "Total Equity"),
        MetricDefinition::separator("Others"),
        MetricDefinition::raw("Total Capitalization", "Total Capitalization"),
        MetricDefinition::raw("Stockholders Equity", "Stockholders Equity"),
        MetricDefinition::raw("Treasury Shares Number", "Treasury Shares Number"),
        MetricDefinition::raw("Ordinary Shares Number", "Ordinary Shares Number"),
        MetricDefinition::raw("Tangible Book Value", "Tangible Book Value"),
        MetricDefinition::raw("Net Tangible Assets", "Net Tangible Assets"),
        MetricDefinition::raw("Capital Lease Obligations", "Capital Lease Obligations"),
        MetricDefinition::raw("Total Debt", "Total Debt"),
        MetricDefinition::raw_with_tooltip(
            "Net Debt",
            "Net Debt",
            "Total Debt - Total Cash And Short Term Investments",
        ),
        MetricDefinition::raw("Buildings And Improvements", "Buildings And Improvements"),
        MetricDefinition::raw("Land And Improvements", "Land And Improvements"),
        MetricDefinition::raw("Construction In Progress", "Construction In Progress"),
        MetricDefinition::raw("Other Properties", "Other Properties"),
    ]
}

/// Cash-flow rows in presentation order, grouped by activity. All raw: the
/// statement already carries its subtotals.
pub fn cash_flow_metrics() -> Vec<MetricDefinition<Statement>> {
    vec![
        MetricDefinition::separator("Operating"),
        MetricDefinition::raw(
            "Net Income From Continuing Operations",
            "Net Income From Continuing Operations",
        ),
        MetricDefinition::raw("Operating Gains Losses", "Operating Gains Losses"),
        MetricDefinition::raw("Provisionand Write Offof Assets", "Provision & Write of Assets"),
        MetricDefinition::raw(
            "Depreciation Amortization Depletion",
            "Depreciation Amortization Depletion",
        ),
        MetricDefinition::raw("Deferred Tax", "Deferred Tax"),
        MetricDefinition::raw("Asset Impairment Charge", "Asset Impairment Charge"),
        MetricDefinition::raw("Stock Based Compensation", "Stock Based Compensation"),
        MetricDefinition::raw("Other Non Cash Items", "Other Non Cash Items"),
        MetricDefinition::raw("Change In Receivables", "Change In Receivables"),
        MetricDefinition::raw("Change In Inventory", "Change In Inventory"),
        MetricDefinition::raw("Change In Prepaid Assets", "Change In Prepaid Assets"),
        MetricDefinition::raw(
            "Change In Payables And Accrued Expense",
            "Change In Payables And Accrued Expense",
        ),
        MetricDefinition::raw(
            "Change In Other Current Liabilities",
            "Change In Other Current Liabilities",
        ),
        MetricDefinition::raw("Change In Other Working Capital", "Change In Other Working Capital"),
        MetricDefinition::raw("Change In Working Capital", "Change In Working Capital"),
        MetricDefinition::raw(
            "Cash Flow From Continuing Operating Activities",
            "Cash from Operating Activities",
        ),
        MetricDefinition::separator("Investing"),
        MetricDefinition::raw("Capital Expenditure", "Capital Expenditure"),
        MetricDefinition::raw("Net PPE Purchase And Sale", "Net PPE Purchase And Sale"),
        MetricDefinition::raw("Net Business Purchase And Sale", "Net Business Purchase And Sale"),
        MetricDefinition::raw(
            "Net Investment Purchase And Sale",
            "Net Investment Purchase And Sale",
        ),
        MetricDefinition::raw("Dividends Received Cfi", "Dividends Received CFI"),
        MetricDefinition::raw("Net Other Investing Changes", "Net Other Investing Changes"),
        MetricDefinition::raw(
            "Cash Flow From Continuing Investing Activities",
            "Cash From Investing Activities",
        ),
        MetricDefinition::separator("Financing"),
        MetricDefinition::raw("Net Issuance Payments Of Debt", "Net Issuance Payments Of Debt"),
        MetricDefinition::raw("Net Common Stock Issuance", "Net Common Stock Issuance"),
        MetricDefinition::raw("Cash Dividends Paid", "Cash Dividends Paid"),
        MetricDefinition::raw(
            "Proceeds From Stock Option Exercised",
            "Proceeds From Stock Option Exercised",
        ),
        MetricDefinition::raw("Net Other Financing Charges", "Net Other Financing Charges"),
        MetricDefinition::raw("Financing Cash Flow", "Cash From Financing Activities"),
        MetricDefinition::separator("Others"),
        MetricDefinition::raw("Net Cash Flow", "Net Cash Flow"),
        MetricDefinition::raw_with_tooltip(
            "Free Cash Flow",
            "Free Cash Flow",
            "Cash from Operating Activities - Capital Expenditure",
        ),
    ]
}

/// Inputs the valuation-multiples catalog computes from: both statements,
/// the daily price history, and whether the periods are quarterly. The
/// multiples table is built over the income statement's period keys.
pub struct MultiplesContext<'a> {
    pub income: &'a Statement,
    pub balance: &'a Statement,
    pub history: &'a [PriceBar],
    pub quarterly: bool,
}

fn records<'a>(
    ctx: &'a MultiplesContext<'_>,
    period: &str,
) -> Option<(&'a LineItems, &'a LineItems)> {
    ctx.income.get(period).zip(ctx.balance.get(period))
}

fn roa(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::roa(i, b))
}

fn roe(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::roe(i, b))
}

fn roic(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::roic(i, b))
}

fn roce(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::roce(i, b))
}

fn price_earnings(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.income
        .contains_key(period)
        .then(|| multiples::price_to_earnings(ctx.income, ctx.history, period, ctx.quarterly))
}

fn price_book(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance
        .contains_key(period)
        .then(|| multiples::price_to_book(ctx.balance, ctx.history, period))
}

fn current_ratio(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance.get(period).map(returns::current_ratio)
}

fn quick_ratio(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance.get(period).map(returns::quick_ratio)
}

fn days_sales_outstanding(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::days_sales_outstanding(i, b, ctx.quarterly))
}

fn equity_ratio(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance.get(period).map(returns::equity_ratio)
}

fn debt_to_equity(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance.get(period).map(returns::debt_to_equity)
}

fn debt_to_asset(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.balance.get(period).map(returns::debt_to_asset)
}

fn asset_turnover(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    ctx.income
        .contains_key(period)
        .then(|| returns::asset_turnover(ctx.income, ctx.balance, period))
}

fn days_inventory_outstanding(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::days_inventory_outstanding(i, b, ctx.quarterly))
}

fn inventory_turnover(ctx: &MultiplesContext, period: &str) -> Option<f64> {
    records(ctx, period).map(|(i, b)| returns::inventory_turnover(i, b))
}

/// Valuation-multiples rows: every row is computed, drawing on both
/// statements and the price history at once.
pub fn multiples_metrics<'a>() -> Vec<MetricDefinition<MultiplesContext<'a>>> {
    vec![
        MetricDefinition::separator("Returns"),
        MetricDefinition::computed(
            "ROA",
            "Return on Assets (ROA) %",
            "Net Income / Total Assets",
            roa,
        ),
        MetricDefinition::computed(
            "ROE",
            "Return on Equity (ROE) %",
            "Net Income / Total Equity",
            roe,
        ),
        MetricDefinition::computed(
            "ROIC",
            "Return on Invested Capital (ROIC) %",
            "NOPAT / Invested Capital",
            roic,
        ),
        MetricDefinition::computed(
            "ROCE",
            "Return on Capital Employed (ROCE) %",
            "EBIT / Capital Employed",
            roce,
        ),
        MetricDefinition::separator("Valuation"),
        MetricDefinition::computed(
            "P/E",
            "Price to Earnings Ratio (P/E)",
            "Price / Earnings per Share (EPS)",
            price_earnings,
        ),
        MetricDefinition::computed(
            "P/B",
            "Price to Book Ratio (P/B)",
            "Price / Book Value per Share",
            price_book,
        ),
        MetricDefinition::separator("Short Term Liquidity"),
        MetricDefinition::computed(
            "Current Ratio",
            "Current Ratio",
            "Current Assets / Current Liabilities",
            current_ratio,
        ),
        MetricDefinition::computed(
            "Quick Ratio",
            "Quick Ratio",
            "(Current Assets - Inventory) / Current Liabilities",
            quick_ratio,
        ),
        MetricDefinition::computed(
            "Days Sales Outstanding",
            "Days Sales Outstanding",
            "Accounts Receivable / Revenue, scaled to the period length",
            days_sales_outstanding,
        ),
        MetricDefinition::separator("Long Term Solvency"),
        MetricDefinition::computed(
            "Equity Ratio",
            "Equity Ratio",
            "Shareholders Equity / Total Assets",
            equity_ratio,
        ),
        MetricDefinition::computed(
            "Debt to Equity",
            "Debt to Equity %",
            "Total Debt / Total Equity",
            debt_to_equity,
        ),
        MetricDefinition::computed(
            "Debt to Asset",
            "Debt to Asset %",
            "Total Debt / Total Assets",
            debt_to_asset,
        ),
        MetricDefinition::separator("Efficiency"),
        MetricDefinition::computed(
            "Asset Turnover Ratio",
            "Asset Turnover Ratio",
            "Total Revenue / Average Total Assets",
            asset_turnover,
        ),
        MetricDefinition::computed(
            "Days Inventory Outstanding",
            "Days Inventory Outstanding",
            "Inventory / Cost of Goods Sold, scaled to the period length",
            days_inventory_outstanding,
        ),
        MetricDefinition::computed(
            "Inventory Turnover Ratio",
            "Inventory Turnover Ratio",
            "Cost of Goods Sold / Inventory",
            inventory_turnover,
        ),
    ]
}

/// Income-statement formula overlay: all adjacent, so a single visibility
/// tier.
pub fn income_statement_highlights() -> Vec<HighlightedMetric> {
    vec![
        HighlightedMetric::adjacent(
            &["Total Revenue", "Cost Of Revenue"],
            "Gross Profit",
            Operator::Subtract,
        ),
        HighlightedMetric::adjacent(
            &[
                "Selling General And Administration",
                "Selling And Marketing Expense",
                "Interest Expense",
            ],
            "Operating Expense",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &["EBIT", "Reconciled Depreciation"],
            "EBITDA",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &["Tax Provision", "EBT"],
            "Effective Tax Rate",
            Operator::Divide,
        ),
    ]
}

/// Rows excluded from income-statement vertical analysis: ratios, margins,
/// share counts and per-share figures, which are not meaningful as a
/// percentage of revenue.
pub fn income_common_size_exclusions() -> Vec<&'static str> {
    vec![
        "Gross Margin",
        "Operating Margin",
        "EBITDA Margin",
        "Effective Tax Rate",
        "Basic Average Shares",
        "Diluted Average Shares",
        "Basic EPS",
        "Diluted EPS",
    ]
}

/// Balance-sheet formula overlay: adjacent roll-ups plus two distant tiers
/// (subtotal rows at tier 1, statement totals at tier 2).
pub fn balance_sheet_highlights() -> Vec<HighlightedMetric> {
    vec![
        HighlightedMetric::adjacent(
            &["Cash And Cash Equivalents", "Other Short Term Investments"],
            "Total Cash And Short Term Investments",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &[
                "Gross Accounts Receivable",
                "Allowance For Doubtful Accounts Receivable",
                "Loans Receivable",
                "Taxes Receivable",
                "Other Receivables",
            ],
            "Receivables",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &[
                "Raw Materials",
                "Work In Process",
                "Finished Goods",
                "Other Inventories",
                "Inventories Adjustments Allowances",
            ],
            "Inventory",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &["Gross PPE", "Accumulated Depreciation"],
            "Net PPE",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &[
                "Current Debt",
                "Current Capital Lease Obligation",
                "Other Current Borrowings",
            ],
            "Current Debt And Capital Lease Obligation",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &["Long Term Debt", "Long Term Capital Lease Obligation"],
            "Long Term Debt And Capital Lease Obligation",
            Operator::Add,
        ),
        HighlightedMetric::adjacent(
            &[
                "Common Stock",
                "Additional Paid In Capital",
                "Retained Earnings",
                "Treasury Stock",
                "Other Equity Adjustments",
                "Other Equity Interest",
                "Minority Interest",
            ],
            "Total Equity Gross Minority Interest",
            Operator::Add,
        ),
        HighlightedMetric::distant(
            &[
                "Total Cash And Short Term Investments",
                "Receivables",
                "Inventory",
                "Prepaid Assets",
                "Hedging Assets Current",
                "Restricted Cash",
                "Other Current Assets",
            ],
            "Current Assets",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &[
                "Net PPE",
                "Investments And Advances",
                "Goodwill",
                "Other Intangible Assets",
                "Non Current Deferred Assets",
                "Non Current Note Receivables",
                "Other Non Current Assets",
            ],
            "Total Non Current Assets",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &["Current Assets", "Total Non Current Assets"],
            "Total Assets",
            Operator::Add,
            2,
        ),
        HighlightedMetric::distant(
            &[
                "Payables And Accrued Expenses",
                "Current Accrued Expenses",
                "Current Debt And Capital Lease Obligation",
                "Current Deferred Liabilities",
                "Current Provisions",
                "Pensionand Other Post Retirement Benefit Plans Current",
                "Other Current Liabilities",
            ],
            "Current Liabilities",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &[
                "Long Term Debt And Capital Lease Obligation",
                "Non Current Deferred Liabilities",
                "Employee Benefits",
                "Long Term Provisions",
                "Preferred Securities Outside Stock Equity",
                "Other Non Current Liabilities",
            ],
            "Total Non Current Liabilities Net Minority Interest",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &["Current Liabilities", "Total Non Current Liabilities Net Minority Interest"],
            "Total Liabilities Net Minority Interest",
            Operator::Add,
            2,
        ),
    ]
}

/// Cash-flow formula overlay: working-capital roll-up adjacent, the three
/// activity subtotals at distant tier 1, free cash flow at tier 2.
pub fn cash_flow_highlights() -> Vec<HighlightedMetric> {
    vec![
        HighlightedMetric::adjacent(
            &[
                "Change In Receivables",
                "Change In Inventory",
                "Change In Prepaid Assets",
                "Change In Payables And Accrued Expense",
                "Change In Other Current Liabilities",
                "Change In Other Working Capital",
            ],
            "Change In Working Capital",
            Operator::Add,
        ),
        HighlightedMetric::distant(
            &[
                "Net Income From Continuing Operations",
                "Operating Gains Losses",
                "Provisionand Write Offof Assets",
                "Depreciation Amortization Depletion",
                "Deferred Tax",
                "Asset Impairment Charge",
                "Stock Based Compensation",
                "Dividends Received Cfi",
                "Other Non Cash Items",
                "Change In Working Capital",
            ],
            "Cash Flow From Continuing Operating Activities",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &[
                "Capital Expenditure",
                "Net PPE Purchase And Sale",
                "Net Business Purchase And Sale",
                "Net Investment Purchase And Sale",
                "Net Other Investing Changes",
            ],
            "Cash Flow From Continuing Investing Activities",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &[
                "Net Issuance Payments Of Debt",
                "Net Common Stock Issuance",
                "Cash Dividends Paid",
                "Proceeds From Stock Option Exercised",
                "Net Other Financing Charges",
            ],
            "Financing Cash Flow",
            Operator::Add,
            1,
        ),
        HighlightedMetric::distant(
            &[
                "Cash Flow From Continuing Operating Activities",
                "Capital Expenditure",
            ],
            "Free Cash Flow",
            Operator::Subtract,
            2,
        ),
    ]
}
