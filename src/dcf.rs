//! Discounted cash flow projection: compounds a base cash flow forward,
//! appends a perpetuity-growth terminal value, discounts everything back to
//! present value and nets out debt to reach an intrinsic per-share value.

use crate::error::{Result, StatementMetricsError};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DcfInputs {
    #[schemars(description = "Base (most recent) annual free cash flow")]
    pub cash_flow: f64,

    #[schemars(description = "Total debt, subtracted from the discounted enterprise value")]
    pub total_debt: f64,

    #[schemars(description = "Shares outstanding; zero yields a 0 intrinsic value")]
    pub shares_outstanding: f64,

    #[schemars(description = "Projection horizon in whole years")]
    pub future_years: u32,

    #[schemars(description = "Per-year discount rate as a fraction (0.10 = 10%)")]
    pub discount_rate: f64,

    #[schemars(description = "Per-year cash flow growth rate as a fraction")]
    pub growth_rate: f64,

    #[schemars(description = "Perpetuity growth rate for the terminal value; must differ from the discount rate")]
    pub terminal_growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DcfValuation {
    #[schemars(description = "Intrinsic value per share")]
    pub intrinsic_value: f64,

    #[schemars(
        description = "Percentage deviation of the intrinsic value from the supplied market price (margin of safety); 0 when no price was supplied"
    )]
    pub safety_margin: f64,
}

/// Projects `inputs.cash_flow` forward year over year, values the tail as a
/// growing perpetuity, and discounts everything (terminal value included) at
/// the final-year exponent back to present value.
///
/// Errors with [`StatementMetricsError::InvalidProjectionParameters`] when
/// the discount rate equals the terminal growth rate, since the perpetuity
/// denominator degenerates to zero and no finite value exists.
pub fn project(inputs: &DcfInputs, current_price: f64) -> Result<DcfValuation> {
    if inputs.discount_rate == inputs.terminal_growth_rate {
        return Err(StatementMetricsError::InvalidProjectionParameters {
            discount_rate: inputs.discount_rate,
            terminal_growth_rate: inputs.terminal_growth_rate,
        });
    }

    if inputs.shares_outstanding == 0.0 {
        debug!("DCF projection with zero shares outstanding, returning 0");
        return Ok(DcfValuation {
            intrinsic_value: 0.0,
            safety_margin: safety_margin(0.0, current_price),
        });
    }

    let mut projected = Vec::with_capacity(inputs.future_years as usize + 1);
    let mut cash_flow = inputs.cash_flow;
    for _ in 0..inputs.future_years {
        cash_flow *= 1.0 + inputs.growth_rate;
        projected.push(cash_flow);
    }

    let terminal_value = match projected.last() {
        Some(last_year) => {
            last_year * (1.0 + inputs.terminal_growth_rate)
                / (inputs.discount_rate - inputs.terminal_growth_rate)
        }
        // Zero-year horizon: the perpetuity starts from the base cash flow
        None => {
            inputs.cash_flow * (1.0 + inputs.terminal_growth_rate)
                / (inputs.discount_rate - inputs.terminal_growth_rate)
        }
    };

    let final_year = inputs.future_years.max(1);
    let mut present_value = 0.0;
    for (index, cash_flow) in projected.iter().enumerate() {
        present_value += cash_flow / (1.0 + inputs.discount_rate).powi(index as i32 + 1);
    }
    present_value += terminal_value / (1.0 + inputs.discount_rate).powi(final_year as i32);

    let equity_value = present_value - inputs.total_debt;
    let intrinsic_value = equity_value / inputs.shares_outstanding;

    Ok(DcfValuation {
        intrinsic_value,
        safety_margin: safety_margin(intrinsic_value, current_price),
    })
}

fn safety_margin(intrinsic_value: f64, current_price: f64) -> f64 {
    if current_price == 0.0 {
        return 0.0;
    }
    ((intrinsic_value - current_price) / current_price) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> DcfInputs {
        DcfInputs {
            cash_flow: 1000.0,
            total_debt: 100.0,
            shares_outstanding: 100.0,
            future_years: 2,
            discount_rate: 0.10,
            growth_rate: 0.10,
            terminal_growth_rate: 0.02,
        }
    }

    #[test]
    fn test_two_year_projection_pinned() {
        // Year 1 = 1100, year 2 = 1210
        // Terminal value = 1210 * 1.02 / 0.08 = 15427.5
        // PV = 1100/1.1 + 1210/1.1^2 + 15427.5/1.1^2
        //    = 1000 + 1000 + 12750.413223140496
        // Intrinsic = (14750.413223140496 - 100) / 100
        let valuation = project(&inputs(), 0.0).unwrap();
        assert!((valuation.intrinsic_value - 146.50413223140497).abs() < 1e-9);
        assert_eq!(valuation.safety_margin, 0.0);
    }

    #[test]
    fn test_safety_margin_against_market_price() {
        let valuation = project(&inputs(), 100.0).unwrap();
        assert!((valuation.safety_margin - 46.50413223140497).abs() < 1e-9);
    }

    #[test]
    fn test_equal_rates_is_a_domain_error() {
        let mut bad = inputs();
        bad.terminal_growth_rate = bad.discount_rate;
        let err = project(&bad, 100.0).unwrap_err();
        assert!(matches!(
            err,
            StatementMetricsError::InvalidProjectionParameters { .. }
        ));
    }

    #[test]
    fn test_zero_shares_outstanding_is_a_sentinel() {
        let mut degenerate = inputs();
        degenerate.shares_outstanding = 0.0;
        let valuation = project(&degenerate, 100.0).unwrap();
        assert_eq!(valuation.intrinsic_value, 0.0);
        assert_eq!(valuation.safety_margin, -100.0);
    }

    #[test]
    fn test_zero_year_horizon_values_the_perpetuity_directly() {
        let mut immediate = inputs();
        immediate.future_years = 0;
        // Terminal value = 1000 * 1.02 / 0.08 = 12750, discounted one year
        let valuation = project(&immediate, 0.0).unwrap();
        let expected = (12750.0 / 1.1 - 100.0) / 100.0;
        assert!((valuation.intrinsic_value - expected).abs() < 1e-9);
    }
}
