//! Buy-vs-rent comparison over a holding period
//!
//! Builds the annual cash flow series of buying with the eligible loan,
//! selling at the end of the holding period, and the series of renting instead.

use serde::{Deserialize, Serialize};

use super::irr::{solve_irr, IrrOptions};

/// Inputs for one buy-vs-rent comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuyVsRentInputs {
    pub purchase_price: f64,
    pub loan_amount: f64,
    pub monthly_installment: f64,
    pub bsd: f64,
    pub absd: f64,
    pub monthly_rent: f64,
    pub holding_years: u32,

    /// Annual price growth in percent (may be negative)
    pub price_growth_percent: f64,

    /// Agent fee on sale in percent of the sale price
    pub agent_fee_percent: f64,
}

/// Result of a buy-vs-rent comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyVsRentResult {
    pub sale_price: f64,
    pub sale_cost: f64,
    pub down_payment: f64,
    pub annual_installment: f64,

    /// Annual buy cash flows, index 0 at purchase
    pub buy_cashflows: Vec<f64>,

    /// Annual rent cash flows over the holding period
    pub rent_cashflows: Vec<f64>,

    /// Annual IRR of the buy cash flows
    pub buy_irr: f64,
    pub buy_irr_converged: bool,

    pub annual_rent_cost: f64,
    pub total_rent_cost: f64,
}

/// Projected sale price after compounding annual growth over the holding period
pub fn projected_sale_price(price: f64, growth_percent: f64, years: u32) -> f64 {
    price * (1.0 + growth_percent / 100.0).powi(years as i32)
}

/// Annual cash flows of buying: upfront equity and duties, one installment
/// year per period, with net sale proceeds landing in the final year
pub fn buy_cashflows(inputs: &BuyVsRentInputs) -> Vec<f64> {
    let sale_price = projected_sale_price(
        inputs.purchase_price,
        inputs.price_growth_percent,
        inputs.holding_years,
    );
    let sale_cost = sale_price * inputs.agent_fee_percent / 100.0;
    let down_payment = inputs.purchase_price - inputs.loan_amount;
    let annual_installment = inputs.monthly_installment * 12.0;

    let mut cashflows = Vec::with_capacity(inputs.holding_years as usize + 1);
    cashflows.push(-down_payment - inputs.bsd - inputs.absd);
    for _ in 0..inputs.holding_years.saturating_sub(1) {
        cashflows.push(-annual_installment);
    }
    cashflows.push(-annual_installment + (sale_price - sale_cost));
    cashflows
}

/// Annual rent outflows over the holding period
pub fn rent_cashflows(monthly_rent: f64, holding_years: u32) -> Vec<f64> {
    vec![-(monthly_rent * 12.0); holding_years as usize]
}

pub fn compare_buy_vs_rent(inputs: &BuyVsRentInputs, irr_options: &IrrOptions) -> BuyVsRentResult {
    let sale_price = projected_sale_price(
        inputs.purchase_price,
        inputs.price_growth_percent,
        inputs.holding_years,
    );
    let buy = buy_cashflows(inputs);
    let rent = rent_cashflows(inputs.monthly_rent, inputs.holding_years);
    let irr = solve_irr(&buy, irr_options);

    if !irr.converged {
        log::debug!("Buy IRR is an unconverged estimate: {}", irr.rate);
    }

    BuyVsRentResult {
        sale_price,
        sale_cost: sale_price * inputs.agent_fee_percent / 100.0,
        down_payment: inputs.purchase_price - inputs.loan_amount,
        annual_installment: inputs.monthly_installment * 12.0,
        buy_irr: irr.rate,
        buy_irr_converged: irr.converged,
        annual_rent_cost: inputs.monthly_rent * 12.0,
        total_rent_cost: -rent.iter().sum::<f64>(),
        buy_cashflows: buy,
        rent_cashflows: rent,
    }
}
