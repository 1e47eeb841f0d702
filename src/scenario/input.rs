//! Caller-supplied inputs for one full property calculation

use serde::{Deserialize, Serialize};

use crate::duties::BuyerProfile;
use crate::eligibility::{LoanType, PropertyType};

fn default_buyer_profile() -> BuyerProfile { BuyerProfile::SC }
fn default_property_type() -> PropertyType { PropertyType::Private }
fn default_loan_type() -> LoanType { LoanType::Bank }
fn default_monthly_income() -> f64 { 12_000.0 }
fn default_age() -> u32 { 35 }
fn default_tenure_years() -> u32 { 30 }
fn default_interest_rate() -> f64 { 3.5 }
fn default_price() -> f64 { 1_800_000.0 }
fn default_true() -> bool { true }
fn default_monthly_rent() -> f64 { 4_500.0 }
fn default_holding_years() -> u32 { 10 }
fn default_price_growth() -> f64 { 2.0 }
fn default_agent_fee() -> f64 { 2.0 }

/// Every input needed for eligibility, duties and buy-vs-rent.
///
/// Numeric ranges are validated by the caller; missing fields in JSON
/// input fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    #[serde(default = "default_buyer_profile")]
    pub buyer_profile: BuyerProfile,

    #[serde(default = "default_property_type")]
    pub property_type: PropertyType,

    /// Accepted for future rules; does not change eligibility today
    #[serde(default = "default_loan_type")]
    pub loan_type: LoanType,

    /// Gross monthly income (default: 12,000)
    #[serde(default = "default_monthly_income")]
    pub monthly_income: f64,

    /// Existing monthly debt obligations
    #[serde(default)]
    pub monthly_debts: f64,

    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default = "default_tenure_years")]
    pub tenure_years: u32,

    /// Quoted interest rate in percent p.a. (default: 3.5)
    #[serde(default = "default_interest_rate")]
    pub interest_rate_percent: f64,

    #[serde(default = "default_price")]
    pub purchase_price: f64,

    #[serde(default = "default_price")]
    pub valuation: f64,

    /// Assess duties on the higher of price and valuation
    #[serde(default = "default_true")]
    pub use_higher_of_price_and_valuation: bool,

    /// Residential properties already owned
    #[serde(default)]
    pub existing_properties: u32,

    #[serde(default = "default_monthly_rent")]
    pub monthly_rent: f64,

    #[serde(default = "default_holding_years")]
    pub holding_years: u32,

    /// Annual price growth in percent (default: 2.0)
    #[serde(default = "default_price_growth")]
    pub price_growth_percent: f64,

    /// Agent fee on sale in percent (default: 2.0)
    #[serde(default = "default_agent_fee")]
    pub agent_fee_percent: f64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            buyer_profile: default_buyer_profile(),
            property_type: default_property_type(),
            loan_type: default_loan_type(),
            monthly_income: default_monthly_income(),
            monthly_debts: 0.0,
            age: default_age(),
            tenure_years: default_tenure_years(),
            interest_rate_percent: default_interest_rate(),
            purchase_price: default_price(),
            valuation: default_price(),
            use_higher_of_price_and_valuation: default_true(),
            existing_properties: 0,
            monthly_rent: default_monthly_rent(),
            holding_years: default_holding_years(),
            price_growth_percent: default_price_growth(),
            agent_fee_percent: default_agent_fee(),
        }
    }
}
