//! Maximum eligible loan under TDSR/MSR caps at a stress-tested rate

use serde::{Deserialize, Serialize};

use super::limits::{LoanType, PropertyType, RegulatoryLimits};
use crate::amortization::{compute_affordable_principal, compute_monthly_payment};

/// Largest loan serviceable under the default regulatory limits.
///
/// `age` and `loan_type` are part of the contract but do not currently
/// change the result.
#[allow(clippy::too_many_arguments)]
pub fn compute_max_loan(
    income: f64,
    debts: f64,
    age: u32,
    tenure_years: u32,
    rate_percent: f64,
    property_type: PropertyType,
    loan_type: LoanType,
) -> f64 {
    compute_max_loan_with(
        &RegulatoryLimits::default(),
        income,
        debts,
        age,
        tenure_years,
        rate_percent,
        property_type,
        loan_type,
    )
}

/// Monthly installment capacity left under both servicing caps
pub fn monthly_capacity(
    limits: &RegulatoryLimits,
    income: f64,
    debts: f64,
    property_type: PropertyType,
) -> (f64, f64, f64) {
    let tdsr_available = (income * limits.tdsr_cap - debts).max(0.0);
    let msr_available = income * limits.msr_cap_for(property_type);
    (tdsr_available, msr_available, tdsr_available.min(msr_available))
}

#[allow(clippy::too_many_arguments)]
pub fn compute_max_loan_with(
    limits: &RegulatoryLimits,
    income: f64,
    debts: f64,
    _age: u32,
    tenure_years: u32,
    rate_percent: f64,
    property_type: PropertyType,
    _loan_type: LoanType,
) -> f64 {
    let (_, _, capacity) = monthly_capacity(limits, income, debts, property_type);
    let stress_rate = limits.stress_rate_percent(rate_percent);
    compute_affordable_principal(capacity, stress_rate, tenure_years)
}

/// Full eligibility picture for one borrower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    /// Installment room left under TDSR after existing debts
    pub tdsr_available: f64,

    /// Installment room under MSR (equal to income when MSR does not apply)
    pub msr_available: f64,

    /// Binding monthly capacity: the lower of the two caps
    pub monthly_capacity: f64,

    pub stress_rate_percent: f64,
    pub max_loan: f64,

    /// Installment on `max_loan` at the quoted (unstressed) rate
    pub monthly_installment: f64,

    /// Longest tenure available when refinancing before the repayment age limit
    pub refinance_tenure_years: u32,
}

#[allow(clippy::too_many_arguments)]
pub fn assess_eligibility(
    limits: &RegulatoryLimits,
    income: f64,
    debts: f64,
    age: u32,
    tenure_years: u32,
    rate_percent: f64,
    property_type: PropertyType,
    loan_type: LoanType,
) -> EligibilityAssessment {
    let (tdsr_available, msr_available, capacity) =
        monthly_capacity(limits, income, debts, property_type);

    let max_loan = compute_max_loan_with(
        limits,
        income,
        debts,
        age,
        tenure_years,
        rate_percent,
        property_type,
        loan_type,
    );

    if max_loan <= 0.0 {
        log::warn!(
            "Servicing caps leave no room for a mortgage (income {:.2}, debts {:.2})",
            income,
            debts
        );
    }

    EligibilityAssessment {
        tdsr_available,
        msr_available,
        monthly_capacity: capacity,
        stress_rate_percent: limits.stress_rate_percent(rate_percent),
        max_loan,
        monthly_installment: compute_monthly_payment(max_loan, rate_percent, tenure_years),
        refinance_tenure_years: limits.max_repayment_age.saturating_sub(age),
    }
}
