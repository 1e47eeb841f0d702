//! Scenario runner: sequences eligibility, duties and buy-vs-rent for one input
//!
//! Holds the regulatory limits and solver settings once, then runs any number
//! of inputs against them.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::input::ScenarioInput;
use crate::analysis::{compare_buy_vs_rent, BuyVsRentInputs, BuyVsRentResult, IrrOptions};
use crate::duties::{compute_duties, DutyBreakdown};
use crate::eligibility::{assess_eligibility, EligibilityAssessment, RegulatoryLimits};

/// Outputs of one full calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub eligibility: EligibilityAssessment,
    pub duties: DutyBreakdown,
    pub buy_vs_rent: BuyVsRentResult,
}

/// Flat one-line view of a result, suitable for CSV output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub max_loan: f64,
    pub monthly_installment: f64,
    pub refinance_tenure_years: u32,
    pub dutiable_base: f64,
    pub bsd: f64,
    pub absd: f64,
    pub total_duties: f64,
    pub down_payment: f64,
    pub sale_price: f64,
    pub buy_irr: f64,
    pub buy_irr_converged: bool,
    pub annual_rent_cost: f64,
}

impl ScenarioResult {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            max_loan: self.eligibility.max_loan,
            monthly_installment: self.eligibility.monthly_installment,
            refinance_tenure_years: self.eligibility.refinance_tenure_years,
            dutiable_base: self.duties.dutiable_base,
            bsd: self.duties.bsd,
            absd: self.duties.absd,
            total_duties: self.duties.total,
            down_payment: self.buy_vs_rent.down_payment,
            sale_price: self.buy_vs_rent.sale_price,
            buy_irr: self.buy_vs_rent.buy_irr,
            buy_irr_converged: self.buy_vs_rent.buy_irr_converged,
            annual_rent_cost: self.buy_vs_rent.annual_rent_cost,
        }
    }
}

/// Runs property calculations against a fixed set of limits
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [2.5, 3.5, 4.5] {
///     let input = ScenarioInput { interest_rate_percent: rate, ..ScenarioInput::default() };
///     let result = runner.run(&input);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    limits: RegulatoryLimits,
    irr_options: IrrOptions,
}

impl ScenarioRunner {
    /// Create runner with the current regulatory limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with custom limits (e.g. a different stress buffer)
    pub fn with_limits(limits: RegulatoryLimits) -> Self {
        Self {
            limits,
            irr_options: IrrOptions::default(),
        }
    }

    pub fn with_irr_options(mut self, irr_options: IrrOptions) -> Self {
        self.irr_options = irr_options;
        self
    }

    /// Run one calculation: max loan, installment, duties, then buy-vs-rent
    pub fn run(&self, input: &ScenarioInput) -> ScenarioResult {
        let eligibility = assess_eligibility(
            &self.limits,
            input.monthly_income,
            input.monthly_debts,
            input.age,
            input.tenure_years,
            input.interest_rate_percent,
            input.property_type,
            input.loan_type,
        );
        log::debug!(
            "Max loan {:.2}, installment {:.2}",
            eligibility.max_loan,
            eligibility.monthly_installment
        );

        let duties = compute_duties(
            input.purchase_price,
            input.valuation,
            input.use_higher_of_price_and_valuation,
            input.buyer_profile,
            input.existing_properties,
        );
        log::debug!("BSD {:.2}, ABSD {:.2}", duties.bsd, duties.absd);

        let buy_vs_rent = compare_buy_vs_rent(
            &BuyVsRentInputs {
                purchase_price: input.purchase_price,
                loan_amount: eligibility.max_loan,
                monthly_installment: eligibility.monthly_installment,
                bsd: duties.bsd,
                absd: duties.absd,
                monthly_rent: input.monthly_rent,
                holding_years: input.holding_years,
                price_growth_percent: input.price_growth_percent,
                agent_fee_percent: input.agent_fee_percent,
            },
            &self.irr_options,
        );

        ScenarioResult {
            eligibility,
            duties,
            buy_vs_rent,
        }
    }

    /// Run many inputs in parallel, preserving input order
    pub fn run_batch(&self, inputs: &[ScenarioInput]) -> Vec<ScenarioResult> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    pub fn limits(&self) -> &RegulatoryLimits {
        &self.limits
    }

    pub fn limits_mut(&mut self) -> &mut RegulatoryLimits {
        &mut self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute_monthly_payment;
    use crate::duties::{compute_bsd, BuyerProfile};
    use crate::eligibility::{compute_max_loan, LoanType, PropertyType};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_scenario() {
        let input = ScenarioInput::default();
        let result = ScenarioRunner::new().run(&input);

        let max_loan = compute_max_loan(12_000.0, 0.0, 35, 30, 3.5, PropertyType::Private, LoanType::Bank);
        assert_relative_eq!(result.eligibility.max_loan, max_loan, max_relative = 1e-12);
        assert_relative_eq!(
            result.eligibility.monthly_installment,
            compute_monthly_payment(max_loan, 3.5, 30),
            max_relative = 1e-12
        );

        assert_abs_diff_eq!(result.duties.bsd, compute_bsd(1_800_000.0), epsilon = 1e-9);
        assert_eq!(result.duties.absd, 0.0);

        let bvr = &result.buy_vs_rent;
        assert_eq!(bvr.buy_cashflows.len(), 11);
        assert_eq!(bvr.rent_cashflows.len(), 10);
        assert_abs_diff_eq!(bvr.down_payment, 1_800_000.0 - max_loan, epsilon = 1e-6);
        assert_abs_diff_eq!(
            bvr.buy_cashflows[0],
            -(1_800_000.0 - max_loan) - result.duties.bsd,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(bvr.annual_rent_cost, 54_000.0);
        assert!(bvr.buy_irr.is_finite());
    }

    #[test]
    fn test_valuation_drives_duties() {
        let input = ScenarioInput {
            buyer_profile: BuyerProfile::PR,
            purchase_price: 1_000_000.0,
            valuation: 1_100_000.0,
            ..ScenarioInput::default()
        };
        let result = ScenarioRunner::new().run(&input);
        assert_eq!(result.duties.dutiable_base, 1_100_000.0);
        assert_abs_diff_eq!(result.duties.absd, 55_000.0, epsilon = 1e-6);

        // Down payment still measured against the purchase price
        assert_abs_diff_eq!(
            result.buy_vs_rent.down_payment,
            1_000_000.0 - result.eligibility.max_loan,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_custom_limits() {
        let mut runner = ScenarioRunner::new();
        let baseline = runner.run(&ScenarioInput::default()).eligibility.max_loan;

        runner.limits_mut().stress_buffer_percent = 1.0;
        let relaxed = runner.run(&ScenarioInput::default()).eligibility.max_loan;
        assert!(relaxed > baseline);
        assert_eq!(runner.limits().stress_buffer_percent, 1.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = [6_000.0, 12_000.0, 24_000.0]
            .iter()
            .map(|&income| ScenarioInput {
                monthly_income: income,
                ..ScenarioInput::default()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert!(results[0].eligibility.max_loan < results[1].eligibility.max_loan);
        assert!(results[1].eligibility.max_loan < results[2].eligibility.max_loan);
    }

    #[test]
    fn test_summary_flattens_result() {
        let result = ScenarioRunner::new().run(&ScenarioInput::default());
        let summary = result.summary();
        assert_eq!(summary.max_loan, result.eligibility.max_loan);
        assert_eq!(summary.total_duties, result.duties.total);
        assert_eq!(summary.buy_irr, result.buy_vs_rent.buy_irr);
        assert_eq!(summary.refinance_tenure_years, 40);
    }
}
