//! Level-payment annuity math on monthly compounding

use serde::{Deserialize, Serialize};

use super::schedule::AmortizationRow;

/// Convert an annual percentage rate (e.g. 3.5) to a monthly fractional rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Level monthly installment that fully amortizes `principal` over `years`.
///
/// Returns 0 when there is nothing to amortize (non-positive principal or a
/// zero tenure). A zero interest rate falls back to straight-line repayment.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    if principal <= 0.0 || years == 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_percent);
    let n = years * 12;

    if r == 0.0 {
        return principal / n as f64;
    }

    let growth = (1.0 + r).powi(n as i32);
    principal * r * growth / (growth - 1.0)
}

/// Largest principal a level `payment` can amortize over `years`.
///
/// Inverse of [`compute_monthly_payment`]: present value of a monthly
/// annuity-immediate at the given annual rate.
pub fn compute_affordable_principal(payment: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    let n = years * 12;

    if r == 0.0 {
        return payment * n as f64;
    }

    let growth = (1.0 + r).powi(n as i32);
    payment * (growth - 1.0) / (r * growth)
}

/// Outstanding principal after `months_elapsed` level payments.
///
/// Steps the loan forward one month at a time; the balance is floored at 0
/// so running past the natural term never goes negative.
pub fn compute_remaining_balance(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
    months_elapsed: u32,
) -> f64 {
    let payment = compute_monthly_payment(principal, annual_rate_percent, years);
    let r = monthly_rate(annual_rate_percent);

    let mut balance = principal;
    for _ in 0..months_elapsed {
        let interest = balance * r;
        let principal_paid = payment - interest;
        balance = (balance - principal_paid).max(0.0);
    }
    balance
}

/// Terms of a single mortgage calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Quoted annual rate in percent (3.5 = 3.5% p.a.)
    pub annual_rate_percent: f64,

    /// Loan tenure in whole years
    pub tenure_years: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// Number of monthly installments over the natural term
    pub fn term_months(&self) -> u32 {
        self.tenure_years * 12
    }

    pub fn monthly_payment(&self) -> f64 {
        compute_monthly_payment(self.principal, self.annual_rate_percent, self.tenure_years)
    }

    pub fn remaining_balance(&self, months_elapsed: u32) -> f64 {
        compute_remaining_balance(
            self.principal,
            self.annual_rate_percent,
            self.tenure_years,
            months_elapsed,
        )
    }

    /// Month-by-month breakdown over the natural term.
    ///
    /// Uses the same step rule as [`compute_remaining_balance`], so the
    /// closing balance of row `m` equals `remaining_balance(m)`.
    pub fn schedule(&self) -> Vec<AmortizationRow> {
        let payment = self.monthly_payment();
        let r = monthly_rate(self.annual_rate_percent);

        let mut rows = Vec::with_capacity(self.term_months() as usize);
        let mut balance = self.principal.max(0.0);

        for month in 1..=self.term_months() {
            let interest = balance * r;
            let closing = (balance - (payment - interest)).max(0.0);
            rows.push(AmortizationRow {
                month,
                opening_balance: balance,
                payment,
                interest,
                principal: balance - closing,
                closing_balance: closing,
            });
            balance = closing;
        }

        rows
    }

    /// Total interest paid over the natural term
    pub fn total_interest(&self) -> f64 {
        self.schedule().iter().map(|row| row.interest).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_payment_guards() {
        assert_eq!(compute_monthly_payment(0.0, 3.5, 30), 0.0);
        assert_eq!(compute_monthly_payment(-10_000.0, 3.5, 30), 0.0);
        assert_eq!(compute_monthly_payment(500_000.0, 3.5, 0), 0.0);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let pmt = compute_monthly_payment(120_000.0, 0.0, 10);
        assert_abs_diff_eq!(pmt, 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_payment() {
        // 1M over 30 years at 3.5%: textbook installment ~4490.45
        let pmt = compute_monthly_payment(1_000_000.0, 3.5, 30);
        assert_abs_diff_eq!(pmt, 4_490.45, epsilon = 0.01);

        let r: f64 = 3.5 / 1200.0;
        let g = (1.0 + r).powi(360);
        assert_relative_eq!(pmt, 1_000_000.0 * r * g / (g - 1.0), max_relative = 1e-12);
    }

    #[test]
    fn test_affordable_principal_inverts_payment() {
        let pmt = compute_monthly_payment(850_000.0, 4.2, 25);
        assert_relative_eq!(compute_affordable_principal(pmt, 4.2, 25), 850_000.0, max_relative = 1e-10);

        assert_abs_diff_eq!(compute_affordable_principal(1_000.0, 0.0, 10), 120_000.0);
        assert_eq!(compute_affordable_principal(1_000.0, 3.0, 0), 0.0);
    }

    #[test]
    fn test_balance_fully_amortizes() {
        for &(principal, rate, years) in &[
            (1_000_000.0, 3.5, 30),
            (250_000.0, 0.0, 5),
            (800_000.0, 6.5, 25),
            (50_000.0, 12.0, 1),
        ] {
            let pmt = compute_monthly_payment(principal, rate, years);
            assert!(pmt > 0.0);

            let balance = compute_remaining_balance(principal, rate, years, years * 12);
            assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_balance_non_increasing_and_non_negative() {
        let mut previous = f64::MAX;
        for months in 0..=400 {
            let balance = compute_remaining_balance(600_000.0, 4.0, 30, months);
            assert!(balance >= 0.0);
            assert!(balance <= previous + 1e-9);
            previous = balance;
        }

        // Past the natural term stays pinned at zero
        assert_eq!(compute_remaining_balance(600_000.0, 4.0, 30, 500), 0.0);
    }

    #[test]
    fn test_zero_months_returns_principal() {
        assert_eq!(compute_remaining_balance(750_000.0, 3.0, 25, 0), 750_000.0);
    }

    #[test]
    fn test_schedule_matches_balance_simulation() {
        let terms = LoanTerms::new(400_000.0, 2.8, 20);
        let schedule = terms.schedule();

        assert_eq!(schedule.len(), 240);
        assert_eq!(schedule[0].month, 1);
        assert_abs_diff_eq!(schedule[0].opening_balance, 400_000.0);
        assert_abs_diff_eq!(schedule[0].interest, 400_000.0 * 2.8 / 1200.0, epsilon = 1e-9);

        for &m in &[1u32, 12, 60, 239] {
            let row = &schedule[(m - 1) as usize];
            assert_relative_eq!(row.closing_balance, terms.remaining_balance(m), max_relative = 1e-12);
        }

        assert_abs_diff_eq!(schedule[239].closing_balance, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_total_interest() {
        let terms = LoanTerms::new(100_000.0, 0.0, 10);
        assert_abs_diff_eq!(terms.total_interest(), 0.0);

        let terms = LoanTerms::new(100_000.0, 5.0, 10);
        let expected = terms.monthly_payment() * 120.0 - 100_000.0;
        assert_abs_diff_eq!(terms.total_interest(), expected, epsilon = 1e-3);
    }
}
