//! Internal Rate of Return (IRR) calculation
//!
//! Used to estimate the annual return on a buy-and-hold cash flow series

use serde::{Deserialize, Serialize};

/// Derivatives smaller than this stop the Newton iteration
const MIN_DERIVATIVE: f64 = 1e-12;

/// Newton-Raphson solver settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrOptions {
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for IrrOptions {
    fn default() -> Self {
        Self {
            initial_guess: 0.08,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Outcome of an IRR solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Periodic rate (e.g. 0.05 for 5% per period)
    pub rate: f64,

    /// Newton steps taken
    pub iterations: u32,

    /// True only when successive estimates agreed within tolerance
    pub converged: bool,
}

/// Calculate the IRR of periodic cash flows with default solver settings.
///
/// The result is a best-effort estimate: a vanishing derivative or an
/// exhausted iteration budget returns the latest rate rather than failing.
/// Use [`solve_irr`] to find out whether the estimate actually converged.
///
/// # Arguments
/// * `cashflows` - One amount per period, index 0 at time zero (positive = inflow)
pub fn compute_irr(cashflows: &[f64]) -> f64 {
    solve_irr(cashflows, &IrrOptions::default()).rate
}

/// Calculate the IRR with explicit guess, tolerance and iteration budget
pub fn compute_irr_with(
    cashflows: &[f64],
    initial_guess: f64,
    tolerance: f64,
    max_iterations: u32,
) -> f64 {
    let options = IrrOptions {
        initial_guess,
        tolerance,
        max_iterations,
    };
    solve_irr(cashflows, &options).rate
}

/// Newton-Raphson IRR that also reports convergence
pub fn solve_irr(cashflows: &[f64], options: &IrrOptions) -> IrrSolution {
    let mut rate = options.initial_guess;

    for iteration in 0..options.max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < MIN_DERIVATIVE {
            log::debug!("IRR derivative vanished at rate {} after {} steps", rate, iteration);
            return IrrSolution {
                rate,
                iterations: iteration,
                converged: false,
            };
        }

        let new_rate = rate - npv / dnpv;

        if (new_rate - rate).abs() < options.tolerance {
            return IrrSolution {
                rate: new_rate,
                iterations: iteration + 1,
                converged: true,
            };
        }

        rate = new_rate;
    }

    log::debug!(
        "IRR did not converge within {} iterations, last estimate {}",
        options.max_iterations,
        rate
    );
    IrrSolution {
        rate,
        iterations: options.max_iterations,
        converged: false,
    }
}

/// Net present value of periodic cash flows at `rate`
pub fn npv(rate: f64, cashflows: &[f64]) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_irr() {
        // Invest 100, receive 110 one period later
        let irr = compute_irr(&[-100.0, 110.0]);
        assert_abs_diff_eq!(irr, 0.10, epsilon = 1e-4);
    }

    #[test]
    fn test_level_cashflows() {
        // Loan of 10000 repaid by 12 payments of 900
        let mut cashflows = vec![10_000.0];
        cashflows.extend(vec![-900.0; 12]);

        let solution = solve_irr(&cashflows, &IrrOptions::default());
        assert!(solution.converged);
        assert_abs_diff_eq!(npv(solution.rate, &cashflows), 0.0, epsilon = 1e-4);
        assert!(solution.rate > 0.0);
    }

    #[test]
    fn test_multi_period_irr() {
        // 1000 invested, 1000 * 1.05^5 returned after five periods
        let mut cashflows = vec![-1_000.0, 0.0, 0.0, 0.0, 0.0];
        cashflows.push(1_000.0 * 1.05_f64.powi(5));
        assert_abs_diff_eq!(compute_irr(&cashflows), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_single_cashflow_returns_guess() {
        let solution = solve_irr(&[-500.0], &IrrOptions::default());
        assert_eq!(solution.rate, 0.08);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 0);

        assert_eq!(compute_irr_with(&[42.0], 0.12, 1e-6, 100), 0.12);
    }

    #[test]
    fn test_exhausted_budget_returns_estimate() {
        let cashflows = [-100.0, 30.0, 40.0, 50.0];
        let one_step = solve_irr(
            &cashflows,
            &IrrOptions {
                max_iterations: 1,
                ..IrrOptions::default()
            },
        );
        assert!(!one_step.converged);
        assert_eq!(one_step.iterations, 1);
        assert!(one_step.rate.is_finite());
        assert_ne!(one_step.rate, 0.08);

        let full = solve_irr(&cashflows, &IrrOptions::default());
        assert!(full.converged);
        assert_abs_diff_eq!(npv(full.rate, &cashflows), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_npv_at_zero_rate_is_sum() {
        assert_abs_diff_eq!(npv(0.0, &[-100.0, 30.0, 80.0]), 10.0, epsilon = 1e-12);
    }
}
