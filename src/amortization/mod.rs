//! Amortization engine: level monthly payments and outstanding balances

mod loan;
mod schedule;

pub use loan::{
    compute_affordable_principal, compute_monthly_payment, compute_remaining_balance,
    monthly_rate, LoanTerms,
};
pub use schedule::AmortizationRow;
