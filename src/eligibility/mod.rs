//! Loan eligibility under debt-servicing limits

mod limits;
mod max_loan;

pub use limits::{LoanType, PropertyType, RegulatoryLimits};
pub use max_loan::{
    assess_eligibility, compute_max_loan, compute_max_loan_with, monthly_capacity,
    EligibilityAssessment,
};
