//! Property Calculator - Singapore residential property financing math
//!
//! This library provides:
//! - Level-payment amortization and outstanding balance simulation
//! - Maximum loan eligibility under TDSR/MSR caps at a stress-tested rate
//! - Buyer's Stamp Duty and Additional Buyer's Stamp Duty
//! - Newton-Raphson IRR and a buy-vs-rent cash flow comparison
//! - Scenario runner tying the pieces together for single or batch inputs

pub mod amortization;
pub mod analysis;
pub mod duties;
pub mod eligibility;
pub mod error;
pub mod scenario;

// Re-export commonly used types
pub use amortization::{compute_monthly_payment, compute_remaining_balance, LoanTerms};
pub use analysis::{compute_irr, solve_irr, IrrOptions, IrrSolution};
pub use duties::{compute_absd, compute_absd_for_code, compute_bsd, BuyerProfile};
pub use eligibility::{compute_max_loan, LoanType, PropertyType, RegulatoryLimits};
pub use error::{CalcError, Result};
pub use scenario::{ScenarioInput, ScenarioResult, ScenarioRunner};
