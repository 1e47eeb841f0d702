//! Amortization schedule output rows

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-indexed month of the loan
    pub month: u32,

    pub opening_balance: f64,
    pub payment: f64,

    /// Interest accrued on the opening balance this month
    pub interest: f64,

    /// Principal actually retired (smaller than payment - interest in the final month)
    pub principal: f64,

    pub closing_balance: f64,
}

impl AmortizationRow {
    /// Share of this month's payment that went to interest
    pub fn interest_share(&self) -> f64 {
        if self.payment > 0.0 {
            self.interest / self.payment
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_share() {
        let row = AmortizationRow {
            month: 1,
            opening_balance: 100_000.0,
            payment: 1_000.0,
            interest: 250.0,
            principal: 750.0,
            closing_balance: 99_250.0,
        };
        assert_eq!(row.interest_share(), 0.25);

        let empty = AmortizationRow { payment: 0.0, ..row };
        assert_eq!(empty.interest_share(), 0.0);
    }
}
