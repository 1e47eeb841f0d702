//! Regulatory servicing limits and the property/loan classifications they key on

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Class of residential property being financed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    /// Public housing flat
    HDB,
    /// Executive condominium
    EC,
    Private,
}

impl PropertyType {
    /// Whether the Mortgage Servicing Ratio cap applies
    pub fn msr_applies(&self) -> bool {
        matches!(self, PropertyType::HDB | PropertyType::EC)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::HDB => "HDB",
            PropertyType::EC => "EC",
            PropertyType::Private => "Private",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HDB" => Ok(PropertyType::HDB),
            "EC" => Ok(PropertyType::EC),
            "Private" => Ok(PropertyType::Private),
            other => Err(CalcError::UnknownPropertyType(other.to_string())),
        }
    }
}

/// Source of the housing loan. Carried through eligibility but does not
/// yet change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Bank,
    HDB,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Bank => "Bank",
            LoanType::HDB => "HDB",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bank" => Ok(LoanType::Bank),
            "HDB" => Ok(LoanType::HDB),
            other => Err(CalcError::UnknownLoanType(other.to_string())),
        }
    }
}

/// Debt-servicing caps and stress buffer used to size the maximum loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryLimits {
    /// Total Debt Servicing Ratio: share of income available for all debt
    pub tdsr_cap: f64,

    /// Mortgage Servicing Ratio: share of income for the mortgage (HDB/EC only)
    pub msr_cap: f64,

    /// Percentage points added to the quoted rate when sizing the loan
    pub stress_buffer_percent: f64,

    /// Age by which a refinanced loan must be fully repaid
    pub max_repayment_age: u32,
}

impl Default for RegulatoryLimits {
    fn default() -> Self {
        Self {
            tdsr_cap: 0.55,
            msr_cap: 0.30,
            stress_buffer_percent: 3.0,
            max_repayment_age: 75,
        }
    }
}

impl RegulatoryLimits {
    /// MSR cap for a property type; Private is bounded by TDSR alone
    pub fn msr_cap_for(&self, property_type: PropertyType) -> f64 {
        if property_type.msr_applies() {
            self.msr_cap
        } else {
            1.0
        }
    }

    pub fn stress_rate_percent(&self, quoted_rate_percent: f64) -> f64 {
        quoted_rate_percent + self.stress_buffer_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = RegulatoryLimits::default();
        assert_eq!(limits.tdsr_cap, 0.55);
        assert_eq!(limits.msr_cap_for(PropertyType::HDB), 0.30);
        assert_eq!(limits.msr_cap_for(PropertyType::EC), 0.30);
        assert_eq!(limits.msr_cap_for(PropertyType::Private), 1.0);
        assert_eq!(limits.stress_rate_percent(3.5), 6.5);
    }

    #[test]
    fn test_type_parsing() {
        assert_eq!("EC".parse::<PropertyType>().unwrap(), PropertyType::EC);
        assert_eq!("Private".parse::<PropertyType>().unwrap(), PropertyType::Private);
        assert!("Condo".parse::<PropertyType>().is_err());

        assert_eq!("HDB".parse::<LoanType>().unwrap(), LoanType::HDB);
        assert!("Cash".parse::<LoanType>().is_err());
    }
}
