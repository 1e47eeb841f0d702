//! Stamp duty rate tables and buyer profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// One band of a progressive duty schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyTier {
    /// Width of the band (not a cumulative ceiling)
    pub width: f64,
    /// Marginal rate applied within the band, as a fraction
    pub rate: f64,
}

/// Buyer's Stamp Duty bands, consumed in order.
///
/// Cumulative breakpoints: 180k, 360k, 1M, 1.5M, 3M, then 6% on the rest.
pub const BSD_TIERS: [DutyTier; 6] = [
    DutyTier { width: 180_000.0, rate: 0.01 },
    DutyTier { width: 180_000.0, rate: 0.02 },
    DutyTier { width: 640_000.0, rate: 0.03 },
    DutyTier { width: 500_000.0, rate: 0.04 },
    DutyTier { width: 1_500_000.0, rate: 0.05 },
    DutyTier { width: f64::INFINITY, rate: 0.06 },
];

/// Buyer profile for Additional Buyer's Stamp Duty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuyerProfile {
    /// Singapore Citizen
    SC,
    /// Permanent Resident
    PR,
    Foreigner,
    Entity,
    Trust,
}

impl BuyerProfile {
    pub const ALL: [BuyerProfile; 5] = [
        BuyerProfile::SC,
        BuyerProfile::PR,
        BuyerProfile::Foreigner,
        BuyerProfile::Entity,
        BuyerProfile::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerProfile::SC => "SC",
            BuyerProfile::PR => "PR",
            BuyerProfile::Foreigner => "Foreigner",
            BuyerProfile::Entity => "Entity",
            BuyerProfile::Trust => "Trust",
        }
    }

    /// ABSD rates indexed by existing-property bucket (0, 1, 2+)
    pub fn absd_rates(&self) -> [f64; 3] {
        match self {
            BuyerProfile::SC => [0.00, 0.20, 0.30],
            BuyerProfile::PR => [0.05, 0.30, 0.35],
            BuyerProfile::Foreigner => [0.60, 0.60, 0.60],
            BuyerProfile::Entity => [0.65, 0.65, 0.65],
            BuyerProfile::Trust => [0.65, 0.65, 0.65],
        }
    }
}

impl fmt::Display for BuyerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuyerProfile {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuyerProfile::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CalcError::UnknownBuyerProfile(s.to_string()))
    }
}

/// Map an existing-property count onto the ABSD bucket index
pub fn property_count_bucket(existing_count: u32) -> usize {
    match existing_count {
        0 => 0,
        1 => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bsd_breakpoints() {
        let mut cumulative = 0.0;
        let mut breakpoints = Vec::new();
        for tier in BSD_TIERS.iter().take(5) {
            cumulative += tier.width;
            breakpoints.push(cumulative);
        }
        assert_eq!(breakpoints, vec![180_000.0, 360_000.0, 1_000_000.0, 1_500_000.0, 3_000_000.0]);
        assert!(BSD_TIERS[5].width.is_infinite());
    }

    #[test]
    fn test_profile_parsing() {
        for profile in BuyerProfile::ALL {
            assert_eq!(profile.as_str().parse::<BuyerProfile>().unwrap(), profile);
        }
        assert!("sc".parse::<BuyerProfile>().is_err());
        assert!("Citizen".parse::<BuyerProfile>().is_err());
    }

    #[test]
    fn test_count_bucket() {
        assert_eq!(property_count_bucket(0), 0);
        assert_eq!(property_count_bucket(1), 1);
        assert_eq!(property_count_bucket(2), 2);
        assert_eq!(property_count_bucket(10), 2);
    }
}
