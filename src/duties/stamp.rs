//! Buyer's Stamp Duty and Additional Buyer's Stamp Duty

use serde::{Deserialize, Serialize};

use super::tables::{property_count_bucket, BuyerProfile, DutyTier, BSD_TIERS};

/// Apply a progressive tier table to `amount`
pub fn compute_tiered_duty(amount: f64, tiers: &[DutyTier]) -> f64 {
    let mut duty = 0.0;
    let mut remaining = amount;

    for tier in tiers {
        let take = remaining.min(tier.width);
        duty += take * tier.rate;
        remaining -= take;
        if remaining <= 0.0 {
            break;
        }
    }

    duty
}

/// Buyer's Stamp Duty on the dutiable amount
pub fn compute_bsd(amount: f64) -> f64 {
    compute_tiered_duty(amount, &BSD_TIERS)
}

/// Additional Buyer's Stamp Duty: a flat rate keyed by profile and
/// existing-property bucket (any count of two or more shares one rate)
pub fn compute_absd(amount: f64, profile: BuyerProfile, existing_count: u32) -> f64 {
    amount * profile.absd_rates()[property_count_bucket(existing_count)]
}

/// ABSD for a profile given by its code; unrecognized codes attract no duty
pub fn compute_absd_for_code(amount: f64, profile_code: &str, existing_count: u32) -> f64 {
    match profile_code.parse::<BuyerProfile>() {
        Ok(profile) => compute_absd(amount, profile, existing_count),
        Err(_) => {
            log::warn!("No ABSD rates for buyer profile {:?}, assessing zero", profile_code);
            0.0
        }
    }
}

/// Amount duties are assessed on: the higher of price and valuation when
/// `use_higher` is set, otherwise the purchase price
pub fn dutiable_base(price: f64, valuation: f64, use_higher: bool) -> f64 {
    if use_higher {
        price.max(valuation)
    } else {
        price
    }
}

/// Combined duty assessment for one purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutyBreakdown {
    pub dutiable_base: f64,
    pub bsd: f64,
    pub absd: f64,
    pub total: f64,
}

pub fn compute_duties(
    price: f64,
    valuation: f64,
    use_higher: bool,
    profile: BuyerProfile,
    existing_count: u32,
) -> DutyBreakdown {
    let base = dutiable_base(price, valuation, use_higher);
    let bsd = compute_bsd(base);
    let absd = compute_absd(base, profile, existing_count);

    DutyBreakdown {
        dutiable_base: base,
        bsd,
        absd,
        total: bsd + absd,
    }
}
