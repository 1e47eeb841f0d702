//! Stamp duties payable by the buyer on a residential purchase

mod stamp;
mod tables;

pub use stamp::{
    compute_absd, compute_absd_for_code, compute_bsd, compute_duties, compute_tiered_duty,
    dutiable_base, DutyBreakdown,
};
pub use tables::{property_count_bucket, BuyerProfile, DutyTier, BSD_TIERS};
