//! Return analysis: IRR solver and the buy-vs-rent comparison built on it

mod buy_vs_rent;
mod irr;

pub use buy_vs_rent::{
    buy_cashflows, compare_buy_vs_rent, projected_sale_price, rent_cashflows, BuyVsRentInputs,
    BuyVsRentResult,
};
pub use irr::{compute_irr, compute_irr_with, npv, solve_irr, IrrOptions, IrrSolution};
