//! Property Calculator CLI
//!
//! Command-line front-end for loan eligibility, stamp duties and buy-vs-rent

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use property_calculator::{
    amortization::LoanTerms,
    analysis::BuyVsRentResult,
    duties::{compute_duties, BuyerProfile, DutyBreakdown},
    eligibility::{assess_eligibility, EligibilityAssessment, LoanType, PropertyType, RegulatoryLimits},
    scenario::{load_scenario_json, ScenarioInput, ScenarioResult, ScenarioRunner},
};

#[derive(Parser)]
#[command(name = "property-calc", version, about = "Singapore property calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Maximum loan under TDSR/MSR and the resulting installment
    Eligibility(BorrowerArgs),
    /// Buyer's and Additional Buyer's Stamp Duty
    Duties(PurchaseArgs),
    /// Buy-vs-rent cash flows and buy IRR
    BuyVsRent(ScenarioArgs),
    /// Monthly amortization schedule as CSV
    Schedule(ScheduleArgs),
    /// Full calculation: eligibility, duties and buy-vs-rent
    Scenario {
        /// Read inputs from a JSON file instead of flags
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        args: ScenarioArgs,
    },
}

#[derive(Args, Clone)]
struct BorrowerArgs {
    #[arg(long, default_value = "Private")]
    property_type: PropertyType,

    #[arg(long, default_value = "Bank")]
    loan_type: LoanType,

    /// Gross monthly income
    #[arg(long, default_value_t = 12_000.0)]
    income: f64,

    /// Monthly debt obligations
    #[arg(long, default_value_t = 0.0)]
    debts: f64,

    #[arg(long, default_value_t = 35)]
    age: u32,

    /// Tenure in years
    #[arg(long, default_value_t = 30)]
    tenure: u32,

    /// Interest rate in percent p.a.
    #[arg(long, default_value_t = 3.5)]
    rate: f64,
}

#[derive(Args, Clone)]
struct PurchaseArgs {
    #[arg(long, default_value = "SC")]
    profile: BuyerProfile,

    /// Purchase price
    #[arg(long, default_value_t = 1_800_000.0)]
    price: f64,

    /// Market valuation (defaults to the purchase price)
    #[arg(long)]
    valuation: Option<f64>,

    /// Assess duties on the purchase price even when the valuation is higher
    #[arg(long)]
    price_only: bool,

    /// Residential properties already owned
    #[arg(long, default_value_t = 0)]
    existing: u32,
}

#[derive(Args, Clone)]
struct RentArgs {
    /// Monthly rent
    #[arg(long, default_value_t = 4_500.0)]
    rent: f64,

    /// Holding period in years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Annual price growth in percent
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    growth: f64,

    /// Agent fee on sale in percent
    #[arg(long, default_value_t = 2.0)]
    agent_fee: f64,
}

#[derive(Args, Clone)]
struct ScenarioArgs {
    #[command(flatten)]
    borrower: BorrowerArgs,

    #[command(flatten)]
    purchase: PurchaseArgs,

    #[command(flatten)]
    rent: RentArgs,
}

impl ScenarioArgs {
    fn to_input(&self) -> ScenarioInput {
        let b = &self.borrower;
        let p = &self.purchase;
        let r = &self.rent;

        ScenarioInput {
            buyer_profile: p.profile,
            property_type: b.property_type,
            loan_type: b.loan_type,
            monthly_income: b.income,
            monthly_debts: b.debts,
            age: b.age,
            tenure_years: b.tenure,
            interest_rate_percent: b.rate,
            purchase_price: p.price,
            valuation: p.valuation.unwrap_or(p.price),
            use_higher_of_price_and_valuation: !p.price_only,
            existing_properties: p.existing,
            monthly_rent: r.rent,
            holding_years: r.years,
            price_growth_percent: r.growth,
            agent_fee_percent: r.agent_fee,
        }
    }
}

#[derive(Args)]
struct ScheduleArgs {
    /// Loan principal
    #[arg(long)]
    principal: f64,

    /// Interest rate in percent p.a.
    #[arg(long, default_value_t = 3.5)]
    rate: f64,

    /// Tenure in years
    #[arg(long, default_value_t = 30)]
    tenure: u32,

    /// Write CSV to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Eligibility(args) => {
            let assessment = assess_eligibility(
                &RegulatoryLimits::default(),
                args.income,
                args.debts,
                args.age,
                args.tenure,
                args.rate,
                args.property_type,
                args.loan_type,
            );
            if cli.json {
                print_json(&assessment)?;
            } else {
                print_eligibility(&assessment);
            }
        }
        Command::Duties(args) => {
            let duties = compute_duties(
                args.price,
                args.valuation.unwrap_or(args.price),
                !args.price_only,
                args.profile,
                args.existing,
            );
            if cli.json {
                print_json(&duties)?;
            } else {
                print_duties(&duties);
            }
        }
        Command::BuyVsRent(args) => {
            let result = ScenarioRunner::new().run(&args.to_input());
            if cli.json {
                print_json(&result.buy_vs_rent)?;
            } else {
                print_buy_vs_rent(&result.buy_vs_rent);
            }
        }
        Command::Schedule(args) => write_schedule(&args, cli.json)?,
        Command::Scenario { input, args } => {
            let scenario = match input {
                Some(path) => load_scenario_json(&path)
                    .with_context(|| format!("failed to load scenario from {}", path.display()))?,
                None => args.to_input(),
            };
            let result = ScenarioRunner::new().run(&scenario);
            if cli.json {
                print_json(&result)?;
            } else {
                print_scenario(&result);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_eligibility(a: &EligibilityAssessment) {
    println!("Loan Eligibility");
    println!("  TDSR room:            ${:>14.2}", a.tdsr_available);
    println!("  MSR room:             ${:>14.2}", a.msr_available);
    println!("  Monthly capacity:     ${:>14.2}", a.monthly_capacity);
    println!("  Stress rate:           {:>14.2}%", a.stress_rate_percent);
    println!("  Max loan amount:      ${:>14.0}", a.max_loan);
    println!("  Monthly instalment:   ${:>14.0}", a.monthly_installment);
    println!("  Refinance-to-75 tenure: {} years", a.refinance_tenure_years);
    if a.max_loan <= 0.0 {
        println!("  Note: existing debts leave no servicing room for a mortgage");
    }
}

fn print_duties(d: &DutyBreakdown) {
    println!("Stamp Duties (on ${:.0})", d.dutiable_base);
    println!("  BSD:           ${:>14.0}", d.bsd);
    println!("  ABSD:          ${:>14.0}", d.absd);
    println!("  Total duties:  ${:>14.0}", d.total);
}

fn print_buy_vs_rent(b: &BuyVsRentResult) {
    println!("Buy vs Rent");
    println!("  Down payment:        ${:>14.0}", b.down_payment);
    println!("  Annual instalment:   ${:>14.0}", b.annual_installment);
    println!("  Projected sale:      ${:>14.0}", b.sale_price);
    println!("  Sale cost:           ${:>14.0}", b.sale_cost);
    println!(
        "  Buy IRR (est.):       {:>14.2}%{}",
        b.buy_irr * 100.0,
        if b.buy_irr_converged { "" } else { " (not converged)" }
    );
    println!("  Annual rent cost:    ${:>14.0}", b.annual_rent_cost);
    println!("  Total rent cost:     ${:>14.0}", b.total_rent_cost);

    println!("\n{:>4} {:>16} {:>16}", "Year", "Buy CF", "Rent CF");
    for (year, buy) in b.buy_cashflows.iter().enumerate() {
        let rent = year
            .checked_sub(1)
            .and_then(|i| b.rent_cashflows.get(i))
            .map(|cf| format!("{:.0}", cf))
            .unwrap_or_default();
        println!("{:>4} {:>16.0} {:>16}", year, buy, rent);
    }
}

fn print_scenario(result: &ScenarioResult) {
    print_eligibility(&result.eligibility);
    println!();
    print_duties(&result.duties);
    println!();
    print_buy_vs_rent(&result.buy_vs_rent);
}

fn write_schedule(args: &ScheduleArgs, json: bool) -> Result<()> {
    let terms = LoanTerms::new(args.principal, args.rate, args.tenure);
    let rows = terms.schedule();

    if json {
        return print_json(&rows);
    }

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = csv::Writer::from_writer(sink);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Schedule ({} months) written to: {}", rows.len(), path.display());
    }
    Ok(())
}
