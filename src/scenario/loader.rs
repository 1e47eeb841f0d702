//! Load scenario inputs from CSV or JSON files

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::input::ScenarioInput;
use crate::error::Result;

/// Raw CSV row; codes are kept as text and validated on conversion.
/// Columns other than the three codes may be omitted and take defaults.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    buyer_profile: String,
    property_type: String,
    loan_type: String,
    #[serde(default)]
    monthly_income: Option<f64>,
    #[serde(default)]
    monthly_debts: Option<f64>,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    tenure_years: Option<u32>,
    #[serde(default)]
    interest_rate_percent: Option<f64>,
    #[serde(default)]
    purchase_price: Option<f64>,
    #[serde(default)]
    valuation: Option<f64>,
    #[serde(default)]
    use_higher_of_price_and_valuation: Option<bool>,
    #[serde(default)]
    existing_properties: Option<u32>,
    #[serde(default)]
    monthly_rent: Option<f64>,
    #[serde(default)]
    holding_years: Option<u32>,
    #[serde(default)]
    price_growth_percent: Option<f64>,
    #[serde(default)]
    agent_fee_percent: Option<f64>,
}

impl CsvRow {
    fn into_input(self) -> Result<ScenarioInput> {
        let defaults = ScenarioInput::default();

        Ok(ScenarioInput {
            buyer_profile: self.buyer_profile.trim().parse()?,
            property_type: self.property_type.trim().parse()?,
            loan_type: self.loan_type.trim().parse()?,
            monthly_income: self.monthly_income.unwrap_or(defaults.monthly_income),
            monthly_debts: self.monthly_debts.unwrap_or(defaults.monthly_debts),
            age: self.age.unwrap_or(defaults.age),
            tenure_years: self.tenure_years.unwrap_or(defaults.tenure_years),
            interest_rate_percent: self
                .interest_rate_percent
                .unwrap_or(defaults.interest_rate_percent),
            purchase_price: self.purchase_price.unwrap_or(defaults.purchase_price),
            valuation: self.valuation.unwrap_or(defaults.valuation),
            use_higher_of_price_and_valuation: self
                .use_higher_of_price_and_valuation
                .unwrap_or(defaults.use_higher_of_price_and_valuation),
            existing_properties: self
                .existing_properties
                .unwrap_or(defaults.existing_properties),
            monthly_rent: self.monthly_rent.unwrap_or(defaults.monthly_rent),
            holding_years: self.holding_years.unwrap_or(defaults.holding_years),
            price_growth_percent: self
                .price_growth_percent
                .unwrap_or(defaults.price_growth_percent),
            agent_fee_percent: self.agent_fee_percent.unwrap_or(defaults.agent_fee_percent),
        })
    }
}

/// Load scenarios from a CSV file with a header row
pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioInput>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioInput>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        inputs.push(row?.into_input()?);
    }

    log::debug!("Loaded {} scenarios", inputs.len());
    Ok(inputs)
}

/// Load a single scenario from a JSON file; absent fields take defaults
pub fn load_scenario_json(path: &Path) -> Result<ScenarioInput> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}
