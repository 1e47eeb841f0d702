//! End-to-end property calculations from a single set of caller inputs

mod input;
pub mod loader;
mod runner;

pub use input::ScenarioInput;
pub use loader::{load_scenario_json, load_scenarios, load_scenarios_from_reader};
pub use runner::{ScenarioResult, ScenarioRunner, ScenarioSummary};
