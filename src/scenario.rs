//! Load an initial simulation from a TOML scenario file
//!
//! A scenario declares settlements, the facility-type catalog, and the
//! starting plans. Entries go through the same `Simulation` mutators as
//! interactive commands, so duplicates and dangling references fail with the
//! same errors either way.
//!
//! ```toml
//! [[settlements]]
//! name = "Brookfield"
//! type = "village"
//!
//! [[facilities]]
//! name = "well"
//! category = "life_quality"
//! cost = 2
//! life_quality = 1
//! economy = 1
//! environment = 1
//!
//! [[plans]]
//! settlement = "Brookfield"
//! policy = "nve"
//! ```

use crate::core::error::{Result, SimError};
use crate::facility::{FacilityCategory, FacilityType};
use crate::policy::SelectionPolicy;
use crate::settlement::{Settlement, SettlementType};
use crate::simulation::Simulation;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    settlements: Vec<SettlementEntry>,
    #[serde(default)]
    facilities: Vec<FacilityEntry>,
    #[serde(default)]
    plans: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize)]
struct SettlementEntry {
    name: String,
    #[serde(rename = "type")]
    settlement_type: SettlementType,
}

#[derive(Debug, Deserialize)]
struct FacilityEntry {
    name: String,
    category: FacilityCategory,
    cost: u32,
    life_quality: i32,
    economy: i32,
    environment: i32,
}

#[derive(Debug, Deserialize)]
struct PlanEntry {
    settlement: String,
    policy: String,
}

/// Load a scenario file and build the initial simulation from it
pub fn load_scenario(path: &Path) -> Result<Simulation> {
    let content = fs::read_to_string(path)?;
    parse_scenario(&content)
}

/// Parse a scenario from TOML text
pub fn parse_scenario(content: &str) -> Result<Simulation> {
    let scenario: ScenarioFile =
        toml::from_str(content).map_err(|e| SimError::ScenarioError(e.to_string()))?;

    let mut sim = Simulation::new();
    for entry in scenario.settlements {
        sim.add_settlement(Settlement::new(entry.name, entry.settlement_type))?;
    }
    for entry in scenario.facilities {
        sim.add_facility_type(FacilityType::new(
            entry.name,
            entry.category,
            entry.cost,
            entry.life_quality,
            entry.economy,
            entry.environment,
        ))?;
    }
    for entry in scenario.plans {
        let policy = SelectionPolicy::from_code(&entry.policy)?;
        sim.add_plan(&entry.settlement, policy)?;
    }

    tracing::info!(
        settlements = sim.settlements().len(),
        facility_types = sim.catalog().len(),
        plans = sim.plans().len(),
        "scenario loaded"
    );
    Ok(sim)
}
