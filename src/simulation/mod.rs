//! Simulation orchestrator - owns settlements, the facility-type catalog,
//! and every plan
//!
//! The orchestrator is the single writer: each call to `step` advances every
//! plan exactly once, lending the shared catalog out as a read-only slice.
//! The whole object graph is plain values, so `Clone` *is* the snapshot -
//! backup holds a clone, restore assigns it back.

use crate::core::error::{Result, SimError};
use crate::core::types::{PlanId, Tick};
use crate::facility::FacilityType;
use crate::plan::Plan;
use crate::policy::SelectionPolicy;
use crate::settlement::Settlement;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// The whole simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    running: bool,
    tick: Tick,
    plan_counter: PlanId,
    settlements: Vec<Settlement>,
    catalog: Vec<FacilityType>,
    plans: Vec<Plan>,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            running: false,
            tick: 0,
            plan_counter: 0,
            settlements: Vec::new(),
            catalog: Vec::new(),
            plans: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    /// The shared facility-type catalog; append-only
    pub fn catalog(&self) -> &[FacilityType] {
        &self.catalog
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Register a settlement; names are unique
    pub fn add_settlement(&mut self, settlement: Settlement) -> Result<()> {
        if self.settlement(settlement.name()).is_some() {
            return Err(SimError::SettlementExists(settlement.name().to_string()));
        }
        self.settlements.push(settlement);
        Ok(())
    }

    /// Append a facility type to the catalog; names are unique
    pub fn add_facility_type(&mut self, facility_type: FacilityType) -> Result<()> {
        if self.facility_type(&facility_type.name).is_some() {
            return Err(SimError::FacilityExists(facility_type.name.clone()));
        }
        self.catalog.push(facility_type);
        Ok(())
    }

    /// Create a plan for a settlement with the given policy
    ///
    /// Plan ids are assigned sequentially and never reused.
    pub fn add_plan(&mut self, settlement_name: &str, policy: SelectionPolicy) -> Result<PlanId> {
        let settlement = self
            .settlement(settlement_name)
            .ok_or_else(|| SimError::SettlementNotFound(settlement_name.to_string()))?
            .clone();
        let id = self.plan_counter;
        self.plan_counter += 1;
        tracing::info!(plan = id, settlement = settlement_name, policy = policy.code(), "plan created");
        self.plans.push(Plan::new(id, settlement, policy));
        Ok(id)
    }

    pub fn settlement(&self, name: &str) -> Option<&Settlement> {
        self.settlements.iter().find(|s| s.name() == name)
    }

    pub fn facility_type(&self, name: &str) -> Option<&FacilityType> {
        self.catalog.iter().find(|f| f.name == name)
    }

    pub fn plan(&self, id: PlanId) -> Result<&Plan> {
        self.plans
            .iter()
            .find(|p| p.id() == id)
            .ok_or(SimError::PlanNotFound(id))
    }

    pub fn plan_mut(&mut self, id: PlanId) -> Result<&mut Plan> {
        self.plans
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(SimError::PlanNotFound(id))
    }

    /// Advance every plan by one tick
    pub fn step(&mut self) {
        self.tick += 1;
        for plan in &mut self.plans {
            plan.step(&self.catalog);
        }
        tracing::debug!(tick = self.tick, plans = self.plans.len(), "simulation stepped");
    }

    /// Mark the simulation as running
    pub fn open(&mut self) {
        self.running = true;
    }

    /// Stop the run loop and render the final per-plan score summary
    pub fn close(&mut self) -> String {
        self.running = false;

        let mut summary = String::new();
        for plan in &self.plans {
            let _ = writeln!(summary, "PlanID: {}", plan.id());
            let _ = writeln!(summary, "SettlementName: {}", plan.settlement().name());
            let _ = writeln!(summary, "LifeQuality_Score: {}", plan.life_quality_score());
            let _ = writeln!(summary, "Economy_Score: {}", plan.economy_score());
            let _ = writeln!(summary, "Environment_Score: {}", plan.environment_score());
            let _ = writeln!(summary, "----------------------------------------");
        }
        tracing::info!(tick = self.tick, "simulation closed");
        summary
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
