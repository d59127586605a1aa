//! Plans - per-settlement construction scheduling
//!
//! A plan owns everything it builds: the facilities on both lists and the
//! selection policy that decides what gets built next. The settlement it
//! serves is an immutable value; the shared facility-type catalog is borrowed
//! per tick from the orchestrator, never stored.
//!
//! `step` is the core state machine: top up construction slots to the
//! settlement's capacity, advance every site by one tick, fold finished
//! facilities into the scores, then derive the Busy/Available status. Top-up
//! runs before advance on purpose - a slot freed this tick is only refillable
//! on the next one, which caps per-tick throughput at the capacity.

use crate::core::types::PlanId;
use crate::facility::{Facility, FacilityStatus, FacilityType};
use crate::policy::SelectionPolicy;
use crate::settlement::Settlement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived scheduling state: Busy iff every construction slot is occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    Available,
    Busy,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanStatus::Available => "AVAILABLE",
            PlanStatus::Busy => "BUSY",
        };
        write!(f, "{}", label)
    }
}

/// One settlement's reconstruction plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    settlement: Settlement,
    policy: SelectionPolicy,
    status: PlanStatus,
    operational: Vec<Facility>,
    under_construction: Vec<Facility>,
    life_quality_score: i32,
    economy_score: i32,
    environment_score: i32,
}

impl Plan {
    pub fn new(id: PlanId, settlement: Settlement, policy: SelectionPolicy) -> Self {
        Self {
            id,
            settlement,
            policy,
            status: PlanStatus::Available,
            operational: Vec::new(),
            under_construction: Vec::new(),
            life_quality_score: 0,
            economy_score: 0,
            environment_score: 0,
        }
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn settlement(&self) -> &Settlement {
        &self.settlement
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    pub fn life_quality_score(&self) -> i32 {
        self.life_quality_score
    }

    pub fn economy_score(&self) -> i32 {
        self.economy_score
    }

    pub fn environment_score(&self) -> i32 {
        self.environment_score
    }

    pub fn operational(&self) -> &[Facility] {
        &self.operational
    }

    pub fn under_construction(&self) -> &[Facility] {
        &self.under_construction
    }

    /// Replace the selection policy, discarding the previous one
    ///
    /// Any seeding of the new policy (a Balanced policy continuing from the
    /// plan's accumulated standing) happens before this call, at the caller.
    pub fn set_selection_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// File a facility on the list matching its current status
    ///
    /// Used by `step` for freshly started facilities and by restore/replay
    /// paths that rebuild a plan from existing instances.
    pub fn add_facility(&mut self, facility: Facility) {
        match facility.status() {
            FacilityStatus::UnderConstruction => self.under_construction.push(facility),
            FacilityStatus::Operational => self.operational.push(facility),
        }
    }

    /// Advance the plan by one simulation tick
    pub fn step(&mut self, catalog: &[FacilityType]) {
        let capacity = self.settlement.capacity();

        // 1. Capacity top-up. A selection failure (empty catalog, or no
        //    entry of the category a filtered policy needs) stalls top-up for
        //    this tick; the next tick retries against the then-current
        //    catalog.
        while self.under_construction.len() < capacity && !catalog.is_empty() {
            match self.policy.select_facility(catalog) {
                Ok(facility_type) => {
                    let facility = Facility::new(facility_type, self.settlement.name());
                    tracing::debug!(
                        plan = self.id,
                        facility = facility.name(),
                        "construction started"
                    );
                    self.add_facility(facility);
                }
                Err(error) => {
                    tracing::debug!(plan = self.id, %error, "selection stalled");
                    break;
                }
            }
        }

        // 2. Progress advance. Finished facilities move to the operational
        //    list in a single order-preserving pass, and their contributions
        //    land in the scores exactly once, here.
        let mut index = 0;
        while index < self.under_construction.len() {
            if self.under_construction[index].advance() == FacilityStatus::Operational {
                let finished = self.under_construction.remove(index);
                self.life_quality_score += finished.life_quality_score();
                self.economy_score += finished.economy_score();
                self.environment_score += finished.environment_score();
                tracing::debug!(
                    plan = self.id,
                    facility = finished.name(),
                    "facility operational"
                );
                self.operational.push(finished);
            } else {
                index += 1;
            }
        }

        // 3. Status derivation, purely observational
        self.status = if self.under_construction.len() == capacity {
            PlanStatus::Busy
        } else {
            PlanStatus::Available
        };
    }
}

impl fmt::Display for Plan {
    /// Multi-line status rendering; field order and labels are stable for
    /// compatibility-sensitive reporting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PlanID: {}", self.id)?;
        writeln!(f, "SettlementName: {}", self.settlement.name())?;
        writeln!(f, "PlanStatus: {}", self.status)?;
        writeln!(f, "SelectionPolicy: {}", self.policy.code())?;
        writeln!(f, "LifeQualityScore: {}", self.life_quality_score)?;
        writeln!(f, "EconomyScore: {}", self.economy_score)?;
        writeln!(f, "EnvironmentScore: {}", self.environment_score)?;
        for facility in &self.under_construction {
            writeln!(f, "FacilityName: {}", facility.name())?;
            writeln!(f, "FacilityStatus: {}", facility.status())?;
        }
        for facility in &self.operational {
            writeln!(f, "FacilityName: {}", facility.name())?;
            writeln!(f, "FacilityStatus: {}", facility.status())?;
        }
        Ok(())
    }
}
