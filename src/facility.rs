//! Facility catalog entries and facility instances
//!
//! A `FacilityType` is an immutable catalog template: what a facility costs
//! and what it contributes to the three scores once operational. A `Facility`
//! is one instance being built for a settlement; it snapshots its type's
//! fields at creation time and advances from `UnderConstruction` to
//! `Operational` over `cost` ticks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score dimension a facility primarily serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityCategory {
    LifeQuality,
    Economy,
    Environment,
}

impl FacilityCategory {
    /// Decode the numeric form used by the command grammar (0/1/2)
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(FacilityCategory::LifeQuality),
            1 => Some(FacilityCategory::Economy),
            2 => Some(FacilityCategory::Environment),
            _ => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            FacilityCategory::LifeQuality => 0,
            FacilityCategory::Economy => 1,
            FacilityCategory::Environment => 2,
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FacilityCategory::LifeQuality => "life quality",
            FacilityCategory::Economy => "economy",
            FacilityCategory::Environment => "environment",
        };
        write!(f, "{}", label)
    }
}

/// Immutable catalog template for a kind of buildable facility
///
/// `cost` doubles as construction duration in ticks. The score fields may be
/// negative (a power plant can hurt the environment score).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityType {
    pub name: String,
    pub category: FacilityCategory,
    pub cost: u32,
    pub life_quality_score: i32,
    pub economy_score: i32,
    pub environment_score: i32,
}

impl FacilityType {
    pub fn new(
        name: impl Into<String>,
        category: FacilityCategory,
        cost: u32,
        life_quality_score: i32,
        economy_score: i32,
        environment_score: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            cost,
            life_quality_score,
            economy_score,
            environment_score,
        }
    }
}

/// Construction status of a facility instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    UnderConstruction,
    Operational,
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FacilityStatus::UnderConstruction => "UNDER_CONSTRUCTION",
            FacilityStatus::Operational => "OPERATIONAL",
        };
        write!(f, "{}", label)
    }
}

/// One facility being built (or finished) for a specific settlement
///
/// Snapshots its `FacilityType` by value at creation, so later catalog growth
/// never affects facilities already started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    facility_type: FacilityType,
    settlement_name: String,
    status: FacilityStatus,
    time_left: u32,
}

impl Facility {
    /// Start construction of a facility of the given type for a settlement
    pub fn new(facility_type: FacilityType, settlement_name: impl Into<String>) -> Self {
        let time_left = facility_type.cost;
        Self {
            facility_type,
            settlement_name: settlement_name.into(),
            status: FacilityStatus::UnderConstruction,
            time_left,
        }
    }

    pub fn name(&self) -> &str {
        &self.facility_type.name
    }

    pub fn category(&self) -> FacilityCategory {
        self.facility_type.category
    }

    pub fn settlement_name(&self) -> &str {
        &self.settlement_name
    }

    pub fn status(&self) -> FacilityStatus {
        self.status
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn life_quality_score(&self) -> i32 {
        self.facility_type.life_quality_score
    }

    pub fn economy_score(&self) -> i32 {
        self.facility_type.economy_score
    }

    pub fn environment_score(&self) -> i32 {
        self.facility_type.environment_score
    }

    /// Advance construction by one tick
    ///
    /// Decrements `time_left` while under construction; at zero, the facility
    /// becomes operational and stays that way. No-op once operational.
    /// Returns the resulting status.
    pub fn advance(&mut self) -> FacilityStatus {
        if self.status == FacilityStatus::UnderConstruction && self.time_left > 0 {
            self.time_left -= 1;
            if self.time_left == 0 {
                self.status = FacilityStatus::Operational;
            }
        }
        self.status
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Facility: {}, Settlement: {}, Status: {}, Time Left: {}",
            self.name(),
            self.settlement_name,
            self.status,
            self.time_left
        )
    }
}
