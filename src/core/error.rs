use crate::core::types::PlanId;
use crate::facility::FacilityCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("No facilities available to select")]
    EmptyCatalog,

    #[error("No {0} facility available to select")]
    NoMatchingFacility(FacilityCategory),

    #[error("Unknown selection policy: {0}")]
    UnknownPolicy(String),

    #[error("Settlement not found: {0}")]
    SettlementNotFound(String),

    #[error("Settlement already exists: {0}")]
    SettlementExists(String),

    #[error("Facility type already exists: {0}")]
    FacilityExists(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(PlanId),

    #[error("Plan {0} already uses policy {1}")]
    PolicyUnchanged(PlanId, String),

    #[error("No backup available")]
    NoBackup,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Scenario error: {0}")]
    ScenarioError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
