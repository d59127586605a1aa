//! Line-oriented command grammar
//!
//! One whitespace-tokenized command per line. `Command::parse` produces a
//! typed command or a configuration error; nothing here touches the
//! simulation. The `Display` impl renders a command back into its token form,
//! which is what the action log shows.

pub mod executor;

pub use executor::{ActionStatus, CommandExecutor, LogEntry};

use crate::core::error::{Result, SimError};
use crate::core::types::PlanId;
use crate::facility::{FacilityCategory, FacilityType};
use crate::settlement::SettlementType;
use std::fmt;

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddSettlement {
        name: String,
        settlement_type: SettlementType,
    },
    AddFacility(FacilityType),
    AddPlan {
        settlement: String,
        policy: String,
    },
    Step {
        count: u32,
    },
    PlanStatus {
        plan_id: PlanId,
    },
    ChangePolicy {
        plan_id: PlanId,
        policy: String,
    },
    Log,
    Backup,
    Restore,
    Close,
}

impl Command {
    /// Parse one input line into a command
    pub fn parse(line: &str) -> Result<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let invalid = || SimError::InvalidCommand(line.trim().to_string());

        match tokens.as_slice() {
            ["settlement", name, type_code] => {
                let code = type_code.parse::<u32>().map_err(|_| invalid())?;
                let settlement_type = SettlementType::from_code(code).ok_or_else(invalid)?;
                Ok(Command::AddSettlement {
                    name: name.to_string(),
                    settlement_type,
                })
            }
            ["facility", name, category_code, cost, life_quality, economy, environment] => {
                let code = category_code.parse::<u32>().map_err(|_| invalid())?;
                let category = FacilityCategory::from_code(code).ok_or_else(invalid)?;
                Ok(Command::AddFacility(FacilityType::new(
                    name.to_string(),
                    category,
                    cost.parse().map_err(|_| invalid())?,
                    life_quality.parse().map_err(|_| invalid())?,
                    economy.parse().map_err(|_| invalid())?,
                    environment.parse().map_err(|_| invalid())?,
                )))
            }
            ["plan", settlement, policy] => Ok(Command::AddPlan {
                settlement: settlement.to_string(),
                policy: policy.to_string(),
            }),
            ["step", count] => Ok(Command::Step {
                count: count.parse().map_err(|_| invalid())?,
            }),
            ["planStatus", plan_id] => Ok(Command::PlanStatus {
                plan_id: plan_id.parse().map_err(|_| invalid())?,
            }),
            ["changePolicy", plan_id, policy] => Ok(Command::ChangePolicy {
                plan_id: plan_id.parse().map_err(|_| invalid())?,
                policy: policy.to_string(),
            }),
            ["log"] => Ok(Command::Log),
            ["backup"] => Ok(Command::Backup),
            ["restore"] => Ok(Command::Restore),
            ["close"] => Ok(Command::Close),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddSettlement {
                name,
                settlement_type,
            } => write!(f, "settlement {} {}", name, settlement_type.code()),
            Command::AddFacility(facility_type) => write!(
                f,
                "facility {} {} {} {} {} {}",
                facility_type.name,
                facility_type.category.code(),
                facility_type.cost,
                facility_type.life_quality_score,
                facility_type.economy_score,
                facility_type.environment_score
            ),
            Command::AddPlan { settlement, policy } => {
                write!(f, "plan {} {}", settlement, policy)
            }
            Command::Step { count } => write!(f, "step {}", count),
            Command::PlanStatus { plan_id } => write!(f, "planStatus {}", plan_id),
            Command::ChangePolicy { plan_id, policy } => {
                write!(f, "changePolicy {} {}", plan_id, policy)
            }
            Command::Log => write!(f, "log"),
            Command::Backup => write!(f, "backup"),
            Command::Restore => write!(f, "restore"),
            Command::Close => write!(f, "close"),
        }
    }
}
